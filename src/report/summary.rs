//! Per-entity summaries over merged match records

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::merge::{cmp_name_ci, cmp_priority_desc};
use crate::scanner::record::{MatchKind, MatchRecord};

/// Aggregate view of every match for one (lowercased) name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionSummary {
    /// Display name: the first spelling seen
    pub name: String,
    pub total: usize,
    pub highest_priority: Option<f64>,
    /// 1-based char offset of the first indexed occurrence
    pub earliest: Option<usize>,
    /// 1-based char offset of the last indexed occurrence
    pub latest: Option<usize>,
    pub kinds: BTreeMap<MatchKind, usize>,
}

impl DetectionSummary {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            total: 0,
            highest_priority: None,
            earliest: None,
            latest: None,
            kinds: BTreeMap::new(),
        }
    }

    fn absorb(&mut self, record: &MatchRecord) {
        self.total += 1;
        *self.kinds.entry(record.match_kind).or_insert(0) += 1;

        if let Some(p) = record.priority {
            self.highest_priority = Some(match self.highest_priority {
                Some(best) if best >= p => best,
                _ => p,
            });
        }

        if let Some(index) = record.match_index {
            let offset = index + 1;
            self.earliest = Some(self.earliest.map_or(offset, |e| e.min(offset)));
            self.latest = Some(self.latest.map_or(offset, |l| l.max(offset)));
        }
    }

    /// Count for one kind (zero when absent)
    pub fn count(&self, kind: MatchKind) -> usize {
        self.kinds.get(&kind).copied().unwrap_or(0)
    }
}

/// Group records by lowercase trimmed name and rank the groups.
///
/// Ranking: total desc, highest priority desc, earliest asc (unknown last),
/// then case-insensitive name.
pub fn summarize(records: &[MatchRecord]) -> Vec<DetectionSummary> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut summaries: Vec<DetectionSummary> = Vec::new();

    for record in records {
        let name = record.name.trim();
        if name.is_empty() {
            continue;
        }
        let key = name.to_lowercase();
        let slot = *slots.entry(key).or_insert_with(|| {
            summaries.push(DetectionSummary::new(name));
            summaries.len() - 1
        });
        summaries[slot].absorb(record);
    }

    summaries.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| cmp_priority_desc(a.highest_priority, b.highest_priority))
            .then_with(|| match (a.earliest, b.earliest) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            })
            .then_with(|| cmp_name_ci(&a.name, &b.name))
    });
    summaries
}
