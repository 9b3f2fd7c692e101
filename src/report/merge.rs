//! Report merger - dedupe and globally order match records
//!
//! Dedup key: lowercase trimmed name + kind + index (unknown index is its own
//! key). The first occurrence wins.
//!
//! Order: ascending index (unknown last), then descending priority
//! (unconfigured lowest), then case-insensitive name.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::types::DetectionReport;
use crate::scanner::record::{MatchKind, MatchRecord};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DedupKey {
    name: String,
    kind: MatchKind,
    index: Option<usize>,
}

impl DedupKey {
    fn of(record: &MatchRecord) -> Self {
        Self {
            name: record.name.trim().to_lowercase(),
            kind: record.match_kind,
            index: record.match_index,
        }
    }
}

/// Merge every shape present in `report` into one ordered list
pub fn merge(report: &DetectionReport) -> Vec<MatchRecord> {
    merge_records(report.records())
}

/// Dedupe and order an arbitrary record stream
pub fn merge_records<I>(records: I) -> Vec<MatchRecord>
where
    I: IntoIterator<Item = MatchRecord>,
{
    let mut seen: HashSet<DedupKey> = HashSet::new();
    let mut merged: Vec<MatchRecord> = records
        .into_iter()
        .filter(|r| seen.insert(DedupKey::of(r)))
        .collect();

    merged.sort_by(compare_records);
    merged
}

/// `None` sorts after every known value
fn cmp_index(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending; `None` is the lowest priority
pub(crate) fn cmp_priority_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub(crate) fn cmp_name_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare_records(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    cmp_index(a.match_index, b.match_index)
        .then_with(|| cmp_priority_desc(a.priority, b.priority))
        .then_with(|| cmp_name_ci(&a.name, &b.name))
}
