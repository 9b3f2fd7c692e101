//! Report shapes accepted by the merger
//!
//! Hosts hand back detections in three shapes: raw match lists,
//! "score details" (index under `charIndex` or `matchIndex`), and "events"
//! (no priority). Each shape converts into `MatchRecord` through one explicit
//! function; fragments that cannot become a record are dropped.

use serde::{Deserialize, Serialize};

use crate::scanner::record::{MatchKind, MatchRecord};

/// A raw match as a host may serialize it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatch {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub match_kind: String,
    #[serde(default)]
    pub match_index: Option<f64>,
    #[serde(default)]
    pub priority: Option<f64>,
}

/// A scored detection; the index may live under either field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub match_kind: String,
    #[serde(default)]
    pub char_index: Option<f64>,
    #[serde(default)]
    pub match_index: Option<f64>,
    #[serde(default)]
    pub priority: Option<f64>,
}

/// A detection event; events carry no priority
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionEvent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub match_kind: String,
    #[serde(default)]
    pub char_index: Option<f64>,
    #[serde(default)]
    pub match_index: Option<f64>,
}

/// Any combination of the three report shapes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    #[serde(default)]
    pub matches: Option<Vec<RawMatch>>,
    #[serde(default)]
    pub score_details: Option<Vec<ScoreDetail>>,
    #[serde(default)]
    pub events: Option<Vec<DetectionEvent>>,
}

impl DetectionReport {
    /// Wrap collector output as a report
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let matches = records
            .iter()
            .map(|r| RawMatch {
                name: r.name.clone(),
                match_kind: r.match_kind.as_str().to_string(),
                match_index: r.match_index.map(|i| i as f64),
                priority: r.priority,
            })
            .collect();
        Self {
            matches: Some(matches),
            ..Default::default()
        }
    }

    /// All convertible records, in shape order: matches, score details, events
    pub fn records(&self) -> Vec<MatchRecord> {
        let matches = self.matches.iter().flatten().filter_map(from_raw_match);
        let details = self.score_details.iter().flatten().filter_map(from_score_detail);
        let events = self.events.iter().flatten().filter_map(from_event);
        matches.chain(details).chain(events).collect()
    }
}

/// A finite, non-negative number as a char offset
fn to_index(value: Option<f64>) -> Option<usize> {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.floor() as usize)
}

pub fn from_raw_match(raw: &RawMatch) -> Option<MatchRecord> {
    let kind = MatchKind::parse(&raw.match_kind)?;
    MatchRecord::new(&raw.name, kind, to_index(raw.match_index), raw.priority)
}

pub fn from_score_detail(detail: &ScoreDetail) -> Option<MatchRecord> {
    let kind = MatchKind::parse(&detail.match_kind)?;
    let index = to_index(detail.char_index).or_else(|| to_index(detail.match_index));
    MatchRecord::new(&detail.name, kind, index, detail.priority)
}

pub fn from_event(event: &DetectionEvent) -> Option<MatchRecord> {
    let kind = MatchKind::parse(&event.match_kind)?;
    let index = to_index(event.char_index).or_else(|| to_index(event.match_index));
    MatchRecord::new(&event.name, kind, index, None)
}
