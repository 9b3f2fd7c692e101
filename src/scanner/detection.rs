//! Detection pipeline: collect → merge → summarize
//!
//! One call answers "who is this passage about": the merged, ordered match
//! list, the ranked per-entity summaries, and timing stats for the host.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::collector::collect;
use super::compiler::CompiledMatcherSet;
use super::config::{Profile, ScanOptions};
use super::record::MatchRecord;
use crate::report::{merge_records, summarize, DetectionSummary};

// =============================================================================
// Types
// =============================================================================

/// Timing per phase, in microseconds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionTimings {
    pub total_us: u64,
    pub collect_us: u64,
    pub merge_us: u64,
    pub summarize_us: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionStats {
    pub timings: DetectionTimings,
    /// Length in chars
    pub text_length: usize,
    pub word_count: usize,
    /// Records before dedup
    pub raw_matches: usize,
    pub match_count: usize,
    pub entity_count: usize,
}

/// Full result of one detection pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub matches: Vec<MatchRecord>,
    pub summaries: Vec<DetectionSummary>,
    pub stats: DetectionStats,
}

impl Detection {
    /// Name of the top-ranked entity, if anything was detected
    pub fn primary(&self) -> Option<&str> {
        self.summaries.first().map(|s| s.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

// =============================================================================
// Pipeline
// =============================================================================

pub fn detect(
    text: &str,
    profile: &Profile,
    set: &CompiledMatcherSet,
    options: &ScanOptions,
) -> Detection {
    let overall_start = instant::Instant::now();
    let mut stats = DetectionStats {
        text_length: text.chars().count(),
        word_count: text.unicode_words().count(),
        ..Default::default()
    };

    let collect_start = instant::Instant::now();
    let raw = collect(text, profile, set, options);
    stats.timings.collect_us = collect_start.elapsed().as_micros() as u64;
    stats.raw_matches = raw.len();

    let merge_start = instant::Instant::now();
    let matches = merge_records(raw);
    stats.timings.merge_us = merge_start.elapsed().as_micros() as u64;
    stats.match_count = matches.len();

    let summarize_start = instant::Instant::now();
    let summaries = summarize(&matches);
    stats.timings.summarize_us = summarize_start.elapsed().as_micros() as u64;
    stats.entity_count = summaries.len();

    stats.timings.total_us = overall_start.elapsed().as_micros() as u64;

    Detection {
        matches,
        summaries,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::compiler::compile;
    use crate::scanner::config::CompileOptions;

    fn setup() -> (Profile, CompiledMatcherSet) {
        let profile = Profile::new()
            .with_patterns(&["Alice", "Bob"])
            .with_attribution_verbs(&["said", "asked"])
            .with_action_verbs(&["nodded", "sighed"]);
        let set = compile(&profile, &CompileOptions::default()).unwrap();
        (profile, set)
    }

    #[test]
    fn test_primary_is_most_detected() {
        let (profile, set) = setup();
        let text = "Bob nodded. \"Fine,\" Alice said. Bob sighed and Bob said nothing.";
        let detection = detect(text, &profile, &set, &ScanOptions::new());

        assert_eq!(detection.primary(), Some("Bob"));
        assert_eq!(detection.stats.entity_count, 2);
        assert_eq!(detection.stats.match_count, detection.matches.len());
        assert!(detection.stats.raw_matches >= detection.stats.match_count);
    }

    #[test]
    fn test_matches_are_globally_ordered() {
        let (profile, set) = setup();
        let text = "Bob nodded. Alice said no.";
        let detection = detect(text, &profile, &set, &ScanOptions::new());

        let indices: Vec<Option<usize>> = detection.matches.iter().map(|m| m.match_index).collect();
        let mut sorted = indices.clone();
        sorted.sort();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn test_empty_text() {
        let (profile, set) = setup();
        let detection = detect("", &profile, &set, &ScanOptions::new());
        assert!(detection.is_empty());
        assert_eq!(detection.primary(), None);
        assert_eq!(detection.stats.word_count, 0);
    }

    #[test]
    fn test_stats_count_chars_and_words() {
        let (profile, set) = setup();
        let detection = detect("Élodie waved", &profile, &set, &ScanOptions::new());
        assert_eq!(detection.stats.text_length, 12);
        assert_eq!(detection.stats.word_count, 2);
    }
}
