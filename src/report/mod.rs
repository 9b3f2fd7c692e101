//! Report merging and per-entity summaries
//!
//! Depends only on the `MatchRecord` shape, never on the collector itself.

pub mod merge;
pub mod summary;
pub mod types;

pub use merge::{merge, merge_records};
pub use summary::{summarize, DetectionSummary};
pub use types::{DetectionEvent, DetectionReport, RawMatch, ScoreDetail};
