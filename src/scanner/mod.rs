//! Character detection scanner
//!
//! - `quotes.rs` - Quote-range scanner (bracket-matching stack, CJK + smart quotes)
//! - `config.rs` - Profile, compile and scan options
//! - `pattern.rs` - `/body/flags` pattern parsing and effective pattern lists
//! - `grammar.rs` - Bounded regex templates for every matcher role
//! - `compiler.rs` - Profile → CompiledMatcherSet
//! - `collector.rs` - Runs matchers over text, quote-aware
//! - `detection.rs` - collect → merge → summarize pipeline
//! - `cortex.rs` - DetectionCortex: WASM facade

pub mod collector;
pub mod compiler;
pub mod config;
pub mod cortex;
pub mod detection;
pub mod grammar;
pub mod offsets;
pub mod pattern;
pub mod quotes;
pub mod record;

pub use collector::collect;
pub use compiler::{compile, compile_with_bounds, CompileError, CompiledMatcherSet, MatcherRole};
pub use config::{CompileOptions, PatternSlot, PriorityWeights, Profile, ScanOptions, DEFAULT_WORD_CLASS};
pub use cortex::DetectionCortex;
pub use detection::{detect, Detection, DetectionStats, DetectionTimings};
pub use grammar::GrammarBounds;
pub use pattern::{parse_pattern, FlagSet, PatternEntry};
pub use quotes::{is_index_inside_quotes, quote_ranges, QuoteRange};
pub use record::{MatchKind, MatchRecord};

#[cfg(test)]
mod tests;
