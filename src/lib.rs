//! CastCore: Character Detection for Narrative Text
//!
//! A Rust/WASM library that decides which named character a passage of prose
//! or dialogue is "about".
//!
//! # Architecture
//!
//! ## Scanner
//! - `quotes.rs` - Quote-range scanner (symmetric, smart, guillemet, CJK)
//! - `compiler.rs` - Profile → one regex per matcher role
//! - `collector.rs` - Quote-aware, prioritized match records
//! - `cortex.rs` - DetectionCortex: hydrate once, scan many
//!
//! ## Report
//! - `merge.rs` - Dedupe + global ordering over heterogeneous report shapes
//! - `summary.rs` - Per-entity totals, priorities, first/last offsets
//!
//! ## Lexicon
//! - `morphology.rs` - Rule-derived verb inflections (+ particles)
//! - `catalog.rs` - Category/edition-filtered verb vocabularies
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { DetectionCortex, VerbLexicon } from 'castcore';
//!
//! await init();
//!
//! const lexicon = new VerbLexicon();
//! const cortex = new DetectionCortex();
//! cortex.hydrateProfile({
//!   patternSlots: [{ name: 'Alice', aliases: ['Ally'] }, { name: 'Bob' }],
//!   attributionVerbs: lexicon.vocabulary('attribution', 'default'),
//!   actionVerbs: lexicon.vocabulary('action', 'default'),
//! });
//!
//! const result = cortex.scan('"Ready?" Alice asked. Bob nodded.', { lastSubject: 'Bob' });
//! console.log(result.matches);    // ordered MatchRecords
//! console.log(result.summaries);  // ranked per-character summaries
//! console.log(result.stats);      // timings, counts
//! ```

pub mod lexicon;
pub mod report;
pub mod scanner;

mod console;

// Public exports - Scanner
pub use scanner::{
    collect, compile, detect, CompileError, CompileOptions, CompiledMatcherSet, Detection,
    DetectionCortex, MatchKind, MatchRecord, MatcherRole, PatternSlot, PriorityWeights, Profile,
    QuoteRange, ScanOptions,
};

// Public exports - Report
pub use report::{merge, merge_records, summarize, DetectionReport, DetectionSummary};

// Public exports - Lexicon
pub use lexicon::{conjugate, Edition, LexiconError, VerbCatalog, VerbCategory, VerbForms, VerbLexicon};

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("castcore v{}", env!("CARGO_PKG_VERSION"))
}
