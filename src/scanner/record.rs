//! Match records - the flat output shape of the detection collector
//!
//! Everything downstream (merging, summaries, the JS host) speaks this shape.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// MatchKind
// =============================================================================

/// Detection category of a match record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// `Alice: hello`
    Speaker,
    /// `Alice said`
    Attribution,
    /// `Alice nodded`
    Action,
    /// `she nodded` (resolved to the caller's current subject)
    Pronoun,
    /// `"Thanks, Alice!"`
    Vocative,
    /// `Alice's`
    Possessive,
    /// Bare name occurrence
    Name,
}

impl MatchKind {
    pub const ALL: [MatchKind; 7] = [
        MatchKind::Speaker,
        MatchKind::Attribution,
        MatchKind::Action,
        MatchKind::Pronoun,
        MatchKind::Vocative,
        MatchKind::Possessive,
        MatchKind::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Speaker => "speaker",
            MatchKind::Attribution => "attribution",
            MatchKind::Action => "action",
            MatchKind::Pronoun => "pronoun",
            MatchKind::Vocative => "vocative",
            MatchKind::Possessive => "possessive",
            MatchKind::Name => "name",
        }
    }

    /// Parse a kind name, ignoring case and surrounding whitespace
    pub fn parse(raw: &str) -> Option<MatchKind> {
        let wanted = raw.trim().to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == wanted)
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// MatchRecord
// =============================================================================

/// One detection: who, how, where, and how much it weighs.
///
/// `name` is never empty after trimming. `match_index` is a char offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub name: String,
    pub match_kind: MatchKind,
    pub match_index: Option<usize>,
    pub priority: Option<f64>,
}

impl MatchRecord {
    /// Build a record, returning `None` when the name trims to nothing
    pub fn new(
        name: &str,
        match_kind: MatchKind,
        match_index: Option<usize>,
        priority: Option<f64>,
    ) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            match_kind,
            match_index,
            priority: priority.filter(|p| p.is_finite()),
        })
    }
}
