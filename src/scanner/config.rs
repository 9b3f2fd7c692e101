//! Configuration types and defaults for the detection scanner
//!
//! `Profile` is the already-normalized configuration the host hands us.
//! `CompileOptions` tunes matcher compilation; `ScanOptions` tunes one scan.
//! All of them deserialize from the host's camelCase JSON with defaults for
//! every missing field.

use serde::{Deserialize, Serialize};

use super::quotes::QuoteRange;
use super::record::MatchKind;
use crate::lexicon::{Edition, VerbCatalog, VerbCategory};

fn default_true() -> bool {
    true
}

fn default_pronouns() -> Vec<String> {
    vec!["he".to_string(), "she".to_string(), "they".to_string()]
}

/// Default regex character class body for "word characters"
pub const DEFAULT_WORD_CLASS: &str = r"\p{L}\p{M}\p{N}_";

// =============================================================================
// Pattern Slots
// =============================================================================

/// One configured character: a primary name plus aliases.
///
/// Aliases are accepted under three keys; `folder`/`path` are host metadata
/// that detection never reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSlot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub alternate_names: Vec<String>,
}

impl PatternSlot {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Primary name followed by every alias, in declaration order
    pub fn pattern_strings(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.aliases.iter().map(String::as_str))
            .chain(self.patterns.iter().map(String::as_str))
            .chain(self.alternate_names.iter().map(String::as_str))
    }
}

// =============================================================================
// Profile
// =============================================================================

/// Everything one matcher compilation needs: names, verbs, pronouns, toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub pattern_slots: Vec<PatternSlot>,
    /// Legacy flattened name/alias list
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub attribution_verbs: Vec<String>,
    #[serde(default)]
    pub action_verbs: Vec<String>,
    #[serde(default = "default_pronouns")]
    pub pronoun_vocabulary: Vec<String>,
    /// Case-insensitive exclusions applied to the effective pattern list
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    #[serde(default)]
    pub veto_patterns: Vec<String>,
    #[serde(default = "default_true")]
    pub detect_attribution: bool,
    #[serde(default = "default_true")]
    pub detect_action: bool,
    #[serde(default)]
    pub detect_pronoun: bool,
    #[serde(default = "default_true")]
    pub detect_vocative: bool,
    #[serde(default)]
    pub detect_possessive: bool,
    #[serde(default)]
    pub detect_general: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            pattern_slots: Vec::new(),
            patterns: Vec::new(),
            attribution_verbs: Vec::new(),
            action_verbs: Vec::new(),
            pronoun_vocabulary: default_pronouns(),
            ignore_patterns: Vec::new(),
            veto_patterns: Vec::new(),
            detect_attribution: true,
            detect_action: true,
            detect_pronoun: false,
            detect_vocative: true,
            detect_possessive: false,
            detect_general: false,
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patterns(mut self, patterns: &[&str]) -> Self {
        self.patterns = owned(patterns);
        self
    }

    pub fn with_slot(mut self, slot: PatternSlot) -> Self {
        self.pattern_slots.push(slot);
        self
    }

    pub fn with_attribution_verbs(mut self, verbs: &[&str]) -> Self {
        self.attribution_verbs = owned(verbs);
        self
    }

    pub fn with_action_verbs(mut self, verbs: &[&str]) -> Self {
        self.action_verbs = owned(verbs);
        self
    }

    pub fn with_pronouns(mut self, pronouns: &[&str]) -> Self {
        self.pronoun_vocabulary = owned(pronouns);
        self
    }

    pub fn with_ignored(mut self, patterns: &[&str]) -> Self {
        self.ignore_patterns = owned(patterns);
        self
    }

    pub fn with_veto(mut self, patterns: &[&str]) -> Self {
        self.veto_patterns = owned(patterns);
        self
    }

    /// Fill both verb vocabularies from the catalog (third-person and past
    /// forms of every verb in the requested edition)
    pub fn with_catalog_verbs(mut self, catalog: &VerbCatalog, edition: Edition) -> Self {
        self.attribution_verbs = catalog.vocabulary(VerbCategory::Attribution, edition);
        self.action_verbs = catalog.vocabulary(VerbCategory::Action, edition);
        self
    }

    /// Is the collector allowed to emit records of this kind?
    pub fn allows(&self, kind: MatchKind) -> bool {
        match kind {
            MatchKind::Speaker => true,
            MatchKind::Attribution => self.detect_attribution,
            MatchKind::Action => self.detect_action,
            MatchKind::Pronoun => self.detect_pronoun,
            MatchKind::Vocative => self.detect_vocative,
            MatchKind::Possessive => self.detect_possessive,
            MatchKind::Name => self.detect_general,
        }
    }
}

// =============================================================================
// Compile Options
// =============================================================================

/// Knobs for turning a Profile into matchers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptions {
    /// Regex character-class body (no brackets) defining word characters.
    /// A match may not start right after one of these.
    #[serde(default = "default_word_class")]
    pub word_class: String,
    /// Used when the profile's pronoun vocabulary is empty
    #[serde(default = "default_pronouns")]
    pub default_pronouns: Vec<String>,
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
    #[serde(default = "default_true")]
    pub unicode: bool,
    /// Additional `gimsuy` flags to union into every matcher
    #[serde(default)]
    pub extra_flags: String,
}

fn default_word_class() -> String {
    DEFAULT_WORD_CLASS.to_string()
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            word_class: default_word_class(),
            default_pronouns: default_pronouns(),
            case_insensitive: true,
            unicode: true,
            extra_flags: String::new(),
        }
    }
}

// =============================================================================
// Scan Options
// =============================================================================

/// Priority per match kind. `None` leaves records unweighted.
///
/// Defaults apply only when the whole map is absent; a supplied map is taken
/// as-is, so `{}` means every record gets `priority: null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    pub speaker: Option<f64>,
    pub attribution: Option<f64>,
    pub action: Option<f64>,
    pub pronoun: Option<f64>,
    pub vocative: Option<f64>,
    pub possessive: Option<f64>,
    pub name: Option<f64>,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            speaker: Some(5.0),
            attribution: Some(4.0),
            action: Some(3.0),
            pronoun: Some(2.0),
            vocative: Some(2.0),
            possessive: Some(1.0),
            name: Some(0.0),
        }
    }
}

impl PriorityWeights {
    /// No weights at all - every record gets `priority: null`
    pub fn none() -> Self {
        Self {
            speaker: None,
            attribution: None,
            action: None,
            pronoun: None,
            vocative: None,
            possessive: None,
            name: None,
        }
    }

    pub fn get(&self, kind: MatchKind) -> Option<f64> {
        match kind {
            MatchKind::Speaker => self.speaker,
            MatchKind::Attribution => self.attribution,
            MatchKind::Action => self.action,
            MatchKind::Pronoun => self.pronoun,
            MatchKind::Vocative => self.vocative,
            MatchKind::Possessive => self.possessive,
            MatchKind::Name => self.name,
        }
    }
}

/// Per-scan options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOptions {
    /// Precomputed quote ranges (char offsets); derived from the text if absent
    #[serde(default)]
    pub quote_ranges: Option<Vec<QuoteRange>>,
    #[serde(default)]
    pub priority_weights: PriorityWeights,
    /// Let attribution/action matches start inside quoted spans
    #[serde(default)]
    pub scan_dialogue_actions: bool,
    /// Let every role match inside quoted spans
    #[serde(default)]
    pub search_inside_quotes: bool,
    /// Caller-tracked current subject for pronoun continuation
    #[serde(default)]
    pub last_subject: Option<String>,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last_subject(mut self, subject: &str) -> Self {
        self.last_subject = Some(subject.to_string());
        self
    }

    pub fn with_dialogue_actions(mut self, enabled: bool) -> Self {
        self.scan_dialogue_actions = enabled;
        self
    }

    pub fn with_inside_quotes(mut self, enabled: bool) -> Self {
        self.search_inside_quotes = enabled;
        self
    }

    pub fn with_quote_ranges(mut self, ranges: Vec<QuoteRange>) -> Self {
        self.quote_ranges = Some(ranges);
        self
    }

    pub fn with_weights(mut self, weights: PriorityWeights) -> Self {
        self.priority_weights = weights;
        self
    }

    /// Trimmed non-empty subject, if any
    pub fn subject(&self) -> Option<&str> {
        self.last_subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
