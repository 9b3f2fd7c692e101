//! Grammar builder - regex templates for every matcher role
//!
//! Templates carry a `{{PATTERNS}}` placeholder that the compiler fills with
//! the alternation of configured names. The name-tail grammar shared by the
//! attribution and action roles reads:
//!
//! ```text
//! NAME  honorific?  possessive?  compound-word?  descriptor{0,3}
//!       separator  filler{0,7}?  VERB
//! ```
//!
//! # Bounds
//! Every repetition in a template is bounded by `GrammarBounds`, and the
//! bounds themselves are clamped to the `MAX_*` ceilings. No template this
//! module emits contains an unbounded repetition over words.

/// Placeholder replaced by the name alternation
pub const PATTERNS_PLACEHOLDER: &str = "{{PATTERNS}}";

pub const MAX_DESCRIPTOR_CLAUSES: usize = 3;
pub const MAX_DESCRIPTOR_WORDS: usize = 8;
pub const MAX_FILLER_WORDS: usize = 7;
pub const MAX_PRONOUN_FILLER_WORDS: usize = 3;

/// Honorific suffixes (regex sources), Western and CJK
pub const HONORIFICS: &[&str] = &[
    "sama", "san", "kun", "chan", "chama", "tan", "senpai", "sensei", "dono", "hakase",
    r"jr\.?", r"sr\.?", r"esq\.?",
    "さん", "さま", "様", "くん", "君", "ちゃん", "先輩", "先生", "殿", "氏",
    "씨", "님",
];

/// Possessive marker: `'s`, `’s`, or a bare trailing apostrophe
const POSSESSIVE: &str = r"(?:['’]s?)";

/// Opening characters a vocative or speaker tag may follow
const OPENERS: &str = r#""'“‘«‹「『｢(\["#;

/// Terminal punctuation closing a vocative
const VOCATIVE_TERMINALS: &str = r"[,.!?…;！？。、]";

// =============================================================================
// Bounds
// =============================================================================

/// Repetition bounds for descriptor and filler clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarBounds {
    descriptor_clauses: usize,
    descriptor_words: usize,
    filler_words: usize,
    pronoun_filler_words: usize,
}

impl Default for GrammarBounds {
    fn default() -> Self {
        Self {
            descriptor_clauses: MAX_DESCRIPTOR_CLAUSES,
            descriptor_words: MAX_DESCRIPTOR_WORDS,
            filler_words: MAX_FILLER_WORDS,
            pronoun_filler_words: MAX_PRONOUN_FILLER_WORDS,
        }
    }
}

impl GrammarBounds {
    /// Build bounds, clamping each to its ceiling. Descriptor clauses need at
    /// least one word.
    pub fn new(
        descriptor_clauses: usize,
        descriptor_words: usize,
        filler_words: usize,
        pronoun_filler_words: usize,
    ) -> Self {
        Self {
            descriptor_clauses: descriptor_clauses.min(MAX_DESCRIPTOR_CLAUSES),
            descriptor_words: descriptor_words.clamp(1, MAX_DESCRIPTOR_WORDS),
            filler_words: filler_words.min(MAX_FILLER_WORDS),
            pronoun_filler_words: pronoun_filler_words.min(MAX_PRONOUN_FILLER_WORDS),
        }
    }

    pub fn descriptor_clauses(&self) -> usize {
        self.descriptor_clauses
    }

    pub fn descriptor_words(&self) -> usize {
        self.descriptor_words
    }

    pub fn filler_words(&self) -> usize {
        self.filler_words
    }

    pub fn pronoun_filler_words(&self) -> usize {
        self.pronoun_filler_words
    }
}

// =============================================================================
// Grammar
// =============================================================================

/// Template factory for one word-character class
#[derive(Debug, Clone)]
pub struct Grammar {
    word_class: String,
    bounds: GrammarBounds,
}

impl Grammar {
    pub fn new(word_class: &str, bounds: GrammarBounds) -> Self {
        Self {
            word_class: word_class.to_string(),
            bounds,
        }
    }

    pub fn bounds(&self) -> GrammarBounds {
        self.bounds
    }

    /// One word: a word char followed by word chars, apostrophes, hyphens
    pub fn word(&self) -> String {
        format!(r"[{w}][{w}'’\-]*", w = self.word_class)
    }

    /// Trailing boundary: a non-word char or end of text (consumed)
    pub fn trailing_guard(&self) -> String {
        format!(r"(?:[^{}]|$)", self.word_class)
    }

    /// Optional honorific, optionally preceded by a dash or space
    pub fn honorific(&self) -> String {
        format!(r"(?:[\-‐\s]?(?:{}))?", HONORIFICS.join("|"))
    }

    /// Optional capitalized or ideographic continuation word
    pub fn compound(&self) -> String {
        format!(
            r"(?:(?:\s+|[\-‐])(?-i:[\p{{Lu}}\p{{Lt}}\p{{Lo}}])[{}]*)?",
            self.word_class
        )
    }

    /// Run of 1..=descriptor_words words separated by whitespace
    fn word_run(&self, max_words: usize) -> String {
        let word = self.word();
        if max_words <= 1 {
            return word;
        }
        format!(r"{word}(?:\s+{word}){{0,{}}}", max_words - 1, word = word)
    }

    /// Zero to `descriptor_clauses` comma or parenthesized descriptors
    pub fn descriptors(&self) -> String {
        let clauses = self.bounds.descriptor_clauses;
        if clauses == 0 {
            return String::new();
        }
        let run = self.word_run(self.bounds.descriptor_words);
        format!(
            r"(?:,\s*{run}|\s*\(\s*{run}\s*\)){{0,{clauses}}}",
            run = run,
            clauses = clauses
        )
    }

    /// Punctuation and/or whitespace between the name tail and the verb phrase
    pub fn separator(&self) -> String {
        r"(?:\s*[,;:\-—–]\s*|\s+)".to_string()
    }

    /// Lazy run of up to `max` filler words, each followed by whitespace
    fn filler_run(&self, max: usize) -> String {
        if max == 0 {
            return String::new();
        }
        format!(r"(?:{}\s+){{0,{}}}?", self.word(), max)
    }

    pub fn filler(&self) -> String {
        self.filler_run(self.bounds.filler_words)
    }

    /// Everything allowed between a matched name and the separator
    pub fn name_tail(&self) -> String {
        format!(
            "{}{}?{}{}",
            self.honorific(),
            POSSESSIVE,
            self.compound(),
            self.descriptors()
        )
    }

    // -------------------------------------------------------------------------
    // Role templates
    // -------------------------------------------------------------------------

    /// `Name:` at line start, or after a quote/bracket opener
    pub fn speaker_template(&self) -> String {
        format!(
            r"(?m)^[ \t]*(?:[{openers}*_]+[ \t]*)?({p}){hon}[*_]*[ \t]*[:：]",
            openers = OPENERS,
            p = PATTERNS_PLACEHOLDER,
            hon = self.honorific()
        )
    }

    /// Name + tail + separator + filler + verb alternation
    pub fn verb_phrase_template(&self, verbs: &str) -> String {
        format!(
            "({p}){tail}{sep}{filler}{verbs}{guard}",
            p = PATTERNS_PLACEHOLDER,
            tail = self.name_tail(),
            sep = self.separator(),
            filler = self.filler(),
            verbs = verbs,
            guard = self.trailing_guard()
        )
    }

    /// Pronoun + optional possessive + short filler + action verb
    pub fn pronoun_template(&self, pronouns: &str, verbs: &str) -> String {
        format!(
            r"({pronouns})(?:['’]s)?\s+{filler}{verbs}{guard}",
            pronouns = pronouns,
            filler = self.filler_run(self.bounds.pronoun_filler_words),
            verbs = verbs,
            guard = self.trailing_guard()
        )
    }

    /// Direct address: opener/whitespace, name, terminal punctuation
    pub fn vocative_template(&self) -> String {
        format!(
            r"(?:^|[\s{openers},—–])({p}){hon}[ \t]*{term}",
            openers = OPENERS,
            p = PATTERNS_PLACEHOLDER,
            hon = self.honorific(),
            term = VOCATIVE_TERMINALS
        )
    }

    /// Name immediately followed by a possessive marker
    pub fn possessive_template(&self) -> String {
        format!(
            "({p}){pos}{guard}",
            p = PATTERNS_PLACEHOLDER,
            pos = POSSESSIVE,
            guard = self.trailing_guard()
        )
    }

    /// Bare name, optionally carrying a `-sama`/`-san` suffix
    pub fn name_template(&self) -> String {
        format!(
            "({p}(?:-(?:sama|san))?){guard}",
            p = PATTERNS_PLACEHOLDER,
            guard = self.trailing_guard()
        )
    }
}

/// Splice an alternation into a template
pub fn fill(template: &str, alternation: &str) -> String {
    template.replace(PATTERNS_PLACEHOLDER, alternation)
}
