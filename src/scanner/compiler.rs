//! Pattern Compiler - Profile → CompiledMatcherSet
//!
//! Turns the effective name patterns, verb vocabularies and pronouns of a
//! Profile into one regex per matcher role. A role whose inputs are missing
//! compiles to `None`; that is never an error.
//!
//! # Flags
//! The final flag set is the union of every entry's declared flags, plus
//! case-insensitivity (unless disabled), plus caller-supplied extras.
//! `g` and `y` have no engine equivalent and are carried for reporting only;
//! the engine always runs in Unicode mode because the grammar uses `\p{..}`.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind as AcMatchKind};
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use super::config::{CompileOptions, Profile};
use super::grammar::{fill, Grammar, GrammarBounds};
use super::pattern::{
    alternation, declared_flags, effective_patterns, parse_patterns, parse_patterns_alongside,
    FlagSet, PatternEntry,
};
use crate::console;

/// Compiled program size ceiling. The bounded name-tail grammar over Unicode
/// classes is large; the default 10 MiB limit is too tight for it.
const REGEX_SIZE_LIMIT: usize = 64 * (1 << 20);
const DFA_SIZE_LIMIT: usize = 16 * (1 << 20);

// =============================================================================
// Roles & Errors
// =============================================================================

/// Named matcher roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatcherRole {
    Speaker,
    Attribution,
    Action,
    Pronoun,
    Vocative,
    Possessive,
    Name,
    Veto,
}

impl MatcherRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatcherRole::Speaker => "speakerRegex",
            MatcherRole::Attribution => "attributionRegex",
            MatcherRole::Action => "actionRegex",
            MatcherRole::Pronoun => "pronounRegex",
            MatcherRole::Vocative => "vocativeRegex",
            MatcherRole::Possessive => "possessiveRegex",
            MatcherRole::Name => "nameRegex",
            MatcherRole::Veto => "vetoRegex",
        }
    }
}

/// Compilation failure for a composed matcher
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    InvalidWordClass { class: String, message: String },
    Regex { role: MatcherRole, message: String },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::InvalidWordClass { class, message } => {
                write!(f, "invalid word class [{}]: {}", class, message)
            }
            CompileError::Regex { role, message } => {
                write!(f, "failed to compile {}: {}", role.as_str(), message)
            }
        }
    }
}

impl std::error::Error for CompileError {}

// =============================================================================
// CompiledMatcherSet
// =============================================================================

/// One regex per role, built once per (Profile, CompileOptions) pair
#[derive(Debug, Clone)]
pub struct CompiledMatcherSet {
    pub speaker: Option<Regex>,
    pub attribution: Option<Regex>,
    pub action: Option<Regex>,
    pub pronoun: Option<Regex>,
    pub vocative: Option<Regex>,
    pub possessive: Option<Regex>,
    pub name: Option<Regex>,
    pub veto: Option<Regex>,
    /// Single word char, for the leading boundary check
    word_char: Regex,
    /// Literal name prefilter; `None` when ASCII folding could miss a match
    prefilter: Option<AhoCorasick>,
    entries: Vec<PatternEntry>,
    flags: FlagSet,
}

impl CompiledMatcherSet {
    pub fn get(&self, role: MatcherRole) -> Option<&Regex> {
        match role {
            MatcherRole::Speaker => self.speaker.as_ref(),
            MatcherRole::Attribution => self.attribution.as_ref(),
            MatcherRole::Action => self.action.as_ref(),
            MatcherRole::Pronoun => self.pronoun.as_ref(),
            MatcherRole::Vocative => self.vocative.as_ref(),
            MatcherRole::Possessive => self.possessive.as_ref(),
            MatcherRole::Name => self.name.as_ref(),
            MatcherRole::Veto => self.veto.as_ref(),
        }
    }

    /// Roles that compiled to a matcher
    pub fn roles(&self) -> Vec<MatcherRole> {
        [
            MatcherRole::Speaker,
            MatcherRole::Attribution,
            MatcherRole::Action,
            MatcherRole::Pronoun,
            MatcherRole::Vocative,
            MatcherRole::Possessive,
            MatcherRole::Name,
            MatcherRole::Veto,
        ]
        .into_iter()
        .filter(|role| self.get(*role).is_some())
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.roles().is_empty()
    }

    /// The parsed name entries the matchers were built from
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Final flag set of the name matchers, `gimsuy` ordered
    pub fn flags(&self) -> String {
        self.flags.as_string()
    }

    /// Does the veto list match anywhere in `text`? Applying the result is
    /// the caller's policy.
    pub fn is_vetoed(&self, text: &str) -> bool {
        self.veto.as_ref().map(|re| re.is_match(text)).unwrap_or(false)
    }

    /// Is `ch` a word char under the configured class?
    pub fn is_word_char(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.word_char.is_match(ch.encode_utf8(&mut buf))
    }

    /// Cheap pre-check: can any configured name occur in `text` at all?
    /// Always true when no literal prefilter could be built.
    pub fn may_contain_names(&self, text: &str) -> bool {
        match &self.prefilter {
            Some(ac) => ac.is_match(text),
            None => true,
        }
    }

    fn empty(word_char: Regex) -> Self {
        Self {
            speaker: None,
            attribution: None,
            action: None,
            pronoun: None,
            vocative: None,
            possessive: None,
            name: None,
            veto: None,
            word_char,
            prefilter: None,
            entries: Vec::new(),
            flags: FlagSet::default(),
        }
    }
}

// =============================================================================
// Compilation
// =============================================================================

/// Compile every matcher role for `profile`
pub fn compile(profile: &Profile, options: &CompileOptions) -> Result<CompiledMatcherSet, CompileError> {
    compile_with_bounds(profile, options, GrammarBounds::default())
}

/// Compile with explicit grammar bounds (clamped to their ceilings)
pub fn compile_with_bounds(
    profile: &Profile,
    options: &CompileOptions,
    bounds: GrammarBounds,
) -> Result<CompiledMatcherSet, CompileError> {
    let word_char = Regex::new(&format!("^[{}]$", options.word_class)).map_err(|e| {
        CompileError::InvalidWordClass {
            class: options.word_class.clone(),
            message: e.to_string(),
        }
    })?;

    let entries = parse_patterns(&effective_patterns(profile));
    if entries.is_empty() {
        return Ok(CompiledMatcherSet::empty(word_char));
    }

    let grammar = Grammar::new(&options.word_class, bounds);
    let flags = final_flags(declared_flags(&entries), options);
    let names = alternation(&entries);

    let attribution_verbs = parse_patterns_alongside(&profile.attribution_verbs, &entries);
    let action_verbs = parse_patterns_alongside(&profile.action_verbs, &entries);
    let pronouns = effective_pronouns(profile, options, &action_verbs);

    let speaker = Some(build(MatcherRole::Speaker, &fill(&grammar.speaker_template(), &names), flags)?);

    let attribution = if attribution_verbs.is_empty() {
        None
    } else {
        let template = grammar.verb_phrase_template(&alternation(&attribution_verbs));
        let verb_flags = flags.union(declared_flags(&attribution_verbs));
        Some(build(MatcherRole::Attribution, &fill(&template, &names), verb_flags)?)
    };

    let action = if action_verbs.is_empty() {
        None
    } else {
        let template = grammar.verb_phrase_template(&alternation(&action_verbs));
        let verb_flags = flags.union(declared_flags(&action_verbs));
        Some(build(MatcherRole::Action, &fill(&template, &names), verb_flags)?)
    };

    let pronoun = if action_verbs.is_empty() || pronouns.is_empty() {
        None
    } else {
        let source = grammar.pronoun_template(&alternation(&pronouns), &alternation(&action_verbs));
        let pronoun_flags = flags
            .union(declared_flags(&pronouns))
            .union(declared_flags(&action_verbs));
        Some(build(MatcherRole::Pronoun, &source, pronoun_flags)?)
    };

    let vocative = Some(build(MatcherRole::Vocative, &fill(&grammar.vocative_template(), &names), flags)?);
    let possessive = Some(build(MatcherRole::Possessive, &fill(&grammar.possessive_template(), &names), flags)?);
    let name = Some(build(MatcherRole::Name, &fill(&grammar.name_template(), &names), flags)?);

    let veto_entries = parse_patterns(&profile.veto_patterns);
    let veto = if veto_entries.is_empty() {
        None
    } else {
        let veto_flags = final_flags(declared_flags(&veto_entries), options);
        Some(build(MatcherRole::Veto, &alternation(&veto_entries), veto_flags)?)
    };

    let prefilter = literal_prefilter(&entries, flags.ignore_case);

    console::log(&format!(
        "[Compiler] {} patterns, prefilter: {}, flags: {}",
        entries.len(),
        prefilter.is_some(),
        flags.as_string()
    ));

    Ok(CompiledMatcherSet {
        speaker,
        attribution,
        action,
        pronoun,
        vocative,
        possessive,
        name,
        veto,
        word_char,
        prefilter,
        entries,
        flags,
    })
}

/// Profile pronouns, or the option defaults when the profile lists none
fn effective_pronouns(
    profile: &Profile,
    options: &CompileOptions,
    action_verbs: &[PatternEntry],
) -> Vec<PatternEntry> {
    let from_profile = parse_patterns_alongside(&profile.pronoun_vocabulary, action_verbs);
    if from_profile.is_empty() {
        parse_patterns_alongside(&options.default_pronouns, action_verbs)
    } else {
        from_profile
    }
}

fn final_flags(declared: FlagSet, options: &CompileOptions) -> FlagSet {
    let mut flags = declared.union(FlagSet::parse_lenient(&options.extra_flags));
    if options.case_insensitive {
        flags.ignore_case = true;
    }
    if options.unicode {
        flags.unicode = true;
    }
    flags
}

fn build(role: MatcherRole, source: &str, flags: FlagSet) -> Result<Regex, CompileError> {
    RegexBuilder::new(source)
        .case_insensitive(flags.ignore_case)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_all)
        .size_limit(REGEX_SIZE_LIMIT)
        .dfa_size_limit(DFA_SIZE_LIMIT)
        .build()
        .map_err(|e| CompileError::Regex {
            role,
            message: e.to_string(),
        })
}

/// Aho-Corasick over literal ASCII names. Any regex or non-ASCII entry
/// disables it, since ASCII case folding could then miss a match. So does a
/// `k` or `s` under case folding: the regex also folds the Kelvin sign and
/// the long s onto them.
fn literal_prefilter(entries: &[PatternEntry], ignore_case: bool) -> Option<AhoCorasick> {
    if entries.iter().any(|e| e.is_regex || !e.source.is_ascii()) {
        return None;
    }
    if ignore_case && entries.iter().any(|e| e.source.contains(['k', 'K', 's', 'S'])) {
        return None;
    }
    let literals: Vec<&str> = entries.iter().map(|e| e.source.as_str()).collect();
    AhoCorasickBuilder::new()
        .match_kind(AcMatchKind::LeftmostFirst)
        .ascii_case_insensitive(ignore_case)
        .build(&literals)
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::new()
            .with_patterns(&["Alice", "Bob"])
            .with_attribution_verbs(&["said", "asked"])
            .with_action_verbs(&["nodded", "frowned"])
    }

    #[test]
    fn test_empty_patterns_compile_to_nothing() {
        let set = compile(&Profile::new().with_attribution_verbs(&["said"]), &CompileOptions::default()).unwrap();
        assert!(set.is_empty());
        assert!(set.get(MatcherRole::Speaker).is_none());
    }

    #[test]
    fn test_roles_follow_vocabularies() {
        let set = compile(&profile(), &CompileOptions::default()).unwrap();
        assert_eq!(
            set.roles(),
            vec![
                MatcherRole::Speaker,
                MatcherRole::Attribution,
                MatcherRole::Action,
                MatcherRole::Pronoun,
                MatcherRole::Vocative,
                MatcherRole::Possessive,
                MatcherRole::Name,
            ]
        );

        let no_verbs = compile(&Profile::new().with_patterns(&["Alice"]), &CompileOptions::default()).unwrap();
        assert!(no_verbs.attribution.is_none());
        assert!(no_verbs.action.is_none());
        assert!(no_verbs.pronoun.is_none(), "pronoun role needs action verbs");
        assert!(no_verbs.name.is_some());
    }

    #[test]
    fn test_empty_pronouns_fall_back_to_option_defaults() {
        let p = profile().with_pronouns(&[]);
        let set = compile(&p, &CompileOptions::default()).unwrap();
        assert!(set.pronoun.is_some());

        let opts = CompileOptions {
            default_pronouns: vec![],
            ..CompileOptions::default()
        };
        let set = compile(&p, &opts).unwrap();
        assert!(set.pronoun.is_none());
    }

    #[test]
    fn test_flag_union() {
        let p = Profile::new().with_patterns(&["/Al+ice/m", "Bob"]);
        let opts = CompileOptions {
            extra_flags: "gq".to_string(),
            ..CompileOptions::default()
        };
        let set = compile(&p, &opts).unwrap();
        assert_eq!(set.flags(), "gimu");

        let opts = CompileOptions {
            case_insensitive: false,
            unicode: false,
            ..CompileOptions::default()
        };
        let set = compile(&Profile::new().with_patterns(&["Bob"]), &opts).unwrap();
        assert_eq!(set.flags(), "");
        assert!(!set.name.as_ref().unwrap().is_match("bob"));
    }

    #[test]
    fn test_veto_is_plain_alternation() {
        let p = profile().with_veto(&["narrator", "/OOC:?/"]);
        let set = compile(&p, &CompileOptions::default()).unwrap();
        assert!(set.is_vetoed("(ooc: brb)"));
        assert!(set.is_vetoed("The Narrator speaks"));
        assert!(!set.is_vetoed("Alice said"));
    }

    #[test]
    fn test_invalid_word_class_is_an_error() {
        let opts = CompileOptions {
            word_class: r"\p{NotAClass}".to_string(),
            ..CompileOptions::default()
        };
        let err = compile(&profile(), &opts).unwrap_err();
        assert!(matches!(err, CompileError::InvalidWordClass { .. }));
        assert!(err.to_string().contains("NotAClass"));
    }

    #[test]
    fn test_prefilter_only_for_ascii_literals() {
        let set = compile(&profile(), &CompileOptions::default()).unwrap();
        assert!(set.may_contain_names("and then BOB left"));
        assert!(!set.may_contain_names("nobody here"));

        let regex_profile = Profile::new().with_patterns(&["/Bo+b/"]);
        let set = compile(&regex_profile, &CompileOptions::default()).unwrap();
        assert!(set.may_contain_names("nobody here"), "no prefilter for regex entries");

        let cjk = Profile::new().with_patterns(&["アリス"]);
        let set = compile(&cjk, &CompileOptions::default()).unwrap();
        assert!(set.may_contain_names("nobody here"));
    }

    #[test]
    fn test_prefilter_off_for_unicode_folded_letters() {
        let set = compile(&Profile::new().with_patterns(&["Kate"]), &CompileOptions::default()).unwrap();
        let kelvin = "\u{212A}ate waved";
        assert!(set.name.as_ref().unwrap().is_match(kelvin));
        assert!(set.may_contain_names(kelvin));

        let opts = CompileOptions {
            case_insensitive: false,
            ..CompileOptions::default()
        };
        let set = compile(&Profile::new().with_patterns(&["Kate"]), &opts).unwrap();
        assert!(!set.may_contain_names("nobody here"));
    }

    #[test]
    fn test_is_word_char_uses_configured_class() {
        let set = compile(&profile(), &CompileOptions::default()).unwrap();
        assert!(set.is_word_char('a'));
        assert!(set.is_word_char('é'));
        assert!(set.is_word_char('_'));
        assert!(!set.is_word_char(' '));
        assert!(!set.is_word_char('"'));
    }
}
