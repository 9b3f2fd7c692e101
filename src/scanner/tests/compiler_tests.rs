//! Tests for pattern parsing, grammar templates and matcher compilation

use crate::scanner::compiler::{compile, compile_with_bounds, CompiledMatcherSet};
use crate::scanner::config::{CompileOptions, PatternSlot, Profile};
use crate::scanner::grammar::GrammarBounds;
use crate::scanner::pattern::effective_patterns;

fn compiled(profile: &Profile) -> CompiledMatcherSet {
    compile(profile, &CompileOptions::default()).unwrap()
}

fn names_profile() -> Profile {
    Profile::new()
        .with_patterns(&["Alice", "Bob"])
        .with_attribution_verbs(&["said", "asked"])
        .with_action_verbs(&["nodded", "frowned"])
}

// ============================================================================
// Pattern Entries
// ============================================================================

#[test]
fn test_literal_is_escaped() {
    let set = compiled(&Profile::new().with_patterns(&["Mr. Smith"]));
    let name = set.name.as_ref().unwrap();
    assert!(name.is_match("Mr. Smith"));
    assert!(!name.is_match("Mrxsmith"));
}

#[test]
fn test_regex_entry_is_used_as_source() {
    let set = compiled(&Profile::new().with_patterns(&["/Al+ice/"]));
    let name = set.name.as_ref().unwrap();
    assert!(name.is_match("Allllice left"));
    assert!(set.entries()[0].is_regex);
}

#[test]
fn test_bad_flags_fall_back_to_literal() {
    let set = compiled(&Profile::new().with_patterns(&["/Bob/q"]));
    assert!(!set.entries()[0].is_regex);
    assert!(set.name.as_ref().unwrap().is_match("see /Bob/q here"));
}

#[test]
fn test_clashing_group_names_still_compile() {
    let set = compiled(
        &Profile::new()
            .with_patterns(&["/(?P<n>Al)ice/", "/(?P<n>Bo)b/"])
            .with_attribution_verbs(&["/(?P<n>sa)id/"]),
    );
    assert!(set.entries()[0].is_regex);
    assert!(!set.entries()[1].is_regex);
    assert!(set.name.as_ref().unwrap().is_match("Alice left"));
    // The verb reuses the name's group, so it is matched as written
    let attribution = set.attribution.as_ref().unwrap();
    assert!(!attribution.is_match("Alice said hi"));
}

#[test]
fn test_effective_patterns_dedupe_and_ignore() {
    let profile = Profile::new()
        .with_slot(PatternSlot::new("Alice").with_aliases(&["Ally", " Alice "]))
        .with_slot(PatternSlot::new("Narrator"))
        .with_patterns(&["Ally", "Bob", ""])
        .with_ignored(&["NARRATOR"]);
    assert_eq!(effective_patterns(&profile), vec!["Alice", "Ally", "Bob"]);
}

#[test]
fn test_ignored_name_never_matches() {
    let set = compiled(&names_profile().with_ignored(&["alice"]));
    assert_eq!(set.entries().len(), 1);
    assert!(!set.name.as_ref().unwrap().is_match("Alice"));
}

// ============================================================================
// Attribution / Action grammar
// ============================================================================

#[test]
fn test_name_tail_variants() {
    let set = compiled(&names_profile());
    let attribution = set.attribution.as_ref().unwrap();

    assert!(attribution.is_match("Alice said"));
    assert!(attribution.is_match("alice SAID"), "case-insensitive by default");
    assert!(attribution.is_match("Alice-sama said"));
    assert!(attribution.is_match("Alice Liddell said"));
    assert!(attribution.is_match("Bob, the tired old sailor, asked"));
    assert!(attribution.is_match("Bob (grinning) asked"));
    assert!(attribution.is_match("Alice — then she said"));
    assert!(!attribution.is_match("Alice saidso"), "verb needs a trailing boundary");
}

#[test]
fn test_filler_is_bounded() {
    let set = compiled(&names_profile());
    let action = set.action.as_ref().unwrap();
    assert!(action.is_match("Bob a b c d e f g nodded"));
    assert!(!action.is_match("Bob a b c d e f g h nodded"));
}

#[test]
fn test_custom_bounds() {
    let bounds = GrammarBounds::new(3, 8, 1, 0);
    let set = compile_with_bounds(&names_profile(), &CompileOptions::default(), bounds).unwrap();
    let action = set.action.as_ref().unwrap();
    assert!(action.is_match("Bob slowly nodded"));
    assert!(!action.is_match("Bob very slowly nodded"));

    let pronoun = set.pronoun.as_ref().unwrap();
    assert!(pronoun.is_match("she nodded"));
    assert!(!pronoun.is_match("she slowly nodded"));
}

#[test]
fn test_pronoun_grammar() {
    let set = compiled(&names_profile());
    let pronoun = set.pronoun.as_ref().unwrap();
    assert!(pronoun.is_match("She quietly nodded"));
    assert!(pronoun.is_match("they frowned"));
    assert!(!pronoun.is_match("she a b c d nodded"));
    assert!(!pronoun.is_match("it nodded"));
}

// ============================================================================
// Speaker / Vocative / Possessive
// ============================================================================

#[test]
fn test_speaker_tags() {
    let set = compiled(&names_profile());
    let speaker = set.speaker.as_ref().unwrap();
    assert!(speaker.is_match("Alice: hello"));
    assert!(speaker.is_match("  **Bob**: hi"));
    assert!(speaker.is_match("first line\nBob : second"));
    assert!(speaker.is_match("Bob：やあ"));
    assert!(!speaker.is_match("Well Alice: no"));
}

#[test]
fn test_cjk_honorific_speaker() {
    let set = compiled(&Profile::new().with_patterns(&["アリス"]));
    assert!(set.speaker.as_ref().unwrap().is_match("アリスさん：こんにちは"));
}

#[test]
fn test_vocative_and_possessive() {
    let set = compiled(&names_profile());
    let vocative = set.vocative.as_ref().unwrap();
    assert!(vocative.is_match("\"Thanks, Bob!\""));
    assert!(vocative.is_match("\"Alice, wait.\""));
    assert!(!vocative.is_match("Bob left"));

    let possessive = set.possessive.as_ref().unwrap();
    assert!(possessive.is_match("Bob's sword"));
    assert!(possessive.is_match("Alice’s book"));
    assert!(!possessive.is_match("Bob sword"));
}

#[test]
fn test_case_sensitive_option() {
    let options = CompileOptions {
        case_insensitive: false,
        ..CompileOptions::default()
    };
    let set = compile(&names_profile(), &options).unwrap();
    assert!(set.attribution.as_ref().unwrap().is_match("Alice said"));
    assert!(!set.attribution.as_ref().unwrap().is_match("alice said"));
}
