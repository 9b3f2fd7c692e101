//! Verb seed tables
//!
//! Compact storage: a lemma, an optional particle, how its forms are obtained,
//! and its tier in each category. `VerbCatalog::standard` expands these into
//! full entries. The extended tier of a category includes its default tier.

use super::morphology::FormOverrides;

/// Membership of a verb in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Off,
    Default,
    Extended,
}

impl Tier {
    pub fn in_default(self) -> bool {
        self == Tier::Default
    }

    pub fn in_extended(self) -> bool {
        self != Tier::Off
    }
}

/// One row of a seed table
#[derive(Debug, Clone, Copy)]
pub struct VerbSeed {
    pub lemma: &'static str,
    pub particle: Option<&'static str>,
    pub overrides: FormOverrides<'static>,
    /// Forms come only from `overrides`; no rule derivation
    pub manual: bool,
    pub attribution: Tier,
    pub action: Tier,
}

impl VerbSeed {
    pub const fn rule(lemma: &'static str) -> Self {
        Self {
            lemma,
            particle: None,
            overrides: FormOverrides::NONE,
            manual: false,
            attribution: Tier::Off,
            action: Tier::Off,
        }
    }

    pub const fn irregular(lemma: &'static str, past: &'static str, past_participle: &'static str) -> Self {
        Self {
            overrides: FormOverrides::past_pair(past, past_participle),
            ..Self::rule(lemma)
        }
    }

    /// Hand-written forms for verbs the spelling rules get wrong
    /// (`whisper` → `whisperred`, `panic` → `panicced`)
    pub const fn manual(
        lemma: &'static str,
        third_person: &'static str,
        past: &'static str,
        present_participle: &'static str,
    ) -> Self {
        Self {
            overrides: FormOverrides::full(lemma, third_person, past, past, present_participle),
            manual: true,
            ..Self::rule(lemma)
        }
    }

    pub const fn up(self, particle: &'static str) -> Self {
        Self {
            particle: Some(particle),
            ..self
        }
    }

    pub const fn says(self, tier: Tier) -> Self {
        Self {
            attribution: tier,
            ..self
        }
    }

    pub const fn acts(self, tier: Tier) -> Self {
        Self { action: tier, ..self }
    }
}

use Tier::{Default as D, Extended as X};

// =============================================================================
// Base List
// =============================================================================

pub const BASE_VERBS: &[VerbSeed] = &[
    // -------------------------------------------------------------------------
    // Speech
    // -------------------------------------------------------------------------
    VerbSeed::irregular("say", "said", "said").says(D),
    VerbSeed::rule("ask").says(D),
    VerbSeed::rule("reply").says(D),
    VerbSeed::rule("shout").says(D),
    VerbSeed::rule("yell").says(D),
    VerbSeed::rule("exclaim").says(D),
    VerbSeed::rule("add").says(D),
    VerbSeed::rule("call").says(D),
    VerbSeed::rule("cry").says(D),
    VerbSeed::rule("explain").says(D),
    VerbSeed::rule("continue").says(D),
    VerbSeed::rule("insist").says(D),
    VerbSeed::rule("snap").says(D),
    VerbSeed::rule("whisper").says(D),
    VerbSeed::rule("murmur").says(D),
    VerbSeed::rule("mutter").says(D),
    VerbSeed::rule("answer").says(D),
    VerbSeed::irregular("tell", "told", "told").says(X),
    VerbSeed::irregular("speak", "spoke", "spoken").says(X),
    VerbSeed::irregular("begin", "began", "begun").says(X),
    VerbSeed::irregular("swear", "swore", "sworn").says(X),
    VerbSeed::irregular("sing", "sang", "sung").says(X),
    VerbSeed::rule("plead").says(X),
    VerbSeed::rule("beg").says(X),
    VerbSeed::rule("demand").says(X),
    VerbSeed::rule("declare").says(X),
    VerbSeed::rule("announce").says(X),
    VerbSeed::rule("remark").says(X),
    VerbSeed::rule("note").says(X),
    VerbSeed::rule("observe").says(X),
    VerbSeed::rule("respond").says(X),
    VerbSeed::rule("interrupt").says(X),
    VerbSeed::rule("suggest").says(X),
    VerbSeed::rule("warn").says(X),
    VerbSeed::rule("promise").says(X),
    VerbSeed::rule("mumble").says(X),
    VerbSeed::rule("hiss").says(X),
    VerbSeed::rule("growl").says(X),
    VerbSeed::rule("sneer").says(X),
    VerbSeed::rule("scoff").says(X),
    VerbSeed::rule("groan").says(X),
    VerbSeed::rule("moan").says(X),
    VerbSeed::rule("tease").says(X),
    VerbSeed::rule("joke").says(X),
    VerbSeed::rule("agree").says(X),
    VerbSeed::rule("argue").says(X),
    VerbSeed::rule("admit").says(X),
    VerbSeed::rule("sob").says(X),
    VerbSeed::rule("gasp").says(X).acts(X),
    VerbSeed::rule("breathe").says(X),
    VerbSeed::rule("grumble").says(X),
    VerbSeed::rule("stammer").says(X),
    VerbSeed::rule("stutter").says(X),
    VerbSeed::rule("wonder").says(X),
    VerbSeed::rule("snicker").says(X).acts(X),
    // -------------------------------------------------------------------------
    // Gesture & Expression
    // -------------------------------------------------------------------------
    VerbSeed::rule("nod").acts(D),
    VerbSeed::rule("smile").acts(D),
    VerbSeed::rule("frown").acts(D),
    VerbSeed::rule("sigh").acts(D).says(X),
    VerbSeed::rule("shrug").acts(D),
    VerbSeed::rule("laugh").acts(D).says(X),
    VerbSeed::rule("grin").acts(D),
    VerbSeed::rule("wave").acts(D),
    VerbSeed::rule("glance").acts(D),
    VerbSeed::rule("stare").acts(D),
    VerbSeed::irregular("shake", "shook", "shaken").acts(D),
    VerbSeed::rule("wink").acts(D),
    VerbSeed::rule("point").acts(D),
    VerbSeed::rule("blush").acts(D),
    VerbSeed::rule("smirk").acts(X),
    VerbSeed::rule("wince").acts(X),
    VerbSeed::rule("blink").acts(X),
    VerbSeed::rule("flinch").acts(X),
    VerbSeed::rule("grimace").acts(X),
    VerbSeed::rule("pout").acts(X),
    VerbSeed::rule("glare").acts(X),
    VerbSeed::rule("beam").acts(X),
    VerbSeed::rule("chuckle").acts(X).says(X),
    VerbSeed::rule("giggle").acts(X).says(X),
    VerbSeed::rule("hum").acts(X),
    VerbSeed::rule("huff").acts(X),
    VerbSeed::rule("hesitate").acts(X),
    VerbSeed::rule("pause").acts(X),
    VerbSeed::rule("panic").acts(X),
    VerbSeed::rule("lower").acts(X),
    // -------------------------------------------------------------------------
    // Movement
    // -------------------------------------------------------------------------
    VerbSeed::rule("look").acts(D),
    VerbSeed::rule("turn").acts(D),
    VerbSeed::rule("walk").acts(D),
    VerbSeed::irregular("run", "ran", "run").acts(D),
    VerbSeed::rule("step").acts(X),
    VerbSeed::rule("clap").acts(X),
    VerbSeed::rule("tap").acts(X),
    VerbSeed::rule("drop").acts(X),
    VerbSeed::irregular("rise", "rose", "risen").acts(X),
    VerbSeed::irregular("arise", "arose", "arisen").acts(X),
    VerbSeed::irregular("fall", "fell", "fallen").acts(X),
    VerbSeed::irregular("freeze", "froze", "frozen").acts(X),
    VerbSeed::irregular("hide", "hid", "hidden").acts(X),
    VerbSeed::irregular("bite", "bit", "bitten").acts(X),
];

// =============================================================================
// Curated Additions
// =============================================================================

/// Phrasal verbs and manual forms. A row whose base matches a base-list verb
/// replaces its forms and widens its tiers.
pub const CURATED_VERBS: &[VerbSeed] = &[
    // Spelling-rule exceptions
    VerbSeed::manual("whisper", "whispers", "whispered", "whispering").says(D),
    VerbSeed::manual("murmur", "murmurs", "murmured", "murmuring").says(D),
    VerbSeed::manual("mutter", "mutters", "muttered", "muttering").says(D),
    VerbSeed::manual("answer", "answers", "answered", "answering").says(D),
    VerbSeed::manual("stammer", "stammers", "stammered", "stammering").says(X),
    VerbSeed::manual("stutter", "stutters", "stuttered", "stuttering").says(X),
    VerbSeed::manual("wonder", "wonders", "wondered", "wondering").says(X),
    VerbSeed::manual("snicker", "snickers", "snickered", "snickering").says(X).acts(X),
    VerbSeed::manual("lower", "lowers", "lowered", "lowering").acts(X),
    VerbSeed::manual("panic", "panics", "panicked", "panicking").acts(X),
    // Phrasal
    VerbSeed::rule("perk").up("up").acts(X),
    VerbSeed::rule("look").up("up").acts(D),
    VerbSeed::rule("look").up("away").acts(X),
    VerbSeed::rule("step").up("back").acts(D),
    VerbSeed::irregular("sit", "sat", "sat").up("down").acts(D),
    VerbSeed::irregular("stand", "stood", "stood").up("up").acts(D),
    VerbSeed::rule("lean").up("forward").acts(D),
    VerbSeed::rule("turn").up("away").acts(X),
    VerbSeed::irregular("break", "broke", "broken").up("off").says(X),
    VerbSeed::rule("trail").up("off").says(X),
    VerbSeed::irregular("cut", "cut", "cut").up("in").says(X),
];
