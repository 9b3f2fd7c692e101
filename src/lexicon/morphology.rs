//! Verb Morphology - rule-derived English inflections
//!
//! Derives the five forms of a lemma:
//!
//! | form                | rule highlights                                  |
//! |---------------------|--------------------------------------------------|
//! | third person        | `-ie`→`-ies`, C+`y`→`-ies`, sibilant/`o`→`-es`   |
//! | past / participle   | silent `e`→`+d`, C+`y`→`-ied`, CVC doubling      |
//! | present participle  | `-ie`→`-ying`, `-ee/-oe/-ye` keep `e`, CVC double |
//!
//! A particle ("up", "off") is attached after inflection to every form:
//! `perk` + `up` → `perk up`, `perked up`, `perking up`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::LexiconError;

// =============================================================================
// Forms
// =============================================================================

/// Selector for one of the five forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerbForm {
    Base,
    ThirdPerson,
    Past,
    PastParticiple,
    PresentParticiple,
}

impl VerbForm {
    pub const ALL: [VerbForm; 5] = [
        VerbForm::Base,
        VerbForm::ThirdPerson,
        VerbForm::Past,
        VerbForm::PastParticiple,
        VerbForm::PresentParticiple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VerbForm::Base => "base",
            VerbForm::ThirdPerson => "thirdPerson",
            VerbForm::Past => "past",
            VerbForm::PastParticiple => "pastParticiple",
            VerbForm::PresentParticiple => "presentParticiple",
        }
    }
}

impl FromStr for VerbForm {
    type Err = LexiconError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        VerbForm::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LexiconError::UnknownForm(raw.to_string()))
    }
}

/// The five inflected forms of one verb (particle included)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbForms {
    pub base: String,
    pub third_person: String,
    pub past: String,
    pub past_participle: String,
    pub present_participle: String,
}

impl VerbForms {
    pub fn get(&self, form: VerbForm) -> &str {
        match form {
            VerbForm::Base => &self.base,
            VerbForm::ThirdPerson => &self.third_person,
            VerbForm::Past => &self.past,
            VerbForm::PastParticiple => &self.past_participle,
            VerbForm::PresentParticiple => &self.present_participle,
        }
    }

    fn with_particle(self, particle: Option<&str>) -> Self {
        let particle = match particle.map(str::trim) {
            Some(p) if !p.is_empty() => p,
            _ => return self,
        };
        let attach = |form: String| format!("{} {}", form, particle);
        Self {
            base: attach(self.base),
            third_person: attach(self.third_person),
            past: attach(self.past),
            past_participle: attach(self.past_participle),
            present_participle: attach(self.present_participle),
        }
    }
}

/// Explicit forms that replace (or, for `manual`, stand in for) derived ones.
/// Values are bare verbs; any particle is attached afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormOverrides<'a> {
    pub base: Option<&'a str>,
    pub third_person: Option<&'a str>,
    pub past: Option<&'a str>,
    pub past_participle: Option<&'a str>,
    pub present_participle: Option<&'a str>,
}

impl<'a> FormOverrides<'a> {
    pub const NONE: FormOverrides<'static> = FormOverrides {
        base: None,
        third_person: None,
        past: None,
        past_participle: None,
        present_participle: None,
    };

    /// Past and past participle, the usual irregular pair
    pub const fn past_pair(past: &'a str, past_participle: &'a str) -> Self {
        Self {
            base: None,
            third_person: None,
            past: Some(past),
            past_participle: Some(past_participle),
            present_participle: None,
        }
    }

    /// All five forms
    pub const fn full(
        base: &'a str,
        third_person: &'a str,
        past: &'a str,
        past_participle: &'a str,
        present_participle: &'a str,
    ) -> Self {
        Self {
            base: Some(base),
            third_person: Some(third_person),
            past: Some(past),
            past_participle: Some(past_participle),
            present_participle: Some(present_participle),
        }
    }

    fn get(&self, form: VerbForm) -> Option<&'a str> {
        let value = match form {
            VerbForm::Base => self.base,
            VerbForm::ThirdPerson => self.third_person,
            VerbForm::Past => self.past,
            VerbForm::PastParticiple => self.past_participle,
            VerbForm::PresentParticiple => self.present_participle,
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }
}

// =============================================================================
// Derivation
// =============================================================================

fn clean_lemma(lemma: &str) -> Result<&str, LexiconError> {
    let lemma = lemma.trim();
    if lemma.is_empty() {
        Err(LexiconError::EmptyLemma)
    } else {
        Ok(lemma)
    }
}

/// Rule-derive every form, apply overrides, then attach the particle
pub fn conjugate(
    lemma: &str,
    particle: Option<&str>,
    overrides: &FormOverrides<'_>,
) -> Result<VerbForms, LexiconError> {
    let lemma = clean_lemma(lemma)?;
    let past = past_tense(lemma);

    let pick = |form: VerbForm, derived: String| overrides.get(form).map(str::to_string).unwrap_or(derived);

    let forms = VerbForms {
        base: pick(VerbForm::Base, lemma.to_string()),
        third_person: pick(VerbForm::ThirdPerson, third_person(lemma)),
        past: pick(VerbForm::Past, past.clone()),
        past_participle: pick(VerbForm::PastParticiple, past),
        present_participle: pick(VerbForm::PresentParticiple, present_participle(lemma)),
    };
    Ok(forms.with_particle(particle))
}

/// Forms supplied by hand. Every one of the five must be present.
pub fn manual(
    lemma: &str,
    particle: Option<&str>,
    forms: &FormOverrides<'_>,
) -> Result<VerbForms, LexiconError> {
    let lemma = clean_lemma(lemma)?;
    let require = |form: VerbForm| {
        forms
            .get(form)
            .map(str::to_string)
            .ok_or_else(|| LexiconError::MissingForm {
                lemma: lemma.to_string(),
                form: form.as_str().to_string(),
            })
    };

    let forms = VerbForms {
        base: require(VerbForm::Base)?,
        third_person: require(VerbForm::ThirdPerson)?,
        past: require(VerbForm::Past)?,
        past_participle: require(VerbForm::PastParticiple)?,
        present_participle: require(VerbForm::PresentParticiple)?,
    };
    Ok(forms.with_particle(particle))
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Consonant followed by a final `y`
fn ends_consonant_y(word: &str) -> bool {
    let mut tail = word.chars().rev();
    matches!((tail.next(), tail.next()), (Some('y'), Some(c)) if is_consonant(c))
}

/// Classic CVC ending (final w/x/y excluded)
fn doubles_final(word: &str) -> bool {
    let tail: Vec<char> = word.chars().rev().take(3).collect();
    match tail.as_slice() {
        [last, mid, first] => {
            is_consonant(*last)
                && !matches!(last.to_ascii_lowercase(), 'w' | 'x' | 'y')
                && is_vowel(*mid)
                && is_consonant(*first)
        }
        _ => false,
    }
}

fn last_char(word: &str) -> Option<char> {
    word.chars().next_back()
}

/// Drop the final `n` chars (ASCII suffixes only)
fn stem(word: &str, n: usize) -> &str {
    &word[..word.len().saturating_sub(n)]
}

pub fn third_person(lemma: &str) -> String {
    if lemma.ends_with("ie") {
        format!("{}s", lemma)
    } else if ends_consonant_y(lemma) {
        format!("{}ies", stem(lemma, 1))
    } else if ["s", "sh", "ch", "x", "z", "o"].iter().any(|s| lemma.ends_with(s)) {
        format!("{}es", lemma)
    } else {
        format!("{}s", lemma)
    }
}

pub fn past_tense(lemma: &str) -> String {
    if lemma.ends_with('e') {
        format!("{}d", lemma)
    } else if ends_consonant_y(lemma) {
        format!("{}ied", stem(lemma, 1))
    } else if doubles_final(lemma) {
        match last_char(lemma) {
            Some(c) => format!("{}{}ed", lemma, c),
            None => format!("{}ed", lemma),
        }
    } else {
        format!("{}ed", lemma)
    }
}

pub fn present_participle(lemma: &str) -> String {
    if lemma.ends_with("ie") {
        format!("{}ying", stem(lemma, 2))
    } else if ["ee", "oe", "ye"].iter().any(|s| lemma.ends_with(s)) {
        format!("{}ing", lemma)
    } else if lemma.ends_with('e') {
        format!("{}ing", stem(lemma, 1))
    } else if doubles_final(lemma) {
        match last_char(lemma) {
            Some(c) => format!("{}{}ing", lemma, c),
            None => format!("{}ing", lemma),
        }
    } else {
        format!("{}ing", lemma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(lemma: &str) -> VerbForms {
        conjugate(lemma, None, &FormOverrides::NONE).unwrap()
    }

    #[test]
    fn test_doubling_rule() {
        let drop = forms("drop");
        assert_eq!(drop.past, "dropped");
        assert_eq!(drop.past_participle, "dropped");
        assert_eq!(drop.present_participle, "dropping");

        assert_eq!(forms("frown").past, "frowned", "final w never doubles");
        assert_eq!(forms("shout").past, "shouted", "vowel pair never doubles");
    }

    #[test]
    fn test_ie_and_y_endings() {
        let tie = forms("tie");
        assert_eq!(tie.third_person, "ties");
        assert_eq!(tie.past, "tied");
        assert_eq!(tie.present_participle, "tying");

        let play = forms("play");
        assert_eq!(play.third_person, "plays");
        assert_eq!(play.past, "played");
        assert_eq!(play.present_participle, "playing");

        let cry = forms("cry");
        assert_eq!(cry.third_person, "cries");
        assert_eq!(cry.past, "cried");
        assert_eq!(cry.present_participle, "crying");
    }

    #[test]
    fn test_e_endings() {
        assert_eq!(forms("smile").past, "smiled");
        assert_eq!(forms("smile").present_participle, "smiling");
        assert_eq!(forms("agree").present_participle, "agreeing");
        assert_eq!(forms("hoe").present_participle, "hoeing");
    }

    #[test]
    fn test_sibilant_third_person() {
        assert_eq!(forms("hiss").third_person, "hisses");
        assert_eq!(forms("blush").third_person, "blushes");
        assert_eq!(forms("watch").third_person, "watches");
        assert_eq!(forms("echo").third_person, "echoes");
        assert_eq!(forms("nod").third_person, "nods");
    }

    #[test]
    fn test_particle_attaches_to_every_form() {
        let perk = conjugate("perk", Some("up"), &FormOverrides::NONE).unwrap();
        assert_eq!(perk.base, "perk up");
        assert_eq!(perk.third_person, "perks up");
        assert_eq!(perk.past, "perked up");
        assert_eq!(perk.present_participle, "perking up");

        let blank = conjugate("perk", Some("  "), &FormOverrides::NONE).unwrap();
        assert_eq!(blank.base, "perk");
    }

    #[test]
    fn test_overrides_replace_derived_forms() {
        let arise = conjugate("arise", None, &FormOverrides::past_pair("arose", "arisen")).unwrap();
        assert_eq!(arise.past, "arose");
        assert_eq!(arise.past_participle, "arisen");
        assert_eq!(arise.present_participle, "arising");

        let sit = conjugate("sit", Some("down"), &FormOverrides::past_pair("sat", "sat")).unwrap();
        assert_eq!(sit.past, "sat down");
        assert_eq!(sit.present_participle, "sitting down");
    }

    #[test]
    fn test_manual_requires_every_form() {
        let whisper = manual(
            "whisper",
            None,
            &FormOverrides::full("whisper", "whispers", "whispered", "whispered", "whispering"),
        )
        .unwrap();
        assert_eq!(whisper.past, "whispered");

        let partial = FormOverrides {
            past_participle: None,
            ..FormOverrides::full("whisper", "whispers", "whispered", "whispered", "whispering")
        };
        let err = manual("whisper", None, &partial).unwrap_err();
        assert_eq!(
            err,
            LexiconError::MissingForm {
                lemma: "whisper".to_string(),
                form: "pastParticiple".to_string()
            }
        );
        assert!(err.to_string().contains("whisper"));
    }

    #[test]
    fn test_empty_lemma_rejected() {
        assert_eq!(conjugate("  ", None, &FormOverrides::NONE), Err(LexiconError::EmptyLemma));
        assert_eq!(manual("", None, &FormOverrides::NONE), Err(LexiconError::EmptyLemma));
    }

    #[test]
    fn test_form_parsing() {
        assert_eq!("thirdPerson".parse::<VerbForm>().unwrap(), VerbForm::ThirdPerson);
        assert_eq!(" PAST ".parse::<VerbForm>().unwrap(), VerbForm::Past);
        assert!("gerund".parse::<VerbForm>().is_err());
    }
}
