//! Verb Catalog - category/edition-filtered verb vocabularies
//!
//! Entries are built once from the seed tables and never mutated. Queries
//! always return entries sorted by base form.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

use super::morphology::{conjugate, manual, VerbForm, VerbForms};
use super::table::{Tier, VerbSeed, BASE_VERBS, CURATED_VERBS};
use super::LexiconError;

// =============================================================================
// Categories & Editions
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbCategory {
    Attribution,
    Action,
}

impl VerbCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerbCategory::Attribution => "attribution",
            VerbCategory::Action => "action",
        }
    }
}

impl FromStr for VerbCategory {
    type Err = LexiconError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "attribution" => Ok(VerbCategory::Attribution),
            "action" => Ok(VerbCategory::Action),
            _ => Err(LexiconError::UnknownCategory(raw.to_string())),
        }
    }
}

/// Vocabulary size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    Default,
    Extended,
}

impl Edition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Edition::Default => "default",
            Edition::Extended => "extended",
        }
    }
}

impl FromStr for Edition {
    type Err = LexiconError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Edition::Default),
            "extended" => Ok(Edition::Extended),
            _ => Err(LexiconError::UnknownEdition(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionFlags {
    pub default: bool,
    pub extended: bool,
}

impl EditionFlags {
    fn from_tier(tier: Tier) -> Self {
        Self {
            default: tier.in_default(),
            extended: tier.in_extended(),
        }
    }

    fn union(self, other: Self) -> Self {
        Self {
            default: self.default || other.default,
            extended: self.extended || other.extended,
        }
    }

    pub fn includes(&self, edition: Edition) -> bool {
        match edition {
            Edition::Default => self.default,
            Edition::Extended => self.extended,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFlags {
    pub attribution: EditionFlags,
    pub action: EditionFlags,
}

impl CategoryFlags {
    pub fn includes(&self, category: VerbCategory, edition: Edition) -> bool {
        match category {
            VerbCategory::Attribution => self.attribution.includes(edition),
            VerbCategory::Action => self.action.includes(edition),
        }
    }

    fn union(self, other: Self) -> Self {
        Self {
            attribution: self.attribution.union(other.attribution),
            action: self.action.union(other.action),
        }
    }
}

// =============================================================================
// Entries
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbEntry {
    pub base: String,
    pub categories: CategoryFlags,
    pub forms: VerbForms,
}

impl VerbEntry {
    pub fn from_seed(seed: &VerbSeed) -> Result<Self, LexiconError> {
        let forms = if seed.manual {
            manual(seed.lemma, seed.particle, &seed.overrides)?
        } else {
            conjugate(seed.lemma, seed.particle, &seed.overrides)?
        };
        Ok(Self {
            base: forms.base.clone(),
            categories: CategoryFlags {
                attribution: EditionFlags::from_tier(seed.attribution),
                action: EditionFlags::from_tier(seed.action),
            },
            forms,
        })
    }
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct VerbCatalog {
    entries: Vec<VerbEntry>,
}

impl VerbCatalog {
    /// The base list unioned with the curated additions
    pub fn standard() -> Result<Self, LexiconError> {
        Self::from_seeds(BASE_VERBS.iter().chain(CURATED_VERBS))
    }

    /// Build from seed rows. A repeated base keeps the later forms and the
    /// union of both rows' flags.
    pub fn from_seeds<'a, I>(seeds: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = &'a VerbSeed>,
    {
        let mut catalog = Self::default();
        for seed in seeds {
            catalog.insert(VerbEntry::from_seed(seed)?);
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, entry: VerbEntry) {
        match self.entries.iter_mut().find(|e| e.base == entry.base) {
            Some(existing) => {
                existing.categories = existing.categories.union(entry.categories);
                existing.forms = entry.forms;
            }
            None => self.entries.push(entry),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, base: &str) -> Option<&VerbEntry> {
        self.entries.iter().find(|e| e.base == base)
    }

    /// Entries in a category/edition, sorted by base form
    pub fn select(&self, category: VerbCategory, edition: Edition) -> Vec<&VerbEntry> {
        let mut picked: Vec<&VerbEntry> = self
            .entries
            .iter()
            .filter(|e| e.categories.includes(category, edition))
            .collect();
        picked.sort_by(|a, b| a.base.cmp(&b.base));
        picked
    }

    /// `select` by name, failing on an unknown category or edition
    pub fn select_named(&self, category: &str, edition: &str) -> Result<Vec<&VerbEntry>, LexiconError> {
        Ok(self.select(category.parse()?, edition.parse()?))
    }

    /// Unique values of one form, in base order
    pub fn form_slice(&self, category: VerbCategory, edition: Edition, form: VerbForm) -> Vec<String> {
        unique(
            self.select(category, edition)
                .into_iter()
                .map(|e| e.forms.get(form)),
        )
    }

    /// Historical flattened list. For action/default it interleaves base and
    /// past forms (`nod, nodded, smile, smiled, ...`), dropping the past only
    /// when it repeats its own base; every other combination is the unique
    /// past forms.
    pub fn legacy_list(&self, category: VerbCategory, edition: Edition) -> Vec<String> {
        let entries = self.select(category, edition);
        match (category, edition) {
            (VerbCategory::Action, Edition::Default) => {
                let mut list = Vec::with_capacity(entries.len() * 2);
                for entry in entries {
                    list.push(entry.forms.base.clone());
                    if entry.forms.past != entry.forms.base {
                        list.push(entry.forms.past.clone());
                    }
                }
                list
            }
            _ => unique(entries.into_iter().map(|e| e.forms.past.as_str())),
        }
    }

    /// What a detector should match: unique third-person and past forms
    pub fn vocabulary(&self, category: VerbCategory, edition: Edition) -> Vec<String> {
        unique(
            self.select(category, edition)
                .into_iter()
                .flat_map(|e| [e.forms.third_person.as_str(), e.forms.past.as_str()]),
        )
    }
}

fn unique<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
