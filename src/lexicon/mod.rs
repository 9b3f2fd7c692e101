//! Verb lexicon: conjugation rules and the curated verb catalog
//!
//! Feeds the attribution/action vocabularies of a scanner `Profile`.

pub mod catalog;
pub mod morphology;
pub mod table;
pub mod wasm;

pub use catalog::{CategoryFlags, Edition, EditionFlags, VerbCatalog, VerbCategory, VerbEntry};
pub use morphology::{conjugate, manual, FormOverrides, VerbForm, VerbForms};
pub use wasm::VerbLexicon;

/// Configuration errors raised while building or querying the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    UnknownCategory(String),
    UnknownEdition(String),
    UnknownForm(String),
    EmptyLemma,
    MissingForm { lemma: String, form: String },
}

impl std::fmt::Display for LexiconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexiconError::UnknownCategory(c) => write!(f, "Unknown verb category: {}", c),
            LexiconError::UnknownEdition(e) => write!(f, "Unknown verb edition: {}", e),
            LexiconError::UnknownForm(form) => write!(f, "Unknown verb form: {}", form),
            LexiconError::EmptyLemma => write!(f, "Verb entry has an empty lemma"),
            LexiconError::MissingForm { lemma, form } => {
                write!(f, "Manual verb entry '{}' is missing its {} form", lemma, form)
            }
        }
    }
}

impl std::error::Error for LexiconError {}
