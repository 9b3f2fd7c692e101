//! VerbLexicon: catalog queries for the JS host

use wasm_bindgen::prelude::*;

use super::catalog::{Edition, VerbCatalog, VerbCategory};
use super::morphology::{conjugate, FormOverrides, VerbForm};
use super::LexiconError;
use crate::scanner::cortex::to_js;

fn js_err(e: LexiconError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct VerbLexicon {
    catalog: VerbCatalog,
}

#[wasm_bindgen]
impl VerbLexicon {
    #[wasm_bindgen(constructor)]
    pub fn js_new() -> Result<VerbLexicon, JsValue> {
        Self::new().map_err(js_err)
    }

    #[wasm_bindgen(js_name = len)]
    pub fn js_len(&self) -> usize {
        self.catalog.len()
    }

    /// Full entries, sorted by base form
    #[wasm_bindgen(js_name = entries)]
    pub fn js_entries(&self, category: &str, edition: &str) -> Result<JsValue, JsValue> {
        let entries = self.catalog.select_named(category, edition).map_err(js_err)?;
        Ok(to_js(&entries))
    }

    /// Unique values of one form, e.g. `forms("action", "default", "past")`
    #[wasm_bindgen(js_name = forms)]
    pub fn js_forms(&self, category: &str, edition: &str, form: &str) -> Result<JsValue, JsValue> {
        let (category, edition) = parse_pair(category, edition).map_err(js_err)?;
        let form: VerbForm = form.parse().map_err(js_err)?;
        Ok(to_js(&self.catalog.form_slice(category, edition, form)))
    }

    #[wasm_bindgen(js_name = legacy)]
    pub fn js_legacy(&self, category: &str, edition: &str) -> Result<JsValue, JsValue> {
        let (category, edition) = parse_pair(category, edition).map_err(js_err)?;
        Ok(to_js(&self.catalog.legacy_list(category, edition)))
    }

    #[wasm_bindgen(js_name = vocabulary)]
    pub fn js_vocabulary(&self, category: &str, edition: &str) -> Result<JsValue, JsValue> {
        let (category, edition) = parse_pair(category, edition).map_err(js_err)?;
        Ok(to_js(&self.catalog.vocabulary(category, edition)))
    }

    #[wasm_bindgen(js_name = conjugate)]
    pub fn js_conjugate(lemma: &str, particle: Option<String>) -> Result<JsValue, JsValue> {
        let forms = conjugate(lemma, particle.as_deref(), &FormOverrides::NONE).map_err(js_err)?;
        Ok(to_js(&forms))
    }
}

impl VerbLexicon {
    pub fn new() -> Result<Self, LexiconError> {
        Ok(Self {
            catalog: VerbCatalog::standard()?,
        })
    }

    pub fn catalog(&self) -> &VerbCatalog {
        &self.catalog
    }
}

fn parse_pair(category: &str, edition: &str) -> Result<(VerbCategory, Edition), LexiconError> {
    Ok((category.parse()?, edition.parse()?))
}
