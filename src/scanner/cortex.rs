//! DetectionCortex: character detection for the JS host
//!
//! Hydrate once with a Profile, then scan as many passages as needed. The
//! compiled matcher set is rebuilt only on re-hydration.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::compiler::{compile, CompileError, CompiledMatcherSet, MatcherRole};
use super::config::{CompileOptions, Profile, ScanOptions};
use super::detection::{detect, Detection};
use super::quotes::{quote_ranges, QuoteRange};
use super::record::MatchRecord;
use crate::console;
use crate::report::{merge, summarize, DetectionReport};

/// Serialize as plain JSON-style objects (maps as objects, `None` as null)
pub(crate) fn to_js<T: Serialize>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    match value.serialize(&serializer) {
        Ok(v) => v,
        Err(e) => {
            console::error(&format!("[DetectionCortex] Serialization failed: {:?}", e));
            JsValue::NULL
        }
    }
}

fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

fn scan_options(value: JsValue) -> ScanOptions {
    if is_absent(&value) {
        return ScanOptions::default();
    }
    serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
        console::warn(&format!("[DetectionCortex] Invalid scan options, using defaults: {}", e));
        ScanOptions::default()
    })
}

/// Compiled detector for one Profile
#[wasm_bindgen]
pub struct DetectionCortex {
    profile: Profile,
    options: CompileOptions,
    set: Option<CompiledMatcherSet>,
}

impl Default for DetectionCortex {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DetectionCortex {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            profile: Profile::default(),
            options: CompileOptions::default(),
            set: None,
        }
    }

    /// Compile matchers for a profile. `options` may be omitted.
    #[wasm_bindgen(js_name = hydrateProfile)]
    pub fn js_hydrate_profile(&mut self, profile: JsValue, options: JsValue) -> Result<(), JsValue> {
        let profile: Profile = serde_wasm_bindgen::from_value(profile)
            .map_err(|e| JsValue::from_str(&format!("Invalid profile: {}", e)))?;
        let options: CompileOptions = if is_absent(&options) {
            CompileOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid compile options: {}", e)))?
        };
        self.hydrate(profile, options)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Full pipeline: ordered matches, ranked summaries, stats
    #[wasm_bindgen(js_name = scan)]
    pub fn js_scan(&self, text: &str, options: JsValue) -> JsValue {
        to_js(&self.detect(text, &scan_options(options)))
    }

    /// Raw collector output (grouped by role, not merged)
    #[wasm_bindgen(js_name = collect)]
    pub fn js_collect(&self, text: &str, options: JsValue) -> JsValue {
        to_js(&self.collect(text, &scan_options(options)))
    }

    #[wasm_bindgen(js_name = isVetoed)]
    pub fn js_is_vetoed(&self, text: &str) -> bool {
        self.is_vetoed(text)
    }

    #[wasm_bindgen(js_name = quoteRanges)]
    pub fn js_quote_ranges(&self, text: &str) -> JsValue {
        to_js(&quote_ranges(text))
    }

    /// Names of the compiled roles, e.g. `["speakerRegex", "nameRegex"]`
    #[wasm_bindgen(js_name = roles)]
    pub fn js_roles(&self) -> js_sys::Array {
        self.roles()
            .iter()
            .map(|role| JsValue::from_str(role.as_str()))
            .collect()
    }

    #[wasm_bindgen(js_name = isHydrated)]
    pub fn is_hydrated(&self) -> bool {
        self.set.is_some()
    }

    /// Merge any mix of `matches`, `scoreDetails` and `events`
    #[wasm_bindgen(js_name = mergeReports)]
    pub fn js_merge_reports(report: JsValue) -> Result<JsValue, JsValue> {
        let report: DetectionReport = serde_wasm_bindgen::from_value(report)
            .map_err(|e| JsValue::from_str(&format!("Invalid report: {}", e)))?;
        Ok(to_js(&merge(&report)))
    }

    #[wasm_bindgen(js_name = summarize)]
    pub fn js_summarize(matches: JsValue) -> Result<JsValue, JsValue> {
        let report = DetectionReport {
            matches: Some(
                serde_wasm_bindgen::from_value(matches)
                    .map_err(|e| JsValue::from_str(&format!("Invalid matches: {}", e)))?,
            ),
            ..Default::default()
        };
        Ok(to_js(&summarize(&report.records())))
    }
}

// =============================================================================
// Native API
// =============================================================================

impl DetectionCortex {
    pub fn hydrate(&mut self, profile: Profile, options: CompileOptions) -> Result<(), CompileError> {
        let set = compile(&profile, &options)?;
        console::log(&format!(
            "[DetectionCortex] Hydrated: {} slots, {} legacy patterns, roles: {:?}",
            profile.pattern_slots.len(),
            profile.patterns.len(),
            set.roles().iter().map(MatcherRole::as_str).collect::<Vec<_>>()
        ));
        self.profile = profile;
        self.options = options;
        self.set = Some(set);
        Ok(())
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn compile_options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn matcher_set(&self) -> Option<&CompiledMatcherSet> {
        self.set.as_ref()
    }

    /// Empty detection until hydrated
    pub fn detect(&self, text: &str, options: &ScanOptions) -> Detection {
        match &self.set {
            Some(set) => detect(text, &self.profile, set, options),
            None => Detection::default(),
        }
    }

    pub fn collect(&self, text: &str, options: &ScanOptions) -> Vec<MatchRecord> {
        match &self.set {
            Some(set) => super::collector::collect(text, &self.profile, set, options),
            None => Vec::new(),
        }
    }

    pub fn is_vetoed(&self, text: &str) -> bool {
        self.set.as_ref().map(|s| s.is_vetoed(text)).unwrap_or(false)
    }

    pub fn quote_ranges(&self, text: &str) -> Vec<QuoteRange> {
        quote_ranges(text)
    }

    pub fn roles(&self) -> Vec<MatcherRole> {
        self.set.as_ref().map(|s| s.roles()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::record::MatchKind;

    fn hydrated() -> DetectionCortex {
        let mut cortex = DetectionCortex::new();
        let profile = Profile::new()
            .with_patterns(&["Alice", "Bob"])
            .with_attribution_verbs(&["said"])
            .with_veto(&["OOC"]);
        cortex.hydrate(profile, CompileOptions::default()).unwrap();
        cortex
    }

    #[test]
    fn test_unhydrated_cortex_finds_nothing() {
        let cortex = DetectionCortex::new();
        assert!(!cortex.is_hydrated());
        assert!(cortex.detect("Alice said hi", &ScanOptions::new()).is_empty());
        assert!(cortex.collect("Alice said hi", &ScanOptions::new()).is_empty());
        assert!(!cortex.is_vetoed("OOC"));
        assert!(cortex.roles().is_empty());
    }

    #[test]
    fn test_hydrate_then_detect() {
        let cortex = hydrated();
        assert!(cortex.is_hydrated());

        let detection = cortex.detect("Alice said hi.", &ScanOptions::new());
        assert_eq!(detection.primary(), Some("Alice"));
        assert_eq!(detection.matches[0].match_kind, MatchKind::Attribution);
        assert!(cortex.roles().contains(&MatcherRole::Veto));
        assert!(cortex.is_vetoed("(ooc) back later"));
    }

    #[test]
    fn test_failed_hydrate_keeps_previous_profile() {
        let mut cortex = hydrated();
        let bad = CompileOptions {
            word_class: r"\p{Bogus}".to_string(),
            ..CompileOptions::default()
        };
        assert!(cortex.hydrate(Profile::new().with_patterns(&["Carol"]), bad).is_err());
        assert_eq!(cortex.profile().patterns, vec!["Alice", "Bob"]);
        assert!(cortex.is_hydrated());
    }
}
