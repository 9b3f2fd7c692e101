//! Pattern entries - parsing configured name strings into regex sources
//!
//! A configured string is either an explicit regex written `/body/flags`
//! (flags drawn from `gimsuy`) or a literal that gets escaped. Explicit
//! regexes the engine cannot compile fall back to literals, so every entry's
//! `body` is always valid regex source.

use regex::Regex;
use std::collections::HashSet;

use super::config::Profile;
use crate::console;

// =============================================================================
// Flags
// =============================================================================

/// The `gimsuy` flag set carried by `/body/flags` patterns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSet {
    pub global: bool,
    pub ignore_case: bool,
    pub multi_line: bool,
    pub dot_all: bool,
    pub unicode: bool,
    pub sticky: bool,
}

impl FlagSet {
    /// Parse a flag string; any letter outside `gimsuy` rejects the whole set
    pub fn parse(raw: &str) -> Option<FlagSet> {
        let mut flags = FlagSet::default();
        for ch in raw.chars() {
            match ch {
                'g' => flags.global = true,
                'i' => flags.ignore_case = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_all = true,
                'u' => flags.unicode = true,
                'y' => flags.sticky = true,
                _ => return None,
            }
        }
        Some(flags)
    }

    /// Keep only the recognised letters of `raw`
    pub fn parse_lenient(raw: &str) -> FlagSet {
        let known: String = raw.chars().filter(|c| "gimsuy".contains(*c)).collect();
        FlagSet::parse(&known).unwrap_or_default()
    }

    pub fn union(self, other: FlagSet) -> FlagSet {
        FlagSet {
            global: self.global || other.global,
            ignore_case: self.ignore_case || other.ignore_case,
            multi_line: self.multi_line || other.multi_line,
            dot_all: self.dot_all || other.dot_all,
            unicode: self.unicode || other.unicode,
            sticky: self.sticky || other.sticky,
        }
    }

    /// Canonical `gimsuy`-ordered rendering
    pub fn as_string(&self) -> String {
        [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.sticky, 'y'),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, c)| *c)
        .collect()
    }
}

// =============================================================================
// Pattern Entry
// =============================================================================

/// One configured pattern, ready to splice into an alternation
#[derive(Debug, Clone, PartialEq)]
pub struct PatternEntry {
    /// The trimmed configured string
    pub source: String,
    /// Regex source; escaped for literals
    pub body: String,
    pub flags: FlagSet,
    pub is_regex: bool,
}

impl PatternEntry {
    fn literal(source: &str) -> Self {
        Self {
            source: source.to_string(),
            body: regex::escape(source),
            flags: FlagSet::default(),
            is_regex: false,
        }
    }
}

/// Split `/body/flags`, if `raw` has that exact shape
fn split_regex_literal(raw: &str) -> Option<(&str, FlagSet)> {
    let rest = raw.strip_prefix('/')?;
    let close = rest.rfind('/')?;
    let body = &rest[..close];
    if body.is_empty() {
        return None;
    }
    let flags = FlagSet::parse(&rest[close + 1..])?;
    Some((body, flags))
}

/// Parse one configured string. Blank strings yield `None`.
pub fn parse_pattern(raw: &str) -> Option<PatternEntry> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match split_regex_literal(trimmed) {
        Some((body, flags)) => {
            if Regex::new(body).is_err() {
                console::warn(&format!(
                    "[Pattern] '{}' is not a supported regex, matching it literally",
                    trimmed
                ));
                return Some(PatternEntry::literal(trimmed));
            }
            Some(PatternEntry {
                source: trimmed.to_string(),
                body: body.to_string(),
                flags,
                is_regex: true,
            })
        }
        None => Some(PatternEntry::literal(trimmed)),
    }
}

/// Parse a list, skipping blanks
pub fn parse_patterns<S: AsRef<str>>(raw: &[S]) -> Vec<PatternEntry> {
    parse_patterns_alongside(raw, &[])
}

/// Parse a list that will share one regex with `context`.
///
/// Entries that compile alone can still clash once joined (a repeated group
/// name, say). A regex entry that breaks the join is matched literally.
pub fn parse_patterns_alongside<S: AsRef<str>>(raw: &[S], context: &[PatternEntry]) -> Vec<PatternEntry> {
    let entries: Vec<PatternEntry> = raw.iter().filter_map(|p| parse_pattern(p.as_ref())).collect();
    if !entries.iter().any(|e| e.is_regex) || joins_cleanly(context, &entries) {
        return entries;
    }

    let mut accepted: Vec<PatternEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.is_regex {
            accepted.push(entry);
            if joins_cleanly(context, &accepted) {
                continue;
            }
            if let Some(rejected) = accepted.pop() {
                console::warn(&format!(
                    "[Pattern] '{}' conflicts with earlier patterns, matching it literally",
                    rejected.source
                ));
                accepted.push(PatternEntry::literal(&rejected.source));
            }
        } else {
            accepted.push(entry);
        }
    }
    accepted
}

/// Whether `context` and `entries` compile as one regex
fn joins_cleanly(context: &[PatternEntry], entries: &[PatternEntry]) -> bool {
    let joined = if context.is_empty() {
        alternation(entries)
    } else {
        format!("{}{}", alternation(context), alternation(entries))
    };
    Regex::new(&joined).is_ok()
}

/// The effective name patterns of a profile.
///
/// Slot names and aliases come first, then the legacy `patterns` list.
/// Duplicates (case-sensitive, after trimming) keep their first position;
/// anything listed in `ignore_patterns` (case-insensitive) is dropped.
pub fn effective_patterns(profile: &Profile) -> Vec<String> {
    let ignored: HashSet<String> = profile
        .ignore_patterns
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut result: Vec<String> = Vec::new();

    let slot_strings = profile.pattern_slots.iter().flat_map(|slot| slot.pattern_strings());
    let legacy = profile.patterns.iter().map(String::as_str);

    for raw in slot_strings.chain(legacy) {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !seen.insert(trimmed) {
            continue;
        }
        if ignored.contains(&trimmed.to_lowercase()) {
            continue;
        }
        result.push(trimmed.to_string());
    }

    result
}

/// Non-capturing alternation of entry bodies: `(?:(?:a)|(?:b))`
pub fn alternation(entries: &[PatternEntry]) -> String {
    let parts: Vec<String> = entries.iter().map(|e| format!("(?:{})", e.body)).collect();
    format!("(?:{})", parts.join("|"))
}

/// Union of every entry's declared flags
pub fn declared_flags(entries: &[PatternEntry]) -> FlagSet {
    entries
        .iter()
        .fold(FlagSet::default(), |acc, e| acc.union(e.flags))
}
