//! Detection Collector - runs compiled matchers over a text
//!
//! Each enabled role scans the whole text. A match is dropped when it starts
//! strictly inside a quoted span, unless the role may search inside quotes
//! (vocatives always; attribution/action only with `scan_dialogue_actions`;
//! everything with `search_inside_quotes`).
//!
//! The regex engine has no lookbehind, so "no word char right before the
//! match" is checked after the fact. A rejected candidate restarts the search
//! one char later, which keeps overlapping candidates reachable.

use regex::{Captures, Match, Regex};
use std::borrow::Cow;

use super::compiler::{CompiledMatcherSet, MatcherRole};
use super::config::{Profile, ScanOptions};
use super::offsets::{char_before, next_char_boundary, OffsetMap};
use super::quotes::{is_index_inside_quotes, quote_ranges, QuoteRange};
use super::record::{MatchKind, MatchRecord};

/// How one role participates in a scan
#[derive(Debug, Clone, Copy)]
struct RolePlan {
    role: MatcherRole,
    kind: MatchKind,
    /// Matches may start inside quoted spans
    inside_quotes: bool,
    /// Reject matches preceded by a word char
    leading_guard: bool,
}

fn role_plans(options: &ScanOptions) -> [RolePlan; 7] {
    let dialogue = options.scan_dialogue_actions;
    [
        RolePlan { role: MatcherRole::Speaker, kind: MatchKind::Speaker, inside_quotes: false, leading_guard: false },
        RolePlan { role: MatcherRole::Attribution, kind: MatchKind::Attribution, inside_quotes: dialogue, leading_guard: true },
        RolePlan { role: MatcherRole::Action, kind: MatchKind::Action, inside_quotes: dialogue, leading_guard: true },
        RolePlan { role: MatcherRole::Pronoun, kind: MatchKind::Pronoun, inside_quotes: false, leading_guard: true },
        RolePlan { role: MatcherRole::Vocative, kind: MatchKind::Vocative, inside_quotes: true, leading_guard: false },
        RolePlan { role: MatcherRole::Possessive, kind: MatchKind::Possessive, inside_quotes: false, leading_guard: true },
        RolePlan { role: MatcherRole::Name, kind: MatchKind::Name, inside_quotes: false, leading_guard: true },
    ]
}

/// A raw hit: byte offset of the match and the resolved name
#[derive(Debug, Clone, PartialEq)]
struct Hit {
    start: usize,
    name: String,
}

/// Run every enabled matcher over `text` and return the tagged records.
///
/// Records come out grouped by role, each group in text order. Use
/// `report::merge` for the global ordering.
pub fn collect(
    text: &str,
    profile: &Profile,
    set: &CompiledMatcherSet,
    options: &ScanOptions,
) -> Vec<MatchRecord> {
    if text.is_empty() || set.is_empty() {
        return Vec::new();
    }

    let ranges: Cow<'_, [QuoteRange]> = match &options.quote_ranges {
        Some(ranges) => Cow::Borrowed(ranges.as_slice()),
        None => Cow::Owned(quote_ranges(text)),
    };
    let offsets = OffsetMap::new(text);
    let names_possible = set.may_contain_names(text);
    let subject = options.subject();

    let mut records = Vec::new();

    for plan in role_plans(options) {
        if !profile.allows(plan.kind) {
            continue;
        }
        let regex = match set.get(plan.role) {
            Some(re) => re,
            None => continue,
        };
        if plan.kind == MatchKind::Pronoun {
            // The pronoun only proves the current subject keeps acting
            if subject.is_none() {
                continue;
            }
        } else if !names_possible {
            continue;
        }

        for hit in scan(regex, text, set, plan) {
            let index = offsets.char_offset(hit.start);
            let quotes_allowed = plan.inside_quotes || options.search_inside_quotes;
            if !quotes_allowed && is_index_inside_quotes(index, &ranges) {
                continue;
            }
            let name = match (plan.kind, subject) {
                (MatchKind::Pronoun, Some(subject)) => subject.to_string(),
                _ => hit.name,
            };
            let priority = options.priority_weights.get(plan.kind);
            if let Some(record) = MatchRecord::new(&name, plan.kind, Some(index), priority) {
                records.push(record);
            }
        }
    }

    records
}

/// Global scan with the leading-boundary check
fn scan(regex: &Regex, text: &str, set: &CompiledMatcherSet, plan: RolePlan) -> Vec<Hit> {
    let mut hits = Vec::new();
    let mut at = 0;

    while at <= text.len() {
        let caps = match regex.captures_at(text, at) {
            Some(caps) => caps,
            None => break,
        };
        let whole = match caps.get(0) {
            Some(m) => m,
            None => break,
        };

        if plan.leading_guard {
            if let Some(prev) = char_before(text, whole.start()) {
                if set.is_word_char(prev) {
                    at = next_char_boundary(text, whole.start());
                    continue;
                }
            }
        }

        let captured = first_capture(&caps);
        let mut name = captured.map(|m| m.as_str()).unwrap_or_default();
        if plan.kind == MatchKind::Name {
            name = strip_name_honorific(name);
        }
        hits.push(Hit {
            start: whole.start(),
            name: name.trim().to_string(),
        });

        // A vocative's terminal can open the next one (`Bob,Alice!`)
        let end = match (plan.kind, captured) {
            (MatchKind::Vocative, Some(m)) => m.end(),
            _ => whole.end(),
        };
        at = if end > whole.start() {
            end
        } else {
            next_char_boundary(text, whole.end())
        };
    }

    hits
}

/// First non-empty capture group
fn first_capture<'t>(caps: &Captures<'t>) -> Option<Match<'t>> {
    caps.iter()
        .skip(1)
        .flatten()
        .find(|m| !m.as_str().trim().is_empty())
}

/// Drop a trailing `-sama` / `-san`, case-insensitively
fn strip_name_honorific(name: &str) -> &str {
    for suffix in ["-sama", "-san"] {
        let cut = name.len().saturating_sub(suffix.len());
        if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(suffix) && cut > 0 {
            return &name[..cut];
        }
    }
    name
}
