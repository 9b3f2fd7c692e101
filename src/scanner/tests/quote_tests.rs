//! Tests for the quote-range scanner
//!
//! Apostrophe disambiguation, nesting across styles, unmatched glyphs.

use crate::scanner::quotes::{is_index_inside_quotes, quote_ranges, QuoteRange};

fn ranges(text: &str) -> Vec<(usize, usize)> {
    quote_ranges(text).into_iter().map(|r| (r.start, r.end)).collect()
}

// ============================================================================
// Apostrophes
// ============================================================================

#[test]
fn test_possessive_apostrophes_are_not_quotes() {
    assert!(quote_ranges("It's Bob's dog").is_empty());
    assert!(quote_ranges("It’s Bob’s dog").is_empty());
}

#[test]
fn test_single_quotes_still_quote() {
    assert_eq!(ranges("She said 'no' twice"), vec![(9, 12)]);
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn test_nested_smart_quotes() {
    assert_eq!(ranges("“She said ‘hi’ loudly”"), vec![(0, 21), (10, 13)]);
}

#[test]
fn test_symmetric_inside_asymmetric() {
    assert_eq!(ranges("“He said \"no\" twice”"), vec![(0, 19), (9, 12)]);
}

#[test]
fn test_different_symmetric_glyphs_nest() {
    assert_eq!(ranges("\"a 'b' c\""), vec![(0, 8), (3, 5)]);
}

#[test]
fn test_shared_close_glyph() {
    // „ and “ both close with ”
    assert_eq!(ranges("„Ja”"), vec![(0, 3)]);
    assert_eq!(ranges("“a „b” c”"), vec![(0, 8), (3, 5)]);
}

#[test]
fn test_close_skips_unmatched_intermediate_open() {
    // « never closes; the ” still pairs with the “ beneath it
    assert_eq!(ranges("“x «y”"), vec![(0, 5)]);
}

#[test]
fn test_cjk_and_guillemets() {
    assert_eq!(ranges("「こんにちは」"), vec![(0, 6)]);
    assert_eq!(ranges("『a「b」c』"), vec![(0, 6), (2, 4)]);
    assert_eq!(ranges("«Bonjour»"), vec![(0, 8)]);
}

// ============================================================================
// Unmatched glyphs
// ============================================================================

#[test]
fn test_unmatched_open_is_discarded() {
    assert!(quote_ranges("He said \"hi").is_empty());
    assert!(quote_ranges("「never closed").is_empty());
}

#[test]
fn test_stray_close_is_ignored() {
    assert!(quote_ranges("oops” fine").is_empty());
    assert!(quote_ranges("」").is_empty());
}

// ============================================================================
// Ordering & membership
// ============================================================================

#[test]
fn test_sorted_with_unique_starts_and_idempotent() {
    let text = "\"one\" then “two ‘three’” and 「four」";
    let first = quote_ranges(text);
    let second = quote_ranges(text);
    assert_eq!(first, second);

    for pair in first.windows(2) {
        assert!(pair[0].start < pair[1].start, "ranges must be strictly ordered: {:?}", first);
    }
    assert_eq!(first.len(), 4);
}

#[test]
fn test_index_membership_over_multiple_ranges() {
    let ranges = vec![QuoteRange::new(0, 5), QuoteRange::new(10, 20), QuoteRange::new(12, 15)];
    assert!(is_index_inside_quotes(3, &ranges));
    assert!(!is_index_inside_quotes(7, &ranges));
    assert!(is_index_inside_quotes(13, &ranges));
    assert!(!is_index_inside_quotes(20, &ranges));
    assert!(!is_index_inside_quotes(3, &[]));
}

#[test]
fn test_index_membership_ignores_range_order() {
    let ranges = vec![QuoteRange::new(10, 20), QuoteRange::new(0, 4)];
    assert!(is_index_inside_quotes(1, &ranges));
    assert!(is_index_inside_quotes(15, &ranges));
    assert!(!is_index_inside_quotes(6, &ranges));
}
