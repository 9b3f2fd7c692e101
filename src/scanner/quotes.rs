//! Quote-Range Scanner
//!
//! Finds balanced quoted spans with a bracket-matching stack over a table of
//! quote styles. Symmetric styles (`"`, `'`) toggle; asymmetric styles
//! (`“…”`, `「…」`, `«…»`, …) close against the nearest open context that
//! declared the closing glyph, which may sit below the top of the stack.
//!
//! Offsets are char offsets. A position is *inside* a range only when it lies
//! strictly between the two quote glyphs.

use serde::{Deserialize, Serialize};

// =============================================================================
// Quote Styles
// =============================================================================

/// One quote-pair style. Symmetric styles use the same glyph on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteStyle {
    pub open: char,
    pub close: char,
}

impl QuoteStyle {
    const fn pair(open: char, close: char) -> Self {
        Self { open, close }
    }

    pub fn is_symmetric(&self) -> bool {
        self.open == self.close
    }
}

/// Every recognised quote pair. Several opens may share one close glyph.
pub const QUOTE_STYLES: &[QuoteStyle] = &[
    // Symmetric
    QuoteStyle::pair('"', '"'),
    QuoteStyle::pair('\'', '\''),
    QuoteStyle::pair('＂', '＂'),
    // Smart quotes (English, German low-9, reversed-9)
    QuoteStyle::pair('“', '”'),
    QuoteStyle::pair('„', '”'),
    QuoteStyle::pair('‟', '”'),
    QuoteStyle::pair('‘', '’'),
    QuoteStyle::pair('‚', '’'),
    QuoteStyle::pair('‛', '’'),
    // Guillemets
    QuoteStyle::pair('«', '»'),
    QuoteStyle::pair('‹', '›'),
    // CJK
    QuoteStyle::pair('「', '」'),
    QuoteStyle::pair('『', '』'),
    QuoteStyle::pair('｢', '｣'),
    QuoteStyle::pair('《', '》'),
    QuoteStyle::pair('〈', '〉'),
    QuoteStyle::pair('【', '】'),
    QuoteStyle::pair('〝', '〞'),
    QuoteStyle::pair('﹁', '﹂'),
    QuoteStyle::pair('﹃', '﹄'),
];

/// Word characters for apostrophe disambiguation and boundary checks.
/// Mirrors the default compiler word class `\p{L}\p{M}\p{N}_`.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Glyphs that double as apostrophes (`It's`, `It’s`)
fn is_apostrophe_like(ch: char) -> bool {
    matches!(ch, '\'' | '’')
}

fn symmetric_style(ch: char) -> Option<&'static QuoteStyle> {
    QUOTE_STYLES.iter().find(|s| s.is_symmetric() && s.open == ch)
}

fn is_asymmetric_close(ch: char) -> bool {
    QUOTE_STYLES.iter().any(|s| !s.is_symmetric() && s.close == ch)
}

fn asymmetric_style(ch: char) -> Option<&'static QuoteStyle> {
    QUOTE_STYLES.iter().find(|s| !s.is_symmetric() && s.open == ch)
}

// =============================================================================
// Quote Ranges
// =============================================================================

/// A balanced quoted span: `start` is the opening glyph, `end` the closing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRange {
    pub start: usize,
    pub end: usize,
}

impl QuoteRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Strict interior test - the quote glyphs themselves are outside
    pub fn contains(&self, index: usize) -> bool {
        self.start < index && index < self.end
    }
}

/// An open quote waiting for its close glyph
#[derive(Debug, Clone, Copy)]
struct OpenQuote {
    style: &'static QuoteStyle,
    start: usize,
}

/// Scan `text` for balanced quote spans, sorted by start offset.
///
/// Unmatched opens at end of text produce nothing. Nested spans are kept.
pub fn quote_ranges(text: &str) -> Vec<QuoteRange> {
    let chars: Vec<char> = text.chars().collect();
    let mut stack: Vec<OpenQuote> = Vec::new();
    let mut ranges: Vec<QuoteRange> = Vec::new();

    for (idx, &ch) in chars.iter().enumerate() {
        // `Bob's`, `it’s`: an apostrophe between two word chars is not a quote
        if is_apostrophe_like(ch) && flanked_by_word_chars(&chars, idx) {
            continue;
        }

        if let Some(style) = symmetric_style(ch) {
            let closes_top = stack
                .last()
                .map(|top| top.style.is_symmetric() && top.style.open == ch)
                .unwrap_or(false);

            if closes_top {
                if let Some(open) = stack.pop() {
                    ranges.push(QuoteRange::new(open.start, idx));
                }
            } else {
                stack.push(OpenQuote { style, start: idx });
            }
            continue;
        }

        if is_asymmetric_close(ch) {
            // Nearest open context (top-down) that declared this close glyph
            let found = stack
                .iter()
                .rposition(|open| !open.style.is_symmetric() && open.style.close == ch);
            if let Some(pos) = found {
                let open = stack.remove(pos);
                ranges.push(QuoteRange::new(open.start, idx));
            }
            continue;
        }

        if let Some(style) = asymmetric_style(ch) {
            stack.push(OpenQuote { style, start: idx });
        }
    }

    ranges.sort_by_key(|r| r.start);
    ranges
}

fn flanked_by_word_chars(chars: &[char], idx: usize) -> bool {
    let before = idx.checked_sub(1).and_then(|i| chars.get(i)).copied();
    let after = chars.get(idx + 1).copied();
    matches!((before, after), (Some(b), Some(a)) if is_word_char(b) && is_word_char(a))
}

/// True when `index` falls strictly inside any of `ranges`, in any order
pub fn is_index_inside_quotes(index: usize, ranges: &[QuoteRange]) -> bool {
    ranges.iter().any(|r| r.contains(index))
}
