//! Byte/char offset conversion
//!
//! The regex engine reports byte offsets. Every position this crate hands
//! out (quote ranges, match indices) is a char offset.

/// Precomputed char boundaries of a text
#[derive(Debug, Clone)]
pub struct OffsetMap {
    /// Byte offset of each char, followed by `text.len()`
    boundaries: Vec<usize>,
}

impl OffsetMap {
    pub fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self { boundaries }
    }

    /// Char offset of the char containing `byte`
    pub fn char_offset(&self, byte: usize) -> usize {
        match self.boundaries.binary_search(&byte) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        }
    }

    /// Byte offset of char `idx`; past-the-end indices clamp to the text length
    pub fn byte_offset(&self, idx: usize) -> usize {
        let last = self.boundaries.len() - 1;
        self.boundaries[idx.min(last)]
    }

    /// Number of chars in the text
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }
}

/// Byte offset just past the char starting at `byte`.
/// At or beyond the end this returns `text.len() + 1` so scan loops terminate.
pub fn next_char_boundary(text: &str, byte: usize) -> usize {
    match text.get(byte..).and_then(|rest| rest.chars().next()) {
        Some(ch) => byte + ch.len_utf8(),
        None => text.len() + 1,
    }
}

/// The char immediately before `byte`, if any
pub fn char_before(text: &str, byte: usize) -> Option<char> {
    text.get(..byte).and_then(|head| head.chars().next_back())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_are_identity() {
        let map = OffsetMap::new("hello");
        assert_eq!(map.char_offset(0), 0);
        assert_eq!(map.char_offset(4), 4);
        assert_eq!(map.char_offset(5), 5);
        assert_eq!(map.char_len(), 5);
    }

    #[test]
    fn test_multibyte_offsets() {
        // “ is 3 bytes
        let text = "“Hi” Bob";
        let map = OffsetMap::new(text);
        let bob = text.find("Bob").unwrap();
        assert_eq!(bob, 9);
        assert_eq!(map.char_offset(bob), 5);
        assert_eq!(map.byte_offset(5), bob);
        assert_eq!(map.byte_offset(100), text.len());
    }

    #[test]
    fn test_char_helpers() {
        let text = "a“b";
        assert_eq!(next_char_boundary(text, 1), 4);
        assert_eq!(next_char_boundary(text, text.len()), text.len() + 1);
        assert_eq!(char_before(text, 4), Some('“'));
        assert_eq!(char_before(text, 0), None);
    }
}
