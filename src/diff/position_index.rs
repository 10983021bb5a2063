use std::collections::HashMap;

use crate::types::span::Span;

/// Character-position index of a text: for every distinct character, the
/// ascending list of offsets it occurs at.
///
/// The index also keeps the text split into characters so that it can serve
/// as the text's random-access view during alignment. It's built once per
/// revision and can be reused for both comparisons that revision takes part
/// in along a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionIndex<'a> {
    text: &'a str,
    chars: Vec<char>,
    byte_offsets: Vec<usize>,
    positions: HashMap<char, Vec<usize>>,
}

impl<'a> PositionIndex<'a> {
    #[must_use]
    pub fn build(text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut byte_offsets = Vec::with_capacity(text.len() + 1);
        let mut positions: HashMap<char, Vec<usize>> = HashMap::new();

        for (position, (byte_offset, char)) in text.char_indices().enumerate() {
            chars.push(char);
            byte_offsets.push(byte_offset);
            positions.entry(char).or_default().push(position);
        }
        byte_offsets.push(text.len());

        Self {
            text,
            chars,
            byte_offsets,
            positions,
        }
    }

    /// Ascending offsets of `char`, empty if the text doesn't contain it.
    #[must_use]
    pub fn positions(&self, char: char) -> &[usize] {
        self.positions.get(&char).map_or(&[], Vec::as_slice)
    }

    /// Offsets of `char` at or after `from`.
    #[must_use]
    pub fn positions_from(&self, char: char, from: usize) -> &[usize] {
        let positions = self.positions(char);
        let first = positions.partition_point(|&position| position < from);

        &positions[first..]
    }

    #[must_use]
    pub fn chars(&self) -> &[char] { &self.chars }

    #[must_use]
    pub fn text(&self) -> &'a str { self.text }

    /// Length of the text in characters.
    #[must_use]
    pub fn len(&self) -> usize { self.chars.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.chars.is_empty() }

    /// The part of the text covered by `span`.
    #[must_use]
    pub fn slice(&self, span: Span) -> &'a str {
        &self.text[self.byte_offsets[span.start]..self.byte_offsets[span.end]]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_positions() {
        let index = PositionIndex::build("hello world");

        assert_eq!(index.positions('l'), &[2, 3, 9]);
        assert_eq!(index.positions('o'), &[4, 7]);
        assert_eq!(index.positions('h'), &[0]);
        assert!(index.positions('z').is_empty());
        assert_eq!(index.len(), 11);
    }

    #[test]
    fn test_positions_from() {
        let index = PositionIndex::build("abcabcabc");

        assert_eq!(index.positions_from('a', 0), &[0, 3, 6]);
        assert_eq!(index.positions_from('a', 1), &[3, 6]);
        assert_eq!(index.positions_from('a', 6), &[6]);
        assert!(index.positions_from('a', 7).is_empty());
    }

    #[test]
    fn test_empty_text() {
        let index = PositionIndex::build("");

        assert!(index.is_empty());
        assert!(index.positions('a').is_empty());
        assert_eq!(index.slice(Span::empty_at(0)), "");
    }

    #[test]
    fn test_unicode_offsets_are_characters() {
        let index = PositionIndex::build("árvíztűrő");

        assert_eq!(index.positions('r'), &[1, 7]);
        assert_eq!(index.len(), 9);
        assert_eq!(index.slice(Span::new(5, 9)), "tűrő");
    }
}
