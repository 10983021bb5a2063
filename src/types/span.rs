use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Half-open interval of character (not byte) offsets into a revision's text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Span start ({start}) must not exceed its end ({end})");

        Self { start, end }
    }

    /// Zero-width span marking a position between two characters.
    #[must_use]
    pub fn empty_at(position: usize) -> Self { Self::new(position, position) }

    #[must_use]
    pub fn len(&self) -> usize { self.end - self.start }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.start == self.end }

    /// Returns the span with its start moved forward by `offset` characters.
    /// Zero-width spans move as a whole.
    #[must_use]
    pub fn skip(&self, offset: usize) -> Self {
        if self.is_empty() {
            return *self;
        }

        debug_assert!(offset <= self.len(), "Cannot skip past the end of a span");
        Self::new(self.start + offset, self.end)
    }

    /// Returns the first `length` characters of the span. Zero-width spans
    /// stay zero-width.
    #[must_use]
    pub fn take(&self, length: usize) -> Self {
        if self.is_empty() {
            return *self;
        }

        debug_assert!(length <= self.len(), "Cannot take more than the span holds");
        Self::new(self.start, self.start + length)
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
