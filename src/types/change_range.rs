use std::fmt::Display;

use chrono::NaiveDateTime;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    types::{provenance::Provenance, range_kind::RangeKind, span::Span},
    utils::split_at_char::split_at_char,
};

/// A typed span describing a fragment that is equal in, inserted into or
/// deleted from a revision, together with its provenance.
///
/// `left` is the span in the older coordinate space and `right` the span in the
/// newer one. Inserted fragments are zero-width on the left, deleted fragments
/// are zero-width on the right. The fragment itself is borrowed from the
/// revision text it was found in.
///
/// `last_visible_version` is the newest revision known to still contain the
/// fragment. It starts out as the revision that produced the range and is
/// advanced while merging later revisions.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRange<'a> {
    kind: RangeKind,
    left: Span,
    right: Span,
    fragment: &'a str,
    #[cfg_attr(feature = "serde", serde(flatten))]
    provenance: Provenance<'a>,
    last_visible_version: u32,
}

impl<'a> ChangeRange<'a> {
    #[must_use]
    pub fn equal(left: Span, right: Span, fragment: &'a str, provenance: Provenance<'a>) -> Self {
        debug_assert_eq!(
            left.len(),
            right.len(),
            "Both sides of an equal range must have the same length"
        );

        Self::new(RangeKind::Equal, left, right, fragment, provenance)
    }

    #[must_use]
    pub fn insert(left: Span, right: Span, fragment: &'a str, provenance: Provenance<'a>) -> Self {
        debug_assert!(left.is_empty(), "Inserted ranges are zero-width on the left");
        debug_assert!(!right.is_empty(), "Inserted ranges must not be empty");

        Self::new(RangeKind::Insert, left, right, fragment, provenance)
    }

    #[must_use]
    pub fn delete(left: Span, right: Span, fragment: &'a str, provenance: Provenance<'a>) -> Self {
        debug_assert!(right.is_empty(), "Deleted ranges are zero-width on the right");
        debug_assert!(!left.is_empty(), "Deleted ranges must not be empty");

        Self::new(RangeKind::Delete, left, right, fragment, provenance)
    }

    fn new(
        kind: RangeKind,
        left: Span,
        right: Span,
        fragment: &'a str,
        provenance: Provenance<'a>,
    ) -> Self {
        let range = Self {
            kind,
            left,
            right,
            fragment,
            provenance,
            last_visible_version: provenance.version_number,
        };

        debug_assert_eq!(
            range.fragment.chars().count(),
            range.len(),
            "Fragment `{fragment}` does not fit the {kind} range {left} / {right}"
        );

        range
    }

    #[must_use]
    pub fn with_provenance(mut self, provenance: Provenance<'a>) -> Self {
        self.provenance = provenance;
        self
    }

    #[must_use]
    pub fn with_last_visible_version(mut self, version_number: u32) -> Self {
        self.last_visible_version = version_number;
        self
    }

    /// Splits the range after its first `length` characters. Both sides keep
    /// the kind and provenance; zero-width spans stay where they are.
    #[must_use]
    pub fn split_at(&self, length: usize) -> (Self, Self) {
        debug_assert!(
            0 < length && length < self.len(),
            "Splitting at {length} would leave an empty range"
        );

        let (head_fragment, tail_fragment) = split_at_char(self.fragment, length);

        let head = Self {
            left: self.left.take(length),
            right: self.right.take(length),
            fragment: head_fragment,
            ..self.clone()
        };
        let tail = Self {
            left: self.left.skip(length),
            right: self.right.skip(length),
            fragment: tail_fragment,
            ..self.clone()
        };

        (head, tail)
    }

    /// Number of characters in the fragment.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.kind {
            RangeKind::Insert => self.right.len(),
            RangeKind::Equal | RangeKind::Delete => self.left.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    #[must_use]
    pub fn kind(&self) -> RangeKind { self.kind }

    #[must_use]
    pub fn left(&self) -> Span { self.left }

    #[must_use]
    pub fn right(&self) -> Span { self.right }

    #[must_use]
    pub fn fragment(&self) -> &'a str { self.fragment }

    #[must_use]
    pub fn provenance(&self) -> Provenance<'a> { self.provenance }

    #[must_use]
    pub fn author(&self) -> &'a str { self.provenance.author }

    #[must_use]
    pub fn created_at(&self) -> NaiveDateTime { self.provenance.created_at }

    #[must_use]
    pub fn version_number(&self) -> u32 { self.provenance.version_number }

    #[must_use]
    pub fn last_visible_version(&self) -> u32 { self.last_visible_version }
}

impl Display for ChangeRange<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} v{}..v{} {:?}",
            self.kind.symbol(),
            self.provenance.version_number,
            self.last_visible_version,
            self.fragment
        )
    }
}
