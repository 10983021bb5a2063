use log::trace;

use crate::{diff::position_index::PositionIndex, types::span::Span, utils::side::Side};

/// A run of characters that is equal in both texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedRange {
    pub left: Span,
    pub right: Span,
}

impl MatchedRange {
    #[must_use]
    pub fn len(&self) -> usize { self.left.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.left.is_empty() }
}

/// Finds the next run of characters two texts have in common, starting from
/// a cursor in each of them.
///
/// Instead of a full quadratic alignment, the character under one cursor is
/// looked up in the other text's `PositionIndex` and the candidates are
/// extended into equal runs. A run is only accepted if it is longer than a
/// threshold: the smaller of `min_match_length` and `min_match_percent` of the
/// remaining text, but at least 1. This keeps coincidental short matches
/// from fragmenting the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeAligner {
    min_match_length: usize,
    min_match_percent: f64,
}

impl Default for RangeAligner {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MIN_MATCH_LENGTH,
            Self::DEFAULT_MIN_MATCH_PERCENT,
        )
    }
}

impl RangeAligner {
    pub const DEFAULT_MIN_MATCH_LENGTH: usize = 30;
    pub const DEFAULT_MIN_MATCH_PERCENT: f64 = 0.2;

    #[must_use]
    pub fn new(min_match_length: usize, min_match_percent: f64) -> Self {
        Self {
            min_match_length,
            min_match_percent,
        }
    }

    /// Returns the next matching run at or after `(left_position,
    /// right_position)`.
    ///
    /// The character under the left cursor is searched for in the right text
    /// first; if that yields no run above the threshold, the character under
    /// the right cursor is searched for in the left text. As a last resort, a
    /// direct match right at both cursors is accepted regardless of its
    /// length. Returns `None` if the characters under the cursors differ and
    /// neither search succeeds.
    #[must_use]
    pub fn find_matched_range(
        &self,
        left: &PositionIndex<'_>,
        left_position: usize,
        right: &PositionIndex<'_>,
        right_position: usize,
    ) -> Option<MatchedRange> {
        self.find_anchored_range(Side::Left, left, left_position, right, right_position)
            .or_else(|| {
                self.find_anchored_range(Side::Right, left, left_position, right, right_position)
            })
            .or_else(|| {
                let range =
                    find_equal_range(left.chars(), left_position, right.chars(), right_position);
                (!range.is_empty()).then_some(range)
            })
    }

    /// Minimum length a run has to exceed when `remaining` characters are left
    /// after the anchoring cursor.
    #[must_use]
    pub fn threshold(&self, remaining: usize) -> usize {
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let proportional = (remaining as f64 * self.min_match_percent).floor() as usize;

        proportional.min(self.min_match_length).max(1)
    }

    fn find_anchored_range(
        &self,
        anchor: Side,
        left: &PositionIndex<'_>,
        left_position: usize,
        right: &PositionIndex<'_>,
        right_position: usize,
    ) -> Option<MatchedRange> {
        let (anchor_text, anchor_position, other_text, other_position) = match anchor {
            Side::Left => (left, left_position, right, right_position),
            Side::Right => (right, right_position, left, left_position),
        };

        let char = *anchor_text.chars().get(anchor_position)?;
        let threshold = self.threshold(anchor_text.len() - anchor_position);

        let found = other_text
            .positions_from(char, other_position)
            .iter()
            .find_map(|&candidate| {
                let (left_start, right_start) = match anchor {
                    Side::Left => (anchor_position, candidate),
                    Side::Right => (candidate, anchor_position),
                };
                let range = find_equal_range(left.chars(), left_start, right.chars(), right_start);

                (range.len() > threshold).then_some(range)
            });

        if let Some(range) = found {
            trace!(
                "{anchor}-anchored match {} / {} (threshold {threshold}, {} side searched)",
                range.left,
                range.right,
                anchor.opposite()
            );
        }

        found
    }
}

/// Extends a run of equal characters forward from exactly `(left_position,
/// right_position)`. The result may be empty.
#[must_use]
pub fn find_equal_range(
    left: &[char],
    left_position: usize,
    right: &[char],
    right_position: usize,
) -> MatchedRange {
    let length = left
        .get(left_position..)
        .unwrap_or_default()
        .iter()
        .zip(right.get(right_position..).unwrap_or_default())
        .take_while(|(left_char, right_char)| left_char == right_char)
        .count();

    MatchedRange {
        left: Span::new(left_position, left_position + length),
        right: Span::new(right_position, right_position + length),
    }
}
