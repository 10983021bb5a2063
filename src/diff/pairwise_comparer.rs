use log::debug;

use crate::{
    diff::{position_index::PositionIndex, range_aligner::RangeAligner},
    types::{
        change_range::ChangeRange, provenance::Provenance, revision::Revision,
        revision_field::RevisionField, span::Span,
    },
};

/// Result of comparing two revisions: an ordered list of ranges that
/// partitions both the left and the right text without gaps or overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<'a> {
    pub ranges: Vec<ChangeRange<'a>>,
    pub left: &'a Revision,
    pub right: &'a Revision,
}

/// Compares one field of two revisions character by character.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PairwiseComparer {
    field: RevisionField,
    aligner: RangeAligner,
}

impl PairwiseComparer {
    #[must_use]
    pub fn new(field: RevisionField, aligner: RangeAligner) -> Self { Self { field, aligner } }

    #[must_use]
    pub fn field(&self) -> RevisionField { self.field }

    /// Builds the `PositionIndex` of the compared field of `revision`.
    #[must_use]
    pub fn index<'a>(&self, revision: &'a Revision) -> PositionIndex<'a> {
        PositionIndex::build(revision.field(self.field))
    }

    /// Compares `left` (the older revision) with `right` (the newer one).
    ///
    /// ```
    /// use revision_trail::{PairwiseComparer, RangeKind, Revision};
    /// # use chrono::NaiveDate;
    /// # let at = NaiveDate::from_ymd_opt(2016, 1, 14).unwrap().and_hms_opt(15, 16, 50).unwrap();
    ///
    /// let old = Revision::new(1, "alice", at).with_content("hello world");
    /// let new = Revision::new(2, "bob", at).with_content("hello brave world");
    ///
    /// let comparison = PairwiseComparer::default().compare(&old, &new);
    /// let fragments = comparison
    ///     .ranges
    ///     .iter()
    ///     .map(|range| (range.kind(), range.fragment()))
    ///     .collect::<Vec<_>>();
    ///
    /// assert_eq!(
    ///     fragments,
    ///     vec![
    ///         (RangeKind::Equal, "hello "),
    ///         (RangeKind::Insert, "brave "),
    ///         (RangeKind::Equal, "world"),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn compare<'a>(&self, left: &'a Revision, right: &'a Revision) -> Comparison<'a> {
        self.compare_indexed(left, &self.index(left), right, &self.index(right))
    }

    /// Same as `compare` but with prebuilt indexes, so that along a chain of
    /// revisions the index of the right side can be reused as the left side of
    /// the next comparison.
    #[must_use]
    pub fn compare_indexed<'a>(
        &self,
        left: &'a Revision,
        left_index: &PositionIndex<'a>,
        right: &'a Revision,
        right_index: &PositionIndex<'a>,
    ) -> Comparison<'a> {
        debug_assert_eq!(
            left_index.text(),
            left.field(self.field),
            "The left index must be built from the compared field of the left revision"
        );
        debug_assert_eq!(
            right_index.text(),
            right.field(self.field),
            "The right index must be built from the compared field of the right revision"
        );

        let mut emitter = RangeEmitter {
            left: left_index,
            right: right_index,
            provenance: Provenance::from(right),
            ranges: Vec::new(),
        };

        let mut left_position = 0;
        let mut right_position = 0;

        // Where the current run of characters that have been replaced
        // wholesale started, if we're in one.
        let mut substitution_start: Option<(usize, usize)> = None;

        while left_position < left_index.len() && right_position < right_index.len() {
            let Some(matched) = self.aligner.find_matched_range(
                left_index,
                left_position,
                right_index,
                right_position,
            ) else {
                substitution_start.get_or_insert((left_position, right_position));
                left_position += 1;
                right_position += 1;
                continue;
            };

            if matched.left.start != left_position && matched.right.start != right_position {
                debug!(
                    "Matched range {} / {} is aligned with neither cursor ({left_position}, \
                     {right_position}), stopping",
                    matched.left, matched.right
                );
                break;
            }

            let (gap_left, gap_right) = substitution_start
                .take()
                .unwrap_or((left_position, right_position));
            emitter.push_gap(
                Span::new(gap_left, matched.left.start),
                Span::new(gap_right, matched.right.start),
            );
            emitter.push_equal(matched.left, matched.right);

            left_position = matched.left.end;
            right_position = matched.right.end;
        }

        let (gap_left, gap_right) = substitution_start.unwrap_or((left_position, right_position));
        emitter.push_gap(
            Span::new(gap_left, left_index.len()),
            Span::new(gap_right, right_index.len()),
        );

        Comparison {
            ranges: emitter.ranges,
            left,
            right,
        }
    }
}

/// Collects the ranges of a comparison, stamping each of them with the
/// provenance of the right revision.
struct RangeEmitter<'i, 'a> {
    left: &'i PositionIndex<'a>,
    right: &'i PositionIndex<'a>,
    provenance: Provenance<'a>,
    ranges: Vec<ChangeRange<'a>>,
}

impl<'a> RangeEmitter<'_, 'a> {
    fn push_equal(&mut self, left: Span, right: Span) {
        self.ranges.push(ChangeRange::equal(
            left,
            right,
            self.right.slice(right),
            self.provenance,
        ));
    }

    /// Emits the text between two aligned positions: whatever is only present
    /// on the left got deleted, whatever is only present on the right got
    /// inserted. Deletions come first.
    fn push_gap(&mut self, left: Span, right: Span) {
        let deleted = self.left.slice(left);
        let inserted = self.right.slice(right);

        if !left.is_empty() && deleted == inserted {
            self.push_equal(left, right);
            return;
        }

        if !left.is_empty() {
            self.ranges.push(ChangeRange::delete(
                left,
                Span::empty_at(right.start),
                deleted,
                self.provenance,
            ));
        }

        if !right.is_empty() {
            self.ranges.push(ChangeRange::insert(
                Span::empty_at(left.end),
                right,
                inserted,
                self.provenance,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::types::range_kind::RangeKind;

    fn revision(version_number: u32, content: &str) -> Revision {
        let created_at = NaiveDate::from_ymd_opt(2016, 1, 14)
            .unwrap()
            .and_hms_opt(15, 16, 50)
            .unwrap();

        Revision::new(version_number, format!("author{version_number}"), created_at)
            .with_title(format!("Title of version {version_number}"))
            .with_content(content)
    }

    fn kinds_and_fragments<'a>(comparison: &Comparison<'a>) -> Vec<(RangeKind, &'a str)> {
        comparison
            .ranges
            .iter()
            .map(|range| (range.kind(), range.fragment()))
            .collect()
    }

    fn assert_partitions(comparison: &Comparison<'_>) {
        let mut left_end = 0;
        let mut right_end = 0;
        for range in &comparison.ranges {
            assert_eq!(range.left().start, left_end);
            assert_eq!(range.right().start, right_end);
            left_end = range.left().end;
            right_end = range.right().end;
        }
        assert_eq!(left_end, comparison.left.content.chars().count());
        assert_eq!(right_end, comparison.right.content.chars().count());
    }

    #[test]
    fn test_insertion() {
        let left = revision(1, "hello world");
        let right = revision(2, "hello brave world");

        let comparison = PairwiseComparer::default().compare(&left, &right);

        assert_eq!(
            kinds_and_fragments(&comparison),
            vec![
                (RangeKind::Equal, "hello "),
                (RangeKind::Insert, "brave "),
                (RangeKind::Equal, "world"),
            ]
        );
        assert_eq!(comparison.ranges[1].left(), Span::empty_at(6));
        assert_eq!(comparison.ranges[1].right(), Span::new(6, 12));
        assert_partitions(&comparison);
    }

    #[test]
    fn test_deletion() {
        let left = revision(1, "hello brave world");
        let right = revision(2, "hello world");

        let comparison = PairwiseComparer::default().compare(&left, &right);

        assert_eq!(
            kinds_and_fragments(&comparison),
            vec![
                (RangeKind::Equal, "hello "),
                (RangeKind::Delete, "brave "),
                (RangeKind::Equal, "world"),
            ]
        );
        assert_eq!(comparison.ranges[1].left(), Span::new(6, 12));
        assert_eq!(comparison.ranges[1].right(), Span::empty_at(6));
        assert_partitions(&comparison);
    }

    #[test]
    fn test_substitution() {
        let left = revision(1, "the quick brown fox jumps");
        let right = revision(2, "the quick red fox jumps");

        let comparison = PairwiseComparer::default().compare(&left, &right);

        assert_eq!(
            kinds_and_fragments(&comparison),
            vec![
                (RangeKind::Equal, "the quick "),
                (RangeKind::Delete, "brown"),
                (RangeKind::Insert, "red"),
                (RangeKind::Equal, " fox jumps"),
            ]
        );
        assert_partitions(&comparison);
    }

    #[test_case("", "", &[]; "both empty")]
    #[test_case("", "abc", &[(RangeKind::Insert, "abc")]; "empty left")]
    #[test_case("abc", "", &[(RangeKind::Delete, "abc")]; "empty right")]
    #[test_case("abc", "xyz", &[(RangeKind::Delete, "abc"), (RangeKind::Insert, "xyz")]; "disjoint")]
    #[test_case("abc", "wxyz", &[(RangeKind::Delete, "abc"), (RangeKind::Insert, "wxyz")]; "disjoint with different lengths")]
    #[test_case("abc", "abx", &[(RangeKind::Equal, "ab"), (RangeKind::Delete, "c"), (RangeKind::Insert, "x")]; "changed tail")]
    #[test_case("naïve café", "naïve cafés", &[(RangeKind::Equal, "naïve café"), (RangeKind::Insert, "s")]; "unicode")]
    fn test_edge_cases(left: &str, right: &str, expected: &[(RangeKind, &str)]) {
        let left = revision(1, left);
        let right = revision(2, right);

        let comparison = PairwiseComparer::default().compare(&left, &right);

        assert_eq!(kinds_and_fragments(&comparison), expected);
        assert_partitions(&comparison);
    }

    #[test_case("a"; "single character")]
    #[test_case("hello world"; "short")]
    #[test_case("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"; "repetitive")]
    fn test_identical_texts_are_one_equal_range(text: &str) {
        let left = revision(1, text);
        let right = revision(2, text);

        let comparison = PairwiseComparer::default().compare(&left, &right);

        assert_eq!(kinds_and_fragments(&comparison), vec![(RangeKind::Equal, text)]);
    }

    #[test]
    fn test_ranges_are_stamped_with_right_revision() {
        let left = revision(1, "abc");
        let right = revision(2, "abx");

        let comparison = PairwiseComparer::default().compare(&left, &right);

        assert!(comparison.ranges.iter().all(|range| {
            range.version_number() == 2
                && range.author() == "author2"
                && range.last_visible_version() == 2
        }));
    }

    #[test]
    fn test_compares_configured_field() {
        let left = revision(1, "same body");
        let right = revision(2, "same body");

        let comparison =
            PairwiseComparer::new(RevisionField::Title, RangeAligner::default()).compare(&left, &right);

        assert_eq!(
            kinds_and_fragments(&comparison),
            vec![
                (RangeKind::Equal, "Title of version "),
                (RangeKind::Delete, "1"),
                (RangeKind::Insert, "2"),
            ]
        );
    }

    #[test]
    fn test_reused_index_gives_same_result() {
        let first = revision(1, "hello world");
        let second = revision(2, "hello brave world");
        let third = revision(3, "hello brave new world");
        let comparer = PairwiseComparer::default();

        let second_index = comparer.index(&second);
        let reused = comparer.compare_indexed(
            &second,
            &second_index,
            &third,
            &comparer.index(&third),
        );
        let _ = comparer.compare_indexed(&first, &comparer.index(&first), &second, &second_index);

        assert_eq!(reused, comparer.compare(&second, &third));
    }
}
