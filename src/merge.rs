mod combine;

use std::collections::VecDeque;

use log::{debug, warn};

pub use combine::{Combination, combine};

use crate::{
    diff::Comparison,
    types::{
        change_range::ChangeRange, merge_result::MergeResult, provenance::Provenance,
        range_kind::RangeKind, revision::Revision,
    },
};

/// Folds the comparisons of consecutive revisions into a single list of
/// ranges covering the whole revision chain.
///
/// The merged list is kept in document order. Its entries that aren't deleted
/// and are marked as visible in the latest revision partition the text of
/// that revision. Each new comparison is laid onto exactly those entries:
/// an incoming range is anchored at the entry starting where the range starts
/// in the previous revision.
#[derive(Debug, Clone, Default)]
pub struct RevisionMerger<'a> {
    ranges: Vec<ChangeRange<'a>>,
    latest: Option<&'a Revision>,
}

impl<'a> RevisionMerger<'a> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Folds the comparison of the latest merged revision with its successor
    /// into the merged list. The first comparison seeds the list.
    ///
    /// Comparisons must be folded in chronological order. A comparison whose
    /// left revision isn't the latest merged one can't be aligned; its ranges
    /// are appended as they are.
    pub fn merge(&mut self, comparison: Comparison<'a>) {
        let Comparison {
            ranges,
            left,
            right,
        } = comparison;

        let Some(latest) = self.latest.replace(right) else {
            self.seed(ranges, left, right);
            return;
        };

        if latest.version_number != left.version_number {
            warn!(
                "Merging the comparison of v{} and v{} onto v{}, its ranges can't be aligned",
                left.version_number, right.version_number, latest.version_number
            );
        }

        let mut pending: VecDeque<ChangeRange<'a>> = ranges.into();
        let mut merge_index = 0;

        while let Some(incoming) = pending.pop_front() {
            let Some(anchor_index) = self.find_anchor(merge_index, &incoming, left.version_number)
            else {
                debug!("No anchor found for `{incoming}`, appending it");

                merge_index = self.ranges.len();
                let version_number = incoming.version_number();
                self.ranges
                    .push(incoming.with_last_visible_version(version_number));
                continue;
            };

            merge_index = anchor_index;
            let Combination {
                replacement,
                remainder,
            } = combine(&self.ranges[anchor_index], incoming);

            self.ranges.splice(anchor_index..=anchor_index, replacement);

            if let Some(remainder) = remainder {
                pending.push_front(remainder);
            }
        }
    }

    /// The merged ranges so far.
    #[must_use]
    pub fn ranges(&self) -> &[ChangeRange<'a>] { &self.ranges }

    /// The newest revision folded into the merged list.
    #[must_use]
    pub fn latest(&self) -> Option<&'a Revision> { self.latest }

    #[must_use]
    pub fn finish(self) -> MergeResult<'a> { MergeResult::new(self.ranges) }

    /// Text that was already present in the left revision keeps its
    /// attribution, inserted and deleted text belongs to the right revision.
    fn seed(&mut self, ranges: Vec<ChangeRange<'a>>, left: &'a Revision, right: &'a Revision) {
        debug!(
            "Seeding merge with {} ranges of v{} and v{}",
            ranges.len(),
            left.version_number,
            right.version_number
        );

        self.ranges = ranges
            .into_iter()
            .map(|range| {
                match range.kind() {
                    RangeKind::Equal => range.with_provenance(Provenance::from(left)),
                    RangeKind::Insert | RangeKind::Delete => range,
                }
                .with_last_visible_version(right.version_number)
            })
            .collect();
    }

    /// Index of the first entry at or after `from` that is visible in the
    /// revision with `anchor_version` and starts where `incoming` starts in
    /// that revision.
    fn find_anchor(
        &self,
        from: usize,
        incoming: &ChangeRange<'a>,
        anchor_version: u32,
    ) -> Option<usize> {
        self.ranges[from..]
            .iter()
            .position(|entry| {
                entry.kind().is_visible()
                    && entry.last_visible_version() == anchor_version
                    && entry.right().start == incoming.left().start
            })
            .map(|offset| from + offset)
    }
}
