mod config;
mod config_error;

pub use config::TrackChangesConfig;
pub use config_error::ConfigError;
use log::{debug, warn};

use crate::{
    RevisionField,
    diff::{Comparison, PairwiseComparer},
    merge::RevisionMerger,
    types::{merge_result::MergeResult, revision::Revision},
};

/// Given a chronological list of revisions, return a single list of ranges
/// showing which fragments were inserted, deleted or kept unchanged across the
/// whole chain, who contributed each of them and the last revision in which
/// they are still present.
///
/// The revisions' `content` fields are compared character by character with
/// the default settings. Fewer than two revisions yield an empty result.
///
/// ```
/// use revision_trail::{RangeKind, Revision, track_changes};
/// # use chrono::NaiveDate;
/// # let at = NaiveDate::from_ymd_opt(2016, 1, 14).unwrap().and_hms_opt(15, 16, 50).unwrap();
///
/// let revisions = vec![
///     Revision::new(1, "alice", at).with_content("abc"),
///     Revision::new(2, "bob", at).with_content("abc"),
///     Revision::new(3, "carol", at).with_content("abx"),
/// ];
///
/// let merged = track_changes(&revisions);
///
/// assert_eq!(merged.visible_text(), "abx");
/// assert_eq!(
///     merged
///         .iter()
///         .map(|range| (range.kind(), range.fragment(), range.author(), range.last_visible_version()))
///         .collect::<Vec<_>>(),
///     vec![
///         (RangeKind::Equal, "ab", "alice", 3),
///         (RangeKind::Delete, "c", "carol", 3),
///         (RangeKind::Insert, "x", "carol", 3),
///     ]
/// );
/// ```
#[must_use]
pub fn track_changes(revisions: &[Revision]) -> MergeResult<'_> {
    TrackChanges::default().execute(revisions)
}

/// Compares a chain of revisions and merges the comparisons into a single
/// annotated result. An instance holds no state between calls, so it can be
/// shared between threads processing independent documents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackChanges {
    config: TrackChangesConfig,
    comparer: PairwiseComparer,
}

impl Default for TrackChanges {
    fn default() -> Self { Self::from_valid_config(TrackChangesConfig::default()) }
}

impl TrackChanges {
    /// # Errors
    ///
    /// Returns a `ConfigError` if `config` doesn't pass
    /// `TrackChangesConfig::validate`.
    pub fn new(config: TrackChangesConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self::from_valid_config(config))
    }

    /// Default settings comparing `field` instead of the content.
    #[must_use]
    pub fn with_field(field: RevisionField) -> Self {
        Self::from_valid_config(TrackChangesConfig::default().with_field(field))
    }

    fn from_valid_config(config: TrackChangesConfig) -> Self {
        Self {
            comparer: PairwiseComparer::new(config.field, config.aligner()),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TrackChangesConfig { &self.config }

    /// Compares a single pair of revisions.
    #[must_use]
    pub fn compare<'a>(&self, left: &'a Revision, right: &'a Revision) -> Comparison<'a> {
        self.comparer.compare(left, right)
    }

    /// Compares every revision with its successor and folds the comparisons
    /// into one merged result. `revisions` must be in chronological order
    /// with strictly increasing version numbers.
    #[must_use]
    pub fn execute<'a>(&self, revisions: &'a [Revision]) -> MergeResult<'a> {
        let Some(first) = revisions.first() else {
            return MergeResult::default();
        };

        let mut merger = RevisionMerger::new();
        let mut left_index = self.comparer.index(first);

        for (left, right) in revisions.iter().zip(revisions.iter().skip(1)) {
            if right.version_number <= left.version_number {
                warn!(
                    "Revisions are expected in chronological order but v{} follows v{}",
                    right.version_number, left.version_number
                );
            }

            let right_index = self.comparer.index(right);
            let comparison = self
                .comparer
                .compare_indexed(left, &left_index, right, &right_index);

            debug!(
                "Compared the {} of v{} and v{}: {} ranges",
                self.config.field,
                left.version_number,
                right.version_number,
                comparison.ranges.len()
            );

            merger.merge(comparison);
            left_index = right_index;
        }

        merger.finish()
    }
}
