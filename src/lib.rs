//! Track changes across a whole chain of text revisions.
//!
//! Consecutive revisions are compared character by character and the
//! comparisons are folded into a single list of ranges. Every range tells
//! whether its fragment is unchanged, inserted or deleted, which revision
//! contributed it and the newest revision that still contains it, which is
//! what a multi-version "track changes" view needs to paint its spans.

mod diff;
mod merge;
mod track_changes;
mod types;
mod utils;

pub use diff::{
    Comparison, MatchedRange, PairwiseComparer, PositionIndex, RangeAligner, find_equal_range,
};
pub use merge::{Combination, RevisionMerger, combine};
pub use track_changes::{ConfigError, TrackChanges, TrackChangesConfig, track_changes};
pub use types::{
    change_range::ChangeRange, merge_result::MergeResult, provenance::Provenance,
    range_kind::RangeKind, revision::Revision, revision_field::RevisionField, span::Span,
};

#[cfg(feature = "wasm")]
pub mod wasm;
