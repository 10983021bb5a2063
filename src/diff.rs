mod pairwise_comparer;
mod position_index;
mod range_aligner;

pub use pairwise_comparer::{Comparison, PairwiseComparer};
pub use position_index::PositionIndex;
pub use range_aligner::{MatchedRange, RangeAligner, find_equal_range};
