use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What happened to a fragment between two revisions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    /// Present unchanged on both sides.
    Equal,
    /// Only present on the right (newer) side.
    Insert,
    /// Only present on the left (older) side.
    Delete,
}

impl RangeKind {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            RangeKind::Equal => '=',
            RangeKind::Insert => '+',
            RangeKind::Delete => '-',
        }
    }

    /// Deleted fragments do not occupy any space in the newer revision.
    #[must_use]
    pub fn is_visible(self) -> bool { !matches!(self, RangeKind::Delete) }
}

impl Display for RangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeKind::Equal => write!(f, "Equal"),
            RangeKind::Insert => write!(f, "Insert"),
            RangeKind::Delete => write!(f, "Delete"),
        }
    }
}
