use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::change_range::ChangeRange;

/// The unified annotation of a whole revision chain: every fragment that was
/// ever part of one of the revisions, in document order.
///
/// Deleted fragments stay in the list as history. All the other fragments
/// concatenate to the text of the newest revision.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeResult<'a> {
    ranges: Vec<ChangeRange<'a>>,
}

impl<'a> MergeResult<'a> {
    #[must_use]
    pub fn new(ranges: Vec<ChangeRange<'a>>) -> Self { Self { ranges } }

    /// Text of the newest merged revision.
    #[must_use]
    pub fn visible_text(&self) -> String {
        self.ranges
            .iter()
            .filter(|range| range.kind().is_visible())
            .map(ChangeRange::fragment)
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChangeRange<'a>> { self.ranges.iter() }

    #[must_use]
    pub fn ranges(&self) -> &[ChangeRange<'a>] { &self.ranges }

    #[must_use]
    pub fn into_ranges(self) -> Vec<ChangeRange<'a>> { self.ranges }

    #[must_use]
    pub fn len(&self) -> usize { self.ranges.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.ranges.is_empty() }
}

impl<'a> IntoIterator for MergeResult<'a> {
    type Item = ChangeRange<'a>;
    type IntoIter = std::vec::IntoIter<ChangeRange<'a>>;

    fn into_iter(self) -> Self::IntoIter { self.ranges.into_iter() }
}

impl<'r, 'a> IntoIterator for &'r MergeResult<'a> {
    type Item = &'r ChangeRange<'a>;
    type IntoIter = std::slice::Iter<'r, ChangeRange<'a>>;

    fn into_iter(self) -> Self::IntoIter { self.ranges.iter() }
}

impl Display for MergeResult<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{range}")?;
        }

        Ok(())
    }
}
