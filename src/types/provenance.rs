use chrono::NaiveDateTime;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::revision::Revision;

/// Who contributed a fragment and in which revision. Borrowed from the
/// `Revision` it describes.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provenance<'a> {
    pub author: &'a str,
    pub created_at: NaiveDateTime,
    pub version_number: u32,
}

impl<'a> From<&'a Revision> for Provenance<'a> {
    fn from(revision: &'a Revision) -> Self {
        Self {
            author: &revision.author,
            created_at: revision.created_at,
            version_number: revision.version_number,
        }
    }
}
