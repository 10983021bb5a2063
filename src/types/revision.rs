use chrono::NaiveDateTime;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::revision_field::RevisionField;

/// One dated, authored snapshot of a document. Revisions are owned by the
/// caller; comparison and merge results only borrow from them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub author: String,
    pub created_at: NaiveDateTime,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: String,
    /// Positive and strictly increasing along a revision chain.
    pub version_number: u32,
}

impl Revision {
    #[must_use]
    pub fn new(version_number: u32, author: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            author: author.into(),
            created_at,
            title: String::new(),
            content: String::new(),
            version_number,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn field(&self, field: RevisionField) -> &str {
        match field {
            RevisionField::Title => &self.title,
            RevisionField::Content => &self.content,
        }
    }
}
