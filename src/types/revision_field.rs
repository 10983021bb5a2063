use std::{fmt::Display, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::track_changes::ConfigError;

/// The text field of a `Revision` that gets compared. Articles are usually
/// compared twice: once by title and once by body.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum RevisionField {
    Title,
    #[default]
    Content,
}

impl Display for RevisionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RevisionField::Title => write!(f, "title"),
            RevisionField::Content => write!(f, "content"),
        }
    }
}

impl FromStr for RevisionField {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "title" => Ok(RevisionField::Title),
            "content" => Ok(RevisionField::Content),
            _ => Err(ConfigError::UnknownField {
                name: name.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("title", RevisionField::Title)]
    #[test_case("Content", RevisionField::Content)]
    #[test_case(" content ", RevisionField::Content)]
    fn test_parse_field(name: &str, expected: RevisionField) {
        assert_eq!(name.parse::<RevisionField>(), Ok(expected));
    }

    #[test]
    fn test_parse_unknown_field() {
        assert_eq!(
            "body".parse::<RevisionField>(),
            Err(ConfigError::UnknownField {
                name: "body".to_owned()
            })
        );
    }
}
