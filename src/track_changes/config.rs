#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{RangeAligner, RevisionField, track_changes::ConfigError};

/// Settings of a `TrackChanges` instance, fixed at construction time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackChangesConfig {
    /// The compared field of the revisions.
    pub field: RevisionField,

    /// Matches longer than this are always accepted when aligning revisions.
    pub min_match_length: usize,

    /// Shorter texts accept matches longer than this fraction of the
    /// remaining text instead, so that titles and other short fields can be
    /// aligned too.
    pub min_match_percent: f64,
}

impl Default for TrackChangesConfig {
    fn default() -> Self {
        Self {
            field: RevisionField::default(),
            min_match_length: RangeAligner::DEFAULT_MIN_MATCH_LENGTH,
            min_match_percent: RangeAligner::DEFAULT_MIN_MATCH_PERCENT,
        }
    }
}

impl TrackChangesConfig {
    #[must_use]
    pub fn with_field(self, field: RevisionField) -> Self { Self { field, ..self } }

    /// # Errors
    ///
    /// Returns `ConfigError::ZeroMinMatchLength` if `min_match_length` is 0 and
    /// `ConfigError::InvalidMinMatchPercent` if `min_match_percent` isn't a
    /// finite number in `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_match_length == 0 {
            return Err(ConfigError::ZeroMinMatchLength);
        }

        if !self.min_match_percent.is_finite() || !(0.0..=1.0).contains(&self.min_match_percent) {
            return Err(ConfigError::InvalidMinMatchPercent {
                value: self.min_match_percent,
            });
        }

        Ok(())
    }

    pub(crate) fn aligner(&self) -> RangeAligner {
        RangeAligner::new(self.min_match_length, self.min_match_percent)
    }
}
