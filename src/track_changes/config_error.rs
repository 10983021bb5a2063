use thiserror::Error;

/// Error type for invalid `TrackChanges` configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Every match has to be at least one character long
    #[error("Invalid configuration: `min_match_length` must be at least 1")]
    ZeroMinMatchLength,

    /// The proportional match length has to be a fraction of the text
    #[error(
        "Invalid configuration: `min_match_percent` must be a finite number between 0 and 1, \
         got {value}"
    )]
    InvalidMinMatchPercent {
        /// The rejected value
        value: f64,
    },

    /// Revisions only have a title and a content field
    #[error("Unknown revision field `{name}`, expected `title` or `content`")]
    UnknownField {
        /// The name that couldn't be parsed
        name: String,
    },
}
