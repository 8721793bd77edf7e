//! Error types for pulse-toggle.

use thiserror::Error;

/// Errors raised while constructing or configuring a toggle control.
///
/// Configuration errors are fatal: a control that fails validation is never
/// produced. Redundant updates and re-entrant notifications are not errors and
/// never surface here.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The checked-state icon was not supplied.
    #[error("missing attribute: icon_drawable")]
    MissingCheckedIcon,

    /// A color attribute could not be parsed.
    #[error("invalid color for `{attribute}`: {value:?} (expected #RRGGBB or #AARRGGBB)")]
    InvalidColor {
        /// Name of the offending attribute.
        attribute: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// An enumerated attribute had an unknown value.
    #[error("invalid value for `{attribute}`: {value:?}")]
    InvalidValue {
        /// Name of the offending attribute.
        attribute: &'static str,
        /// The raw value that was rejected.
        value: String,
    },

    /// The configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
