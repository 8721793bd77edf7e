//! Error types for pulse-toggle.

use pulse_toggle_core::ConfigError;
use pulse_toggle_multimedia::MultimediaError;
use thiserror::Error;

/// Errors surfaced by the toggle widget.
#[derive(Debug, Error)]
pub enum ToggleError {
    /// The configuration was incomplete or malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The feedback cue backend could not be set up.
    #[error(transparent)]
    Multimedia(#[from] MultimediaError),
}

/// A specialized Result type for toggle operations.
pub type Result<T> = std::result::Result<T, ToggleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent() {
        let err = ToggleError::from(ConfigError::MissingCheckedIcon);
        assert_eq!(err.to_string(), "missing attribute: icon_drawable");
        assert!(matches!(err, ToggleError::Config(ConfigError::MissingCheckedIcon)));
    }

    #[test]
    fn test_multimedia_error_is_transparent() {
        let err = ToggleError::from(MultimediaError::Device("no output".into()));
        assert_eq!(err.to_string(), "audio device error: no output");
    }
}
