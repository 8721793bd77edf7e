//! Error types for the multimedia module.

use thiserror::Error;

/// Multimedia-specific errors.
#[derive(Debug, Clone, Error)]
pub enum MultimediaError {
    /// Failed to decode a sound sample.
    #[error("failed to load audio: {0}")]
    AudioLoad(String),
    /// Playback error occurred.
    #[error("playback error: {0}")]
    Playback(String),
    /// Audio device error.
    #[error("audio device error: {0}")]
    Device(String),
}

#[cfg(feature = "audio-output")]
impl From<rodio::StreamError> for MultimediaError {
    fn from(err: rodio::StreamError) -> Self {
        Self::Device(err.to_string())
    }
}

#[cfg(feature = "audio-output")]
impl From<rodio::PlayError> for MultimediaError {
    fn from(err: rodio::PlayError) -> Self {
        Self::Playback(err.to_string())
    }
}

#[cfg(feature = "audio-output")]
impl From<rodio::decoder::DecoderError> for MultimediaError {
    fn from(err: rodio::decoder::DecoderError) -> Self {
        Self::AudioLoad(err.to_string())
    }
}

/// A specialized Result type for multimedia operations.
pub type Result<T> = std::result::Result<T, MultimediaError>;
