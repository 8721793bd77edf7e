//! Multimedia module for pulse-toggle.
//!
//! This crate provides the feedback cues a toggle control plays when a click
//! is not handled by the host:
//!
//! - **Cue trait**: [`FeedbackCue`], implemented by closures and by the cue
//!   types below
//! - **Silent and recording cues**: [`SilentCue`], [`RecordingCue`]
//! - **Audio output**: `RodioCue` (enable the `audio-output` feature), which
//!   plays a synthesized click or a loaded sample through rodio
//!
//! ```ignore
//! use pulse_toggle_multimedia::{FeedbackCue, RodioCue, SoundEffect};
//!
//! let mut cue = RodioCue::new()?;
//! cue.load_bytes(SoundEffect::Click, std::fs::read("click.wav")?)?;
//! cue.play(SoundEffect::Click)?;
//! ```

mod error;
pub mod sound_effects;

pub use error::{MultimediaError, Result};

// Re-export commonly used types at the crate root
pub use sound_effects::{FeedbackCue, RecordingCue, SilentCue, SoundEffect};

#[cfg(feature = "audio-output")]
pub use sound_effects::RodioCue;
