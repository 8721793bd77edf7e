//! Discrete feedback cues.
//!
//! A toggle control plays a short cue when it is clicked and no external click
//! handler consumed the interaction. The control talks to a [`FeedbackCue`];
//! which implementation backs it is the host's choice:
//!
//! - [`SilentCue`]: plays nothing (the default)
//! - [`RecordingCue`]: remembers every cue, for tests and diagnostics
//! - `RodioCue`: real audio output, behind the `audio-output` feature
//!
//! # Example
//!
//! ```
//! use pulse_toggle_multimedia::{FeedbackCue, RecordingCue, SoundEffect};
//!
//! let mut cue = RecordingCue::new();
//! let log = cue.clone();
//! cue.play(SoundEffect::Click).unwrap();
//! assert_eq!(log.played(), vec![SoundEffect::Click]);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use pulse_toggle_core::logging::targets;

use crate::error::Result;

/// The kinds of cue a control can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// A short click, played when a click was not handled elsewhere.
    Click,
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Click => write!(f, "click"),
        }
    }
}

/// Something that can play a discrete feedback cue.
///
/// Implementations are called on the UI thread and must not block.
pub trait FeedbackCue {
    /// Play a cue.
    fn play(&mut self, effect: SoundEffect) -> Result<()>;
}

impl<F> FeedbackCue for F
where
    F: FnMut(SoundEffect) -> Result<()>,
{
    fn play(&mut self, effect: SoundEffect) -> Result<()> {
        self(effect)
    }
}

/// A cue that plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl FeedbackCue for SilentCue {
    fn play(&mut self, effect: SoundEffect) -> Result<()> {
        tracing::trace!(target: targets::FEEDBACK, %effect, "silent cue");
        Ok(())
    }
}

/// A cue that records every request.
///
/// Clones share the same log, so a test can keep one handle while the control
/// owns another.
#[derive(Debug, Default, Clone)]
pub struct RecordingCue {
    played: Arc<Mutex<Vec<SoundEffect>>>,
}

impl RecordingCue {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All cues played so far, oldest first.
    pub fn played(&self) -> Vec<SoundEffect> {
        self.played.lock().clone()
    }

    /// Number of cues played so far.
    pub fn count(&self) -> usize {
        self.played.lock().len()
    }

    /// Forget recorded cues.
    pub fn clear(&self) {
        self.played.lock().clear();
    }
}

impl FeedbackCue for RecordingCue {
    fn play(&mut self, effect: SoundEffect) -> Result<()> {
        self.played.lock().push(effect);
        Ok(())
    }
}

#[cfg(feature = "audio-output")]
pub use rodio_cue::RodioCue;

#[cfg(feature = "audio-output")]
mod rodio_cue {
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::time::Duration;

    use rodio::source::{SineWave, Source};
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    use pulse_toggle_core::logging::targets;

    use super::{FeedbackCue, SoundEffect};
    use crate::error::Result;

    /// Frequency of the synthesized click tone.
    const CLICK_FREQUENCY_HZ: f32 = 1_800.0;

    /// Length of the synthesized click tone.
    const CLICK_DURATION: Duration = Duration::from_millis(12);

    /// Plays cues on the default audio output device.
    ///
    /// Without a loaded sample, [`SoundEffect::Click`] is a very short
    /// synthesized tone. Samples loaded with [`load_bytes`](Self::load_bytes)
    /// replace the synthesized sound.
    pub struct RodioCue {
        /// The output stream (must be kept alive for audio to play).
        _stream: OutputStream,
        /// Handle for the output stream (used for creating sinks).
        stream_handle: OutputStreamHandle,
        /// Decoded-on-demand samples by effect.
        samples: HashMap<SoundEffect, Vec<u8>>,
        /// Volume multiplier.
        volume: f32,
    }

    impl RodioCue {
        /// Open the default output device.
        ///
        /// Returns an error if no audio output device is available.
        pub fn new() -> Result<Self> {
            let (stream, stream_handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                stream_handle,
                samples: HashMap::new(),
                volume: 0.4,
            })
        }

        /// Use an encoded sample (WAV, OGG, MP3, FLAC) for an effect.
        pub fn load_bytes(&mut self, effect: SoundEffect, data: Vec<u8>) -> Result<()> {
            // Validate the audio data by attempting to decode it
            let _source = Decoder::new(Cursor::new(data.clone()))?;
            self.samples.insert(effect, data);
            Ok(())
        }

        /// Get the volume multiplier.
        pub fn volume(&self) -> f32 {
            self.volume
        }

        /// Set the volume multiplier, clamped to `0.0..=2.0`.
        pub fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 2.0);
        }
    }

    impl FeedbackCue for RodioCue {
        fn play(&mut self, effect: SoundEffect) -> Result<()> {
            let sink = Sink::try_new(&self.stream_handle)?;
            sink.set_volume(self.volume);

            match self.samples.get(&effect) {
                Some(data) => {
                    let source = Decoder::new(Cursor::new(data.clone()))?;
                    sink.append(source);
                }
                None => match effect {
                    SoundEffect::Click => {
                        let tone = SineWave::new(CLICK_FREQUENCY_HZ)
                            .take_duration(CLICK_DURATION)
                            .amplify(0.5);
                        sink.append(tone);
                    }
                },
            }

            sink.detach();
            tracing::trace!(target: targets::FEEDBACK, %effect, "cue played");
            Ok(())
        }
    }
}
