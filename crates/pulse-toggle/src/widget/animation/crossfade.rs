//! Opacity crossfade between an outgoing and an incoming element.
//!
//! Crossfades define how two overlapping elements swap places: the outgoing
//! one fades out while the incoming one fades in.

use std::time::Duration;

use super::easing::{Easing, ease};

/// Default length of a crossfade.
pub const CROSSFADE_DURATION: Duration = Duration::from_millis(300);

/// Current state of a crossfade.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CrossfadeState {
    /// No crossfade in progress.
    #[default]
    Idle,
    /// Crossfade is running.
    Running {
        /// Eased progress from 0.0 to 1.0.
        progress: f32,
    },
}

impl CrossfadeState {
    /// Check if a crossfade is currently in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, CrossfadeState::Running { .. })
    }

    /// Get the current progress if running.
    pub fn progress(&self) -> Option<f32> {
        match self {
            CrossfadeState::Running { progress } => Some(*progress),
            CrossfadeState::Idle => None,
        }
    }

    /// Opacity of the outgoing element.
    pub fn outgoing_opacity(&self) -> f32 {
        match self {
            CrossfadeState::Running { progress } => 1.0 - progress,
            CrossfadeState::Idle => 0.0,
        }
    }

    /// Opacity of the incoming element.
    pub fn incoming_opacity(&self) -> f32 {
        match self {
            CrossfadeState::Running { progress } => *progress,
            CrossfadeState::Idle => 1.0,
        }
    }
}

/// A crossfade timing controller.
#[derive(Debug, Clone)]
pub struct Crossfade {
    /// Easing function for the fade.
    easing: Easing,
    /// Duration of the fade.
    duration: Duration,
    /// Time fed since the fade started (if running).
    elapsed: Option<Duration>,
}

impl Crossfade {
    /// Create a crossfade with default settings.
    pub fn new() -> Self {
        Self {
            easing: Easing::EaseInOut,
            duration: CROSSFADE_DURATION,
            elapsed: None,
        }
    }

    /// Get the easing function.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Get the fade duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Check if a crossfade is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Start a crossfade from the beginning.
    ///
    /// Returns `true` if a crossfade was already running and got replaced.
    pub fn start(&mut self) -> bool {
        self.elapsed.replace(Duration::ZERO).is_some()
    }

    /// Stop the current crossfade immediately.
    pub fn stop(&mut self) {
        self.elapsed = None;
    }

    /// The state without advancing time.
    pub fn state(&self) -> CrossfadeState {
        match self.elapsed {
            None => CrossfadeState::Idle,
            Some(elapsed) => {
                let raw_progress = if self.duration.is_zero() {
                    1.0
                } else {
                    (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
                };
                CrossfadeState::Running {
                    progress: ease(self.easing, raw_progress),
                }
            }
        }
    }

    /// Feed elapsed time and get the new state.
    ///
    /// Returns `Idle` once the fade has reached its end.
    pub fn advance(&mut self, dt: Duration) -> CrossfadeState {
        let Some(elapsed) = self.elapsed.as_mut() else {
            return CrossfadeState::Idle;
        };

        *elapsed = elapsed.saturating_add(dt);
        if *elapsed >= self.duration {
            // Crossfade complete
            self.elapsed = None;
            return CrossfadeState::Idle;
        }

        self.state()
    }
}

impl Default for Crossfade {
    fn default() -> Self {
        Self::new()
    }
}
