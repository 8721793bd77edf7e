//! One-shot scale-up and fade-out of the shadow icon.

use std::time::Duration;

use pulse_toggle_core::{logging::targets, toggle_trace};
use pulse_toggle_render::{Color, IconLayer};

use super::easing::Easing;
use super::handle::{AnimationEnd, AnimationHandle};
use super::tween::Tween;

/// Default length of a pulse.
pub const SHADOW_PULSE_DURATION: Duration = Duration::from_millis(500);

/// Scale the shadow reaches at the end of a pulse.
pub const SHADOW_PULSE_SCALE: f32 = 2.5;

#[derive(Debug, Clone, Copy)]
struct PulseRun {
    handle: AnimationHandle,
    scale: Tween<f32>,
    opacity: Tween<f32>,
}

/// Drives the shadow layer through a pulse and back to rest.
///
/// The shadow rests hidden, at scale 1.0 and opacity 1.0, tinted with the
/// checked color. Whichever way a run ends, the layer is returned to that rest
/// state before the end is reported.
#[derive(Debug, Clone)]
pub struct ShadowPulse {
    duration: Duration,
    peak_scale: f32,
    run: Option<PulseRun>,
}

impl ShadowPulse {
    /// Create an idle animator with the default duration and peak scale.
    pub fn new() -> Self {
        Self {
            duration: SHADOW_PULSE_DURATION,
            peak_scale: SHADOW_PULSE_SCALE,
            run: None,
        }
    }

    /// Set the run duration using builder pattern.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Duration of future runs.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Scale reached at the end of a run.
    #[inline]
    pub fn peak_scale(&self) -> f32 {
        self.peak_scale
    }

    /// Whether a run is in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Handle of the run in flight.
    pub fn handle(&self) -> Option<AnimationHandle> {
        self.run.as_ref().map(|run| run.handle)
    }

    /// Put `shadow` into its rest state. Safe to call any number of times.
    pub fn rest(shadow: &mut IconLayer, checked_color: Color) {
        shadow.set_visible(false);
        shadow.set_scale(1.0);
        shadow.set_opacity(1.0);
        shadow.set_tint(checked_color);
    }

    /// Start a pulse on `shadow`, canceling any run in flight first.
    pub fn start(&mut self, shadow: &mut IconLayer, checked_color: Color) -> AnimationHandle {
        self.cancel(shadow, checked_color);

        let handle = AnimationHandle::next();
        let scale = Tween::new(1.0, self.peak_scale, self.duration).with_easing(Easing::Decelerate);
        let opacity = Tween::new(1.0, 0.0, self.duration).with_easing(Easing::Decelerate);

        shadow.set_visible(true);
        shadow.set_scale(scale.value());
        shadow.set_opacity(opacity.value());
        self.run = Some(PulseRun {
            handle,
            scale,
            opacity,
        });
        toggle_trace!(target: targets::ANIMATION, handle = handle.as_u64(), "shadow pulse started");
        handle
    }

    /// Cancel the run in flight and rest the layer.
    ///
    /// The layer is rested even when nothing was running.
    pub fn cancel(&mut self, shadow: &mut IconLayer, checked_color: Color) -> Option<AnimationEnd> {
        Self::rest(shadow, checked_color);
        let run = self.run.take()?;
        toggle_trace!(target: targets::ANIMATION, handle = run.handle.as_u64(), "shadow pulse canceled");
        Some(AnimationEnd::Canceled)
    }

    /// Feed elapsed time to the run in flight.
    ///
    /// Returns [`AnimationEnd::Completed`] on the step that finishes the run,
    /// after the layer has been rested.
    pub fn advance(
        &mut self,
        dt: Duration,
        shadow: &mut IconLayer,
        checked_color: Color,
    ) -> Option<AnimationEnd> {
        let run = self.run.as_mut()?;
        shadow.set_scale(run.scale.advance(dt));
        shadow.set_opacity(run.opacity.advance(dt));
        if !run.scale.is_finished() {
            return None;
        }

        let handle = run.handle;
        self.run = None;
        Self::rest(shadow, checked_color);
        toggle_trace!(target: targets::ANIMATION, handle = handle.as_u64(), "shadow pulse completed");
        Some(AnimationEnd::Completed)
    }
}

impl Default for ShadowPulse {
    fn default() -> Self {
        Self::new()
    }
}
