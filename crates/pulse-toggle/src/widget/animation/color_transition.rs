//! Tint interpolation between the two style colors.

use std::time::Duration;

use pulse_toggle_core::{logging::targets, toggle_trace};
use pulse_toggle_render::{Color, IconLayer};

use super::easing::Easing;
use super::handle::{AnimationEnd, AnimationHandle};
use super::tween::Tween;

/// Default length of a color transition.
pub const COLOR_TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Terminal event of one color transition run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTransitionEnd {
    /// The run that ended.
    pub handle: AnimationHandle,
    /// The checked state the run was heading to.
    pub target_checked: bool,
    /// Whether it completed or was canceled.
    pub reason: AnimationEnd,
}

#[derive(Debug, Clone, Copy)]
struct ColorRun {
    handle: AnimationHandle,
    tween: Tween<Color>,
    target_checked: bool,
}

impl ColorRun {
    fn end(&self, reason: AnimationEnd) -> ColorTransitionEnd {
        ColorTransitionEnd {
            handle: self.handle,
            target_checked: self.target_checked,
            reason,
        }
    }
}

/// Interpolates an icon's tint from one color to another.
///
/// At most one run is in flight. Terminal events are returned to the caller
/// rather than dispatched through stored callbacks: a canceled run reports its
/// end from [`cancel`](Self::cancel), a completed run from
/// [`advance`](Self::advance). Each run ends exactly once, and once it
/// has ended nothing about it can reach the run that replaced it.
#[derive(Debug, Clone)]
pub struct ColorTransition {
    duration: Duration,
    run: Option<ColorRun>,
}

impl ColorTransition {
    /// Create an idle animator with the default duration.
    pub fn new() -> Self {
        Self {
            duration: COLOR_TRANSITION_DURATION,
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

    /// Whether a run is in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Handle of the run in flight.
    pub fn handle(&self) -> Option<AnimationHandle> {
        self.run.as_ref().map(|run| run.handle)
    }

    /// The checked state the run in flight is heading to.
    pub fn target_checked(&self) -> Option<bool> {
        self.run.as_ref().map(|run| run.target_checked)
    }

    /// Start a run from `from` to `to`, writing the start color to `icon`.
    ///
    /// Callers that apply terminal state call [`cancel`](Self::cancel) first.
    /// A run still in flight here is replaced without reporting its end.
    pub fn start(
        &mut self,
        icon: &mut IconLayer,
        from: Color,
        to: Color,
        target_checked: bool,
    ) -> AnimationHandle {
        if let Some(replaced) = self.cancel() {
            toggle_trace!(
                target: targets::ANIMATION,
                handle = replaced.handle.as_u64(),
                "color transition replaced"
            );
        }
        let handle = AnimationHandle::next();
        let tween = Tween::new(from, to, self.duration).with_easing(Easing::Linear);
        icon.set_tint(tween.value());
        self.run = Some(ColorRun {
            handle,
            tween,
            target_checked,
        });
        toggle_trace!(
            target: targets::ANIMATION,
            handle = handle.as_u64(),
            %from,
            %to,
            "color transition started"
        );
        handle
    }

    /// Cancel the run in flight, if any, and return its end.
    pub fn cancel(&mut self) -> Option<ColorTransitionEnd> {
        let run = self.run.take()?;
        toggle_trace!(
            target: targets::ANIMATION,
            handle = run.handle.as_u64(),
            "color transition canceled"
        );
        Some(run.end(AnimationEnd::Canceled))
    }

    /// Feed elapsed time, writing the interpolated tint to `icon`.
    ///
    /// Returns the run's end when it completes during this step.
    pub fn advance(&mut self, dt: Duration, icon: &mut IconLayer) -> Option<ColorTransitionEnd> {
        let run = self.run.as_mut()?;
        icon.set_tint(run.tween.advance(dt));
        if !run.tween.is_finished() {
            return None;
        }

        let end = run.end(AnimationEnd::Completed);
        self.run = None;
        toggle_trace!(
            target: targets::ANIMATION,
            handle = end.handle.as_u64(),
            "color transition completed"
        );
        Some(end)
    }
}

impl Default for ColorTransition {
    fn default() -> Self {
        Self::new()
    }
}
