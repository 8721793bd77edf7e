//! Frame-driven interpolation between two values.
//!
//! A [`Tween`] does not read a clock. The owner feeds it elapsed time through
//! [`Tween::advance`], which keeps animations deterministic under test and lets
//! the host decide where frame time comes from.

use std::time::Duration;

use pulse_toggle_render::Color;

use super::easing::{Easing, ease};

/// Values that can be interpolated by a [`Tween`].
pub trait Interpolate: Copy {
    /// Interpolate from `self` toward `to` at eased progress `t` (0.0 to 1.0).
    fn interpolate(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Color {
    /// Channel-wise ARGB interpolation.
    #[inline]
    fn interpolate(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

/// An eased interpolation from one value to another over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
}

impl<T: Interpolate> Tween<T> {
    /// Create a linear tween.
    pub fn new(from: T, to: T, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::Linear,
            elapsed: Duration::ZERO,
        }
    }

    /// Set the easing curve using builder pattern.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The start value.
    #[inline]
    pub fn from(&self) -> T {
        self.from
    }

    /// The end value.
    #[inline]
    pub fn to(&self) -> T {
        self.to
    }

    /// Total duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Time fed so far, saturated at the duration.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Linear progress from 0.0 to 1.0. A zero-length tween is always complete.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Whether the tween has reached its end value.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// The current value. Exactly `to` once finished.
    pub fn value(&self) -> T {
        if self.is_finished() {
            self.to
        } else {
            self.from.interpolate(self.to, ease(self.easing, self.progress()))
        }
    }

    /// Feed elapsed time and return the new value.
    pub fn advance(&mut self, dt: Duration) -> T {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_linear() {
        let mut tween = Tween::new(0.0_f32, 10.0, Duration::from_millis(100));
        assert_eq!(tween.value(), 0.0);
        assert_eq!(tween.advance(Duration::from_millis(50)), 5.0);
        assert!(!tween.is_finished());
        assert_eq!(tween.advance(Duration::from_millis(80)), 10.0);
        assert!(tween.is_finished());
        assert_eq!(tween.elapsed(), Duration::from_millis(100));
    }

    #[test]
    fn test_tween_lands_exactly_on_target() {
        let mut tween =
            Tween::new(0.7_f32, 1.0, Duration::from_millis(150)).with_easing(Easing::Decelerate);
        tween.advance(Duration::from_secs(1));
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_tween_zero_duration() {
        let tween = Tween::new(1.0_f32, 2.5, Duration::ZERO);
        assert!(tween.is_finished());
        assert_eq!(tween.progress(), 1.0);
        assert_eq!(tween.value(), 2.5);
    }

    #[test]
    fn test_tween_eased() {
        let mut tween =
            Tween::new(1.0_f32, 0.0, Duration::from_millis(100)).with_easing(Easing::Decelerate);
        let halfway = tween.advance(Duration::from_millis(50));
        // 1 - (1 - 0.5^4) = 0.0625
        assert!((halfway - 0.0625).abs() < 1e-5);
    }

    #[test]
    fn test_color_tween() {
        let from = Color::from_hex("#AAAAAA").unwrap();
        let to = Color::MAGENTA;
        let mut tween = Tween::new(from, to, Duration::from_millis(300));
        let mid = tween.advance(Duration::from_millis(150));
        assert_eq!(mid.alpha(), 255);
        assert!(mid.red() > 0xAA && mid.red() < 0xFF);
        assert!(mid.green() < 0xAA);
        assert_eq!(tween.advance(Duration::from_millis(150)), to);
    }
}
