//! Transient icon scale while a pointer is held down.

use std::time::Duration;

use pulse_toggle_core::{logging::targets, toggle_trace};
use pulse_toggle_render::IconLayer;

use super::easing::Easing;
use super::tween::Tween;

/// Icon scale while pressed.
pub const PRESSED_SCALE: f32 = 0.7;

/// Length of the press and release animations.
pub const PRESS_DURATION: Duration = Duration::from_millis(150);

/// Scales the icon down on press and back up on release.
///
/// Each animation starts from the icon's current scale, so releasing halfway
/// through a press reverses smoothly. Only the icon's scale is touched.
#[derive(Debug, Clone)]
pub struct PressFeedback {
    pressed_scale: f32,
    duration: Duration,
    pressed: bool,
    tween: Option<Tween<f32>>,
}

impl PressFeedback {
    /// Create a press animator with the default scale and duration.
    pub fn new() -> Self {
        Self {
            pressed_scale: PRESSED_SCALE,
            duration: PRESS_DURATION,
            pressed: false,
            tween: None,
        }
    }

    /// Whether the icon is held down.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether a press or release animation is in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.tween.is_some()
    }

    /// Scale the icon down.
    pub fn press(&mut self, icon: &mut IconLayer) {
        self.pressed = true;
        self.animate_to(icon, self.pressed_scale);
    }

    /// Scale the icon back to rest.
    pub fn release(&mut self, icon: &mut IconLayer) {
        self.pressed = false;
        self.animate_to(icon, 1.0);
    }

    fn animate_to(&mut self, icon: &IconLayer, to: f32) {
        let from = icon.scale_x();
        toggle_trace!(target: targets::ANIMATION, from, to, "press feedback");
        self.tween = Some(Tween::new(from, to, self.duration).with_easing(Easing::Decelerate));
    }

    /// Feed elapsed time, writing the scale to `icon`.
    ///
    /// Returns `true` while an animation is still in flight.
    pub fn advance(&mut self, dt: Duration, icon: &mut IconLayer) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        icon.set_scale(tween.advance(dt));
        if tween.is_finished() {
            self.tween = None;
        }
        self.tween.is_some()
    }
}

impl Default for PressFeedback {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut icon = IconLayer::new();
        let mut press = PressFeedback::new();

        press.press(&mut icon);
        assert!(press.is_pressed());
        assert!(press.advance(Duration::from_millis(75), &mut icon));
        assert!(icon.scale_x() < 1.0 && icon.scale_x() > PRESSED_SCALE);
        assert!(!press.advance(Duration::from_millis(75), &mut icon));
        assert_eq!(icon.scale_x(), PRESSED_SCALE);
        assert_eq!(icon.scale_y(), PRESSED_SCALE);

        press.release(&mut icon);
        assert!(!press.is_pressed());
        press.advance(PRESS_DURATION, &mut icon);
        assert_eq!(icon.scale_x(), 1.0);
        assert!(!press.is_running());
    }

    #[test]
    fn test_release_mid_press_starts_from_current_scale() {
        let mut icon = IconLayer::new();
        let mut press = PressFeedback::new();

        press.press(&mut icon);
        press.advance(Duration::from_millis(30), &mut icon);
        let mid = icon.scale_x();

        press.release(&mut icon);
        press.advance(Duration::from_millis(1), &mut icon);
        assert!(icon.scale_x() >= mid);
        assert!(icon.scale_x() < 1.0);
    }

    #[test]
    fn test_idle_advance() {
        let mut icon = IconLayer::new();
        let mut press = PressFeedback::new();
        assert!(!press.advance(Duration::from_millis(16), &mut icon));
        assert_eq!(icon.scale_x(), 1.0);
    }
}
