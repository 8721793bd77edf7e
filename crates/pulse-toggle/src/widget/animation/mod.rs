//! Animation primitives for pulse-toggle.
//!
//! This module provides easing functions, a frame-driven [`Tween`], and the
//! animators a toggle is built from:
//!
//! - [`ColorTransition`]: icon tint between the two style colors
//! - [`ShadowPulse`]: scale-up and fade-out of the shadow icon
//! - [`PressFeedback`]: icon scale while a pointer is held
//! - [`Crossfade`]: label swap timing
//!
//! None of them read a clock. Time enters through `advance(dt)`, and
//! cancellation is reported synchronously by the call that cancels.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use pulse_toggle::widget::animation::{Easing, Tween};
//!
//! let mut tween = Tween::new(1.0_f32, 2.5, Duration::from_millis(500))
//!     .with_easing(Easing::Decelerate);
//! tween.advance(Duration::from_millis(500));
//! assert_eq!(tween.value(), 2.5);
//! ```

mod color_transition;
mod crossfade;
mod easing;
mod handle;
mod press_feedback;
mod shadow_pulse;
mod tween;

pub use color_transition::{COLOR_TRANSITION_DURATION, ColorTransition, ColorTransitionEnd};
pub use crossfade::{CROSSFADE_DURATION, Crossfade, CrossfadeState};
pub use easing::{Easing, ease, lerp_eased};
pub use handle::{AnimationEnd, AnimationHandle};
pub use press_feedback::{PRESS_DURATION, PRESSED_SCALE, PressFeedback};
pub use shadow_pulse::{SHADOW_PULSE_DURATION, SHADOW_PULSE_SCALE, ShadowPulse};
pub use tween::{Interpolate, Tween};
