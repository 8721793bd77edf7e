//! Widget system for pulse-toggle.
//!
//! This module provides:
//!
//! - [`animation`]: easing, tweens and the animators a toggle is built from
//! - [`widgets`]: the toggle itself and its presentation pieces
//! - [`PointerEvent`]: pointer input delivered by the host
//! - [`Checkable`]: the two-state capability
//!
//! # Overview
//!
//! A widget here is a retained element model. It owns the surfaces it
//! animates and exposes them read-only; the host toolkit draws them. Time is
//! supplied by the host through `advance(dt)`, and every call happens on the
//! UI thread.

pub mod animation;
mod events;
mod traits;
pub mod widgets;

pub use events::PointerEvent;
pub use traits::Checkable;
