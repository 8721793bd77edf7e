//! pulse-toggle - an animated two-state icon toggle.
//!
//! This is the main umbrella crate that re-exports all public APIs.
//!
//! A [`ToggleButton`](widget::widgets::ToggleButton) shows an icon, a shadow
//! copy of that icon and an optional label. Switching state animates the icon
//! tint, pulses the shadow when becoming checked, and notifies a listener
//! exactly once per accepted change, even when the listener itself changes the
//! state again.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use pulse_toggle::prelude::*;
//!
//! # fn main() -> pulse_toggle::Result<()> {
//! let attributes = ToggleAttributes::from_toml_str(r#"
//!     icon_drawable = "name:heart"
//!     label_text_checked = "Liked"
//!     label_text_unchecked = "Like"
//! "#)?;
//! let mut button = ToggleButton::from_attributes(&attributes)?;
//!
//! button.handle_pointer(PointerEvent::Down);
//! button.handle_pointer(PointerEvent::Up);
//! assert!(button.is_checked());
//!
//! while button.advance(Duration::from_millis(16)) {}
//! assert_eq!(button.label().text(), "Liked");
//! # Ok(())
//! # }
//! ```

pub use pulse_toggle_core::*;

mod config;
mod error;
pub mod prelude;
pub mod widget;

pub use config::ToggleAttributes;
pub use error::{Result, ToggleError};

/// Rendering model: colors, icons and element surfaces.
pub mod render {
    pub use pulse_toggle_render::*;
}

/// Feedback cues.
pub mod multimedia {
    pub use pulse_toggle_multimedia::*;
}
