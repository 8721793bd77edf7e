//! Rendering model for pulse-toggle.
//!
//! This crate holds the value types shared between the toggle control and the
//! host toolkit that draws it:
//!
//! - [`Color`]: packed ARGB colors with channel-wise interpolation
//! - [`Icon`]: image identities (named resources or file paths)
//! - [`IconLayer`] / [`LabelLayer`]: retained surfaces the control writes to
//!   and the host reads from each frame
//!
//! # Example
//!
//! ```
//! use pulse_toggle_render::{Color, Icon, IconLayer};
//!
//! let mut icon = IconLayer::new();
//! icon.set_image(Icon::from_name("heart"));
//! icon.set_tint(Color::from_hex("#FF00FF").unwrap());
//! assert_eq!(icon.tint(), Color::MAGENTA);
//! ```

pub mod icon;
pub mod layer;
mod types;

pub use icon::{Icon, IconSource};
pub use layer::{IconLayer, LabelLayer};
pub use types::{Color, ParseColorError};
