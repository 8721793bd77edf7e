//! Widgets provided by pulse-toggle.
//!
//! - [`ToggleButton`]: two-state icon toggle with animated transitions
//! - [`ToggleLabel`]: the label presentation a toggle carries
//! - [`VisualStyle`]: colors and icons per state

mod toggle_button;
mod toggle_label;
mod visual_style;

pub use toggle_button::{ToggleButton, ToggleButtonBuilder};
pub use toggle_label::{LabelMode, LabelTexts, ToggleLabel};
pub use visual_style::{DEFAULT_COLOR_CHECKED, DEFAULT_COLOR_UNCHECKED, VisualStyle};
