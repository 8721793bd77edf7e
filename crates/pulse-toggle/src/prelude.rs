//! Prelude module for pulse-toggle.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use pulse_toggle::prelude::*;
//! ```

// ============================================================================
// Toggle
// ============================================================================

pub use crate::widget::widgets::{LabelMode, ToggleButton, ToggleButtonBuilder, VisualStyle};
pub use crate::widget::{Checkable, PointerEvent};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::{ToggleAttributes, ToggleError};
pub use pulse_toggle_core::ConfigError;

// ============================================================================
// Rendering Model
// ============================================================================

pub use pulse_toggle_render::{Color, Icon, IconLayer, LabelLayer};

// ============================================================================
// Feedback
// ============================================================================

pub use pulse_toggle_multimedia::{FeedbackCue, RecordingCue, SilentCue, SoundEffect};
