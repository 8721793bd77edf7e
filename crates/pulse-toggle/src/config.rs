//! Construction-time attributes.
//!
//! [`ToggleAttributes`] mirrors the attribute set a host layout file would
//! carry for a toggle. It deserializes from TOML:
//!
//! ```toml
//! icon_drawable = "name:heart"
//! unchecked_drawable = "icons/heart_outline.svg"
//! color_unchecked = "#AAAAAA"
//! color_checked = "#FF00FF"
//! label_text_checked = "Liked"
//! label_text_unchecked = "Like"
//! label_mode = "crossfade"
//! checked = false
//! ```
//!
//! Icon references starting with `name:` select a named resource; anything
//! else is a file path. Colors accept `#RRGGBB` and `#AARRGGBB`.

use std::path::Path;

use pulse_toggle_core::{ConfigError, ConfigResult, logging::targets, toggle_debug};
use pulse_toggle_render::{Color, Icon};
use serde::Deserialize;

use crate::error::Result;
use crate::widget::widgets::{LabelMode, ToggleButton, ToggleButtonBuilder};

/// Raw toggle attributes, validated when turned into a builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleAttributes {
    /// Tint while unchecked.
    pub color_unchecked: Option<String>,
    /// Tint while checked.
    pub color_checked: Option<String>,
    /// Checked icon reference. Required.
    pub icon_drawable: Option<String>,
    /// Unchecked icon reference.
    pub unchecked_drawable: Option<String>,
    /// Label text while checked.
    pub label_text_checked: Option<String>,
    /// Label text while unchecked.
    pub label_text_unchecked: Option<String>,
    /// `"static"` or `"crossfade"`.
    pub label_mode: Option<String>,
    /// Initial state.
    pub checked: bool,
}

impl ToggleAttributes {
    /// Parse attributes from a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse attributes from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        toggle_debug!(target: targets::CORE, path = %path.display(), "loading toggle attributes");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate the attributes and turn them into a builder.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingCheckedIcon`] without `icon_drawable`
    /// - [`ConfigError::InvalidColor`] for a malformed color
    /// - [`ConfigError::InvalidValue`] for an unknown label mode
    pub fn to_builder(&self) -> ConfigResult<ToggleButtonBuilder> {
        let icon = self
            .icon_drawable
            .as_deref()
            .map(Icon::from_reference)
            .ok_or(ConfigError::MissingCheckedIcon)?;

        let mut builder = ToggleButton::builder().icon(icon).checked(self.checked);

        if let Some(reference) = &self.unchecked_drawable {
            builder = builder.unchecked_icon(Icon::from_reference(reference));
        }
        if let Some(value) = &self.color_unchecked {
            builder = builder.color_unchecked(parse_color("color_unchecked", value)?);
        }
        if let Some(value) = &self.color_checked {
            builder = builder.color_checked(parse_color("color_checked", value)?);
        }
        if let Some(text) = &self.label_text_checked {
            builder = builder.label_text_checked(text.clone());
        }
        if let Some(text) = &self.label_text_unchecked {
            builder = builder.label_text_unchecked(text.clone());
        }
        if let Some(mode) = &self.label_mode {
            builder = builder.label_mode(mode.parse::<LabelMode>()?);
        }

        Ok(builder)
    }
}

fn parse_color(attribute: &'static str, value: &str) -> ConfigResult<Color> {
    Color::from_hex(value).ok_or_else(|| ConfigError::InvalidColor {
        attribute,
        value: value.to_string(),
    })
}

impl ToggleButton {
    /// Create a toggle from attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] (wrapped in [`ToggleError`](crate::ToggleError))
    /// when the attributes are incomplete or malformed.
    pub fn from_attributes(attributes: &ToggleAttributes) -> Result<Self> {
        attributes.to_builder()?.build()
    }
}
