//! Retained element surfaces.
//!
//! A toggle control is composed of a few elements: the icon, the shadow icon
//! drawn behind it, and one or two labels. Each element is a small retained
//! surface holding exactly the properties the control animates. The host
//! toolkit draws them; the control only ever writes to them.
//!
//! Every setter marks the surface dirty when the value actually changes. Call
//! [`IconLayer::take_dirty`] / [`LabelLayer::take_dirty`] once per frame to
//! decide whether a repaint is needed.

use crate::icon::Icon;
use crate::types::Color;

/// An icon surface with settable image, tint, scale, opacity and visibility.
///
/// Equality compares what is drawn and ignores the dirty flag.
#[derive(Debug, Clone)]
pub struct IconLayer {
    image: Option<Icon>,
    tint: Color,
    scale_x: f32,
    scale_y: f32,
    opacity: f32,
    visible: bool,
    dirty: bool,
}

impl IconLayer {
    /// Create a visible, untinted surface at rest scale.
    pub fn new() -> Self {
        Self {
            image: None,
            tint: Color::TRANSPARENT,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            visible: true,
            dirty: true,
        }
    }

    /// The image currently shown.
    pub fn image(&self) -> Option<&Icon> {
        self.image.as_ref()
    }

    /// Swap the image.
    pub fn set_image(&mut self, image: Icon) {
        if self.image.as_ref() != Some(&image) {
            self.image = Some(image);
            self.dirty = true;
        }
    }

    /// The tint applied to the image.
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Set the tint applied to the image.
    pub fn set_tint(&mut self, tint: Color) {
        if self.tint != tint {
            self.tint = tint;
            self.dirty = true;
        }
    }

    /// Horizontal scale factor.
    pub fn scale_x(&self) -> f32 {
        self.scale_x
    }

    /// Vertical scale factor.
    pub fn scale_y(&self) -> f32 {
        self.scale_y
    }

    /// Set both scale factors to the same value.
    pub fn set_scale(&mut self, scale: f32) {
        self.set_scale_xy(scale, scale);
    }

    /// Set the scale factors independently.
    pub fn set_scale_xy(&mut self, scale_x: f32, scale_y: f32) {
        if self.scale_x != scale_x || self.scale_y != scale_y {
            self.scale_x = scale_x;
            self.scale_y = scale_y;
            self.dirty = true;
        }
    }

    /// Opacity from 0.0 (transparent) to 1.0 (opaque).
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the opacity, clamped to `0.0..=1.0`.
    pub fn set_opacity(&mut self, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        if self.opacity != opacity {
            self.opacity = opacity;
            self.dirty = true;
        }
    }

    /// Whether the surface is drawn at all.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the surface.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.dirty = true;
        }
    }

    /// Check whether anything changed since the last [`take_dirty`](Self::take_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl PartialEq for IconLayer {
    fn eq(&self, other: &Self) -> bool {
        self.image == other.image
            && self.tint == other.tint
            && self.scale_x == other.scale_x
            && self.scale_y == other.scale_y
            && self.opacity == other.opacity
            && self.visible == other.visible
    }
}

impl Default for IconLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// A text surface with settable text, color, opacity and visibility.
///
/// Equality compares what is drawn and ignores the dirty flag.
#[derive(Debug, Clone)]
pub struct LabelLayer {
    text: String,
    text_color: Color,
    opacity: f32,
    visible: bool,
    dirty: bool,
}

impl LabelLayer {
    /// Create an empty, hidden label.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            text_color: Color::BLACK,
            opacity: 1.0,
            visible: false,
            dirty: true,
        }
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the displayed text.
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.dirty = true;
        }
    }

    /// The text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Set the text color.
    pub fn set_text_color(&mut self, color: Color) {
        if self.text_color != color {
            self.text_color = color;
            self.dirty = true;
        }
    }

    /// Opacity from 0.0 (transparent) to 1.0 (opaque).
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the opacity, clamped to `0.0..=1.0`.
    pub fn set_opacity(&mut self, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        if self.opacity != opacity {
            self.opacity = opacity;
            self.dirty = true;
        }
    }

    /// Whether the label is drawn at all.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the label.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.dirty = true;
        }
    }

    /// Check whether anything changed since the last [`take_dirty`](Self::take_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl PartialEq for LabelLayer {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.text_color == other.text_color
            && self.opacity == other.opacity
            && self.visible == other.visible
    }
}

impl Default for LabelLayer {
    fn default() -> Self {
        Self::new()
    }
}
