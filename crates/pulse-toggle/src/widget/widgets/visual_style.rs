//! Colors and icons of a toggle in each state.

use pulse_toggle_render::{Color, Icon};

/// Default tint while unchecked.
pub const DEFAULT_COLOR_UNCHECKED: Color = Color::LIGHT_GRAY;

/// Default tint while checked.
pub const DEFAULT_COLOR_CHECKED: Color = Color::MAGENTA;

/// The two colors and up to two icons a toggle switches between.
///
/// The checked icon is always present. Without an unchecked icon, the same
/// image is shown in both states and only the tint changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualStyle {
    color_unchecked: Color,
    color_checked: Color,
    icon_checked: Icon,
    icon_unchecked: Option<Icon>,
}

impl VisualStyle {
    /// Create a style with default colors and a single icon.
    pub fn new(icon_checked: Icon) -> Self {
        Self {
            color_unchecked: DEFAULT_COLOR_UNCHECKED,
            color_checked: DEFAULT_COLOR_CHECKED,
            icon_checked,
            icon_unchecked: None,
        }
    }

    /// Tint used while unchecked.
    #[inline]
    pub fn color_unchecked(&self) -> Color {
        self.color_unchecked
    }

    /// Set the unchecked tint.
    pub fn set_color_unchecked(&mut self, color: Color) {
        self.color_unchecked = color;
    }

    /// Tint used while checked.
    #[inline]
    pub fn color_checked(&self) -> Color {
        self.color_checked
    }

    /// Set the checked tint.
    pub fn set_color_checked(&mut self, color: Color) {
        self.color_checked = color;
    }

    /// Tint for a state.
    #[inline]
    pub fn color_for(&self, checked: bool) -> Color {
        if checked {
            self.color_checked
        } else {
            self.color_unchecked
        }
    }

    /// The checked icon, also used for the shadow.
    pub fn icon_checked(&self) -> &Icon {
        &self.icon_checked
    }

    /// Set the checked icon.
    pub fn set_icon_checked(&mut self, icon: Icon) {
        self.icon_checked = icon;
    }

    /// The unchecked icon, if distinct.
    pub fn icon_unchecked(&self) -> Option<&Icon> {
        self.icon_unchecked.as_ref()
    }

    /// Set or clear the unchecked icon.
    pub fn set_icon_unchecked(&mut self, icon: Option<Icon>) {
        self.icon_unchecked = icon;
    }

    /// Whether the image changes between states.
    #[inline]
    pub fn has_unchecked_icon(&self) -> bool {
        self.icon_unchecked.is_some()
    }

    /// Icon for a state.
    pub fn icon_for(&self, checked: bool) -> &Icon {
        match (&self.icon_unchecked, checked) {
            (Some(unchecked), false) => unchecked,
            _ => &self.icon_checked,
        }
    }
}
