//! Label presentation for a toggle.
//!
//! A toggle may carry a text per state. How a state change reaches the label
//! depends on the [`LabelMode`]:
//!
//! - [`LabelMode::Static`]: one surface, text and color swap when the color
//!   transition ends
//! - [`LabelMode::Crossfade`]: two surfaces, an animated change fades the old
//!   text out while the new one fades in
//!
//! In both modes the label color is the arrival color, applied when the color
//! transition ends. It is never interpolated.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use pulse_toggle_core::ConfigError;
use pulse_toggle_render::{Color, LabelLayer};

use crate::widget::animation::{Crossfade, CrossfadeState};

/// How text changes reach the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelMode {
    /// Swap text in place.
    Static,
    /// Fade between old and new text on animated changes.
    #[default]
    Crossfade,
}

impl LabelMode {
    /// The configuration spelling of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Crossfade => "crossfade",
        }
    }
}

impl fmt::Display for LabelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "crossfade" => Ok(Self::Crossfade),
            _ => Err(ConfigError::InvalidValue {
                attribute: "label_mode",
                value: s.to_string(),
            }),
        }
    }
}

/// The texts shown in each state.
///
/// When only one text is set it is used for both states. When neither is set
/// the label is hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTexts {
    checked: Option<String>,
    unchecked: Option<String>,
}

impl LabelTexts {
    /// Create from optional per-state texts.
    pub fn new(checked: Option<String>, unchecked: Option<String>) -> Self {
        Self { checked, unchecked }
    }

    /// The same text in both states.
    pub fn same(text: impl Into<String>) -> Self {
        Self {
            checked: Some(text.into()),
            unchecked: None,
        }
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.checked.is_none() && self.unchecked.is_none()
    }

    /// The text to show in a state.
    pub fn text_for(&self, checked: bool) -> Option<&str> {
        let (own, other) = if checked {
            (&self.checked, &self.unchecked)
        } else {
            (&self.unchecked, &self.checked)
        };
        own.as_deref().or(other.as_deref())
    }
}

/// The label surfaces of a toggle and the logic that drives them.
#[derive(Debug, Clone)]
pub struct ToggleLabel {
    mode: LabelMode,
    texts: LabelTexts,
    primary: LabelLayer,
    outgoing: LabelLayer,
    fade: Crossfade,
}

impl ToggleLabel {
    /// Create a hidden label. Call [`show`](Self::show) to populate it.
    pub fn new(mode: LabelMode, texts: LabelTexts) -> Self {
        Self {
            mode,
            texts,
            primary: LabelLayer::new(),
            outgoing: LabelLayer::new(),
            fade: Crossfade::new(),
        }
    }

    /// The presentation mode.
    #[inline]
    pub fn mode(&self) -> LabelMode {
        self.mode
    }

    /// The per-state texts.
    pub fn texts(&self) -> &LabelTexts {
        &self.texts
    }

    /// The surface holding the current text.
    pub fn primary(&self) -> &LabelLayer {
        &self.primary
    }

    /// The surface holding the text being faded out. Hidden when idle.
    pub fn outgoing(&self) -> &LabelLayer {
        &self.outgoing
    }

    /// The current text.
    pub fn text(&self) -> &str {
        self.primary.text()
    }

    /// Whether any label is shown.
    pub fn is_visible(&self) -> bool {
        self.primary.is_visible()
    }

    /// Whether a crossfade is in flight.
    #[inline]
    pub fn is_fading(&self) -> bool {
        self.fade.is_running()
    }

    /// Change the mode and re-apply the state immediately.
    pub(crate) fn set_mode(&mut self, mode: LabelMode, checked: bool, color: Color) {
        self.mode = mode;
        self.show(checked, color);
    }

    /// Change the texts and re-apply the state immediately.
    pub(crate) fn set_texts(&mut self, texts: LabelTexts, checked: bool, color: Color) {
        self.texts = texts;
        self.show(checked, color);
    }

    /// Show a state without animation, ending any crossfade.
    pub(crate) fn show(&mut self, checked: bool, color: Color) {
        self.settle();
        self.primary.set_text(self.texts.text_for(checked).unwrap_or_default());
        self.primary.set_text_color(color);
        self.primary.set_visible(!self.texts.is_empty());
    }

    /// An animated change toward `checked` has started.
    pub(crate) fn begin(&mut self, checked: bool) {
        if self.mode == LabelMode::Static {
            return;
        }

        self.settle();
        let Some(next) = self.texts.text_for(checked) else {
            return;
        };
        if next == self.primary.text() {
            return;
        }

        self.outgoing.set_text(self.primary.text());
        self.outgoing.set_text_color(self.primary.text_color());
        self.outgoing.set_opacity(1.0);
        self.outgoing.set_visible(true);
        self.primary.set_text(next);
        self.primary.set_opacity(0.0);
        self.fade.start();
    }

    /// The color transition toward `checked` has ended.
    pub(crate) fn finish(&mut self, checked: bool, color: Color) {
        self.primary.set_text_color(color);
        if self.mode == LabelMode::Static || !self.fade.is_running() {
            self.primary.set_text(self.texts.text_for(checked).unwrap_or_default());
        }
    }

    /// Feed elapsed time. Returns `true` while a crossfade is in flight.
    pub(crate) fn advance(&mut self, dt: Duration) -> bool {
        if !self.fade.is_running() {
            return false;
        }

        match self.fade.advance(dt) {
            state @ CrossfadeState::Running { .. } => {
                self.outgoing.set_opacity(state.outgoing_opacity());
                self.primary.set_opacity(state.incoming_opacity());
                true
            }
            CrossfadeState::Idle => {
                self.settle();
                false
            }
        }
    }

    /// Clear the dirty flags of both surfaces, returning whether either was set.
    pub(crate) fn take_dirty(&mut self) -> bool {
        let primary = self.primary.take_dirty();
        let outgoing = self.outgoing.take_dirty();
        primary || outgoing
    }

    /// Snap a running crossfade to its end.
    fn settle(&mut self) {
        self.fade.stop();
        self.outgoing.set_visible(false);
        self.outgoing.set_opacity(0.0);
        self.primary.set_opacity(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn like_texts() -> LabelTexts {
        LabelTexts::new(Some("Liked".into()), Some("Like".into()))
    }

    #[test]
    fn test_label_mode_parse() {
        assert_eq!("static".parse::<LabelMode>().unwrap(), LabelMode::Static);
        assert_eq!(" Crossfade ".parse::<LabelMode>().unwrap(), LabelMode::Crossfade);
        let err = "slide".parse::<LabelMode>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { attribute: "label_mode", .. }));
        assert_eq!(LabelMode::default(), LabelMode::Crossfade);
    }

    #[test]
    fn test_texts_mirror() {
        let only_checked = LabelTexts::new(Some("On".into()), None);
        assert_eq!(only_checked.text_for(true), Some("On"));
        assert_eq!(only_checked.text_for(false), Some("On"));

        let only_unchecked = LabelTexts::new(None, Some("Off".into()));
        assert_eq!(only_unchecked.text_for(true), Some("Off"));

        assert!(LabelTexts::default().is_empty());
        assert_eq!(LabelTexts::default().text_for(true), None);
    }

    #[test]
    fn test_hidden_without_texts() {
        let mut label = ToggleLabel::new(LabelMode::Crossfade, LabelTexts::default());
        label.show(false, Color::LIGHT_GRAY);
        assert!(!label.is_visible());
        label.begin(true);
        assert!(!label.is_fading());
    }

    #[test]
    fn test_static_swaps_at_finish() {
        let mut label = ToggleLabel::new(LabelMode::Static, like_texts());
        label.show(false, Color::LIGHT_GRAY);
        assert_eq!(label.text(), "Like");

        label.begin(true);
        assert_eq!(label.text(), "Like");
        assert!(!label.is_fading());

        label.finish(true, Color::MAGENTA);
        assert_eq!(label.text(), "Liked");
        assert_eq!(label.primary().text_color(), Color::MAGENTA);
    }

    #[test]
    fn test_crossfade() {
        let mut label = ToggleLabel::new(LabelMode::Crossfade, like_texts());
        label.show(false, Color::LIGHT_GRAY);

        label.begin(true);
        assert!(label.is_fading());
        assert_eq!(label.text(), "Liked");
        assert_eq!(label.primary().opacity(), 0.0);
        assert_eq!(label.outgoing().text(), "Like");
        assert_eq!(label.outgoing().opacity(), 1.0);
        assert!(label.outgoing().is_visible());

        assert!(label.advance(Duration::from_millis(150)));
        assert_eq!(label.primary().opacity(), 0.5);
        assert_eq!(label.outgoing().opacity(), 0.5);

        assert!(!label.advance(Duration::from_millis(150)));
        assert_eq!(label.primary().opacity(), 1.0);
        assert!(!label.outgoing().is_visible());

        label.finish(true, Color::MAGENTA);
        assert_eq!(label.primary().text_color(), Color::MAGENTA);
    }

    #[test]
    fn test_crossfade_same_text_is_instant() {
        let mut label = ToggleLabel::new(LabelMode::Crossfade, LabelTexts::same("Favorite"));
        label.show(false, Color::LIGHT_GRAY);
        label.begin(true);
        assert!(!label.is_fading());
        assert_eq!(label.text(), "Favorite");
    }

    #[test]
    fn test_new_crossfade_snaps_running_one() {
        let mut label = ToggleLabel::new(LabelMode::Crossfade, like_texts());
        label.show(false, Color::LIGHT_GRAY);
        label.begin(true);
        label.advance(Duration::from_millis(100));

        label.begin(false);
        assert!(label.is_fading());
        assert_eq!(label.outgoing().text(), "Liked");
        assert_eq!(label.outgoing().opacity(), 1.0);
        assert_eq!(label.text(), "Like");
    }

    #[test]
    fn test_show_ends_crossfade() {
        let mut label = ToggleLabel::new(LabelMode::Crossfade, like_texts());
        label.show(false, Color::LIGHT_GRAY);
        label.begin(true);
        label.show(false, Color::LIGHT_GRAY);
        assert!(!label.is_fading());
        assert_eq!(label.text(), "Like");
        assert_eq!(label.primary().opacity(), 1.0);
        assert!(!label.outgoing().is_visible());
    }
}
