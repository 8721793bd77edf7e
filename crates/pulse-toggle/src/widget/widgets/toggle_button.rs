//! ToggleButton widget implementation.
//!
//! This module provides [`ToggleButton`], a two-state icon control that
//! animates between an unchecked and a checked look:
//!
//! - the icon tint moves between the two style colors
//! - a shadow copy of the icon pulses outward when the control becomes checked
//! - the icon shrinks slightly while a pointer holds it down
//! - an optional label follows the state
//!
//! The control is a retained element model. It never draws; the host reads
//! [`icon_layer`](ToggleButton::icon_layer), [`shadow_layer`](ToggleButton::shadow_layer)
//! and [`label`](ToggleButton::label) each frame and calls
//! [`advance`](ToggleButton::advance) with the elapsed time.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use pulse_toggle::prelude::*;
//!
//! let mut button = ToggleButton::builder()
//!     .icon(Icon::from_name("heart"))
//!     .color_unchecked(Color::from_hex("#AAAAAA").unwrap())
//!     .color_checked(Color::from_hex("#FF00FF").unwrap())
//!     .build()
//!     .unwrap();
//!
//! button.set_on_checked_change_listener(|_button, checked| {
//!     println!("checked: {checked}");
//! });
//!
//! button.toggle();
//! while button.advance(Duration::from_millis(16)) {}
//! assert_eq!(button.icon_layer().tint(), Color::MAGENTA);
//! ```

use std::fmt;
use std::time::Duration;

use pulse_toggle_core::logging::{span_names, targets};
use pulse_toggle_core::{
    ConfigError, PerfSpan, ReentrancyGuard, Slot, SlotId, toggle_debug, toggle_trace, toggle_warn,
};
use pulse_toggle_multimedia::{FeedbackCue, SilentCue, SoundEffect};
use pulse_toggle_render::{Color, Icon, IconLayer};

use super::toggle_label::{LabelMode, LabelTexts, ToggleLabel};
use super::visual_style::VisualStyle;
use crate::error::Result;
use crate::widget::animation::{ColorTransition, PressFeedback, ShadowPulse};
use crate::widget::events::PointerEvent;
use crate::widget::traits::Checkable;

/// Callback invoked after an accepted checked-state change.
type CheckedChangeCallback = dyn FnMut(&mut ToggleButton, bool);

/// Callback invoked when the control is clicked.
type ClickCallback = dyn FnMut(&mut ToggleButton);

/// A two-state icon toggle with animated transitions.
///
/// # State changes
///
/// All state changes go through [`set_checked_with`](Self::set_checked_with).
/// A request for the state the control is already in is ignored unless
/// `force_update` is set. An accepted change updates the visuals, animated or
/// not, and then notifies the checked-change listener once.
///
/// # Notifications
///
/// The listener receives the control itself, so it may change the state again.
/// Such nested changes take effect immediately but do not notify a second time
/// while the outer notification is still running.
pub struct ToggleButton {
    /// The single source of truth for the checked state.
    checked: bool,

    /// Colors and icons for both states.
    style: VisualStyle,

    /// The main icon surface.
    icon: IconLayer,

    /// The shadow icon drawn behind the main icon.
    shadow: IconLayer,

    /// Label surfaces and their presentation logic.
    label: ToggleLabel,

    /// Tint animation of the main icon.
    color_transition: ColorTransition,

    /// Pulse animation of the shadow icon.
    shadow_pulse: ShadowPulse,

    /// Scale animation of the main icon while pressed.
    press: PressFeedback,

    /// Whether the pointer that went down is still over the control.
    pointer_inside: bool,

    /// Checked-change listener.
    on_checked_changed: Slot<CheckedChangeCallback>,

    /// Click listener.
    on_click: Slot<ClickCallback>,

    /// Set while the checked-change listener runs.
    broadcasting: ReentrancyGuard,

    /// Fallback cue for clicks nobody handled.
    feedback: Box<dyn FeedbackCue>,
}

impl ToggleButton {
    /// Create an unchecked toggle with default colors and no label.
    pub fn new(icon: Icon) -> Self {
        Self::from_parts(
            VisualStyle::new(icon),
            ToggleLabel::new(LabelMode::default(), LabelTexts::default()),
            false,
            Box::new(SilentCue),
        )
    }

    /// Start building a toggle.
    pub fn builder() -> ToggleButtonBuilder {
        ToggleButtonBuilder::new()
    }

    fn from_parts(
        style: VisualStyle,
        label: ToggleLabel,
        checked: bool,
        feedback: Box<dyn FeedbackCue>,
    ) -> Self {
        let mut button = Self {
            checked,
            style,
            icon: IconLayer::new(),
            shadow: IconLayer::new(),
            label,
            color_transition: ColorTransition::new(),
            shadow_pulse: ShadowPulse::new(),
            press: PressFeedback::new(),
            pointer_inside: false,
            on_checked_changed: Slot::new(),
            on_click: Slot::new(),
            broadcasting: ReentrancyGuard::new(),
            feedback,
        };

        button.shadow.set_image(button.style.icon_checked().clone());
        ShadowPulse::rest(&mut button.shadow, button.style.color_checked());
        button.apply_terminal_visuals(checked);
        button.label.show(checked, button.style.color_for(checked));
        toggle_debug!(target: targets::STATE, checked, "toggle created");
        button
    }

    // =========================================================================
    // Check State
    // =========================================================================

    /// Check if the toggle is currently checked.
    #[inline]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state without animation.
    pub fn set_checked(&mut self, checked: bool) {
        self.set_checked_with(checked, false, false);
    }

    /// Set the checked state, optionally animated.
    pub fn set_checked_animated(&mut self, checked: bool, animate: bool) {
        self.set_checked_with(checked, animate, false);
    }

    /// Set the checked state.
    ///
    /// When `checked` equals the current state and `force_update` is false,
    /// nothing happens: no animation restarts and no listener runs. Otherwise
    /// the state is stored, the visuals move to it, and the checked-change
    /// listener is notified.
    ///
    /// With `animate`, the tint animates from the departure color to the
    /// arrival color, and becoming checked pulses the shadow. Any tint
    /// animation still in flight is canceled first and its end state applied.
    /// Without `animate`, the arrival visuals are applied at once.
    ///
    /// `force_update` is the way to make [`set_color_checked`](Self::set_color_checked)
    /// and friends visible without changing state.
    pub fn set_checked_with(&mut self, checked: bool, animate: bool, force_update: bool) {
        if !force_update && self.checked == checked {
            toggle_trace!(target: targets::STATE, checked, "redundant update absorbed");
            return;
        }

        let _span = PerfSpan::new(span_names::TRANSITION);
        toggle_debug!(
            target: targets::STATE,
            from = self.checked,
            to = checked,
            animate,
            force_update,
            "checked state changed"
        );
        self.checked = checked;

        if animate {
            self.animate_to(checked);
        } else {
            self.jump_to(checked);
        }

        self.notify_checked_changed();
    }

    /// Flip the state with animation.
    pub fn toggle(&mut self) {
        self.set_checked_with(!self.checked, true, false);
    }

    fn animate_to(&mut self, checked: bool) {
        self.cancel_color_transition();

        self.icon.set_image(self.style.icon_for(checked).clone());

        let checked_color = self.style.color_checked();
        if checked {
            self.shadow_pulse.start(&mut self.shadow, checked_color);
        } else {
            self.shadow_pulse.cancel(&mut self.shadow, checked_color);
        }

        self.color_transition.start(
            &mut self.icon,
            self.style.color_for(!checked),
            self.style.color_for(checked),
            checked,
        );
        self.label.begin(checked);
    }

    fn jump_to(&mut self, checked: bool) {
        self.cancel_color_transition();

        // A pulse started by an earlier animated check may finish on its own.
        if !checked || !self.shadow_pulse.is_running() {
            self.shadow_pulse.cancel(&mut self.shadow, self.style.color_checked());
        }

        self.apply_terminal_visuals(checked);
        self.label.show(checked, self.style.color_for(checked));
    }

    fn cancel_color_transition(&mut self) {
        if let Some(end) = self.color_transition.cancel() {
            self.apply_terminal_visuals(end.target_checked);
        }
    }

    /// The visuals a tint animation toward `checked` ends on.
    fn apply_terminal_visuals(&mut self, checked: bool) {
        let color = self.style.color_for(checked);
        self.icon.set_tint(color);
        self.icon.set_image(self.style.icon_for(checked).clone());
        self.label.finish(checked, color);
    }

    /// A listener that panics is dropped; the guard clears as the panic
    /// unwinds, so a later listener is notified normally.
    fn notify_checked_changed(&mut self) {
        let Some(_scope) = self.broadcasting.enter() else {
            toggle_trace!(target: targets::STATE, "re-entrant notification absorbed");
            return;
        };

        let _span = PerfSpan::new(span_names::NOTIFY);
        let checked = self.checked;
        if let Some(mut lent) = self.on_checked_changed.lend() {
            (lent.callback())(self, checked);
            self.on_checked_changed.restore(lent);
        }
    }

    // =========================================================================
    // Style
    // =========================================================================

    /// The current colors and icons.
    pub fn style(&self) -> &VisualStyle {
        &self.style
    }

    /// Set the checked tint.
    ///
    /// Takes effect on the next applied state change, or immediately with
    /// `set_checked_with(self.is_checked(), false, true)`.
    pub fn set_color_checked(&mut self, color: Color) {
        self.style.set_color_checked(color);
    }

    /// Set the unchecked tint.
    ///
    /// Takes effect on the next applied state change.
    pub fn set_color_unchecked(&mut self, color: Color) {
        self.style.set_color_unchecked(color);
    }

    /// Set the checked icon.
    ///
    /// The shadow always shows this icon. The main icon shows it right away
    /// unless it is currently showing a distinct unchecked icon.
    pub fn set_icon_drawable(&mut self, icon: Icon) {
        self.shadow.set_image(icon.clone());
        if self.checked || !self.style.has_unchecked_icon() {
            self.icon.set_image(icon.clone());
        }
        self.style.set_icon_checked(icon);
    }

    /// Set or clear the unchecked icon.
    ///
    /// Takes effect on the next applied state change.
    pub fn set_unchecked_drawable(&mut self, icon: Option<Icon>) {
        self.style.set_icon_unchecked(icon);
    }

    // =========================================================================
    // Label
    // =========================================================================

    /// The label surfaces.
    pub fn label(&self) -> &ToggleLabel {
        &self.label
    }

    /// Replace the label texts. Applied immediately.
    pub fn set_label_texts(&mut self, checked: Option<String>, unchecked: Option<String>) {
        let color = self.style.color_for(self.checked);
        self.label
            .set_texts(LabelTexts::new(checked, unchecked), self.checked, color);
    }

    /// Change how the label follows state changes. Applied immediately.
    pub fn set_label_mode(&mut self, mode: LabelMode) {
        let color = self.style.color_for(self.checked);
        self.label.set_mode(mode, self.checked, color);
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Register the checked-change listener, replacing any previous one.
    ///
    /// The listener runs after every accepted state change, with the control
    /// and its new state.
    pub fn set_on_checked_change_listener<F>(&mut self, listener: F) -> SlotId
    where
        F: FnMut(&mut ToggleButton, bool) + 'static,
    {
        self.on_checked_changed.connect(Box::new(listener))
    }

    /// Remove the checked-change listener. Returns whether one was registered.
    pub fn clear_on_checked_change_listener(&mut self) -> bool {
        self.on_checked_changed.disconnect()
    }

    /// Register the click listener, replacing any previous one.
    ///
    /// A registered click listener consumes clicks, which suppresses the
    /// fallback feedback cue.
    pub fn set_on_click_listener<F>(&mut self, listener: F) -> SlotId
    where
        F: FnMut(&mut ToggleButton) + 'static,
    {
        self.on_click.connect(Box::new(listener))
    }

    /// Remove the click listener. Returns whether one was registered.
    pub fn clear_on_click_listener(&mut self) -> bool {
        self.on_click.disconnect()
    }

    /// Replace the fallback feedback cue.
    pub fn set_feedback_cue(&mut self, cue: impl FeedbackCue + 'static) {
        self.feedback = Box::new(cue);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Click the control.
    ///
    /// Toggles with animation, then runs the click listener. When no click
    /// listener consumed the click, the feedback cue plays instead.
    ///
    /// Returns whether a click listener consumed the click.
    pub fn perform_click(&mut self) -> bool {
        toggle_debug!(target: targets::INPUT, "click");
        self.toggle();

        let handled = match self.on_click.lend() {
            Some(mut lent) => {
                (lent.callback())(self);
                self.on_click.restore(lent);
                true
            }
            None => false,
        };

        if !handled {
            if let Err(err) = self.feedback.play(SoundEffect::Click) {
                toggle_warn!(target: targets::FEEDBACK, %err, "feedback cue failed");
            }
        }
        handled
    }

    /// Deliver a pointer event. Returns whether the control consumed it.
    ///
    /// Down scales the icon down; Up and Cancel scale it back. Up performs a
    /// click when the pointer stayed over the control since Down.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        toggle_trace!(target: targets::INPUT, ?event, "pointer event");
        match event {
            PointerEvent::Down => {
                self.pointer_inside = true;
                self.press.press(&mut self.icon);
                true
            }
            PointerEvent::Move { inside } => {
                if !self.press.is_pressed() {
                    return false;
                }
                if !inside {
                    self.pointer_inside = false;
                }
                true
            }
            PointerEvent::Up => {
                let click = self.press.is_pressed() && self.pointer_inside;
                self.release_pointer();
                if click {
                    self.perform_click();
                }
                true
            }
            PointerEvent::Cancel => {
                self.release_pointer();
                true
            }
        }
    }

    /// Whether a pointer is holding the control down.
    pub fn is_pressed(&self) -> bool {
        self.press.is_pressed()
    }

    fn release_pointer(&mut self) {
        self.pointer_inside = false;
        self.press.release(&mut self.icon);
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Step all animations by `dt`.
    ///
    /// Returns whether any animation is still in flight, so a host can stop
    /// scheduling frames once it returns `false`.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let _span = PerfSpan::new(span_names::ADVANCE);

        if let Some(end) = self.color_transition.advance(dt, &mut self.icon) {
            self.apply_terminal_visuals(end.target_checked);
        }
        self.shadow_pulse
            .advance(dt, &mut self.shadow, self.style.color_checked());
        self.press.advance(dt, &mut self.icon);
        self.label.advance(dt);

        self.is_animating()
    }

    /// Whether any animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.color_transition.is_running()
            || self.shadow_pulse.is_running()
            || self.press.is_running()
            || self.label.is_fading()
    }

    /// The tint animator.
    pub fn color_transition(&self) -> &ColorTransition {
        &self.color_transition
    }

    /// The shadow pulse animator.
    pub fn shadow_pulse(&self) -> &ShadowPulse {
        &self.shadow_pulse
    }

    // =========================================================================
    // Elements
    // =========================================================================

    /// The main icon surface.
    pub fn icon_layer(&self) -> &IconLayer {
        &self.icon
    }

    /// The shadow icon surface.
    pub fn shadow_layer(&self) -> &IconLayer {
        &self.shadow
    }

    /// Clear all dirty flags, returning whether a repaint is needed.
    pub fn take_dirty(&mut self) -> bool {
        let icon = self.icon.take_dirty();
        let shadow = self.shadow.take_dirty();
        let label = self.label.take_dirty();
        icon || shadow || label
    }
}

impl Checkable for ToggleButton {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) {
        self.set_checked_with(checked, false, false);
    }

    fn toggle(&mut self) {
        self.set_checked_with(!self.checked, true, false);
    }
}

impl fmt::Debug for ToggleButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleButton")
            .field("checked", &self.checked)
            .field("style", &self.style)
            .field("icon", &self.icon)
            .field("shadow", &self.shadow)
            .field("label", &self.label)
            .field("animating", &self.is_animating())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// ToggleButtonBuilder
// ============================================================================

/// Builder for creating a [`ToggleButton`].
///
/// Only the checked icon is required; [`build`](Self::build) fails without it.
#[derive(Default)]
pub struct ToggleButtonBuilder {
    icon: Option<Icon>,
    unchecked_icon: Option<Icon>,
    color_checked: Option<Color>,
    color_unchecked: Option<Color>,
    label_text_checked: Option<String>,
    label_text_unchecked: Option<String>,
    label_mode: LabelMode,
    checked: bool,
    feedback: Option<Box<dyn FeedbackCue>>,
}

impl ToggleButtonBuilder {
    /// Creates a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the checked icon, also used for the shadow.
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets a distinct icon for the unchecked state.
    pub fn unchecked_icon(mut self, icon: Icon) -> Self {
        self.unchecked_icon = Some(icon);
        self
    }

    /// Sets the checked tint.
    pub fn color_checked(mut self, color: Color) -> Self {
        self.color_checked = Some(color);
        self
    }

    /// Sets the unchecked tint.
    pub fn color_unchecked(mut self, color: Color) -> Self {
        self.color_unchecked = Some(color);
        self
    }

    /// Sets the label text shown while checked.
    pub fn label_text_checked(mut self, text: impl Into<String>) -> Self {
        self.label_text_checked = Some(text.into());
        self
    }

    /// Sets the label text shown while unchecked.
    pub fn label_text_unchecked(mut self, text: impl Into<String>) -> Self {
        self.label_text_unchecked = Some(text.into());
        self
    }

    /// Sets how the label follows state changes.
    pub fn label_mode(mut self, mode: LabelMode) -> Self {
        self.label_mode = mode;
        self
    }

    /// Sets the initial state.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Sets the fallback feedback cue.
    pub fn feedback_cue(mut self, cue: impl FeedbackCue + 'static) -> Self {
        self.feedback = Some(Box::new(cue));
        self
    }

    /// Plays click cues on the default audio output.
    ///
    /// # Errors
    ///
    /// Returns an error if no audio output device is available.
    #[cfg(feature = "audio-output")]
    pub fn audio_feedback(self) -> Result<Self> {
        let cue = pulse_toggle_multimedia::RodioCue::new()?;
        Ok(self.feedback_cue(cue))
    }

    /// Creates the toggle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCheckedIcon`] if no icon was set.
    pub fn build(self) -> Result<ToggleButton> {
        let icon = self.icon.ok_or(ConfigError::MissingCheckedIcon)?;

        let mut style = VisualStyle::new(icon);
        if let Some(color) = self.color_checked {
            style.set_color_checked(color);
        }
        if let Some(color) = self.color_unchecked {
            style.set_color_unchecked(color);
        }
        style.set_icon_unchecked(self.unchecked_icon);

        let label = ToggleLabel::new(
            self.label_mode,
            LabelTexts::new(self.label_text_checked, self.label_text_unchecked),
        );
        let feedback = self.feedback.unwrap_or_else(|| Box::new(SilentCue));

        Ok(ToggleButton::from_parts(style, label, self.checked, feedback))
    }
}

impl fmt::Debug for ToggleButtonBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleButtonBuilder")
            .field("icon", &self.icon)
            .field("unchecked_icon", &self.unchecked_icon)
            .field("color_checked", &self.color_checked)
            .field("color_unchecked", &self.color_unchecked)
            .field("label_text_checked", &self.label_text_checked)
            .field("label_text_unchecked", &self.label_text_unchecked)
            .field("label_mode", &self.label_mode)
            .field("checked", &self.checked)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use pulse_toggle_multimedia::RecordingCue;

    use super::*;
    use crate::error::ToggleError;
    use crate::widget::animation::{PRESSED_SCALE, SHADOW_PULSE_DURATION};

    fn heart() -> Icon {
        Icon::from_name("heart")
    }

    fn gray() -> Color {
        Color::from_hex("#AAAAAA").unwrap()
    }

    fn button() -> ToggleButton {
        ToggleButton::builder()
            .icon(heart())
            .color_unchecked(gray())
            .color_checked(Color::MAGENTA)
            .build()
            .unwrap()
    }

    fn settle(button: &mut ToggleButton) {
        while button.advance(Duration::from_millis(16)) {}
    }

    #[test]
    fn test_initial_state() {
        let button = button();
        assert!(!button.is_checked());
        assert_eq!(button.icon_layer().tint(), gray());
        assert_eq!(button.icon_layer().image(), Some(&heart()));
        assert_eq!(button.shadow_layer().image(), Some(&heart()));
        assert!(!button.shadow_layer().is_visible());
        assert_eq!(button.shadow_layer().tint(), Color::MAGENTA);
        assert!(!button.label().is_visible());
        assert!(!button.is_animating());
    }

    #[test]
    fn test_initially_checked() {
        let button = ToggleButton::builder()
            .icon(heart())
            .unchecked_icon(Icon::from_name("heart_outline"))
            .checked(true)
            .build()
            .unwrap();
        assert!(button.is_checked());
        assert_eq!(button.icon_layer().tint(), Color::MAGENTA);
        assert_eq!(button.icon_layer().image(), Some(&heart()));
    }

    #[test]
    fn test_build_without_icon_fails() {
        let err = ToggleButton::builder().build().unwrap_err();
        assert!(matches!(err, ToggleError::Config(ConfigError::MissingCheckedIcon)));
    }

    #[test]
    fn test_new_uses_defaults() {
        let button = ToggleButton::new(heart());
        assert_eq!(button.style().color_unchecked(), Color::LIGHT_GRAY);
        assert_eq!(button.style().color_checked(), Color::MAGENTA);
        assert_eq!(button.icon_layer().tint(), Color::LIGHT_GRAY);
    }

    #[test]
    fn test_set_checked_without_animation() {
        let mut button = button();
        button.set_checked(true);
        assert!(button.is_checked());
        assert_eq!(button.icon_layer().tint(), Color::MAGENTA);
        assert!(!button.is_animating());
        assert!(!button.shadow_layer().is_visible());
    }

    #[test]
    fn test_animated_check_pulses_shadow() {
        let mut button = button();
        button.set_checked_animated(true, true);

        assert!(button.color_transition().is_running());
        assert!(button.shadow_pulse().is_running());
        assert!(button.shadow_layer().is_visible());
        assert_eq!(button.icon_layer().tint(), gray());

        button.advance(SHADOW_PULSE_DURATION / 2);
        assert!(button.shadow_layer().scale_x() > 1.0);
        assert!(button.shadow_layer().opacity() < 1.0);

        settle(&mut button);
        assert_eq!(button.icon_layer().tint(), Color::MAGENTA);
        assert!(!button.shadow_layer().is_visible());
        assert_eq!(button.shadow_layer().scale_x(), 1.0);
        assert_eq!(button.shadow_layer().opacity(), 1.0);
    }

    #[test]
    fn test_animated_uncheck_has_no_pulse() {
        let mut button = button();
        button.set_checked(true);
        button.set_checked_animated(false, true);
        assert!(button.color_transition().is_running());
        assert!(!button.shadow_pulse().is_running());
        assert!(!button.shadow_layer().is_visible());
    }

    #[test]
    fn test_unchecked_icon_swaps_at_start() {
        let outline = Icon::from_name("heart_outline");
        let mut button = ToggleButton::builder()
            .icon(heart())
            .unchecked_icon(outline.clone())
            .build()
            .unwrap();
        assert_eq!(button.icon_layer().image(), Some(&outline));

        button.toggle();
        assert_eq!(button.icon_layer().image(), Some(&heart()));
        // The shadow always shows the checked icon
        assert_eq!(button.shadow_layer().image(), Some(&heart()));

        button.toggle();
        assert_eq!(button.icon_layer().image(), Some(&outline));
    }

    #[test]
    fn test_listener_notified_once_per_change() {
        let mut button = button();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let calls_clone = calls.clone();
        button.set_on_checked_change_listener(move |_button, checked| {
            calls_clone.lock().push(checked);
        });

        button.set_checked(true);
        button.set_checked(true);
        button.toggle();
        assert_eq!(*calls.lock(), vec![true, false]);
    }

    #[test]
    fn test_listener_replacement_and_clear() {
        let mut button = button();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let first = calls.clone();
        button.set_on_checked_change_listener(move |_button, _checked| first.lock().push("first"));
        let second = calls.clone();
        button.set_on_checked_change_listener(move |_button, _checked| second.lock().push("second"));

        button.toggle();
        assert_eq!(*calls.lock(), vec!["second"]);

        assert!(button.clear_on_checked_change_listener());
        button.toggle();
        assert_eq!(calls.lock().len(), 1);
    }

    #[test]
    fn test_listener_can_replace_itself() {
        let mut button = button();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let outer = calls.clone();
        button.set_on_checked_change_listener(move |button, _checked| {
            outer.lock().push("outer");
            let inner = outer.clone();
            button.set_on_checked_change_listener(move |_button, _checked| inner.lock().push("inner"));
        });

        button.toggle();
        button.toggle();
        assert_eq!(*calls.lock(), vec!["outer", "inner"]);
    }

    #[test]
    fn test_perform_click_plays_cue_when_unhandled() {
        let cue = RecordingCue::new();
        let mut button = ToggleButton::builder()
            .icon(heart())
            .feedback_cue(cue.clone())
            .build()
            .unwrap();

        assert!(!button.perform_click());
        assert!(button.is_checked());
        assert_eq!(cue.played(), vec![SoundEffect::Click]);

        let clicks = Arc::new(Mutex::new(0));
        let clicks_clone = clicks.clone();
        button.set_on_click_listener(move |_button| *clicks_clone.lock() += 1);
        assert!(button.perform_click());
        assert!(!button.is_checked());
        assert_eq!(*clicks.lock(), 1);
        assert_eq!(cue.count(), 1);

        assert!(button.clear_on_click_listener());
        assert!(!button.perform_click());
        assert_eq!(cue.count(), 2);
    }

    #[test]
    fn test_failing_cue_does_not_break_click() {
        let mut button = button();
        button.set_feedback_cue(|_effect: SoundEffect| -> pulse_toggle_multimedia::Result<()> {
            Err(pulse_toggle_multimedia::MultimediaError::Device("gone".into()))
        });
        assert!(!button.perform_click());
        assert!(button.is_checked());
    }

    #[test]
    fn test_pointer_press_and_click() {
        let mut button = button();

        assert!(button.handle_pointer(PointerEvent::Down));
        assert!(button.is_pressed());
        settle(&mut button);
        assert_eq!(button.icon_layer().scale_x(), PRESSED_SCALE);
        assert!(!button.is_checked());

        assert!(button.handle_pointer(PointerEvent::Up));
        assert!(button.is_checked());
        settle(&mut button);
        assert_eq!(button.icon_layer().scale_x(), 1.0);
    }

    #[test]
    fn test_pointer_leaving_cancels_click() {
        let mut button = button();
        button.handle_pointer(PointerEvent::Down);
        assert!(button.handle_pointer(PointerEvent::Move { inside: false }));
        // Still pressed visually until release
        assert!(button.is_pressed());
        button.handle_pointer(PointerEvent::Up);
        assert!(!button.is_checked());
    }

    #[test]
    fn test_pointer_cancel() {
        let mut button = button();
        button.handle_pointer(PointerEvent::Down);
        assert!(button.handle_pointer(PointerEvent::Cancel));
        assert!(!button.is_pressed());
        assert!(!button.is_checked());
        settle(&mut button);
        assert_eq!(button.icon_layer().scale_x(), 1.0);
    }

    #[test]
    fn test_move_without_press_not_consumed() {
        let mut button = button();
        assert!(!button.handle_pointer(PointerEvent::Move { inside: true }));
    }

    #[test]
    fn test_set_icon_drawable() {
        let mut button = button();
        let star = Icon::from_name("star");
        button.set_icon_drawable(star.clone());
        assert_eq!(button.icon_layer().image(), Some(&star));
        assert_eq!(button.shadow_layer().image(), Some(&star));
        assert_eq!(button.style().icon_checked(), &star);
    }

    #[test]
    fn test_set_icon_drawable_keeps_visible_unchecked_icon() {
        let outline = Icon::from_name("heart_outline");
        let mut button = ToggleButton::builder()
            .icon(heart())
            .unchecked_icon(outline.clone())
            .build()
            .unwrap();

        button.set_icon_drawable(Icon::from_name("star"));
        assert_eq!(button.icon_layer().image(), Some(&outline));
        assert_eq!(button.shadow_layer().image(), Some(&Icon::from_name("star")));
    }

    #[test]
    fn test_color_change_needs_applied_transition() {
        let mut button = button();
        button.set_color_unchecked(Color::BLUE);
        assert_eq!(button.icon_layer().tint(), gray());

        button.set_checked_with(false, false, true);
        assert_eq!(button.icon_layer().tint(), Color::BLUE);
    }

    #[test]
    fn test_label_follows_state() {
        let mut button = ToggleButton::builder()
            .icon(heart())
            .label_text_checked("Liked")
            .label_text_unchecked("Like")
            .label_mode(LabelMode::Static)
            .build()
            .unwrap();
        assert_eq!(button.label().text(), "Like");
        assert_eq!(button.label().primary().text_color(), Color::LIGHT_GRAY);

        button.toggle();
        assert_eq!(button.label().text(), "Like");
        settle(&mut button);
        assert_eq!(button.label().text(), "Liked");
        assert_eq!(button.label().primary().text_color(), Color::MAGENTA);
    }

    #[test]
    fn test_label_setters_apply_immediately() {
        let mut button = button();
        button.set_label_texts(Some("On".into()), Some("Off".into()));
        assert!(button.label().is_visible());
        assert_eq!(button.label().text(), "Off");

        button.set_label_mode(LabelMode::Static);
        assert_eq!(button.label().mode(), LabelMode::Static);

        button.set_label_texts(None, None);
        assert!(!button.label().is_visible());
    }

    #[test]
    fn test_checkable_trait() {
        fn flip(control: &mut dyn Checkable) {
            control.toggle();
        }

        let mut button = button();
        flip(&mut button);
        assert!(Checkable::is_checked(&button));
        Checkable::set_checked(&mut button, false);
        assert!(!button.is_checked());
        assert!(!button.color_transition().is_running());
    }

    #[test]
    fn test_take_dirty() {
        let mut button = button();
        assert!(button.take_dirty());
        assert!(!button.take_dirty());
        button.toggle();
        assert!(button.take_dirty());
    }
}
