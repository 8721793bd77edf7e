//! Pointer handling, clicks and feedback cues.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use pulse_toggle::prelude::*;
use pulse_toggle::widget::animation::{PRESS_DURATION, PRESSED_SCALE};

fn button_with_cue() -> (ToggleButton, RecordingCue) {
    let cue = RecordingCue::new();
    let button = ToggleButton::builder()
        .icon(Icon::from_name("heart"))
        .feedback_cue(cue.clone())
        .build()
        .unwrap();
    (button, cue)
}

#[test]
fn test_tap_toggles_and_plays_cue() {
    let (mut button, cue) = button_with_cue();

    button.handle_pointer(PointerEvent::Down);
    button.handle_pointer(PointerEvent::Up);
    assert!(button.is_checked());
    assert_eq!(cue.played(), vec![SoundEffect::Click]);

    button.handle_pointer(PointerEvent::Down);
    button.handle_pointer(PointerEvent::Move { inside: true });
    button.handle_pointer(PointerEvent::Up);
    assert!(!button.is_checked());
    assert_eq!(cue.count(), 2);
}

#[test]
fn test_click_listener_suppresses_cue() {
    let (mut button, cue) = button_with_cue();
    let clicks = Arc::new(Mutex::new(Vec::new()));
    let clicks_clone = clicks.clone();
    button.set_on_click_listener(move |button| {
        clicks_clone.lock().push(button.is_checked());
    });

    assert!(button.perform_click());
    // The listener sees the state after the toggle
    assert_eq!(*clicks.lock(), vec![true]);
    assert_eq!(cue.count(), 0);
}

#[test]
fn test_press_does_not_disturb_color_transition() {
    let (mut button, _cue) = button_with_cue();
    button.toggle();
    let handle = button.color_transition().handle();

    button.handle_pointer(PointerEvent::Down);
    assert_eq!(button.color_transition().handle(), handle);
    assert!(button.shadow_pulse().is_running());

    button.advance(PRESS_DURATION);
    assert_eq!(button.icon_layer().scale_x(), PRESSED_SCALE);
    assert_eq!(button.shadow_layer().scale_x(), button.shadow_layer().scale_y());
    assert!(button.shadow_layer().scale_x() > 1.0);

    button.handle_pointer(PointerEvent::Cancel);
    while button.advance(Duration::from_millis(16)) {}
    assert_eq!(button.icon_layer().scale_x(), 1.0);
    assert_eq!(button.icon_layer().tint(), Color::MAGENTA);
    assert!(button.is_checked());
}

#[test]
fn test_dragging_out_and_back_does_not_click() {
    let (mut button, cue) = button_with_cue();
    button.handle_pointer(PointerEvent::Down);
    button.handle_pointer(PointerEvent::Move { inside: false });
    button.handle_pointer(PointerEvent::Move { inside: true });
    assert!(button.handle_pointer(PointerEvent::Up));
    assert!(!button.is_checked());
    assert_eq!(cue.count(), 0);
}

#[test]
fn test_closure_cue() {
    let played = Arc::new(Mutex::new(0));
    let played_clone = played.clone();
    let mut button = ToggleButton::new(Icon::from_name("heart"));
    button.set_feedback_cue(move |_effect: SoundEffect| -> pulse_toggle::multimedia::Result<()> {
        *played_clone.lock() += 1;
        Ok(())
    });

    button.perform_click();
    assert_eq!(*played.lock(), 1);
}
