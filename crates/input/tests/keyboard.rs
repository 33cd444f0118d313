//! Key events flowing through to actions and flight input across frames.

use glam::Vec3;
use input::{Action, InputState, Key, KeyState};

#[test]
fn a_frame_of_key_presses_becomes_ordered_actions() {
    let mut input = InputState::new();
    input.begin_frame();
    input.process_key(Key::ArrowUp, KeyState::Pressed);
    input.process_key(Key::Digit4, KeyState::Pressed);
    input.process_key(Key::Digit9, KeyState::Pressed);
    input.process_key(Key::KeyO, KeyState::Pressed);
    assert_eq!(
        input.actions(),
        vec![Action::Faster, Action::Navigate(4), Action::ToggleOrbits]
    );

    // Held keys do not repeat their action on later frames.
    input.begin_frame();
    input.process_key(Key::ArrowUp, KeyState::Pressed);
    assert!(input.actions().is_empty());
    assert!(input.is_key_held(Key::ArrowUp));
}

#[test]
fn held_keys_steer_free_flight_until_released() {
    let mut input = InputState::new();
    input.process_key(Key::KeyW, KeyState::Pressed);
    input.process_key(Key::KeyD, KeyState::Pressed);
    input.begin_frame();
    let flight = input.flight();
    assert_eq!(flight.direction(), Vec3::new(1.0, 0.0, -1.0));
    assert!(!flight.boost);

    input.process_key(Key::KeyW, KeyState::Released);
    input.process_key(Key::KeyD, KeyState::Released);
    assert!(input.flight().is_idle());
    assert!(input.is_key_released(Key::KeyW));
}
