//! Keyboard state, free-flight movement and the orrery's keyboard shortcuts.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Physical keys the viewer responds to, named after DOM `KeyboardEvent.code` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyF,
    KeyH,
    KeyL,
    KeyO,
    Space,
    ShiftLeft,
    ShiftRight,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
}

impl Key {
    /// Digit keys map to their number.
    pub fn digit(self) -> Option<u8> {
        let d = match self {
            Key::Digit0 => 0,
            Key::Digit1 => 1,
            Key::Digit2 => 2,
            Key::Digit3 => 3,
            Key::Digit4 => 4,
            Key::Digit5 => 5,
            Key::Digit6 => 6,
            Key::Digit7 => 7,
            Key::Digit8 => 8,
            Key::Digit9 => 9,
            _ => return None,
        };
        Some(d)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// One-shot commands decoded from keys pressed this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePause,
    Faster,
    Slower,
    Reverse,
    ToggleFreeFlight,
    /// Stop following and leave free flight.
    Escape,
    /// Fly to the n-th body of the navigation order (0 = sun, 1..=8 = planets).
    Navigate(u8),
    ToggleOrbits,
    ToggleLabels,
    ShowHelp,
}

/// Manages input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<Key>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<Key>,
    /// Keys released this frame.
    keys_released: HashSet<Key>,
    /// Presses in arrival order, for action decoding.
    press_order: Vec<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.press_order.clear();
    }

    /// Process a keyboard event. Auto-repeat presses of a held key are ignored.
    pub fn process_key(&mut self, key: Key, state: KeyState) {
        match state {
            KeyState::Pressed => {
                if self.keys_held.insert(key) {
                    self.keys_pressed.insert(key);
                    self.press_order.push(key);
                }
            }
            KeyState::Released => {
                if self.keys_held.remove(&key) {
                    self.keys_released.insert(key);
                }
            }
        }
    }

    pub fn is_key_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn is_key_released(&self, key: Key) -> bool {
        self.keys_released.contains(&key)
    }

    /// Snapshot of the free-flight keys.
    pub fn flight(&self) -> FlightInput {
        FlightInput {
            forward: self.is_key_held(Key::KeyW),
            back: self.is_key_held(Key::KeyS),
            left: self.is_key_held(Key::KeyA),
            right: self.is_key_held(Key::KeyD),
            up: self.is_key_held(Key::KeyQ) || self.is_key_held(Key::Space),
            down: self.is_key_held(Key::KeyE) || self.is_key_held(Key::ShiftLeft),
            boost: self.is_key_held(Key::ShiftLeft),
        }
    }

    /// Commands triggered this frame, in the order their keys went down.
    pub fn actions(&self) -> Vec<Action> {
        self.press_order
            .iter()
            .filter_map(|&key| match key {
                Key::Space => Some(Action::TogglePause),
                Key::ArrowUp => Some(Action::Faster),
                Key::ArrowDown => Some(Action::Slower),
                Key::ArrowLeft => Some(Action::Reverse),
                Key::KeyF => Some(Action::ToggleFreeFlight),
                Key::Escape => Some(Action::Escape),
                Key::KeyO => Some(Action::ToggleOrbits),
                Key::KeyL => Some(Action::ToggleLabels),
                Key::KeyH => Some(Action::ShowHelp),
                other => other.digit().filter(|&d| d <= 8).map(Action::Navigate),
            })
            .collect()
    }
}

/// Held movement keys for free flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub boost: bool,
}

impl FlightInput {
    /// Unnormalised camera-space direction: -Z forward, +X right, +Y up.
    pub fn direction(&self) -> Vec3 {
        let mut v = Vec3::ZERO;
        if self.forward {
            v.z -= 1.0;
        }
        if self.back {
            v.z += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        if self.up {
            v.y += 1.0;
        }
        if self.down {
            v.y -= 1.0;
        }
        v
    }

    pub fn is_idle(&self) -> bool {
        self.direction() == Vec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_one_shot_hold_persists() {
        let mut input = InputState::new();
        input.process_key(Key::KeyW, KeyState::Pressed);
        assert!(input.is_key_pressed(Key::KeyW));
        assert!(input.is_key_held(Key::KeyW));

        input.begin_frame();
        // Auto-repeat does not count as a new press
        input.process_key(Key::KeyW, KeyState::Pressed);
        assert!(!input.is_key_pressed(Key::KeyW));
        assert!(input.is_key_held(Key::KeyW));

        input.process_key(Key::KeyW, KeyState::Released);
        assert!(input.is_key_released(Key::KeyW));
        assert!(!input.is_key_held(Key::KeyW));
    }

    #[test]
    fn shift_both_lowers_and_boosts() {
        let mut input = InputState::new();
        input.process_key(Key::ShiftLeft, KeyState::Pressed);
        input.process_key(Key::KeyW, KeyState::Pressed);
        let flight = input.flight();
        assert!(flight.boost);
        assert_eq!(flight.direction(), Vec3::new(0.0, -1.0, -1.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let flight = FlightInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert!(flight.is_idle());
    }

    #[test]
    fn actions_follow_press_order() {
        let mut input = InputState::new();
        input.process_key(Key::ArrowUp, KeyState::Pressed);
        input.process_key(Key::Digit3, KeyState::Pressed);
        input.process_key(Key::Digit9, KeyState::Pressed);
        input.process_key(Key::KeyW, KeyState::Pressed);
        input.process_key(Key::Space, KeyState::Pressed);
        assert_eq!(
            input.actions(),
            vec![Action::Faster, Action::Navigate(3), Action::TogglePause]
        );

        input.begin_frame();
        assert!(input.actions().is_empty());
    }
}
