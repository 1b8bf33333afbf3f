//! Held-button state for the keyboard and gamepads.
//!
//! The engine feeds platform events in; games only ask whether something is
//! currently held. Nothing here is edge-triggered.

use std::collections::{HashMap, HashSet};

use gilrs::{Button, GamepadId};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

#[derive(Debug, Default)]
pub struct Input {
    keys: HashSet<KeyCode>,
    /// Held buttons per connected pad, keyed by gilrs' pad index.
    buttons: HashMap<usize, HashSet<Button>>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a winit key event. OS auto-repeat is ignored since the key is
    /// already held.
    pub fn process_key(&mut self, key: PhysicalKey, state: ElementState, repeat: bool) {
        if repeat {
            return;
        }
        let PhysicalKey::Code(code) = key else {
            return;
        };
        match state {
            ElementState::Pressed => self.press_key(code),
            ElementState::Released => self.release_key(code),
        }
    }

    /// Apply a gilrs event from pad `id`.
    pub fn process_gamepad(&mut self, id: GamepadId, event: &gilrs::EventType) {
        let pad = usize::from(id);
        match *event {
            gilrs::EventType::ButtonPressed(button, _) => self.press_button(pad, button),
            gilrs::EventType::ButtonReleased(button, _) => self.release_button(pad, button),
            gilrs::EventType::Disconnected => self.disconnect(pad),
            _ => {}
        }
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.keys.insert(key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    pub fn press_button(&mut self, pad: usize, button: Button) {
        self.buttons.entry(pad).or_default().insert(button);
    }

    pub fn release_button(&mut self, pad: usize, button: Button) {
        if let Some(held) = self.buttons.get_mut(&pad) {
            held.remove(&button);
        }
    }

    /// Drop everything held on `pad`; other pads keep their state.
    pub fn disconnect(&mut self, pad: usize) {
        self.buttons.remove(&pad);
    }

    /// True if `button` is held on any connected pad.
    pub fn is_button_pressed(&self, button: Button) -> bool {
        self.buttons.values().any(|held| held.contains(&button))
    }

    /// Forget everything held, e.g. on focus loss, where release events
    /// never arrive.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }
}
