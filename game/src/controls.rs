use engine::{Input, KeyCode};
use gilrs::Button;

/// The four held movement signals for one tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Controls {
    /// Arrow keys, or the D-pad of any connected gamepad.
    pub fn sample(input: &Input) -> Self {
        let held = |key, button| input.is_key_pressed(key) || input.is_button_pressed(button);
        Self {
            up: held(KeyCode::ArrowUp, Button::DPadUp),
            down: held(KeyCode::ArrowDown, Button::DPadDown),
            left: held(KeyCode::ArrowLeft, Button::DPadLeft),
            right: held(KeyCode::ArrowRight, Button::DPadRight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_held() {
        assert_eq!(Controls::sample(&Input::new()), Controls::default());
    }

    #[test]
    fn arrows_map_one_to_one() {
        let mut input = Input::new();
        input.press_key(KeyCode::ArrowUp);
        input.press_key(KeyCode::ArrowRight);

        let controls = Controls::sample(&input);
        assert!(controls.up);
        assert!(controls.right);
        assert!(!controls.down);
        assert!(!controls.left);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut input = Input::new();
        input.press_key(KeyCode::KeyW);
        input.press_key(KeyCode::Space);

        assert_eq!(Controls::sample(&input), Controls::default());
    }

    #[test]
    fn dpad_counts_as_arrows() {
        let mut input = Input::new();
        input.press_button(0, Button::DPadDown);
        input.press_button(1, Button::DPadLeft);

        let controls = Controls::sample(&input);
        assert!(controls.down);
        assert!(controls.left);
        assert!(!controls.up);
    }
}
