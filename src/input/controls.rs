//! Sampling held keyboard and gamepad state into [`RawControls`].

use bevy::prelude::*;

use super::bindings::{Action, KeyBindings};
use crate::movement::RawControls;

const JUMP_BUTTONS: [GamepadButton; 3] = [
    GamepadButton::South,
    GamepadButton::East,
    GamepadButton::West,
];

const RUN_BUTTONS: [GamepadButton; 4] = [
    GamepadButton::LeftTrigger,
    GamepadButton::RightTrigger,
    GamepadButton::LeftTrigger2,
    GamepadButton::RightTrigger2,
];

/// Merges the keyboard with every connected gamepad.
///
/// The stick with the largest deflection wins; the dead zone is applied later
/// by the intent resolver.
pub fn sample_controls<'a>(
    bindings: &KeyBindings,
    keyboard: &ButtonInput<KeyCode>,
    gamepads: impl IntoIterator<Item = &'a Gamepad>,
) -> RawControls {
    let mut raw = RawControls {
        left: bindings.pressed(Action::MoveLeft, keyboard),
        right: bindings.pressed(Action::MoveRight, keyboard),
        axis_x: 0.0,
        run: bindings.pressed(Action::Run, keyboard),
        jump: bindings.pressed(Action::Jump, keyboard),
        dash: bindings.pressed(Action::Dash, keyboard),
    };

    for gamepad in gamepads {
        let stick = gamepad.get(GamepadAxis::LeftStickX).unwrap_or(0.0);
        if stick.abs() > raw.axis_x.abs() {
            raw.axis_x = stick;
        }
        raw.left |= gamepad.pressed(GamepadButton::DPadLeft);
        raw.right |= gamepad.pressed(GamepadButton::DPadRight);
        raw.jump |= gamepad.any_pressed(JUMP_BUTTONS);
        raw.run |= gamepad.any_pressed(RUN_BUTTONS);
        raw.dash |= gamepad.pressed(GamepadButton::North);
    }

    raw
}
