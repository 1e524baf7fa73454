//! Movement domain: input intent resources.

use bevy::prelude::*;

/// Stick magnitudes below this are neutral.
pub const DEFAULT_DEADZONE: f32 = 0.2;

/// Held-level device state sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawControls {
    pub left: bool,
    pub right: bool,
    /// Analog horizontal axis in `[-1, 1]`.
    pub axis_x: f32,
    pub run: bool,
    pub jump: bool,
    pub dash: bool,
}

/// Logical intents consumed by the controller for one tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementIntents {
    /// -1, 0 or 1.
    pub move_dir: i8,
    pub running: bool,
    /// True only on the tick jump goes from released to pressed.
    pub jump_pressed: bool,
    /// True only on the tick dash goes from released to pressed.
    pub dash_pressed: bool,
}

impl MovementIntents {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(move_dir: i8) -> Self {
        Self {
            move_dir,
            ..default()
        }
    }

    pub fn with_running(mut self) -> Self {
        self.running = true;
        self
    }

    pub fn with_jump(mut self) -> Self {
        self.jump_pressed = true;
        self
    }

    pub fn with_dash(mut self) -> Self {
        self.dash_pressed = true;
        self
    }
}

/// Reduces held device state to edge-detected intents.
#[derive(Resource, Debug, Clone)]
pub struct IntentResolver {
    pub deadzone: f32,
    jump_was_held: bool,
    dash_was_held: bool,
}

impl Default for IntentResolver {
    fn default() -> Self {
        Self::new(DEFAULT_DEADZONE)
    }
}

impl IntentResolver {
    pub fn new(deadzone: f32) -> Self {
        Self {
            deadzone,
            jump_was_held: false,
            dash_was_held: false,
        }
    }

    pub fn resolve(&mut self, raw: &RawControls) -> MovementIntents {
        // Right wins when both directions are held
        let move_dir = if raw.right || raw.axis_x > self.deadzone {
            1
        } else if raw.left || raw.axis_x < -self.deadzone {
            -1
        } else {
            0
        };

        let intents = MovementIntents {
            move_dir,
            running: raw.run,
            jump_pressed: raw.jump && !self.jump_was_held,
            dash_pressed: raw.dash && !self.dash_was_held,
        };

        self.jump_was_held = raw.jump;
        self.dash_was_held = raw.dash;
        intents
    }
}
