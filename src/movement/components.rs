//! Movement domain: the actor's kinematic state.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Everything the tick pipeline reads and writes for the controlled actor.
///
/// `position` is the top-left corner of the bounding box in y-down world
/// space, so a positive `velocity.y` moves the actor downward.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct KinematicState {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub on_ground: bool,
    pub on_wall: bool,
    /// -1 for a wall on the left, 1 for a wall on the right, 0 for none.
    pub wall_direction: i8,
    pub facing: Facing,
    pub is_skidding: bool,

    // Timers, in ticks
    pub air_frames: u32,
    pub jump_buffer_frames: u32,
    pub wall_stick_frames: u32,
    pub run_buffer_frames: u32,
    pub dash_frames: u32,

    pub dash_active: bool,
    pub dash_direction: f32,
    pub has_double_jumped: bool,
}

impl KinematicState {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            on_ground: false,
            on_wall: false,
            wall_direction: 0,
            facing: Facing::Right,
            is_skidding: false,
            air_frames: 0,
            jump_buffer_frames: 0,
            wall_stick_frames: 0,
            run_buffer_frames: 0,
            dash_frames: 0,
            dash_active: false,
            dash_direction: 0.0,
            has_double_jumped: false,
        }
    }

    /// Axis-aligned bounding box in world space.
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.position, self.position + self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn facing_right(&self) -> bool {
        self.facing == Facing::Right
    }

    /// Back to `spawn` at rest with every timer and flag cleared.
    pub fn respawn(&mut self, spawn: Vec2) {
        let facing = self.facing;
        *self = Self::new(spawn, self.size);
        self.facing = facing;
    }

    /// A new profile keeps spatial state but not double-jump or dash state.
    pub fn on_profile_switch(&mut self) {
        self.has_double_jumped = false;
        self.dash_active = false;
        self.dash_frames = 0;
    }
}

/// Marker for the controlled actor entity.
#[derive(Component, Debug)]
pub struct Player;
