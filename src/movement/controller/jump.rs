//! Jump state machine: buffering, coyote time, double jumps and wall jumps.

use bevy::log::warn_once;
use bevy::prelude::*;

use crate::movement::{KinematicState, MovementIntents, ProfileParams, WallJumpStyle};

/// Jump strength multiplier while a dash owns the tick.
const DASH_JUMP_MULTIPLIER: f32 = 1.2;

/// Which jump fired this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Double,
    Wall(WallJumpStyle),
}

/// Arms the buffer on a press edge, otherwise counts it down.
pub(crate) fn update_jump_buffer(
    state: &mut KinematicState,
    profile: &ProfileParams,
    intents: &MovementIntents,
) {
    if intents.jump_pressed {
        state.jump_buffer_frames = profile.jump_buffer_frames;
    } else {
        state.jump_buffer_frames = state.jump_buffer_frames.saturating_sub(1);
    }
}

/// Fires at most one jump, checked in priority order: wall, ground/coyote, double.
pub(crate) fn apply_jump(
    state: &mut KinematicState,
    profile: &ProfileParams,
    move_dir: i8,
    dashing: bool,
) -> Option<JumpKind> {
    if state.jump_buffer_frames == 0 {
        return None;
    }

    if profile.has_wall_jump && state.on_wall {
        if let Some(style) = wall_jump(state, profile, move_dir) {
            state.jump_buffer_frames = 0;
            state.on_wall = false;
            return Some(JumpKind::Wall(style));
        }
    }

    let can_jump = state.on_ground || state.air_frames < profile.coyote_frames;
    let can_double_jump = profile.has_double_jump
        && !state.on_ground
        && !state.has_double_jumped
        && !can_jump;

    if !can_jump && !can_double_jump {
        return None;
    }

    let mut strength = profile.jump_force;
    // A zero run speed has no meaningful ratio, so the bonus is skipped
    if profile.jump_force_run_bonus > 0.0 && profile.run_speed != 0.0 {
        let speed_ratio = state.velocity.x.abs() / profile.run_speed;
        strength += profile.jump_force_run_bonus * speed_ratio;
    }
    if dashing {
        strength *= DASH_JUMP_MULTIPLIER;
    }

    state.velocity.y = -strength;
    state.jump_buffer_frames = 0;
    state.on_ground = false;
    state.air_frames = profile.coyote_frames;

    if can_double_jump {
        state.has_double_jumped = true;
        Some(JumpKind::Double)
    } else {
        Some(JumpKind::Ground)
    }
}

/// Applies the wall-jump response for the profile's style.
/// Returns `None` when the style is unrecognized and the wall branch is skipped.
fn wall_jump(
    state: &mut KinematicState,
    profile: &ProfileParams,
    move_dir: i8,
) -> Option<WallJumpStyle> {
    let wall = f32::from(state.wall_direction);

    match profile.wall_jump_style {
        WallJumpStyle::Kick => {
            state.velocity.y = -profile.jump_force;
            state.velocity.x = -wall * profile.run_speed * 1.2;
        }
        WallJumpStyle::Directional => {
            state.velocity.y = -profile.jump_force;
            state.velocity.x = if move_dir == -state.wall_direction {
                // Escape
                -wall * profile.run_speed
            } else if move_dir == state.wall_direction {
                // Re-grab
                wall * profile.walk_speed * 0.3
            } else {
                // Climb
                -wall * profile.walk_speed * 0.6
            };
        }
        WallJumpStyle::Momentum => {
            state.velocity.y = -profile.jump_force * 0.9;
            let kick_speed = state.velocity.x.abs().max(profile.walk_speed);
            state.velocity.x = -wall * kick_speed * 1.1;
        }
        WallJumpStyle::Unknown => {
            warn_once!("Unrecognized wall jump style, wall jumps are disabled");
            return None;
        }
    }

    debug!(
        "Wall jump ({:?}): wall_direction={}, velocity={:?}",
        profile.wall_jump_style, state.wall_direction, state.velocity
    );
    Some(profile.wall_jump_style)
}
