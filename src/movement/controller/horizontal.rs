//! Horizontal motion: run buffering, wall stickiness, acceleration and skids.

use crate::movement::{Facing, KinematicState, MovementIntents, ProfileParams};

/// Deceleration applied in the air with no input unless drag is disabled.
pub const AIR_DRAG: f32 = 0.2;
/// Opposing speed beyond which a grounded momentum actor is skidding.
pub const SKID_THRESHOLD: f32 = 0.5;

pub(crate) fn apply_horizontal(
    state: &mut KinematicState,
    profile: &ProfileParams,
    intents: &MovementIntents,
) {
    if intents.running {
        state.run_buffer_frames = profile.run_buffer_frames;
    } else {
        state.run_buffer_frames = state.run_buffer_frames.saturating_sub(1);
    }
    let is_running = intents.running || state.run_buffer_frames > 0;

    let move_dir = apply_wall_stick(state, profile, intents.move_dir);

    let max_speed = if is_running {
        profile.run_speed
    } else {
        profile.walk_speed
    };
    let target_speed = match move_dir {
        d if d < 0 => {
            state.facing = Facing::Left;
            -max_speed
        }
        d if d > 0 => {
            state.facing = Facing::Right;
            max_speed
        }
        _ => 0.0,
    };

    state.is_skidding = profile.has_momentum
        && state.on_ground
        && ((target_speed > 0.0 && state.velocity.x < -SKID_THRESHOLD)
            || (target_speed < 0.0 && state.velocity.x > SKID_THRESHOLD));

    if move_dir != 0 {
        if !profile.has_momentum {
            state.velocity.x = target_speed;
            return;
        }

        let accel = if state.is_skidding {
            profile.skid_deceleration
        } else if state.on_ground {
            profile.acceleration
        } else {
            profile.acceleration * profile.air_acceleration_multiplier
        };
        state.velocity.x = approach(state.velocity.x, target_speed, accel);
    } else if state.on_ground {
        if profile.has_momentum {
            state.velocity.x = approach(state.velocity.x, 0.0, profile.deceleration);
        } else {
            state.velocity.x = 0.0;
        }
    } else if !profile.no_horizontal_drag {
        state.velocity.x = approach(state.velocity.x, 0.0, AIR_DRAG);
    }
}

/// Suppresses input away from a touched wall until the stick timer runs out.
/// Returns the direction that should actually drive movement.
fn apply_wall_stick(state: &mut KinematicState, profile: &ProfileParams, move_dir: i8) -> i8 {
    if !state.on_wall || state.on_ground {
        return move_dir;
    }

    let away_from_wall = move_dir != 0 && move_dir != state.wall_direction;
    if !away_from_wall {
        state.wall_stick_frames = profile.wall_stick_frames;
        return move_dir;
    }

    if state.wall_stick_frames > 0 {
        state.wall_stick_frames -= 1;
        return 0;
    }
    move_dir
}

/// Moves `current` toward `target` by at most `step`, never overshooting.
fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}
