//! Dash: a timed horizontal velocity override.

use crate::movement::{KinematicState, MovementIntents, ProfileParams};

/// Starts a dash on a fresh press and drives an active one.
///
/// Returns `true` when the dash owns this tick, in which case horizontal
/// control and gravity are skipped by the caller.
pub(crate) fn apply_dash(
    state: &mut KinematicState,
    profile: &ProfileParams,
    intents: &MovementIntents,
) -> bool {
    if intents.dash_pressed && profile.has_dash && !state.dash_active {
        state.dash_active = true;
        state.dash_frames = profile.dash_duration_frames;
        state.dash_direction = state.facing.sign();
    }

    if !state.dash_active {
        return false;
    }

    state.velocity.x = state.dash_direction * profile.dash_speed;
    state.dash_frames = state.dash_frames.saturating_sub(1);
    if state.dash_frames == 0 {
        state.dash_active = false;
    }
    true
}
