//! Vertical motion: rising/falling gravity, terminal velocity and wall slide.

use crate::movement::{KinematicState, ProfileParams};

pub(crate) fn apply_gravity(state: &mut KinematicState, profile: &ProfileParams) {
    // Wall slide caps the fall and replaces gravity for this tick
    if state.on_wall && profile.has_wall_slide && state.velocity.y > 0.0 {
        state.velocity.y = state.velocity.y.min(profile.wall_slide_speed);
        return;
    }

    let gravity = if state.velocity.y > 0.0 {
        profile.falling_gravity
    } else {
        profile.gravity
    };

    state.velocity.y = (state.velocity.y + gravity).min(profile.max_fall_speed);
}
