//! Per-tick movement controller.
//!
//! One call to [`advance`] moves the actor by exactly one frame, in this
//! order: jump buffer, dash override, horizontal model, horizontal move and
//! collision, wall contact, gravity, vertical move and collision, jump state
//! machine, then hazard and bounds checks.

mod collisions;
mod dash;
mod gravity;
mod horizontal;
mod jump;

pub use collisions::{StaticGeometry, overlaps};
pub use horizontal::{AIR_DRAG, SKID_THRESHOLD};
pub use jump::JumpKind;

use bevy::prelude::*;

use crate::movement::{KinematicState, MovementIntents, ProfileParams};

/// Why the caller should put the actor back at its spawn point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnReason {
    Hazard,
    OutOfBounds,
}

/// What happened during one tick, for the caller to act on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutcome {
    pub jump: Option<JumpKind>,
    pub dashing: bool,
    pub respawn: Option<RespawnReason>,
}

/// Everything level-owned that one tick reads.
pub struct TickEnvironment<'a, G: StaticGeometry + ?Sized> {
    pub geometry: &'a G,
    pub hazards: &'a [Rect],
    /// Actors whose top edge passes this y have fallen out of the world.
    pub world_bottom: f32,
}

/// Advances the actor by one tick.
///
/// Terminal conditions are reported in the outcome and never applied here;
/// the level owns spawn points and decides how to reset.
pub fn advance<G: StaticGeometry + ?Sized>(
    state: &mut KinematicState,
    profile: &ProfileParams,
    intents: &MovementIntents,
    env: TickEnvironment<'_, G>,
) -> TickOutcome {
    jump::update_jump_buffer(state, profile, intents);

    let dashing = dash::apply_dash(state, profile, intents);
    if !dashing {
        horizontal::apply_horizontal(state, profile, intents);
    }

    collisions::move_horizontal(state, env.geometry);
    collisions::detect_wall_contact(state, profile, env.geometry);

    if !dashing {
        gravity::apply_gravity(state, profile);
    }

    collisions::move_vertical(state, env.geometry);
    if !state.on_ground {
        state.air_frames = state.air_frames.saturating_add(1);
    }

    // Only a dash still running after this tick boosts the jump
    let jump = jump::apply_jump(state, profile, intents.move_dir, state.dash_active);
    if let Some(kind) = jump {
        debug!("Jump fired: {:?}, velocity={:?}", kind, state.velocity);
    }

    let respawn = if collisions::touches_hazard(state, env.hazards) {
        Some(RespawnReason::Hazard)
    } else if state.position.y > env.world_bottom {
        Some(RespawnReason::OutOfBounds)
    } else {
        None
    };

    TickOutcome {
        jump,
        dashing,
        respawn,
    }
}
