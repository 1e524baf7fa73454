//! Movement domain: physics profiles, intents and the per-tick controller.

mod components;
mod controller;
mod events;
mod profile;
mod resources;
mod spawn;
mod systems;

pub use components::{Facing, KinematicState, Player};
pub use controller::{
    AIR_DRAG, JumpKind, RespawnReason, SKID_THRESHOLD, StaticGeometry, TickEnvironment,
    TickOutcome, advance, overlaps,
};
pub use events::{ActorRespawned, RespawnCause};
pub use profile::{PhysicsProfile, ProfileParam, ProfileParams, TuningError, WallJumpStyle};
pub use resources::{DEFAULT_DEADZONE, IntentResolver, MovementIntents, RawControls};

use bevy::prelude::*;

use crate::content::Roster;
use spawn::spawn_actor;
use systems::{advance_actor, character_hotkeys, configure_resolver, read_input};

/// Ordering of the fixed-rate pipeline. Level checks run after `Advance`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Device sampling and intent resolution.
    Input,
    /// One controller tick per actor.
    Advance,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ActorRespawned>()
            .init_resource::<IntentResolver>()
            .init_resource::<MovementIntents>()
            .configure_sets(FixedUpdate, (MovementSet::Input, MovementSet::Advance).chain())
            .add_systems(Startup, configure_resolver)
            .add_systems(PostStartup, spawn_actor.run_if(resource_exists::<Roster>))
            .add_systems(FixedUpdate, read_input.in_set(MovementSet::Input))
            .add_systems(
                FixedUpdate,
                advance_actor
                    .in_set(MovementSet::Advance)
                    .run_if(resource_exists::<Roster>),
            )
            .add_systems(
                Update,
                character_hotkeys.run_if(resource_exists::<Roster>),
            );
    }
}
