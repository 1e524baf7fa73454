//! Movement domain: actor lifecycle messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use super::RespawnReason;

/// Why an actor was put back at the playground spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnCause {
    /// The controller reported a hazard or a fall out of the world.
    Controller(RespawnReason),
    /// The actor touched the finish.
    Finish,
    /// A playground was loaded, randomized or reset.
    LevelReset,
}

/// Sent whenever an actor is respawned, whoever did it.
#[derive(Debug)]
pub struct ActorRespawned {
    pub entity: Entity,
    pub cause: RespawnCause,
}

impl Message for ActorRespawned {}
