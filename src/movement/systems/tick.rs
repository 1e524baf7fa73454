//! Movement domain: the fixed-rate controller tick.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::Roster;
use crate::core::SandboxConfig;
use crate::level::Playfield;
use crate::movement::{
    ActorRespawned, KinematicState, MovementIntents, Player, RespawnCause, TickEnvironment, advance,
};

pub(crate) fn advance_actor(
    roster: Res<Roster>,
    playfield: Res<Playfield>,
    config: Res<SandboxConfig>,
    intents: Res<MovementIntents>,
    mut actors: Query<(Entity, &mut KinematicState), With<Player>>,
    mut respawned: MessageWriter<ActorRespawned>,
) {
    let profile = roster.active().profile.params();

    for (entity, mut state) in actors.iter_mut() {
        let outcome = advance(
            &mut state,
            profile,
            &intents,
            TickEnvironment {
                geometry: &*playfield,
                hazards: &playfield.hazards,
                world_bottom: config.world_height,
            },
        );

        if let Some(reason) = outcome.respawn {
            info!("Respawning {} ({:?})", roster.active().name(), reason);
            let spawn = playfield.spawn_position(state.size);
            state.respawn(spawn);
            respawned.write(ActorRespawned {
                entity,
                cause: RespawnCause::Controller(reason),
            });
        }
    }
}
