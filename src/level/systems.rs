//! Level domain: playground loading, hotkeys and finish detection.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::playfield::{Playfield, PlaygroundKind};
use super::playgrounds::build;
use super::progress::{CollectedKeys, PlaygroundSeed};
use crate::content::Roster;
use crate::core::SandboxConfig;
use crate::input::{Action, KeyBindings};
use crate::movement::{ActorRespawned, KinematicState, Player, RespawnCause};

pub(crate) fn setup_playfield(mut commands: Commands, config: Res<SandboxConfig>) {
    let base = config.seed.unwrap_or_else(rand::random);
    let playfield = build(config.starting_playground, config.world_size(), None);
    info!(
        "Loaded playground '{}' (seed {})",
        playfield.kind.name(),
        base
    );

    commands.insert_resource(playfield);
    commands.insert_resource(PlaygroundSeed::new(base));
    commands.init_resource::<CollectedKeys>();
}

fn respawn_actors(
    playfield: &Playfield,
    actors: &mut Query<(Entity, &mut KinematicState), With<Player>>,
    respawned: &mut MessageWriter<ActorRespawned>,
) {
    for (entity, mut state) in actors.iter_mut() {
        let spawn = playfield.spawn_position(state.size);
        state.respawn(spawn);
        respawned.write(ActorRespawned {
            entity,
            cause: RespawnCause::LevelReset,
        });
    }
}

pub(crate) fn playground_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    config: Res<SandboxConfig>,
    mut playfield: ResMut<Playfield>,
    mut seed: ResMut<PlaygroundSeed>,
    mut actors: Query<(Entity, &mut KinematicState), With<Player>>,
    mut respawned: MessageWriter<ActorRespawned>,
) {
    let world = config.world_size();

    let selected = PlaygroundKind::ALL
        .into_iter()
        .enumerate()
        .find(|(i, _)| bindings.just_pressed(Action::Playground(*i), &keyboard))
        .map(|(_, kind)| kind);

    if let Some(kind) = selected {
        *playfield = build(kind, world, None);
        info!("Loaded playground '{}'", kind.name());
        respawn_actors(&playfield, &mut actors, &mut respawned);
    } else if bindings.just_pressed(Action::Randomize, &keyboard) {
        let kind = playfield.kind;
        if kind.randomizable() {
            let mut rng = seed.next_rng();
            *playfield = build(kind, world, Some(&mut rng));
            info!(
                "Randomized playground '{}' (generation {})",
                kind.name(),
                seed.generation
            );
            respawn_actors(&playfield, &mut actors, &mut respawned);
        } else {
            debug!("Playground '{}' has no random layout", kind.name());
        }
    } else if bindings.just_pressed(Action::Reset, &keyboard) {
        respawn_actors(&playfield, &mut actors, &mut respawned);
    }
}

/// Records a key for the active character and sends the actor back to spawn.
pub(crate) fn check_finish(
    playfield: Res<Playfield>,
    roster: Res<Roster>,
    mut keys: ResMut<CollectedKeys>,
    mut actors: Query<(Entity, &mut KinematicState), With<Player>>,
    mut respawned: MessageWriter<ActorRespawned>,
) {
    for (entity, mut state) in actors.iter_mut() {
        if !playfield.reached_finish(state.bounds()) {
            continue;
        }

        let character = roster.active();
        keys.record(playfield.kind, &character.id);
        info!(
            "{} reached the finish of '{}' ({} keys here, {} total)",
            character.name(),
            playfield.kind.name(),
            keys.for_playground(playfield.kind).len(),
            keys.total()
        );

        let spawn = playfield.spawn_position(state.size);
        state.respawn(spawn);
        respawned.write(ActorRespawned {
            entity,
            cause: RespawnCause::Finish,
        });
    }
}
