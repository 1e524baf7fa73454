//! Movement domain: spawning the controlled actor.

use bevy::prelude::*;

use crate::content::Roster;
use crate::core::SandboxConfig;
use crate::level::Playfield;
use crate::movement::{KinematicState, Player};

/// Spawns the actor standing on the playfield's spawn point.
pub(crate) fn spawn_actor(
    mut commands: Commands,
    config: Res<SandboxConfig>,
    playfield: Res<Playfield>,
    roster: Res<Roster>,
) {
    let size = config.actor_size();
    let state = KinematicState::new(playfield.spawn_position(size), size);
    let character = roster.active();
    info!(
        "Spawning {} at {:?} on '{}'",
        character.name(),
        state.position,
        playfield.kind.name()
    );

    commands.spawn((
        Player,
        state,
        Sprite {
            color: character.color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
    ));
}
