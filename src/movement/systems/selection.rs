//! Movement domain: switching the active character.

use bevy::prelude::*;

use crate::content::Roster;
use crate::input::{Action, KeyBindings};
use crate::movement::{KinematicState, Player};

pub(crate) fn character_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut roster: ResMut<Roster>,
    mut actors: Query<&mut KinematicState, With<Player>>,
) {
    let previous = roster.active_index();

    if bindings.just_pressed(Action::NextCharacter, &keyboard) {
        roster.cycle_next();
    } else if let Some(index) = (0..roster.len())
        .find(|i| bindings.just_pressed(Action::Character(*i), &keyboard))
    {
        roster.select(index);
    }

    if roster.active_index() == previous {
        return;
    }

    let character = roster.active();
    info!("Switched to {}: {}", character.name(), character.description);
    for mut state in actors.iter_mut() {
        state.on_profile_switch();
    }
}
