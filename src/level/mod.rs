//! Level domain: playground geometry, loading and completion tracking.

mod playfield;
mod playgrounds;
mod progress;
mod systems;
#[cfg(test)]
mod tests;

pub use playfield::{Playfield, PlaygroundKind, rect};
pub use playgrounds::build;
pub use progress::{CollectedKeys, PlaygroundSeed};

use bevy::prelude::*;

use crate::content::Roster;
use crate::movement::MovementSet;
use systems::{check_finish, playground_hotkeys, setup_playfield};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_playfield)
            .add_systems(Update, playground_hotkeys)
            .add_systems(
                FixedUpdate,
                check_finish
                    .after(MovementSet::Advance)
                    .run_if(resource_exists::<Roster>),
            );
    }
}
