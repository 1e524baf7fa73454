//! Content domain: character profiles and sandbox settings loaded from RON.

mod data;
mod loader;
mod registry;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{CharacterDef, DataFile};
pub use loader::{
    ContentLoadError, load_character_defs, load_sandbox_config, parse_character_defs,
};
pub use registry::{Character, Roster};
pub use validation::{ValidationError, validate_roster};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::Path;

use crate::core::SandboxConfig;
use loader::{embedded_character_defs, embedded_sandbox_config, load_or_embedded};

/// Directory holding the data files, relative to the working directory.
pub const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Inserts [`SandboxConfig`] and [`Roster`].
///
/// Files on disk win; the built-in copies cover missing or broken files. An
/// unusable roster ends the app since nothing can be simulated without one.
fn load_content(mut commands: Commands, mut exit: MessageWriter<AppExit>) {
    let base_path = Path::new(DATA_DIR);

    let config = load_or_embedded(load_sandbox_config(base_path), embedded_sandbox_config)
        .unwrap_or_else(|e| {
            warn!("{}; using default sandbox settings", e);
            SandboxConfig::default()
        });
    let starting_character = config.starting_character.clone();
    commands.insert_resource(config);

    let defs = match load_or_embedded(load_character_defs(base_path), embedded_character_defs) {
        Ok(defs) => defs,
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    let errors = validate_roster(&defs);
    if !errors.is_empty() {
        for e in &errors {
            error!("Content validation error: {}", e);
        }
        exit.write(AppExit::error());
        return;
    }

    let Some(mut roster) = Roster::from_defs(&defs) else {
        exit.write(AppExit::error());
        return;
    };
    if !roster.select_id(&starting_character) {
        warn!(
            "Starting character '{}' not found, using '{}'",
            starting_character,
            roster.active().id
        );
    }

    info!("{}", roster.summary());
    commands.insert_resource(roster);
}
