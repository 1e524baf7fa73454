//! Input domain: key bindings and raw device sampling.

mod bindings;
mod controls;
#[cfg(test)]
mod tests;

pub use bindings::{Action, BindingsError, KeyBindings};
pub use controls::sample_controls;

use bevy::prelude::*;
use std::path::Path;

use crate::core::SandboxConfig;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .add_systems(Startup, load_key_bindings);
    }
}

fn load_key_bindings(mut commands: Commands, config: Res<SandboxConfig>) {
    let bindings = KeyBindings::load_or_default(Path::new(&config.keybindings_path));
    commands.insert_resource(bindings);
}
