//! Core domain: configuration, camera and fixed-step timing.

mod resources;
mod systems;

pub use resources::SandboxConfig;

use bevy::prelude::*;

use crate::core::systems::{apply_tick_rate, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, apply_tick_rate));
    }
}
