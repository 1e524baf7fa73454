//! Core domain: camera and tick-rate setup.

use bevy::prelude::*;

use crate::core::SandboxConfig;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn apply_tick_rate(config: Res<SandboxConfig>, mut time: ResMut<Time<Fixed>>) {
    time.set_timestep_hz(config.tick_hz);
    info!("Simulation running at {} ticks per second", config.tick_hz);
}
