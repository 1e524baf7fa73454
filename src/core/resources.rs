//! Core domain: sandbox-wide configuration.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::level::PlaygroundKind;

/// Sandbox settings loaded from `sandbox.ron`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Simulation ticks per second; every timer in a profile counts these.
    pub tick_hz: f64,
    pub world_width: f32,
    /// Actors whose top edge passes below this have fallen out of the world.
    pub world_height: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    pub starting_character: String,
    pub starting_playground: PlaygroundKind,
    /// Base seed for randomized playgrounds; random when absent.
    pub seed: Option<u64>,
    pub gamepad_deadzone: f32,
    pub keybindings_path: String,
    pub tuning_preset_path: String,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            world_width: 1280.0,
            world_height: 720.0,
            actor_width: 30.0,
            actor_height: 60.0,
            starting_character: "mario".to_string(),
            starting_playground: PlaygroundKind::Flat,
            seed: None,
            gamepad_deadzone: 0.2,
            keybindings_path: "keybindings.json".to_string(),
            tuning_preset_path: "assets/data/tuning_preset.json".to_string(),
        }
    }
}

impl SandboxConfig {
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }

    pub fn actor_size(&self) -> Vec2 {
        Vec2::new(self.actor_width, self.actor_height)
    }
}
