//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::core::SandboxConfig;
use crate::input::{KeyBindings, sample_controls};
use crate::movement::{IntentResolver, MovementIntents};

pub(crate) fn configure_resolver(config: Res<SandboxConfig>, mut resolver: ResMut<IntentResolver>) {
    resolver.deadzone = config.gamepad_deadzone;
}

/// Samples devices once per tick so press edges line up with simulation ticks.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    bindings: Res<KeyBindings>,
    mut resolver: ResMut<IntentResolver>,
    mut intents: ResMut<MovementIntents>,
) {
    let raw = sample_controls(&bindings, &keyboard, &gamepads);
    *intents = resolver.resolve(&raw);
}
