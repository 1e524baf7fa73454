//! Tuning domain: live edits of the active character's physics.
//!
//! Hotkeys:
//! - cycle the selected parameter
//! - nudge it up or down by a twentieth of its range
//! - restore the construction-time physics
//! - apply the JSON preset named in the sandbox settings

mod state;
#[cfg(test)]
mod tests;

pub use state::{
    NUDGE_STEPS, PresetError, TuningState, apply_overrides, clamp_to_range, load_preset, nudge,
    nudge_step, parse_preset, range,
};

use bevy::prelude::*;
use std::path::Path;

use crate::content::Roster;
use crate::core::SandboxConfig;
use crate::input::{Action, KeyBindings};

pub struct TuningPlugin;

impl Plugin for TuningPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TuningState>().add_systems(
            Update,
            handle_tuning_hotkeys.run_if(resource_exists::<Roster>),
        );
    }
}

fn handle_tuning_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    config: Res<SandboxConfig>,
    mut tuning: ResMut<TuningState>,
    mut roster: ResMut<Roster>,
) {
    let pressed = |action| bindings.just_pressed(action, &keyboard);

    if pressed(Action::TuneNext) {
        tuning.cycle(1);
        info!("Tuning '{}'", tuning.selected.name());
    }
    if pressed(Action::TunePrev) {
        tuning.cycle(-1);
        info!("Tuning '{}'", tuning.selected.name());
    }

    let direction = match (pressed(Action::TuneUp), pressed(Action::TuneDown)) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    };
    if direction != 0.0 {
        let param = tuning.selected;
        let character = roster.active_mut();
        let value = nudge(&mut character.profile, param, direction);
        info!("{}: {} = {}", character.name(), param.name(), value);
    }

    if pressed(Action::TuneReset) {
        let character = roster.active_mut();
        character.profile.reset_physics();
        info!("{}: physics reset", character.name());
    }

    if pressed(Action::TunePreset) {
        let overrides = match load_preset(Path::new(&config.tuning_preset_path)) {
            Ok(overrides) => overrides,
            Err(e) => {
                warn!("{}", e);
                return;
            }
        };
        let character = roster.active_mut();
        for e in apply_overrides(&mut character.profile, &overrides) {
            warn!("Preset {}: {}", config.tuning_preset_path, e);
        }
        info!(
            "{}: applied {} overrides from {}",
            character.name(),
            overrides.len(),
            config.tuning_preset_path
        );
    }
}
