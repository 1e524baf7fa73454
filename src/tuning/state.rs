//! Tuning domain: parameter ranges, nudging and JSON override presets.

use bevy::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::movement::{PhysicsProfile, ProfileParam, TuningError};

/// Number of nudges that span a parameter's whole range.
pub const NUDGE_STEPS: f32 = 20.0;

/// The parameter the tuning hotkeys act on.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuningState {
    pub selected: ProfileParam,
}

impl Default for TuningState {
    fn default() -> Self {
        Self {
            selected: ProfileParam::ALL[0],
        }
    }
}

impl TuningState {
    /// Moves the selection by `offset` places, wrapping around.
    pub fn cycle(&mut self, offset: isize) {
        let len = ProfileParam::ALL.len() as isize;
        let current = ProfileParam::ALL
            .iter()
            .position(|p| *p == self.selected)
            .unwrap_or(0) as isize;
        let next = (current + offset).rem_euclid(len) as usize;
        self.selected = ProfileParam::ALL[next];
    }
}

/// Inclusive slider range for live edits.
pub fn range(param: ProfileParam) -> (f32, f32) {
    match param {
        ProfileParam::Gravity => (0.1, 2.0),
        ProfileParam::FallingGravity => (0.1, 2.5),
        ProfileParam::WalkSpeed => (1.0, 12.0),
        ProfileParam::Acceleration => (0.05, 2.5),
        ProfileParam::JumpForce => (5.0, 20.0),
        ProfileParam::RunSpeed => (1.0, 20.0),
        ProfileParam::Deceleration => (0.05, 2.5),
        ProfileParam::SkidDeceleration => (0.05, 3.0),
        ProfileParam::JumpForceRunBonus => (0.0, 5.0),
        ProfileParam::MaxFallSpeed => (2.0, 25.0),
        ProfileParam::AirAccelerationMultiplier => (0.0, 2.0),
        ProfileParam::DashSpeed => (0.0, 30.0),
        ProfileParam::WallSlideSpeed => (0.5, 8.0),
        ProfileParam::DashDurationFrames => (0.0, 30.0),
        ProfileParam::RunBufferFrames => (0.0, 30.0),
        ProfileParam::CoyoteFrames => (0.0, 20.0),
        ProfileParam::JumpBufferFrames => (0.0, 20.0),
        ProfileParam::WallStickFrames => (0.0, 30.0),
    }
}

pub fn clamp_to_range(param: ProfileParam, value: f32) -> f32 {
    let (min, max) = range(param);
    value.clamp(min, max)
}

/// Size of one hotkey nudge. Frame counts move by at least one tick.
pub fn nudge_step(param: ProfileParam) -> f32 {
    let (min, max) = range(param);
    let step = (max - min) / NUDGE_STEPS;
    if param.is_frames() {
        step.round().max(1.0)
    } else {
        step
    }
}

/// Nudges `param` by `direction` steps and returns the new value.
pub fn nudge(profile: &mut PhysicsProfile, param: ProfileParam, direction: f32) -> f32 {
    let value = clamp_to_range(param, profile.get(param) + direction * nudge_step(param));
    profile.set(param, value);
    profile.get(param)
}

/// Applies every known override, clamped to its range, and returns the
/// names that were not recognized.
pub fn apply_overrides(
    profile: &mut PhysicsProfile,
    overrides: &BTreeMap<String, f32>,
) -> Vec<TuningError> {
    let mut errors = Vec::new();
    for (name, value) in overrides {
        match name.parse::<ProfileParam>() {
            Ok(param) => profile.set(param, clamp_to_range(param, *value)),
            Err(e) => errors.push(e),
        }
    }
    errors
}

/// Error type for preset loading failures.
#[derive(Debug)]
pub struct PresetError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for PresetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load preset {}: {}", self.file, self.message)
    }
}

impl std::error::Error for PresetError {}

/// Parses a `{"name": value}` JSON object.
pub fn parse_preset(file: &str, contents: &str) -> Result<BTreeMap<String, f32>, PresetError> {
    serde_json::from_str(contents).map_err(|e| PresetError {
        file: file.to_string(),
        message: format!("JSON error: {}", e),
    })
}

pub fn load_preset(path: &Path) -> Result<BTreeMap<String, f32>, PresetError> {
    let contents = fs::read_to_string(path).map_err(|e| PresetError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })?;
    parse_preset(&path.display().to_string(), &contents)
}
