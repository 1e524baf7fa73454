//! Tuning domain: unit tests for ranges, nudges and presets.

use std::collections::BTreeMap;

use super::{
    TuningState, apply_overrides, clamp_to_range, nudge, nudge_step, parse_preset, range,
};
use crate::movement::{PhysicsProfile, ProfileParam, ProfileParams, TuningError};

fn profile() -> PhysicsProfile {
    PhysicsProfile::new(
        "Test",
        ProfileParams {
            walk_speed: 5.0,
            run_speed: 8.0,
            acceleration: 1.0,
            jump_force: 12.0,
            gravity: 0.5,
            falling_gravity: 0.5,
            max_fall_speed: 12.0,
            coyote_frames: 6,
            ..Default::default()
        },
    )
}

#[test]
fn test_slider_ranges() {
    assert_eq!(range(ProfileParam::Gravity), (0.1, 2.0));
    assert_eq!(range(ProfileParam::FallingGravity), (0.1, 2.5));
    assert_eq!(range(ProfileParam::WalkSpeed), (1.0, 12.0));
    assert_eq!(range(ProfileParam::Acceleration), (0.05, 2.5));
    assert_eq!(range(ProfileParam::JumpForce), (5.0, 20.0));

    for param in ProfileParam::ALL {
        let (min, max) = range(param);
        assert!(min < max, "{:?}", param);
        assert!(nudge_step(param) > 0.0);
    }
}

#[test]
fn test_cycle_wraps() {
    let mut state = TuningState::default();
    assert_eq!(state.selected, ProfileParam::Gravity);

    state.cycle(-1);
    assert_eq!(state.selected, ProfileParam::WallStickFrames);
    state.cycle(2);
    assert_eq!(state.selected, ProfileParam::FallingGravity);
}

#[test]
fn test_nudge_steps_and_clamps() {
    let mut profile = profile();

    let value = nudge(&mut profile, ProfileParam::JumpForce, 1.0);
    assert_eq!(value, 12.0 + 15.0 / 20.0);

    for _ in 0..40 {
        nudge(&mut profile, ProfileParam::JumpForce, 1.0);
    }
    assert_eq!(profile.get(ProfileParam::JumpForce), 20.0);

    for _ in 0..40 {
        nudge(&mut profile, ProfileParam::Gravity, -1.0);
    }
    assert_eq!(profile.get(ProfileParam::Gravity), 0.1);

    // Frame counts move in whole ticks
    assert_eq!(nudge(&mut profile, ProfileParam::CoyoteFrames, 1.0), 7.0);

    profile.reset_physics();
    assert_eq!(profile.get(ProfileParam::JumpForce), 12.0);
    assert_eq!(profile.get(ProfileParam::Gravity), 0.5);
    assert_eq!(profile.get(ProfileParam::CoyoteFrames), 7.0);
}

#[test]
fn test_apply_overrides_reports_unknown_names() {
    let mut profile = profile();
    let mut overrides = BTreeMap::new();
    overrides.insert("gravity".to_string(), 0.35);
    overrides.insert("jump_force".to_string(), 99.0);
    overrides.insert("float_power".to_string(), 1.0);

    let errors = apply_overrides(&mut profile, &overrides);
    assert_eq!(
        errors,
        vec![TuningError::UnknownParameter("float_power".to_string())]
    );
    assert_eq!(profile.get(ProfileParam::Gravity), 0.35);
    assert_eq!(
        profile.get(ProfileParam::JumpForce),
        clamp_to_range(ProfileParam::JumpForce, 99.0)
    );
}

#[test]
fn test_shipped_preset_parses() {
    let overrides = parse_preset(
        "tuning_preset.json",
        include_str!("../../assets/data/tuning_preset.json"),
    )
    .expect("preset parses");
    assert_eq!(overrides.get("gravity"), Some(&0.35));

    let mut profile = profile();
    assert!(apply_overrides(&mut profile, &overrides).is_empty());
    assert_eq!(profile.get(ProfileParam::Acceleration), 0.3);

    assert!(parse_preset("bad.json", "[1, 2]").is_err());
}
