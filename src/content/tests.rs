//! Content domain: unit tests for profile data and the roster.

use super::loader::{EMBEDDED_PROFILES, EMBEDDED_SANDBOX, embedded_sandbox_config};
use super::{Roster, ValidationError, parse_character_defs, validate_roster};
use crate::core::SandboxConfig;
use crate::movement::{ProfileParam, WallJumpStyle};

fn shipped_roster() -> Roster {
    let defs = parse_character_defs("profiles.ron", EMBEDDED_PROFILES).expect("profiles parse");
    Roster::from_defs(&defs).expect("non-empty roster")
}

#[test]
fn test_shipped_profiles_parse() {
    let defs = parse_character_defs("profiles.ron", EMBEDDED_PROFILES).expect("profiles parse");
    let ids: Vec<&str> = defs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["mario", "meatboy", "link", "madeline", "ninja"]);
    assert!(validate_roster(&defs).is_empty());

    let madeline = &defs[3].physics;
    assert!(madeline.has_double_jump);
    assert!(madeline.has_dash);
    assert_eq!(madeline.wall_jump_style, WallJumpStyle::Directional);
    assert_eq!(defs[1].physics.wall_jump_style, WallJumpStyle::Kick);
    assert_eq!(defs[4].physics.wall_jump_style, WallJumpStyle::Momentum);
}

#[test]
fn test_shipped_profiles_have_no_diagnostics() {
    let roster = shipped_roster();
    for character in roster.characters() {
        assert!(
            character.profile.diagnostics().is_empty(),
            "{} has diagnostics",
            character.id
        );
    }
}

#[test]
fn test_shipped_sandbox_matches_defaults() {
    let config = embedded_sandbox_config().expect("sandbox parse");
    assert_eq!(config, SandboxConfig::default());
    assert!(EMBEDDED_SANDBOX.contains("tick_hz"));
}

#[test]
fn test_legacy_style_aliases_and_unknown_style() {
    let contents = r#"(
        schema_version: 1,
        items: [
            (id: "a", name: "A", color: (1, 2, 3), physics: (wall_jump_style: smb)),
            (id: "b", name: "B", color: (1, 2, 3), physics: (wall_jump_style: npp)),
            (id: "c", name: "C", color: (1, 2, 3), physics: (wall_jump_style: Zigzag)),
        ],
    )"#;
    let defs = parse_character_defs("inline", contents).expect("parse");
    assert_eq!(defs[0].physics.wall_jump_style, WallJumpStyle::Kick);
    assert_eq!(defs[1].physics.wall_jump_style, WallJumpStyle::Momentum);
    assert_eq!(defs[2].physics.wall_jump_style, WallJumpStyle::Unknown);
    // Omitted fields take the profile defaults
    assert!(defs[0].physics.has_momentum);
    assert_eq!(defs[0].physics.wall_slide_speed, 2.0);
}

#[test]
fn test_validation_errors() {
    assert_eq!(validate_roster(&[]), vec![ValidationError::EmptyRoster]);

    let contents = r#"(
        schema_version: 1,
        items: [
            (id: "a", name: "A", color: (0, 0, 0), physics: ()),
            (id: "a", name: " ", color: (0, 0, 0), physics: ()),
        ],
    )"#;
    let defs = parse_character_defs("inline", contents).expect("parse");
    let errors = validate_roster(&defs);
    assert!(errors.contains(&ValidationError::DuplicateId("a".to_string())));
    assert!(errors.contains(&ValidationError::EmptyName { id: "a".to_string() }));
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_character_defs("broken.ron", "(schema_version: 1, items: [").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_roster_selection() {
    let mut roster = shipped_roster();
    assert_eq!(roster.active().id, "mario");

    assert!(roster.select(3));
    assert_eq!(roster.active().id, "madeline");
    assert!(!roster.select(5));
    assert_eq!(roster.active_index(), 3);

    assert!(roster.select_id("ninja"));
    roster.cycle_next();
    assert_eq!(roster.active().id, "mario");
    assert!(!roster.select_id("luigi"));
}

#[test]
fn test_tuning_edits_persist_across_switches() {
    let mut roster = shipped_roster();
    roster
        .active_mut()
        .profile
        .set_parameter("gravity", 1.5)
        .expect("known parameter");

    roster.cycle_next();
    assert_eq!(roster.active().profile.get(ProfileParam::Gravity), 0.7);
    roster.select(0);
    assert_eq!(roster.active().profile.get(ProfileParam::Gravity), 1.5);

    roster.active_mut().profile.reset_physics();
    assert_eq!(roster.active().profile.get(ProfileParam::Gravity), 0.6);
}
