//! Input domain: unit tests for bindings and device sampling.

use bevy::prelude::*;
use std::path::PathBuf;

use super::{Action, BindingsError, KeyBindings, sample_controls};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("feel_lab_{}_{}.json", name, std::process::id()))
}

#[test]
fn test_keys_are_saved_by_variant_name() {
    let json = serde_json::to_value(KeyBindings::default()).expect("serializes");
    assert_eq!(json["move_left"], serde_json::json!(["ArrowLeft", "KeyA"]));
    assert_eq!(json["characters"][0], serde_json::json!(["KeyY"]));
}

#[test]
fn test_default_bindings() {
    let bindings = KeyBindings::default();
    assert_eq!(bindings.characters.len(), 5);
    assert_eq!(bindings.playgrounds.len(), 7);
    assert_eq!(bindings.keys(Action::Character(0)), [KeyCode::KeyY]);
    assert_eq!(bindings.keys(Action::Randomize), [KeyCode::Digit7]);
    assert!(bindings.keys(Action::Playground(9)).is_empty());
}

#[test]
fn test_pressed_and_just_pressed() {
    let bindings = KeyBindings::default();
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyA);

    assert!(bindings.pressed(Action::MoveLeft, &keyboard));
    assert!(bindings.just_pressed(Action::MoveLeft, &keyboard));
    assert!(!bindings.pressed(Action::MoveRight, &keyboard));

    keyboard.clear();
    assert!(bindings.pressed(Action::MoveLeft, &keyboard));
    assert!(!bindings.just_pressed(Action::MoveLeft, &keyboard));
}

#[test]
fn test_rebind_replaces_first_binding_and_saves() {
    let path = temp_path("rebind");
    let mut bindings = KeyBindings::default();

    bindings
        .rebind(Action::Jump, KeyCode::KeyK, &path)
        .expect("rebind saves");
    assert_eq!(bindings.jump, vec![KeyCode::KeyK, KeyCode::KeyW, KeyCode::ArrowUp]);

    let loaded = KeyBindings::load(&path).expect("saved file loads");
    assert_eq!(loaded, bindings);

    let err = bindings
        .rebind(Action::Character(7), KeyCode::KeyK, &path)
        .unwrap_err();
    assert!(matches!(err, BindingsError::UnboundAction(Action::Character(7))));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_rebind_to_any_key_survives_reload() {
    let path = temp_path("rebind_numpad");
    let mut bindings = KeyBindings::default();

    bindings
        .rebind(Action::Jump, KeyCode::Numpad1, &path)
        .expect("rebind saves");
    bindings
        .rebind(Action::Dash, KeyCode::Delete, &path)
        .expect("rebind saves");
    let loaded = KeyBindings::load(&path).expect("saved file loads");
    assert_eq!(loaded, bindings);

    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::Numpad1);
    keyboard.press(KeyCode::Delete);
    assert!(loaded.pressed(Action::Jump, &keyboard));
    assert!(loaded.just_pressed(Action::Dash, &keyboard));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_unknown_key_name_rejects_file() {
    let path = temp_path("unknown_key");
    std::fs::write(&path, r#"{ "jump": ["NotAKey"] }"#).expect("write");

    assert!(matches!(
        KeyBindings::load(&path),
        Err(BindingsError::Json { .. })
    ));
    assert_eq!(KeyBindings::load_or_default(&path), KeyBindings::default());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let path = temp_path("partial");
    std::fs::write(&path, r#"{ "dash": ["KeyJ"] }"#).expect("write");

    let bindings = KeyBindings::load(&path).expect("partial file loads");
    assert_eq!(bindings.dash, vec![KeyCode::KeyJ]);
    assert_eq!(bindings.jump, KeyBindings::default().jump);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_broken_or_missing_file_falls_back() {
    let path = temp_path("broken");
    std::fs::write(&path, "{ not json").expect("write");
    assert!(matches!(
        KeyBindings::load(&path),
        Err(BindingsError::Json { .. })
    ));
    assert_eq!(KeyBindings::load_or_default(&path), KeyBindings::default());
    let _ = std::fs::remove_file(&path);

    assert_eq!(
        KeyBindings::load_or_default(&temp_path("missing")),
        KeyBindings::default()
    );
}

#[test]
fn test_sample_keyboard_controls() {
    let bindings = KeyBindings::default();
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::ArrowRight);
    keyboard.press(KeyCode::ShiftLeft);
    keyboard.press(KeyCode::KeyX);

    let raw = sample_controls(&bindings, &keyboard, std::iter::empty::<&Gamepad>());
    assert!(raw.right);
    assert!(!raw.left);
    assert!(raw.run);
    assert!(raw.dash);
    assert!(!raw.jump);
    assert_eq!(raw.axis_x, 0.0);
}
