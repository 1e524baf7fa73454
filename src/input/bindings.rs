//! Keyboard bindings persisted as JSON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Run,
    Dash,
    NextCharacter,
    /// Roster slot, zero-based.
    Character(usize),
    /// Playground slot, zero-based.
    Playground(usize),
    Randomize,
    Reset,
    TuneNext,
    TunePrev,
    TuneUp,
    TuneDown,
    TuneReset,
    TunePreset,
}

/// Error type for reading, writing or editing bindings.
#[derive(Debug)]
pub enum BindingsError {
    Io { path: String, source: std::io::Error },
    Json { path: String, source: serde_json::Error },
    UnboundAction(Action),
}

impl std::fmt::Display for BindingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingsError::Io { path, source } => write!(f, "{}: IO error: {}", path, source),
            BindingsError::Json { path, source } => write!(f, "{}: JSON error: {}", path, source),
            BindingsError::UnboundAction(action) => {
                write!(f, "no binding slot for action {:?}", action)
            }
        }
    }
}

impl std::error::Error for BindingsError {}

/// Keys per action, saved as `KeyCode` variant names such as `"ArrowLeft"`.
///
/// Fields missing from a saved file keep their defaults. An unrecognized key
/// name makes the whole file invalid.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
    pub run: Vec<KeyCode>,
    pub dash: Vec<KeyCode>,
    pub next_character: Vec<KeyCode>,
    pub characters: Vec<Vec<KeyCode>>,
    pub playgrounds: Vec<Vec<KeyCode>>,
    pub randomize: Vec<KeyCode>,
    pub reset: Vec<KeyCode>,
    pub tune_next: Vec<KeyCode>,
    pub tune_prev: Vec<KeyCode>,
    pub tune_up: Vec<KeyCode>,
    pub tune_down: Vec<KeyCode>,
    pub tune_reset: Vec<KeyCode>,
    pub tune_preset: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use KeyCode::*;

        Self {
            move_left: vec![ArrowLeft, KeyA],
            move_right: vec![ArrowRight, KeyD],
            jump: vec![Space, KeyW, ArrowUp],
            run: vec![ShiftLeft, ShiftRight],
            dash: vec![KeyX, KeyC],
            next_character: vec![Tab],
            characters: [KeyY, KeyU, KeyI, KeyO, KeyP]
                .into_iter()
                .map(|k| vec![k])
                .collect(),
            playgrounds: [Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit8]
                .into_iter()
                .map(|k| vec![k])
                .collect(),
            randomize: vec![Digit7],
            reset: vec![KeyR],
            tune_next: vec![BracketRight],
            tune_prev: vec![BracketLeft],
            tune_up: vec![Equal],
            tune_down: vec![Minus],
            tune_reset: vec![Backspace],
            tune_preset: vec![F5],
        }
    }
}

impl KeyBindings {
    /// Reads a bindings file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, BindingsError> {
        let contents = fs::read_to_string(path).map_err(|e| BindingsError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| BindingsError::Json {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Defaults when the file does not exist, with a warning when it is unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(bindings) => bindings,
            Err(e) => {
                warn!("Failed to load key bindings: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), BindingsError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| BindingsError::Json {
            path: path.display().to_string(),
            source: e,
        })?;
        fs::write(path, json).map_err(|e| BindingsError::Io {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Replaces the first key bound to `action` and saves to `path`.
    pub fn rebind(&mut self, action: Action, key: KeyCode, path: &Path) -> Result<(), BindingsError> {
        let slot = self
            .keys_mut(action)
            .ok_or(BindingsError::UnboundAction(action))?;
        match slot.first_mut() {
            Some(first) => *first = key,
            None => slot.push(key),
        }
        self.save(path)
    }

    pub fn keys(&self, action: Action) -> &[KeyCode] {
        match action {
            Action::MoveLeft => &self.move_left,
            Action::MoveRight => &self.move_right,
            Action::Jump => &self.jump,
            Action::Run => &self.run,
            Action::Dash => &self.dash,
            Action::NextCharacter => &self.next_character,
            Action::Character(i) => self.characters.get(i).map(Vec::as_slice).unwrap_or(&[]),
            Action::Playground(i) => self.playgrounds.get(i).map(Vec::as_slice).unwrap_or(&[]),
            Action::Randomize => &self.randomize,
            Action::Reset => &self.reset,
            Action::TuneNext => &self.tune_next,
            Action::TunePrev => &self.tune_prev,
            Action::TuneUp => &self.tune_up,
            Action::TuneDown => &self.tune_down,
            Action::TuneReset => &self.tune_reset,
            Action::TunePreset => &self.tune_preset,
        }
    }

    fn keys_mut(&mut self, action: Action) -> Option<&mut Vec<KeyCode>> {
        match action {
            Action::MoveLeft => Some(&mut self.move_left),
            Action::MoveRight => Some(&mut self.move_right),
            Action::Jump => Some(&mut self.jump),
            Action::Run => Some(&mut self.run),
            Action::Dash => Some(&mut self.dash),
            Action::NextCharacter => Some(&mut self.next_character),
            Action::Character(i) => self.characters.get_mut(i),
            Action::Playground(i) => self.playgrounds.get_mut(i),
            Action::Randomize => Some(&mut self.randomize),
            Action::Reset => Some(&mut self.reset),
            Action::TuneNext => Some(&mut self.tune_next),
            Action::TunePrev => Some(&mut self.tune_prev),
            Action::TuneUp => Some(&mut self.tune_up),
            Action::TuneDown => Some(&mut self.tune_down),
            Action::TuneReset => Some(&mut self.tune_reset),
            Action::TunePreset => Some(&mut self.tune_preset),
        }
    }

    pub fn pressed(&self, action: Action, keyboard: &ButtonInput<KeyCode>) -> bool {
        keyboard.any_pressed(self.keys(action).iter().copied())
    }

    pub fn just_pressed(&self, action: Action, keyboard: &ButtonInput<KeyCode>) -> bool {
        keyboard.any_just_pressed(self.keys(action).iter().copied())
    }
}
