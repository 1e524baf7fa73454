//! Roster resource holding the live character profiles.

use bevy::prelude::*;

use super::data::CharacterDef;
use crate::movement::PhysicsProfile;

/// One selectable character and its live-tunable profile.
#[derive(Debug, Clone)]
pub struct Character {
    pub id: String,
    pub description: String,
    pub color: Color,
    pub profile: PhysicsProfile,
}

impl Character {
    pub fn from_def(def: &CharacterDef) -> Self {
        let (r, g, b) = def.color;
        Self {
            id: def.id.clone(),
            description: def.description.clone(),
            color: Color::srgb_u8(r, g, b),
            profile: PhysicsProfile::new(def.name.clone(), def.physics.clone()),
        }
    }

    pub fn name(&self) -> &str {
        self.profile.name()
    }
}

/// Every loaded character, in data-file order, plus the active selection.
///
/// Profiles are shared by reference: tuning edits made while a character is
/// active are still there when it is selected again.
#[derive(Resource, Debug, Clone)]
pub struct Roster {
    characters: Vec<Character>,
    active: usize,
}

impl Roster {
    /// Returns `None` when there are no characters to select.
    pub fn from_defs(defs: &[CharacterDef]) -> Option<Self> {
        if defs.is_empty() {
            return None;
        }
        Some(Self {
            characters: defs.iter().map(Character::from_def).collect(),
            active: 0,
        })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Character {
        &self.characters[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Character {
        &mut self.characters[self.active]
    }

    /// Selects by position. Returns `false` and keeps the selection when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.characters.len() {
            return false;
        }
        self.active = index;
        true
    }

    pub fn select_id(&mut self, id: &str) -> bool {
        match self.characters.iter().position(|c| c.id == id) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Advances to the next character, wrapping around.
    pub fn cycle_next(&mut self) {
        self.active = (self.active + 1) % self.characters.len();
    }

    /// Returns a summary of the loaded roster for logging.
    pub fn summary(&self) -> String {
        let names: Vec<&str> = self.characters.iter().map(Character::name).collect();
        format!(
            "Roster loaded: {} characters ({}), active '{}'",
            self.characters.len(),
            names.join(", "),
            self.active().id
        )
    }
}
