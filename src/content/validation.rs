//! Validation for character definitions.

use std::collections::HashSet;

use super::data::CharacterDef;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyRoster,
    DuplicateId(String),
    EmptyName { id: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyRoster => write!(f, "no characters defined"),
            ValidationError::DuplicateId(id) => write!(f, "Character '{}' is defined twice", id),
            ValidationError::EmptyName { id } => write!(f, "Character '{}' has an empty name", id),
        }
    }
}

/// Validate the loaded character definitions.
/// Returns a list of validation errors, empty if the roster is usable.
///
/// Suspicious physics values are not errors; profiles report those
/// themselves when built.
pub fn validate_roster(defs: &[CharacterDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if defs.is_empty() {
        errors.push(ValidationError::EmptyRoster);
        return errors;
    }

    let mut seen = HashSet::new();
    for def in defs {
        if !seen.insert(def.id.as_str()) {
            errors.push(ValidationError::DuplicateId(def.id.clone()));
        }
        if def.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { id: def.id.clone() });
        }
    }

    errors
}
