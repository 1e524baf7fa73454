//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The Roster turns them into live profiles.

use serde::{Deserialize, Serialize};

use crate::movement::ProfileParams;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Characters (profiles.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CharacterDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// sRGB, 0-255 per channel.
    pub color: (u8, u8, u8),
    pub physics: ProfileParams,
}
