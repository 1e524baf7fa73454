//! Loader for RON content files at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use crate::core::SandboxConfig;

pub(crate) const PROFILES_FILE: &str = "profiles.ron";
pub(crate) const SANDBOX_FILE: &str = "sandbox.ron";

/// Shipped copies used when the files on disk are missing or broken.
pub(crate) const EMBEDDED_PROFILES: &str = include_str!("../../assets/data/profiles.ron");
pub(crate) const EMBEDDED_SANDBOX: &str = include_str!("../../assets/data/sandbox.ron");

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

fn parse<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Parse the contents of a profiles file.
pub fn parse_character_defs(file: &str, contents: &str) -> Result<Vec<CharacterDef>, ContentLoadError> {
    let data: DataFile<CharacterDef> = parse(file, contents)?;
    Ok(data.items)
}

/// Load character definitions from `profiles.ron` in `base_path`.
pub fn load_character_defs(base_path: &Path) -> Result<Vec<CharacterDef>, ContentLoadError> {
    let path = base_path.join(PROFILES_FILE);
    let contents = read_file(&path)?;
    parse_character_defs(&path.display().to_string(), &contents)
}

/// Load sandbox settings from `sandbox.ron` in `base_path`.
pub fn load_sandbox_config(base_path: &Path) -> Result<SandboxConfig, ContentLoadError> {
    let path = base_path.join(SANDBOX_FILE);
    let contents = read_file(&path)?;
    parse(&path.display().to_string(), &contents)
}

/// Load from disk, falling back to the embedded copy with a warning.
pub(crate) fn load_or_embedded<T>(
    from_disk: Result<T, ContentLoadError>,
    embedded: impl FnOnce() -> Result<T, ContentLoadError>,
) -> Result<T, ContentLoadError> {
    match from_disk {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!("{}; using built-in copy", e);
            embedded()
        }
    }
}

pub(crate) fn embedded_character_defs() -> Result<Vec<CharacterDef>, ContentLoadError> {
    parse_character_defs("<embedded profiles.ron>", EMBEDDED_PROFILES)
}

pub(crate) fn embedded_sandbox_config() -> Result<SandboxConfig, ContentLoadError> {
    parse("<embedded sandbox.ron>", EMBEDDED_SANDBOX)
}
