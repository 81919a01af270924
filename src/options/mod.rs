//! Viewer options with TOML preset support.
//!
//! Camera parameters and keybindings are consolidated here. Options
//! serialize to/from TOML so presets can be stored next to the application.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
use glam::DVec3;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FreelookError;

/// Read-only source of the camera's starting pose.
///
/// Consulted by [`Camera::reset`](crate::camera::Camera::reset).
pub trait Settings {
    /// World-space point the camera starts at.
    fn camera_starting_location(&self) -> DVec3;
    /// World-space point the camera initially looks at.
    fn camera_starting_look_at(&self) -> DVec3;
}

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera pose, projection, and control parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Settings for Options {
    fn camera_starting_location(&self) -> DVec3 {
        self.camera.starting_location
    }

    fn camera_starting_look_at(&self) -> DVec3 {
        self.camera.starting_look_at
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, FreelookError> {
        toml::from_str(content)
            .map_err(|e| FreelookError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FreelookError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FreelookError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FreelookError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("Saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
