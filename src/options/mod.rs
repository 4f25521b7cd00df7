//! Centralized viewer options with TOML preset support.
//!
//! Camera projection/control parameters and stereo settings consolidated
//! in one container that serializes to/from TOML. All sub-structs use
//! `#[serde(default)]` so partial files (e.g. only overriding `[stereo]`)
//! work correctly.

mod camera;
mod stereo;

use std::path::Path;

pub use camera::CameraOptions;
use serde::{Deserialize, Serialize};
pub use stereo::StereoOptions;

use crate::error::GeoviewError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Stereoscopic rendering parameters.
    pub stereo: StereoOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GeoviewError> {
        let content = std::fs::read_to_string(path).map_err(GeoviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| GeoviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GeoviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GeoviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GeoviewError::Io)?;
        }
        std::fs::write(path, content).map_err(GeoviewError::Io)
    }
}
