//! Viewer and controller options with TOML file support.
//!
//! Every tweakable setting (arcball interaction, window, projection,
//! keybindings) is consolidated here. Options serialize to/from TOML and
//! every section uses `#[serde(default)]`, so partial files work.

mod arcball;
mod keybindings;
mod projection;
mod window;

use std::path::Path;

pub use arcball::{ArcballOptions, DEFAULT_DEPTH_NUDGE, DEFAULT_SPHERE_RADIUS};
pub use keybindings::KeybindingOptions;
pub use projection::ProjectionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::ArcballError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Arcball interaction parameters.
    pub arcball: ArcballOptions,
    /// Viewer window parameters.
    pub window: WindowOptions,
    /// Host projection parameters.
    pub projection: ProjectionOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the user-facing options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Write the pretty-printed JSON Schema to `path`.
    pub fn write_schema(path: &Path) -> Result<(), ArcballError> {
        let content = serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| ArcballError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(ArcballError::Io)
    }

    /// Load options from a TOML file. Missing fields use defaults; values
    /// out of range are rejected.
    pub fn load(path: &Path) -> Result<Self, ArcballError> {
        let content =
            std::fs::read_to_string(path).map_err(ArcballError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| ArcballError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ArcballError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArcballError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ArcballError::Io)?;
        }
        std::fs::write(path, content).map_err(ArcballError::Io)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ArcballError> {
        self.arcball.validate()?;
        self.window.validate()?;
        self.projection.validate()
    }
}
