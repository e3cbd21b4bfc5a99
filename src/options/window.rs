use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ArcballError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Window", inline)]
#[serde(default)]
/// Viewer window parameters.
pub struct WindowOptions {
    /// Window title; the current orientation is appended at runtime.
    #[schemars(skip)]
    pub title: String,
    /// Initial inner width in logical pixels.
    #[schemars(title = "Width", range(min = 1))]
    pub width: u32,
    /// Initial inner height in logical pixels.
    #[schemars(title = "Height", range(min = 1))]
    pub height: u32,
    /// Open in borderless fullscreen on the current monitor.
    #[schemars(title = "Start Fullscreen")]
    pub start_fullscreen: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Arcball".into(),
            width: 1280,
            height: 768,
            start_fullscreen: false,
        }
    }
}

impl WindowOptions {
    /// Reject zero-sized windows.
    pub fn validate(&self) -> Result<(), ArcballError> {
        if self.width == 0 || self.height == 0 {
            return Err(ArcballError::InvalidOption(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
