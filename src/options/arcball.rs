use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ArcballError;
use crate::input::MouseButton;

/// Radius of the virtual interaction sphere, in camera-space units.
pub const DEFAULT_SPHERE_RADIUS: f64 = 4.0;

/// Factor applied to the unprojected depth so the sample never sits
/// exactly on the camera plane.
pub const DEFAULT_DEPTH_NUDGE: f64 = 0.999_999_9;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Arcball", inline)]
#[serde(default)]
/// Arcball interaction parameters.
pub struct ArcballOptions {
    /// Radius of the virtual sphere in camera-space units.
    #[schemars(title = "Sphere Radius", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub sphere_radius: f64,
    /// Multiplier in (0, 1) applied to the unprojected depth.
    #[schemars(skip)]
    pub depth_nudge: f64,
    /// Mouse button that drives the rotation.
    #[schemars(title = "Drag Button")]
    pub drag_button: MouseButton,
}

impl Default for ArcballOptions {
    fn default() -> Self {
        Self {
            sphere_radius: DEFAULT_SPHERE_RADIUS,
            depth_nudge: DEFAULT_DEPTH_NUDGE,
            drag_button: MouseButton::Left,
        }
    }
}

impl ArcballOptions {
    /// Check that every value is usable by the controller.
    pub fn validate(&self) -> Result<(), ArcballError> {
        if !(self.sphere_radius.is_finite() && self.sphere_radius > 0.0) {
            return Err(ArcballError::InvalidOption(format!(
                "arcball.sphere_radius must be positive, got {}",
                self.sphere_radius
            )));
        }
        if !(self.depth_nudge > 0.0 && self.depth_nudge < 1.0) {
            return Err(ArcballError::InvalidOption(format!(
                "arcball.depth_nudge must lie in (0, 1), got {}",
                self.depth_nudge
            )));
        }
        Ok(())
    }
}
