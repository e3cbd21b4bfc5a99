use glam::{DMat4, DVec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::arcball::Viewport;
use crate::error::ArcballError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
/// Orthographic projection the viewer builds for its window.
pub struct ProjectionOptions {
    /// Half the visible width in camera-space units; the height follows
    /// the window aspect ratio.
    #[schemars(title = "Half Extent", range(min = 1.0, max = 100.0), extend("step" = 0.5))]
    pub half_extent: f64,
    /// Near clipping plane.
    #[schemars(skip)]
    pub near: f64,
    /// Far clipping plane.
    #[schemars(skip)]
    pub far: f64,
    /// Distance the scene is pushed away from the eye along −Z.
    #[schemars(title = "Eye Distance", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub eye_distance: f64,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            half_extent: 10.0,
            near: -100.0,
            far: 100.0,
            eye_distance: 20.0,
        }
    }
}

impl ProjectionOptions {
    /// Aspect-corrected orthographic projection for `viewport`, including
    /// the eye translation.
    #[must_use]
    pub fn matrix(&self, viewport: Viewport) -> DMat4 {
        let s = self.half_extent;
        let ratio = viewport.height() / viewport.width();
        DMat4::orthographic_rh_gl(-s, s, -ratio * s, ratio * s, self.near, self.far)
            * DMat4::from_translation(DVec3::new(0.0, 0.0, -self.eye_distance))
    }

    /// Check that the projection is invertible.
    pub fn validate(&self) -> Result<(), ArcballError> {
        if !(self.half_extent.is_finite() && self.half_extent > 0.0) {
            return Err(ArcballError::InvalidOption(format!(
                "projection.half_extent must be positive, got {}",
                self.half_extent
            )));
        }
        if !(self.near.is_finite() && self.far.is_finite()) {
            return Err(ArcballError::InvalidOption(format!(
                "projection.near ({}) and far ({}) must be finite",
                self.near, self.far
            )));
        }
        if !(self.near < self.far) {
            return Err(ArcballError::InvalidOption(format!(
                "projection.near ({}) must be less than far ({})",
                self.near, self.far
            )));
        }
        if !(self.eye_distance.is_finite() && self.eye_distance >= 0.0) {
            return Err(ArcballError::InvalidOption(format!(
                "projection.eye_distance must be finite and non-negative, got {}",
                self.eye_distance
            )));
        }
        Ok(())
    }
}
