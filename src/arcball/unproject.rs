//! Screen-to-camera-space unprojection and the viewport snapshot it needs.

use std::fmt;

use glam::{DMat4, DVec2, DVec3, DVec4};

/// Homogeneous `w` magnitudes below this cannot be divided out safely.
const MIN_W: f64 = 1e-12;

/// Framebuffer dimensions in pixels. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Create a viewport, rejecting non-positive or non-finite sizes.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    /// Create a viewport from an integer framebuffer size.
    #[must_use]
    pub fn from_pixels(width: u32, height: u32) -> Option<Self> {
        Self::new(f64::from(width), f64::from(height))
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// Source of the current framebuffer size, usually the host window.
pub trait ViewportProvider {
    /// Current framebuffer size in pixels.
    fn framebuffer_size(&self) -> (u32, u32);
}

impl ViewportProvider for (u32, u32) {
    fn framebuffer_size(&self) -> (u32, u32) {
        *self
    }
}

#[cfg(feature = "viewer")]
impl ViewportProvider for winit::window::Window {
    fn framebuffer_size(&self) -> (u32, u32) {
        let size = self.inner_size();
        (size.width, size.height)
    }
}

/// Reasons a single screen sample could not be unprojected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnprojectError {
    /// No valid viewport has been reported yet.
    MissingViewport,
    /// The projection matrix cannot be inverted.
    SingularTransform,
    /// The unprojected point lies at infinity (`w` ≈ 0).
    DegenerateW,
    /// The unprojected point contains NaN or infinite components.
    NonFinite,
}

impl fmt::Display for UnprojectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingViewport => write!(f, "no valid viewport"),
            Self::SingularTransform => {
                write!(f, "projection matrix is not invertible")
            }
            Self::DegenerateW => {
                write!(f, "unprojected point has zero homogeneous w")
            }
            Self::NonFinite => write!(f, "unprojected point is not finite"),
        }
    }
}

impl std::error::Error for UnprojectError {}

/// Inverse-projects screen coordinates into camera space.
///
/// `screen` uses window coordinates with the origin at the top-left corner
/// and `depth` is the normalized window depth in `[0, 1]`.
pub trait Unprojector {
    /// Camera-space point under `screen` at `depth`.
    fn unproject(
        &self,
        screen: DVec2,
        depth: f64,
        projection: &DMat4,
        viewport: Viewport,
    ) -> Result<DVec3, UnprojectError>;
}

impl<F> Unprojector for F
where
    F: Fn(DVec2, f64, &DMat4, Viewport) -> Result<DVec3, UnprojectError>,
{
    fn unproject(
        &self,
        screen: DVec2,
        depth: f64,
        projection: &DMat4,
        viewport: Viewport,
    ) -> Result<DVec3, UnprojectError> {
        self(screen, depth, projection, viewport)
    }
}

/// `gluUnProject` with an identity model-view matrix.
///
/// The window point is flipped to a bottom-left origin, mapped to
/// normalized device coordinates (depth `[0, 1]` → `[−1, 1]`), pushed
/// through the inverse projection and divided by `w`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixUnprojector;

impl Unprojector for MatrixUnprojector {
    fn unproject(
        &self,
        screen: DVec2,
        depth: f64,
        projection: &DMat4,
        viewport: Viewport,
    ) -> Result<DVec3, UnprojectError> {
        let det = projection.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(UnprojectError::SingularTransform);
        }
        let inverse = projection.inverse();

        let window_y = viewport.height - screen.y;
        let ndc = DVec4::new(
            2.0 * screen.x / viewport.width - 1.0,
            2.0 * window_y / viewport.height - 1.0,
            2.0 * depth - 1.0,
            1.0,
        );

        let clip = inverse * ndc;
        if clip.w.abs() < MIN_W {
            return Err(UnprojectError::DegenerateW);
        }
        let point = clip.truncate() / clip.w;
        if point.is_finite() {
            Ok(point)
        } else {
            Err(UnprojectError::NonFinite)
        }
    }
}
