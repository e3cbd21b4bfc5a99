//! Arcball rotation: pointer samples lifted onto a virtual sphere and
//! composed into a unit-quaternion orientation.

/// Press/drag/release state machine.
pub mod controller;
/// Sphere mapping and look-at orientations.
pub mod sphere;
/// Screen-to-camera-space unprojection.
pub mod unproject;

pub use controller::{ArcballController, PointerState};
pub use sphere::{map_to_sphere, quat_look_at, FORWARD};
pub use unproject::{
    MatrixUnprojector, UnprojectError, Unprojector, Viewport, ViewportProvider,
};
