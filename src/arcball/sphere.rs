//! Virtual-sphere geometry: lifting planar camera-space points onto the
//! interaction hemisphere and turning sphere points into orientations.

use std::f64::consts::PI;

use glam::{DQuat, DVec2, DVec3};

/// Canonical look direction of an unrotated camera.
pub const FORWARD: DVec3 = DVec3::NEG_Z;

/// Squared cross-product length below which a look direction counts as
/// parallel to [`FORWARD`].
const PARALLEL_EPSILON_SQ: f64 = 1e-24;

/// Lift a planar camera-space point onto a sphere of `radius` centred at
/// the origin.
///
/// Points within the radius land on the front hemisphere
/// `(x, y, sqrt(r² − d²))`. Points on or beyond the rim are clamped onto
/// the equator at zero depth, which keeps the mapping continuous at
/// `d == r`.
#[must_use]
pub fn map_to_sphere(planar: DVec2, radius: f64) -> DVec3 {
    let distance = planar.length();
    if distance < radius {
        planar.extend((radius * radius - distance * distance).sqrt())
    } else {
        (planar.normalize_or_zero() * radius).extend(0.0)
    }
}

/// Orientation for a camera at `eye` looking at `target`, measured against
/// [`FORWARD`].
///
/// Built as `from_axis_angle(axis, −θ)` where `θ` is the angle between
/// [`FORWARD`] and the look direction and `axis` their normalized cross
/// product, so the returned rotation carries the look direction back onto
/// [`FORWARD`].
///
/// Degenerate inputs never produce NaN: a look direction parallel to
/// [`FORWARD`] (or a target coincident with the eye) yields the identity,
/// and an anti-parallel one a half turn about +Y.
#[must_use]
pub fn quat_look_at(eye: DVec3, target: DVec3) -> DQuat {
    let Some(direction) = (target - eye).try_normalize() else {
        return DQuat::IDENTITY;
    };

    let cos_angle = FORWARD.dot(direction).clamp(-1.0, 1.0);
    let axis = FORWARD.cross(direction);
    if axis.length_squared() < PARALLEL_EPSILON_SQ {
        return if cos_angle > 0.0 {
            DQuat::IDENTITY
        } else {
            DQuat::from_axis_angle(DVec3::Y, PI)
        };
    }

    DQuat::from_axis_angle(axis.normalize(), -cos_angle.acos()).normalize()
}
