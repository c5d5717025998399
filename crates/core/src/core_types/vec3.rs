//! Vector type alias for 3D positions, velocities and accelerations.

use nalgebra::Vector3;

/// 3D vector type for positions, velocities, and directions.
///
/// This is a simple alias for `nalgebra::Vector3<f32>`, matching the single
/// precision vectors game engines hand across their scripting boundary.
pub type Vec3 = Vector3<f32>;

/// World "up" direction `(0, 1, 0)`.
///
/// Gravity acts along this axis; the projectile solver splits every
/// displacement into this vertical part and the remaining planar (x, z) part.
#[inline]
pub fn up() -> Vec3 {
    Vec3::y()
}

/// Horizontal (x, z) part of a vector with the vertical component zeroed.
#[inline]
pub fn planar(v: &Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
