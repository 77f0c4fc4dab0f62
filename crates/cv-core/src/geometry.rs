//! Geometry helpers shared by the cover search and the reference services.
//!
//! Conventions: right-handed, +Y up, world forward is +Z.  Rotating forward
//! by θ about +Y gives `(sin θ, 0, cos θ)`, so 90° points along +X.

pub use glam::Vec3;

use glam::Quat;

/// World forward axis used as the default sampling reference.
pub const WORLD_FORWARD: Vec3 = Vec3::Z;

/// Project `v` onto the horizontal (XZ) plane.
#[inline]
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Angle in degrees of sample `i` out of `n` evenly spaced samples.
#[inline]
pub fn sample_angle_deg(i: usize, n: usize) -> f32 {
    i as f32 * (360.0 / n as f32)
}

/// Rotate `reference` by `angle_deg` around the vertical axis.
#[inline]
pub fn sample_direction(reference: Vec3, angle_deg: f32) -> Vec3 {
    Quat::from_rotation_y(angle_deg.to_radians()) * reference
}

/// The `n` evenly spaced horizontal directions around `reference`, in index
/// order, as `(index, angle_deg, direction)`.
///
/// `reference` should be a horizontal unit vector; the returned directions
/// then are too.
pub fn sample_directions(reference: Vec3, n: usize) -> impl Iterator<Item = (usize, f32, Vec3)> {
    (0..n).map(move |i| {
        let angle = sample_angle_deg(i, n);
        (i, angle, sample_direction(reference, angle))
    })
}
