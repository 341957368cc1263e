//! Float32 math helpers: scalar utilities plus vector, matrix, and
//! quaternion value types.
//!
//! All arithmetic stays in `f32`. NaN and infinities propagate through every
//! operation instead of raising; the one guarded case is `normalize`, which
//! leaves zero-length values untouched rather than dividing by zero.

use std::f32::consts::TAU;

mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use mat4::Mat4;
pub use quat::Quat;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Degeneracy threshold used by approximate comparisons in tests and by
/// callers that want to treat near-zero values as zero.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// # Panics
/// Panics if `min > max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Euclidean distance between the 2D points `(x1, y1)` and `(x2, y2)`.
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance between the 3D points `(x1, y1, z1)` and `(x2, y2, z2)`.
pub fn distance_3d(x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let dz = z2 - z1;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Componentwise linear interpolation between `a` and `b`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
pub fn lerp_vec3(a: &Vec3, b: &Vec3, t: f32) -> Vec3 {
    a.add(&b.sub(a).scale(t))
}
