use crate::math::{Mat4, Vec3};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// Angles are radians. Construction does not normalize: rotations are unit
/// quaternions only when built from a unit axis or after [`Quat::normalize`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Creates a quaternion from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion `(0, 0, 0, 1)`.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the components as `[x, y, z, w]`.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Constructs a quaternion from a rotation axis and an angle in radians.
    ///
    /// The axis is used exactly as supplied and must already be unit length
    /// for the result to represent a rotation: `(x, y, z) = axis·sin(θ/2)`,
    /// `w = cos(θ/2)`.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let scaled = axis.scale(sin_half);
        Self::new(
            scaled.component(0),
            scaled.component(1),
            scaled.component(2),
            cos_half,
        )
    }

    /// Hamilton product `self ⊗ other`.
    ///
    /// Under the column-vector convention used throughout this crate,
    /// `a.multiply(&b)` represents the rotation `b` applied first, then `a`.
    /// The product is not re-normalized; unit operands give a unit result up
    /// to floating-point error.
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Normalises the quaternion when its 4D norm is strictly positive; a
    /// zero quaternion is returned unchanged.
    pub fn normalize(&self) -> Self {
        let len = (self.component(0) * self.component(0)
            + self.component(1) * self.component(1)
            + self.component(2) * self.component(2)
            + self.component(3) * self.component(3))
        .sqrt();
        if len > 0.0 {
            let inv = 1.0 / len;
            Self::new(
                self.component(0) * inv,
                self.component(1) * inv,
                self.component(2) * inv,
                self.component(3) * inv,
            )
        } else {
            *self
        }
    }

    /// Converts the quaternion to a column-major rotation matrix.
    ///
    /// A normalized working copy is used, so non-unit inputs still produce a
    /// proper rotation (the zero quaternion maps through unchanged and yields
    /// a degenerate matrix).
    pub fn to_mat4(&self) -> Mat4 {
        let q = self.normalize();
        let [x, y, z, w] = q.data;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

/// Takes the components verbatim as `(x, y, z, w)`; no normalization.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}
