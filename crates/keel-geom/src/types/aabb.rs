// SPDX-License-Identifier: Apache-2.0

use keel_core::math::{Mat4, Vec3};

/// Axis-aligned bounding box in 3D.
///
/// Invariants:
/// - After any [`Aabb::expand`], `min ≤ max` componentwise.
/// - The empty state is `min = +∞`, `max = -∞` per axis, reachable through
///   [`Aabb::empty`] and [`Aabb::reset`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Returns the empty box: `min = +∞`, `max = -∞` on every axis.
    ///
    /// Expanding an empty box by a point collapses both corners onto that
    /// point, which is the idiom for building a box incrementally.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: Vec3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vec3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Constructs a box from explicit corners.
    ///
    /// # Panics
    /// Panics if any component of `min` exceeds its counterpart in `max`.
    /// Use [`Aabb::empty`] for the inverted sentinel state.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        let a = min.to_array();
        let b = max.to_array();
        assert!(
            a[0] <= b[0] && a[1] <= b[1] && a[2] <= b[2],
            "invalid AABB: min > max"
        );
        Self { min, max }
    }

    /// Builds a box centered at `center` with half-extents `hx, hy, hz`.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, hx: f32, hy: f32, hz: f32) -> Self {
        let he = Vec3::new(hx, hy, hz);
        Self::new(center.sub(&he), center.add(&he))
    }

    /// Builds the minimal box containing all `points`.
    ///
    /// # Panics
    /// Panics if `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Self {
        assert!(!points.is_empty(), "from_points requires at least one point");
        let mut out = Self::empty();
        for p in points {
            out.expand(*p);
        }
        out
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Widens the box to include `point`.
    pub fn expand(&mut self, point: Vec3) {
        let p = point.to_array();
        let mi = self.min.to_array();
        let ma = self.max.to_array();
        self.min = Vec3::new(mi[0].min(p[0]), mi[1].min(p[1]), mi[2].min(p[2]));
        self.max = Vec3::new(ma[0].max(p[0]), ma[1].max(p[1]), ma[2].max(p[2]));
    }

    /// Returns `true` if this box overlaps `other`.
    ///
    /// Inclusive at the boundary: boxes touching on a face intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        !(a_max[0] < b_min[0]
            || a_min[0] > b_max[0]
            || a_max[1] < b_min[1]
            || a_min[1] > b_max[1]
            || a_max[2] < b_min[2]
            || a_min[2] > b_max[2])
    }

    /// Returns `true` if `point` lies inside the box, inclusive on all faces.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        let p = point.to_array();
        let mi = self.min.to_array();
        let ma = self.max.to_array();
        p[0] >= mi[0]
            && p[0] <= ma[0]
            && p[1] >= mi[1]
            && p[1] <= ma[1]
            && p[2] >= mi[2]
            && p[2] <= ma[2]
    }

    /// Shifts both corners by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        self.min = self.min.add(&offset);
        self.max = self.max.add(&offset);
    }

    /// Returns the center point of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.min.add(&self.max).scale(0.5)
    }

    /// Returns the per-axis extent of the box.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max.sub(&self.min)
    }

    /// Restores the empty sentinel state.
    pub fn reset(&mut self) {
        *self = Self::empty();
    }

    /// Returns the union of two boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let a = self.min.to_array();
        let b = self.max.to_array();
        let c = other.min.to_array();
        let d = other.max.to_array();
        Self {
            min: Vec3::new(a[0].min(c[0]), a[1].min(c[1]), a[2].min(c[2])),
            max: Vec3::new(b[0].max(d[0]), b[1].max(d[1]), b[2].max(d[2])),
        }
    }

    /// Grows the box by a uniform margin `m` in all directions.
    #[must_use]
    pub fn inflate(&self, m: f32) -> Self {
        let delta = Vec3::new(m, m, m);
        Self {
            min: self.min.sub(&delta),
            max: self.max.add(&delta),
        }
    }

    /// Returns the axis-aligned box bounding this box after transformation
    /// by `mat`, by re-bounding the eight transformed corners.
    #[must_use]
    pub fn transformed(&self, mat: &Mat4) -> Self {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        let corners = [
            Vec3::new(minx, miny, minz),
            Vec3::new(minx, miny, maxz),
            Vec3::new(minx, maxy, minz),
            Vec3::new(minx, maxy, maxz),
            Vec3::new(maxx, miny, minz),
            Vec3::new(maxx, miny, maxz),
            Vec3::new(maxx, maxy, minz),
            Vec3::new(maxx, maxy, maxz),
        ];
        let mut out = Self::empty();
        for c in &corners {
            out.expand(mat.transform_point(c));
        }
        out
    }
}

/// The empty box sentinel.
impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
