// SPDX-License-Identifier: Apache-2.0

use keel_core::math::Vec2;

/// Axis-aligned bounding box in 2D.
///
/// Same contract as the 3D [`crate::Aabb`]: inclusive intersection and
/// containment, `min ≤ max` after any expand, and an empty sentinel state of
/// `min = +∞`, `max = -∞` per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb2 {
    min: Vec2,
    max: Vec2,
}

impl Aabb2 {
    /// Returns the empty box: `min = +∞`, `max = -∞` on both axes.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: Vec2::new(f32::INFINITY, f32::INFINITY),
            max: Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Constructs a box from explicit corners.
    ///
    /// # Panics
    /// Panics if any component of `min` exceeds its counterpart in `max`.
    #[must_use]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        let a = min.to_array();
        let b = max.to_array();
        assert!(a[0] <= b[0] && a[1] <= b[1], "invalid AABB: min > max");
        Self { min, max }
    }

    /// Builds a box centered at `center` with half-extents `hx, hy`.
    #[must_use]
    pub fn from_center_half_extents(center: Vec2, hx: f32, hy: f32) -> Self {
        let he = Vec2::new(hx, hy);
        Self::new(center.sub(&he), center.add(&he))
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Widens the box to include `point`.
    pub fn expand(&mut self, point: Vec2) {
        let p = point.to_array();
        let mi = self.min.to_array();
        let ma = self.max.to_array();
        self.min = Vec2::new(mi[0].min(p[0]), mi[1].min(p[1]));
        self.max = Vec2::new(ma[0].max(p[0]), ma[1].max(p[1]));
    }

    /// Returns `true` if this box overlaps `other`, inclusive at the
    /// boundary.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        !(a_max[0] < b_min[0]
            || a_min[0] > b_max[0]
            || a_max[1] < b_min[1]
            || a_min[1] > b_max[1])
    }

    /// Returns `true` if `point` lies inside the box, inclusive on all edges.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let p = point.to_array();
        let mi = self.min.to_array();
        let ma = self.max.to_array();
        p[0] >= mi[0] && p[0] <= ma[0] && p[1] >= mi[1] && p[1] <= ma[1]
    }

    /// Shifts both corners by `offset`.
    pub fn translate(&mut self, offset: Vec2) {
        self.min = self.min.add(&offset);
        self.max = self.max.add(&offset);
    }

    /// Returns the center point of the box.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.min.add(&self.max).scale(0.5)
    }

    /// Returns the per-axis extent of the box.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.max.sub(&self.min)
    }

    /// Restores the empty sentinel state.
    pub fn reset(&mut self) {
        *self = Self::empty();
    }
}

/// The empty box sentinel.
impl Default for Aabb2 {
    fn default() -> Self {
        Self::empty()
    }
}
