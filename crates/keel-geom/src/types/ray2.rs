// SPDX-License-Identifier: Apache-2.0

use keel_core::math::Vec2;

use crate::types::aabb2::Aabb2;

/// Immutable 2D ray: an origin and a unit-length direction.
///
/// The direction is normalized once at construction and the type exposes no
/// mutators, so the unit-length invariant cannot be violated afterwards. A
/// zero direction stays zero (normalize is a no-op on zero vectors); the
/// intersection test then resolves through IEEE-754 infinity arithmetic like
/// any other axis-parallel case.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray2 {
    origin: Vec2,
    direction: Vec2,
}

impl Ray2 {
    /// Creates a ray from an origin and a direction.
    ///
    /// The supplied direction is normalized here; it does not need to be
    /// unit length.
    #[must_use]
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Returns the ray origin.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Returns the unit-length ray direction.
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Evaluates `origin + direction · t`.
    ///
    /// Any real `t` is valid; negative values extend behind the origin.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.origin.add(&self.direction.scale(t))
    }

    /// Slab-method ray/box intersection.
    ///
    /// Per-axis entry/exit parameter ranges are computed (swapped when the
    /// direction component is negative) and the ray hits iff the two ranges
    /// overlap. A zero direction component divides to signed infinities,
    /// which the comparisons handle without a special case, so IEEE-754
    /// semantics must be preserved here.
    #[must_use]
    pub fn intersects_box(&self, aabb: &Aabb2) -> bool {
        let [ox, oy] = self.origin.to_array();
        let [dx, dy] = self.direction.to_array();
        let [min_x, min_y] = aabb.min().to_array();
        let [max_x, max_y] = aabb.max().to_array();

        let mut tmin = (min_x - ox) / dx;
        let mut tmax = (max_x - ox) / dx;
        if tmin > tmax {
            core::mem::swap(&mut tmin, &mut tmax);
        }

        let mut tymin = (min_y - oy) / dy;
        let mut tymax = (max_y - oy) / dy;
        if tymin > tymax {
            core::mem::swap(&mut tymin, &mut tymax);
        }

        !(tmin > tymax || tymin > tmax)
    }
}
