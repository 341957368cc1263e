// SPDX-License-Identifier: Apache-2.0

//! Minimal 2D rigid body with a semi-implicit Euler integrator.

use keel_core::math::Vec2;

use crate::types::aabb2::Aabb2;

/// Per-step multiplicative velocity damping applied by default.
const DEFAULT_FRICTION: f32 = 0.98;

/// Default gravitational acceleration, y-down.
const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 9.8);

/// A single free body: position, velocity, and accumulated acceleration,
/// stepped by [`Body::update`].
///
/// The body exclusively owns all of its vector state; nothing is shared or
/// aliased across bodies. Its bounding box always reflects `position` and
/// `size` after construction, [`Body::update`], or
/// [`Body::update_bounding_box`].
///
/// Gravity is a stored per-body acceleration consumed by every `update` step;
/// set it to [`Vec2::ZERO`] for bodies that should only react to explicitly
/// applied forces.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Body {
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    size: Vec2,
    mass: f32,
    friction: f32,
    gravity: Vec2,
    bbox: Aabb2,
}

impl Body {
    /// Creates a body at `position` with the given extent and mass.
    ///
    /// Velocity and accumulated acceleration start at zero; friction and
    /// gravity take their defaults (0.98 damping, `(0, 9.8)` y-down). The
    /// bounding box is computed immediately.
    #[must_use]
    pub fn new(position: Vec2, size: Vec2, mass: f32) -> Self {
        let mut body = Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            size,
            mass,
            friction: DEFAULT_FRICTION,
            gravity: DEFAULT_GRAVITY,
            bbox: Aabb2::empty(),
        };
        body.update_bounding_box();
        body
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Acceleration accumulated since the last [`Body::update`].
    #[must_use]
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Body extent (full widths, not half-extents).
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Body mass.
    #[must_use]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Per-step velocity damping factor.
    #[must_use]
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Stored gravitational acceleration.
    #[must_use]
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Bounding box centered on the position with half-extents `size / 2`.
    #[must_use]
    pub fn bbox(&self) -> Aabb2 {
        self.bbox
    }

    /// Sets the per-step velocity damping factor (1 disables damping).
    pub fn set_friction(&mut self, friction: f32) {
        self.friction = friction;
    }

    /// Sets the gravitational acceleration applied each step.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    /// Accumulates `force / mass` into the pending acceleration.
    ///
    /// Forces applied between updates sum linearly. A zero mass propagates
    /// infinities through the next step rather than erroring.
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration = self.acceleration.add(&force.scale(1.0 / self.mass));
    }

    /// Advances the body by `dt` seconds with semi-implicit Euler.
    ///
    /// In order: velocity integrates the accumulated acceleration plus
    /// gravity, friction damps the velocity, position integrates the new
    /// velocity, the accumulated acceleration clears, and the bounding box
    /// is rebuilt.
    pub fn update(&mut self, dt: f32) {
        let accel = self.acceleration.add(&self.gravity);
        self.velocity = self.velocity.add(&accel.scale(dt));
        self.velocity = self.velocity.scale(self.friction);
        self.position = self.position.add(&self.velocity.scale(dt));
        self.acceleration = Vec2::ZERO;
        self.update_bounding_box();
    }

    /// Recenters the bounding box on the current position with half-extents
    /// `size / 2`.
    pub fn update_bounding_box(&mut self) {
        let [hx, hy] = self.size.scale(0.5).to_array();
        self.bbox = Aabb2::from_center_half_extents(self.position, hx, hy);
    }
}
