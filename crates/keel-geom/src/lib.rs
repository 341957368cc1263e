// SPDX-License-Identifier: Apache-2.0
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names
)]
#![doc = r"Geometry primitives built on keel-core.

This crate provides:
- Axis-aligned bounding boxes in 3D (`Aabb`) and 2D (`Aabb2`), built
  incrementally from an empty sentinel state or from explicit corners.
- An immutable 2D ray (`Ray2`) with slab-method box intersection.
- A minimal 2D rigid body (`Body`) stepped by a semi-implicit Euler
  integrator, with a bounding box derived from its position and size.

Everything is a value type owning its vector members; no sharing or aliasing
across entities. Degenerate numeric input follows IEEE-754 propagation
(infinities and NaN flow through) rather than erroring.
"]

pub mod body;
/// Foundational geometric types.
pub mod types;

pub use body::Body;
pub use types::aabb::Aabb;
pub use types::aabb2::Aabb2;
pub use types::ray2::Ray2;
