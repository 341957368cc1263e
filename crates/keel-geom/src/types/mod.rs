//! Core geometry types (bounding boxes, rays).
//!
//! Conventions:
//! - Overlap and containment are inclusive on faces, so touching boundaries
//!   count as intersecting.
//! - The empty-box sentinel is `min = +∞`, `max = -∞` per axis; the first
//!   `expand` collapses both corners onto the expanded point.
//! - Ray directions are normalized once at construction and never mutated.

#[doc = "Axis-aligned bounding box in 3D."]
pub mod aabb;
#[doc = "Axis-aligned bounding box in 2D."]
pub mod aabb2;
#[doc = "Immutable 2D ray with parametric evaluation and box intersection."]
pub mod ray2;
