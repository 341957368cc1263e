//! keel-core: float32 math and color value types.
//!
//! Everything here is a plain `Copy` value with pure, synchronous operations:
//! vectors (`Vec2`/`Vec3`/`Vec4`), a flat 4×4 matrix (`Mat4`), a quaternion
//! (`Quat`), and an RGBA [`Color`]. Degenerate numeric input (zero-length
//! normalize targets, out-of-range channels) degrades to no-ops or IEEE-754
//! propagation rather than erroring; the only fallible surface is hex color
//! parsing, which returns a typed error.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod color;
pub mod math;

pub use color::{lerp_color, Color, ColorParseError};
pub use math::{Mat4, Quat, Vec2, Vec3, Vec4};
