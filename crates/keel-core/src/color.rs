//! RGBA color with hex and `rgba(...)` string conversion.
//!
//! Channels are `f32` nominally in `[0, 1]` but never clamped by the type;
//! out-of-range values flow through arithmetic untouched and are only clamped
//! at the formatting boundary ([`Color::to_hex`]).

use core::str::FromStr;

use thiserror::Error;

use crate::math::clamp;

/// Error produced when a hex color string fails to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string (after an optional leading `#`) is not six characters.
    #[error("hex color must be exactly 6 hex digits, got {0} characters")]
    Length(usize),
    /// The string contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit in color string `{0}`")]
    Digit(String),
}

/// RGBA color with `f32` channels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    /// Red channel, nominally `[0, 1]`.
    pub r: f32,
    /// Green channel, nominally `[0, 1]`.
    pub g: f32,
    /// Blue channel, nominally `[0, 1]`.
    pub b: f32,
    /// Alpha channel, nominally `[0, 1]`.
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Creates a color from all four channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB channels (alpha = 1).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parses an `RRGGBB` hex string with an optional leading `#`.
    ///
    /// Each two-digit channel maps to `[0, 1]`; alpha is forced to 1.
    ///
    /// # Errors
    /// Returns [`ColorParseError`] when the digit count is not six or a
    /// character is not a hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(digits.to_owned()));
        }
        if digits.len() != 6 {
            return Err(ColorParseError::Length(digits.len()));
        }
        // Validated above: six ASCII hex digits, so slicing and radix
        // conversion cannot fail.
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_or(0.0, |v| f32::from(v) / 255.0)
        };
        Ok(Self::new(channel(0), channel(2), channel(4), 1.0))
    }

    /// Formats the color as `#RRGGBB`, uppercase.
    ///
    /// Channels are scaled by 255, rounded, and clamped to `[0, 255]` before
    /// formatting, so out-of-range or non-finite channels still produce a
    /// well-formed string.
    pub fn to_hex(&self) -> String {
        let channel = |v: f32| clamp((v * 255.0).round(), 0.0, 255.0) as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    /// Formats the color as `rgba(r, g, b, a)` with the color channels
    /// rounded to 0–255 integers and alpha printed as stored.
    pub fn to_rgba(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r * 255.0).round(),
            (self.g * 255.0).round(),
            (self.b * 255.0).round(),
            self.a
        )
    }

    /// Linearly blends every channel toward `other`:
    /// `self·(1 - ratio) + other·ratio`. `ratio` is not clamped.
    pub fn blend(&self, other: &Self, ratio: f32) -> Self {
        Self::new(
            self.r * (1.0 - ratio) + other.r * ratio,
            self.g * (1.0 - ratio) + other.g * ratio,
            self.b * (1.0 - ratio) + other.b * ratio,
            self.a * (1.0 - ratio) + other.a * ratio,
        )
    }
}

/// Opaque black, matching a zeroed color with full alpha.
impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Per-channel linear interpolation between `a` and `b`; `t` is unclamped.
pub fn lerp_color(a: &Color, b: &Color, t: f32) -> Color {
    Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}
