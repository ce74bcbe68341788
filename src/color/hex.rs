use std::fmt;

use crate::foundation::error::{SceneryError, SceneryResult};
use crate::foundation::math::lerp;

/// Opaque 8-bit sRGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb8 {
    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (case-insensitive, leading `#` optional).
    pub fn parse_hex(s: &str) -> SceneryResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SceneryError::color(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        let byte = |pair: &str| {
            u8::from_str_radix(pair, 16)
                .map_err(|_| SceneryError::color(format!("invalid hex byte \"{pair}\" in \"{s}\"")))
        };
        Ok(Self {
            r: byte(&digits[0..2])?,
            g: byte(&digits[2..4])?,
            b: byte(&digits[4..6])?,
        })
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Per-channel linear blend toward `other`, rounded to the nearest integer.
    ///
    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| lerp(f64::from(a), f64::from(b), t).round().clamp(0.0, 255.0) as u8;
        Self {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Blend two `#RRGGBB` colours and re-encode the result as `#rrggbb`.
pub fn interpolate_color(hex1: &str, hex2: &str, t: f64) -> SceneryResult<String> {
    let a = Rgb8::parse_hex(hex1)?;
    let b = Rgb8::parse_hex(hex2)?;
    Ok(a.lerp(b, t).to_hex())
}

#[cfg(test)]
#[path = "../../tests/unit/color/hex.rs"]
mod tests;
