use crate::color::glow::{GlowColor, brightness_to_color};
use crate::color::hex::Rgb8;
use crate::foundation::error::SceneryResult;
use crate::memo::cache::{CacheStats, MemoOpts};
use crate::memo::memoized::Memoized;

#[derive(serde::Serialize)]
struct Blend {
    from: Rgb8,
    to: Rgb8,
    t: f64,
}

type BlendFn = fn(&Blend) -> String;
type GlowFn = fn(&f64) -> GlowColor;

/// Memoized colour helpers for per-frame use.
///
/// Hex strings are parsed before the cache is consulted, so malformed input fails every time
/// and never occupies an entry. Both `t` and brightness are rounded to the policy precision
/// when keyed. Not `Sync`.
pub struct ColorCache {
    blend: Memoized<Blend, String, BlendFn>,
    glow: Memoized<f64, GlowColor, GlowFn>,
}

impl Default for ColorCache {
    fn default() -> Self {
        Self::new(MemoOpts::color())
    }
}

impl ColorCache {
    /// Create both caches with the same policy.
    pub fn new(opts: MemoOpts) -> Self {
        let blend: BlendFn = |b| b.from.lerp(b.to, b.t).to_hex();
        let glow: GlowFn = |b| brightness_to_color(*b);
        Self {
            blend: Memoized::new("interpolate_color", blend, opts),
            glow: Memoized::new("brightness_to_color", glow, opts),
        }
    }

    /// Memoized [`crate::interpolate_color`].
    pub fn interpolate_color(&self, hex1: &str, hex2: &str, t: f64) -> SceneryResult<String> {
        let blend = Blend {
            from: Rgb8::parse_hex(hex1)?,
            to: Rgb8::parse_hex(hex2)?,
            t: t.clamp(0.0, 1.0),
        };
        Ok(self.blend.call(&blend))
    }

    /// Memoized [`crate::brightness_to_color`].
    pub fn brightness_to_color(&self, brightness: f64) -> GlowColor {
        self.glow.call(&brightness)
    }

    /// Counters of the interpolation and brightness caches, in that order.
    pub fn stats(&self) -> (CacheStats, CacheStats) {
        (self.blend.stats(), self.glow.stats())
    }

    /// Drop every cached colour.
    pub fn clear(&self) {
        self.blend.clear();
        self.glow.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/cache.rs"]
mod tests;
