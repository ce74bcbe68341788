use crate::animation::ease::Ease;
use crate::color::glow::{GlowColor, brightness_to_color};
use crate::foundation::core::{Point, Vec2};

/// A straight glowing trail behind a moving head.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MeteorTrailConfig {
    /// Brightest point of the trail.
    pub head: Point,
    /// Direction of travel. The trail extends the opposite way. Need not be normalized.
    pub direction: Vec2,
    /// Distance from head to tail.
    pub length: f64,
    /// Number of samples, head and tail included.
    pub samples: usize,
    /// Shapes how quickly brightness drops along the trail.
    pub falloff: Ease,
}

impl Default for MeteorTrailConfig {
    fn default() -> Self {
        Self {
            head: Point::ORIGIN,
            direction: Vec2::new(1.0, 1.0),
            length: 120.0,
            samples: 24,
            falloff: Ease::OutCubic,
        }
    }
}

/// One point of a meteor trail.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrailSample {
    /// Position.
    pub point: Point,
    /// `1` at the head, `0` at the tail.
    pub brightness: f64,
    /// [`brightness_to_color`] of `brightness`.
    pub glow: GlowColor,
}

/// Sample a trail from the head backwards.
///
/// A zero `direction` collapses every sample onto the head rather than producing NaNs.
pub fn meteor_trail(cfg: &MeteorTrailConfig) -> Vec<TrailSample> {
    let len = cfg.direction.hypot();
    let back = if len == 0.0 {
        Vec2::ZERO
    } else {
        -cfg.direction / len
    };

    let last = cfg.samples.saturating_sub(1).max(1) as f64;
    (0..cfg.samples)
        .map(|i| {
            let s = i as f64 / last;
            let brightness = 1.0 - cfg.falloff.apply(s);
            TrailSample {
                point: cfg.head + back * (cfg.length * s),
                brightness,
                glow: brightness_to_color(brightness),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/meteor.rs"]
mod tests;
