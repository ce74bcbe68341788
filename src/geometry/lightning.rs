use std::f64::consts::{FRAC_PI_3, PI};

use crate::foundation::core::{Point, Vec2};
use crate::foundation::math::Lcg;

/// Hard cap on samples per bolt.
pub const MAX_LIGHTNING_SEGMENTS: usize = 200;

/// Parameters for a single jagged bolt.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LightningConfig {
    /// Bolt start (pinned).
    pub start: Point,
    /// Bolt end (pinned).
    pub end: Point,
    /// Maximum perpendicular offset before smoothing and tapering.
    pub displacement: f64,
    /// `0..1`; higher means fewer smoothing passes.
    pub jaggedness: f64,
    /// LCG seed. Identical seeds and parameters give identical bolts.
    pub seed: f64,
    /// Samples per unit of bolt length.
    pub segment_density: f64,
    /// Upper bound on the segment count.
    pub max_segments: usize,
    /// Exponent applied to the `sin(πt)` taper.
    pub envelope_shape: f64,
    /// Explicit smoothing pass count; defaults to `round((1 - jaggedness) * 5)`.
    pub smoothing_passes: Option<u32>,
}

impl Default for LightningConfig {
    fn default() -> Self {
        Self {
            start: Point::new(0.0, 0.0),
            end: Point::new(0.0, 300.0),
            displacement: 40.0,
            jaggedness: 0.6,
            seed: 1.0,
            segment_density: 0.15,
            max_segments: MAX_LIGHTNING_SEGMENTS,
            envelope_shape: 1.0,
            smoothing_passes: None,
        }
    }
}

impl LightningConfig {
    fn smoothing_pass_count(&self) -> u32 {
        match self.smoothing_passes {
            Some(n) => n,
            None => ((1.0 - self.jaggedness) * 5.0).round().max(0.0) as u32,
        }
    }

    fn segment_count(&self, length: f64) -> usize {
        let max = self.max_segments.clamp(2, MAX_LIGHTNING_SEGMENTS);
        let wanted = (length * self.segment_density).floor();
        if !wanted.is_finite() || wanted < 2.0 {
            return 2;
        }
        (wanted as usize).min(max)
    }
}

/// Branching parameters layered over a main bolt.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LightningBranchConfig {
    /// Main bolt parameters. Branches inherit density and envelope.
    pub bolt: LightningConfig,
    /// Chance per candidate sample of spawning a branch.
    pub branch_probability: f64,
    /// Branch scale relative to the local main-bolt segment.
    pub branch_length: f64,
}

impl Default for LightningBranchConfig {
    fn default() -> Self {
        Self {
            bolt: LightningConfig::default(),
            branch_probability: 0.15,
            branch_length: 0.5,
        }
    }
}

/// Main bolt plus independent branch paths.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LightningBolt {
    /// Jagged path from start to end.
    pub main: Vec<Point>,
    /// Each branch starts on `main` and is never merged back.
    pub branches: Vec<Vec<Point>>,
}

/// Generate a jagged bolt between `start` and `end`.
///
/// Interior samples get seeded random perpendicular offsets, which are smoothed with a
/// 3-point moving average and tapered by `sin(πt)^envelope_shape`. Both ends are pinned
/// exactly. A zero-length bolt uses a fallback length of 1 for normalization, so it collapses
/// onto `start` rather than producing NaN.
#[tracing::instrument(level = "trace", skip(cfg), fields(seed = cfg.seed))]
pub fn generate_lightning_path(cfg: &LightningConfig) -> Vec<Point> {
    let delta = cfg.end - cfg.start;
    let length = delta.hypot();
    let norm = if length == 0.0 { 1.0 } else { length };
    let dir = delta / norm;
    let perp = Vec2::new(-dir.y, dir.x);

    let segments = cfg.segment_count(length);
    let n = segments + 1;

    let mut rng = Lcg::new(cfg.seed);
    let mut offsets = vec![0.0f64; n];
    for o in offsets.iter_mut().take(n - 1).skip(1) {
        *o = rng.next_signed() * cfg.displacement;
    }

    let mut scratch = offsets.clone();
    for _ in 0..cfg.smoothing_pass_count() {
        for i in 1..n - 1 {
            scratch[i] = (offsets[i - 1] + offsets[i] + offsets[i + 1]) / 3.0;
        }
        offsets.copy_from_slice(&scratch);
    }

    (0..n)
        .map(|i| {
            let t = i as f64 / segments as f64;
            let base = Point::new(
                cfg.start.x * (1.0 - t) + cfg.end.x * t,
                cfg.start.y * (1.0 - t) + cfg.end.y * t,
            );
            if i == 0 || i == n - 1 {
                return base;
            }
            let envelope = (PI * t).sin().max(0.0).powf(cfg.envelope_shape);
            base + perp * (offsets[i] * envelope)
        })
        .collect()
}

/// Generate a main bolt and seeded side branches.
///
/// Candidate samples are the interior indices in the middle 60% of the bolt. The branch stream
/// is an independent LCG seeded with `seed * 1.5`; each spawned branch points along the local
/// forward segment rotated by ±60° and is itself a [`generate_lightning_path`] bolt with
/// reduced displacement and increased jaggedness.
#[tracing::instrument(level = "trace", skip(cfg), fields(seed = cfg.bolt.seed))]
pub fn generate_lightning_with_branches(cfg: &LightningBranchConfig) -> LightningBolt {
    let main = generate_lightning_path(&cfg.bolt);
    let n = main.len();

    let first = ((n as f64) * 0.2).ceil() as usize;
    let last = ((n as f64) * 0.8).floor() as usize;

    let mut rng = Lcg::new(cfg.bolt.seed * 1.5);
    let mut branches = Vec::new();

    for i in first.max(1)..last.min(n - 1) {
        if rng.next_f64() >= cfg.branch_probability {
            continue;
        }
        let forward = main[i + 1] - main[i];
        let angle = if rng.next_f64() < 0.5 {
            FRAC_PI_3
        } else {
            -FRAC_PI_3
        };
        let (sin, cos) = angle.sin_cos();
        let rotated = Vec2::new(
            forward.x * cos - forward.y * sin,
            forward.x * sin + forward.y * cos,
        );

        let branch = LightningConfig {
            start: main[i],
            end: main[i] + rotated * (5.0 * cfg.branch_length),
            displacement: cfg.bolt.displacement * cfg.branch_length * 0.7,
            jaggedness: cfg.bolt.jaggedness * 1.2,
            seed: rng.state(),
            smoothing_passes: None,
            ..cfg.bolt
        };
        branches.push(generate_lightning_path(&branch));
    }

    tracing::trace!(branches = branches.len(), "generated lightning branches");
    LightningBolt { main, branches }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/lightning.rs"]
mod tests;
