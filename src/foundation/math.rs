const LCG_MUL: f64 = 9301.0;
const LCG_INC: f64 = 49297.0;
const LCG_MOD: f64 = 233_280.0;

/// Seeded linear congruential generator: `seed' = (seed * 9301 + 49297) mod 233280`.
///
/// State is kept as `f64` so fractional seeds (derived streams use `seed * 1.5`) step the
/// same way everywhere. `%` on `f64` keeps the sign of the dividend, so negative seeds stay
/// negative and yield negative samples; callers pass non-negative seeds.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Lcg {
    state: f64,
}

impl Lcg {
    pub(crate) fn new(seed: f64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn state(&self) -> f64 {
        self.state
    }

    /// Advance and return a sample in `[0, 1)`.
    pub(crate) fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MUL + LCG_INC) % LCG_MOD;
        self.state / LCG_MOD
    }

    /// Advance and return a sample in `[-1, 1)`.
    pub(crate) fn next_signed(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }
}

/// Round to `decimals` decimal places (half away from zero).
pub(crate) fn round_to(v: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
