use crate::foundation::core::{GeneratedPoint, Point, Vec2};

/// A curve evaluated at a scalar parameter.
///
/// Closures implement this directly. The serializable equation structs used by the shape
/// generators implement it too, which is what lets [`crate::GeometryCache`] key on the full
/// parameter set instead of on opaque closure identity.
pub trait ParametricCurve {
    /// Evaluate the curve at `t`.
    fn eval(&self, t: f64) -> Point;
}

impl<F> ParametricCurve for F
where
    F: Fn(f64) -> Point,
{
    fn eval(&self, t: f64) -> Point {
        self(t)
    }
}

/// Sampling request for [`generate_points`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EquationConfig<C> {
    /// Curve to sample.
    pub equation: C,
    /// First parameter value (sampled).
    pub t_start: f64,
    /// Last parameter value (only used for the final tangent, never sampled).
    pub t_end: f64,
    /// Number of samples to produce.
    pub segments: usize,
    /// Offset added to every sampled point (not to tangents).
    #[serde(default)]
    pub origin: Option<Point>,
}

impl<C> EquationConfig<C> {
    /// Sample `equation` over `[t_start, t_end)` with `segments` samples and no origin offset.
    pub fn new(equation: C, t_start: f64, t_end: f64, segments: usize) -> Self {
        Self {
            equation,
            t_start,
            t_end,
            segments,
            origin: None,
        }
    }

    /// Set the origin offset.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// Sample a parametric curve into points with forward-difference tangents.
///
/// Produces exactly `segments` points at `t_i = t_start + (t_end - t_start) * i / segments`.
/// `t_end` itself is never emitted, so closed curves do not repeat their first point.
///
/// Degenerate input does not panic: `segments == 0` yields no points, and an empty parameter
/// range (`t_start == t_end`) yields a single point at `t_start` with a zero tangent.
pub fn generate_points<C: ParametricCurve>(cfg: &EquationConfig<C>) -> Vec<GeneratedPoint> {
    let origin = cfg.origin.map(|o| o.to_vec2()).unwrap_or(Vec2::ZERO);

    if cfg.segments == 0 {
        return Vec::new();
    }
    if cfg.t_start == cfg.t_end {
        return vec![GeneratedPoint {
            point: cfg.equation.eval(cfg.t_start) + origin,
            tangent: Vec2::ZERO,
        }];
    }

    let span = cfg.t_end - cfg.t_start;
    let n = cfg.segments as f64;
    let step = span / n;

    (0..cfg.segments)
        .map(|i| {
            let t = cfg.t_start + span * (i as f64) / n;
            let p = cfg.equation.eval(t);
            let next = cfg.equation.eval(t + step);
            GeneratedPoint {
                point: p + origin,
                tangent: next - p,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/points.rs"]
mod tests;
