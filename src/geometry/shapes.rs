use std::f64::consts::{FRAC_PI_2, TAU};

use crate::foundation::core::{GeneratedPoint, Point};
use crate::geometry::points::{EquationConfig, ParametricCurve, generate_points};

/// Closed circle sampling request.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    /// Circle radius.
    pub radius: f64,
    /// Number of samples around the loop.
    pub segments: usize,
    /// Centre of the circle.
    pub origin: Option<Point>,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            radius: 50.0,
            segments: 64,
            origin: None,
        }
    }
}

/// `t ↦ (r cos t, r sin t)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CircleEquation {
    /// Circle radius.
    pub radius: f64,
}

impl ParametricCurve for CircleEquation {
    fn eval(&self, t: f64) -> Point {
        Point::new(self.radius * t.cos(), self.radius * t.sin())
    }
}

impl CircleConfig {
    pub(crate) fn equation_config(&self) -> EquationConfig<CircleEquation> {
        EquationConfig {
            equation: CircleEquation {
                radius: self.radius,
            },
            t_start: 0.0,
            t_end: TAU,
            segments: self.segments,
            origin: self.origin,
        }
    }
}

/// Sample a circle as a closed loop over `t ∈ [0, 2π)`.
pub fn gen_circle_path(cfg: &CircleConfig) -> Vec<GeneratedPoint> {
    generate_points(&cfg.equation_config())
}

/// Rounded rectangle sampling request. Coordinates are centred on the rectangle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RoundedRectConfig {
    /// Full width.
    pub width: f64,
    /// Full height.
    pub height: f64,
    /// Corner radius, clamped to `[0, min(width, height) / 2]`.
    pub radius: f64,
    /// Number of samples around the perimeter.
    pub segments: usize,
    /// Centre of the rectangle.
    pub origin: Option<Point>,
}

impl Default for RoundedRectConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 120.0,
            radius: 16.0,
            segments: 128,
            origin: None,
        }
    }
}

/// Arclength-parameterized rounded rectangle outline (screen space, y down).
///
/// `t` runs over `[0, perimeter)`. Winding starts at `(w/2 - r, h/2)` and goes bottom edge
/// (leftwards), bottom-left arc, left edge, top-left arc, top edge, top-right arc, right edge,
/// bottom-right arc. Quad mappers rely on this order, so it must not change.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundedRectEquation {
    /// Full width.
    pub width: f64,
    /// Full height.
    pub height: f64,
    /// Effective (already clamped) corner radius.
    pub radius: f64,
}

impl RoundedRectEquation {
    /// Build an equation with the radius clamped into range.
    pub fn new(width: f64, height: f64, radius: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let max_r = width.min(height) / 2.0;
        Self {
            width,
            height,
            radius: radius.clamp(0.0, max_r),
        }
    }

    fn straight_x(&self) -> f64 {
        self.width - 2.0 * self.radius
    }

    fn straight_y(&self) -> f64 {
        self.height - 2.0 * self.radius
    }

    fn arc_len(&self) -> f64 {
        FRAC_PI_2 * self.radius
    }

    /// Total outline length.
    pub fn perimeter(&self) -> f64 {
        2.0 * self.straight_x() + 2.0 * self.straight_y() + 4.0 * self.arc_len()
    }
}

impl ParametricCurve for RoundedRectEquation {
    fn eval(&self, t: f64) -> Point {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let r = self.radius;
        let arc = self.arc_len();

        // (straight length, straight start, straight direction, arc centre, arc start angle)
        // Angles are in screen space: +y is down, so increasing angle sweeps clockwise on screen.
        let sides = [
            (
                self.straight_x(),
                Point::new(hw - r, hh),
                (-1.0, 0.0),
                Point::new(-hw + r, hh - r),
                FRAC_PI_2,
            ),
            (
                self.straight_y(),
                Point::new(-hw, hh - r),
                (0.0, -1.0),
                Point::new(-hw + r, -hh + r),
                2.0 * FRAC_PI_2,
            ),
            (
                self.straight_x(),
                Point::new(-hw + r, -hh),
                (1.0, 0.0),
                Point::new(hw - r, -hh + r),
                3.0 * FRAC_PI_2,
            ),
            (
                self.straight_y(),
                Point::new(hw, -hh + r),
                (0.0, 1.0),
                Point::new(hw - r, hh - r),
                0.0,
            ),
        ];

        let perimeter = self.perimeter();
        let mut d = if perimeter > 0.0 {
            t.rem_euclid(perimeter)
        } else {
            0.0
        };

        for (len, start, (dx, dy), centre, a0) in sides {
            if d <= len {
                return Point::new(start.x + dx * d, start.y + dy * d);
            }
            d -= len;
            if d <= arc {
                let a = if r > 0.0 { a0 + d / r } else { a0 };
                return Point::new(centre.x + r * a.cos(), centre.y + r * a.sin());
            }
            d -= arc;
        }

        // Only reachable through float drift at the very end of the loop.
        Point::new(hw - r, hh)
    }
}

impl RoundedRectConfig {
    pub(crate) fn equation_config(&self) -> EquationConfig<RoundedRectEquation> {
        let equation = RoundedRectEquation::new(self.width, self.height, self.radius);
        EquationConfig {
            t_start: 0.0,
            t_end: equation.perimeter(),
            equation,
            segments: self.segments,
            origin: self.origin,
        }
    }
}

/// Sample a rounded rectangle outline with roughly uniform point density.
pub fn gen_rect_path(cfg: &RoundedRectConfig) -> Vec<GeneratedPoint> {
    generate_points(&cfg.equation_config())
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;
