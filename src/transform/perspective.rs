use crate::foundation::core::{GeneratedPoint, Point, Size, Vec2};
use crate::svg::model::SvgCommand;
use crate::svg::transform::transform_svg_commands;

/// Strength multipliers for the tilt effect.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PerspectiveFactors {
    /// Horizontal skew per unit of tilt at the reference edges.
    pub skew: f64,
    /// Vertical compression per unit of `|tilt|`.
    pub scale: f64,
}

impl Default for PerspectiveFactors {
    fn default() -> Self {
        Self {
            skew: 0.5,
            scale: 0.3,
        }
    }
}

/// Tilt about a horizontal pivot row of a reference frame.
///
/// This is a skew/compress approximation of a camera tilt, not a projective transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PerspectiveConfig {
    /// Tilt amount; `0` disables the perspective step.
    pub tilt: f64,
    /// Pivot row as a fraction of `reference.height`.
    pub pivot: f64,
    /// Frame the skew and pivot are measured against.
    pub reference: Size,
    /// Strength overrides, [`PerspectiveFactors::default`] when `None`.
    #[serde(default)]
    pub factors: Option<PerspectiveFactors>,
}

/// Horizontal scale anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAnchor {
    /// x = 0.
    #[default]
    Left,
    /// x = reference width.
    Right,
}

/// Vertical scale anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAnchor {
    /// y = 0.
    #[default]
    Top,
    /// y = reference height.
    Bottom,
}

/// Fixed point of the post-perspective scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScaleAnchor {
    /// Horizontal edge.
    pub horizontal: HorizontalAnchor,
    /// Vertical edge.
    pub vertical: VerticalAnchor,
}

impl ScaleAnchor {
    /// Anchor position inside a frame of `size`.
    pub fn resolve(self, size: Size) -> Point {
        let x = match self.horizontal {
            HorizontalAnchor::Left => 0.0,
            HorizontalAnchor::Right => size.width,
        };
        let y = match self.vertical {
            VerticalAnchor::Top => 0.0,
            VerticalAnchor::Bottom => size.height,
        };
        Point::new(x, y)
    }
}

/// Apply perspective, then anchored scale, then shift, in that order.
///
/// With no `config` or a zero tilt the perspective step is the identity. The scale anchor is
/// resolved against `config.reference`, so without a config only the top-left anchor exists.
/// A zero reference width disables the skew instead of dividing by zero.
pub fn apply_perspective_transform(
    point: Point,
    config: Option<&PerspectiveConfig>,
    shift: Option<Vec2>,
    scale: Option<Vec2>,
    anchor: ScaleAnchor,
) -> Point {
    let mut p = point;

    if let Some(cfg) = config
        && cfg.tilt != 0.0
    {
        let factors = cfg.factors.unwrap_or_default();
        let half_w = cfg.reference.width / 2.0;
        let skew = if half_w == 0.0 {
            0.0
        } else {
            let distance_from_center = (p.x - half_w) / half_w;
            -distance_from_center * cfg.tilt * factors.skew
        };
        let pivot_y = cfg.reference.height * cfg.pivot;
        let y_from_pivot = p.y - pivot_y;
        p = Point::new(
            p.x - y_from_pivot * skew,
            pivot_y + y_from_pivot * (1.0 - cfg.tilt.abs() * factors.scale),
        );
    }

    if let Some(s) = scale {
        let frame = config.map(|c| c.reference).unwrap_or_default();
        let a = anchor.resolve(frame);
        p = Point::new(a.x + (p.x - a.x) * s.x, a.y + (p.y - a.y) * s.y);
    }

    if let Some(d) = shift {
        p += d;
    }

    p
}

/// Bundled arguments of [`apply_perspective_transform`] for baking into geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PerspectiveTransform {
    /// Perspective step, skipped when `None`.
    pub config: Option<PerspectiveConfig>,
    /// Final translation.
    pub shift: Option<Vec2>,
    /// Per-axis scale about `anchor`.
    pub scale: Option<Vec2>,
    /// Scale fixed point.
    pub anchor: ScaleAnchor,
}

impl PerspectiveTransform {
    /// Transform one point.
    pub fn apply(&self, point: Point) -> Point {
        apply_perspective_transform(
            point,
            self.config.as_ref(),
            self.shift,
            self.scale,
            self.anchor,
        )
    }

    /// Transform sampled points. Tangents are re-derived by pushing `point + tangent` through
    /// the same transform, so their length still tracks the sampling step.
    pub fn apply_points(&self, points: &[GeneratedPoint]) -> Vec<GeneratedPoint> {
        points
            .iter()
            .map(|gp| {
                let point = self.apply(gp.point);
                let ahead = self.apply(gp.point + gp.tangent);
                GeneratedPoint {
                    point,
                    tangent: ahead - point,
                }
            })
            .collect()
    }

    /// Transform an SVG command list.
    pub fn apply_commands(&self, commands: &[SvgCommand]) -> Vec<SvgCommand> {
        transform_svg_commands(commands, |x, y| self.apply(Point::new(x, y)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/perspective.rs"]
mod tests;
