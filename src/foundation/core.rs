pub use kurbo::{Point, Rect, Vec2};

/// A sampled curve point together with its forward-difference tangent.
///
/// The tangent is in curve units and is not normalized; its magnitude depends on sampling
/// density. Callers that need a direction must normalize it themselves.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedPoint {
    /// Sampled position (origin already applied).
    pub point: Point,
    /// `eval(t + step) - eval(t)`.
    pub tangent: Vec2,
}

impl GeneratedPoint {
    /// Unit tangent, or zero when the tangent has no length.
    pub fn direction(&self) -> Vec2 {
        let len = self.tangent.hypot();
        if len == 0.0 {
            Vec2::ZERO
        } else {
            self.tangent / len
        }
    }
}

/// Width/height pair used for reference frames and document dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in user units.
    pub width: f64,
    /// Height in user units.
    pub height: f64,
}

impl Size {
    /// Construct a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned bounding box in `{x, y, width, height}` form.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Bounds {
    /// Smallest box containing every point, or a zero box at the origin for no points.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut acc: Option<Rect> = None;
        for p in points {
            acc = Some(match acc {
                None => Rect::from_points(p, p),
                Some(r) => r.union_pt(p),
            });
        }
        acc.map(Self::from_rect).unwrap_or_default()
    }

    /// Grow the box just enough to contain `p`.
    pub fn union_point(self, p: Point) -> Self {
        Self::from_rect(self.to_rect().union_pt(p))
    }

    /// Convert from a kurbo rectangle.
    pub fn from_rect(r: Rect) -> Self {
        Self {
            x: r.x0,
            y: r.y0,
            width: r.width(),
            height: r.height(),
        }
    }

    /// Convert into a kurbo rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Centre of the box.
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
