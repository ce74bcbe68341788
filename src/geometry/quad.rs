use crate::foundation::core::{GeneratedPoint, Point};

/// Arbitrary quadrilateral, corners in rect-space order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Quad {
    /// Image of `(u, v) = (0, 0)`.
    pub top_left: Point,
    /// Image of `(1, 0)`.
    pub top_right: Point,
    /// Image of `(1, 1)`.
    pub bottom_right: Point,
    /// Image of `(0, 1)`.
    pub bottom_left: Point,
}

impl Quad {
    /// Axis-aligned `width × height` quad with its top-left corner at the origin.
    pub fn from_rect(width: f64, height: f64) -> Self {
        Self {
            top_left: Point::new(0.0, 0.0),
            top_right: Point::new(width, 0.0),
            bottom_right: Point::new(width, height),
            bottom_left: Point::new(0.0, height),
        }
    }

    /// Symmetric trapezoid: `top_width` wide at `y = 0`, `bottom_width` wide at `y = height`,
    /// both centred on `x = 0`.
    pub fn trapezoid(top_width: f64, bottom_width: f64, height: f64) -> Self {
        Self {
            top_left: Point::new(-top_width / 2.0, 0.0),
            top_right: Point::new(top_width / 2.0, 0.0),
            bottom_right: Point::new(bottom_width / 2.0, height),
            bottom_left: Point::new(-bottom_width / 2.0, height),
        }
    }

    /// Bilinear map of `(u, v) ∈ [0, 1]²` onto the quad.
    pub fn map_unit(&self, u: f64, v: f64) -> Point {
        let top = self.top_left.lerp(self.top_right, u);
        let bottom = self.bottom_left.lerp(self.bottom_right, u);
        top.lerp(bottom, v)
    }

    /// Map points of a `width × height` rectangle centred on the origin (as produced by
    /// [`crate::gen_rect_path`] without an origin) onto the quad. Tangents are remapped as
    /// forward differences.
    pub fn map_rect_path(
        &self,
        points: &[GeneratedPoint],
        width: f64,
        height: f64,
    ) -> Vec<GeneratedPoint> {
        let to_unit = |p: Point| {
            let u = if width == 0.0 { 0.5 } else { p.x / width + 0.5 };
            let v = if height == 0.0 { 0.5 } else { p.y / height + 0.5 };
            (u, v)
        };

        points
            .iter()
            .map(|gp| {
                let (u, v) = to_unit(gp.point);
                let (nu, nv) = to_unit(gp.point + gp.tangent);
                let mapped = self.map_unit(u, v);
                GeneratedPoint {
                    point: mapped,
                    tangent: self.map_unit(nu, nv) - mapped,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/quad.rs"]
mod tests;
