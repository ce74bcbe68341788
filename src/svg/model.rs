use crate::foundation::core::{Bounds, Point, Size};

/// Centre parameterization of an elliptical arc, in radians.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcCenter {
    /// Ellipse centre x.
    pub cx: f64,
    /// Ellipse centre y.
    pub cy: f64,
    /// Angle of the arc start point around the centre.
    pub start_angle: f64,
    /// Angle of the arc end point around the centre.
    pub end_angle: f64,
}

/// One absolute-coordinate path command.
///
/// Relative SVG commands are resolved during parsing and never stored.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum SvgCommand {
    /// Start a subpath.
    MoveTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// Straight line.
    LineTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// Horizontal line; y comes from the cursor.
    HorizLineTo {
        /// Target x.
        x: f64,
    },
    /// Vertical line; x comes from the cursor.
    VertLineTo {
        /// Target y.
        y: f64,
    },
    /// Cubic Bézier.
    CurveTo {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
        /// End x.
        x: f64,
        /// End y.
        y: f64,
    },
    /// Cubic Bézier with a reflected first control point.
    SmoothCurveTo {
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
        /// End x.
        x: f64,
        /// End y.
        y: f64,
    },
    /// Quadratic Bézier.
    QuadTo {
        /// Control point x.
        x1: f64,
        /// Control point y.
        y1: f64,
        /// End x.
        x: f64,
        /// End y.
        y: f64,
    },
    /// Quadratic Bézier with a reflected control point.
    SmoothQuadTo {
        /// End x.
        x: f64,
        /// End y.
        y: f64,
    },
    /// Elliptical arc.
    Arc {
        /// End x.
        x: f64,
        /// End y.
        y: f64,
        /// Radius along the ellipse x axis.
        rx: f64,
        /// Radius along the ellipse y axis.
        ry: f64,
        /// Ellipse rotation in degrees.
        x_axis_rotation: f64,
        /// SVG large-arc flag.
        large_arc: bool,
        /// SVG sweep flag.
        sweep: bool,
        /// Precomputed centre form, when the arc is non-degenerate.
        center: Option<ArcCenter>,
    },
    /// Close the current subpath.
    ClosePath,
}

/// One drawable path extracted from an SVG document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParsedPath {
    /// Absolute commands, starting with `MoveTo`.
    pub commands: Vec<SvgCommand>,
    /// `true` iff `commands` contains a `ClosePath`.
    pub is_closed: bool,
    /// Conservative box over every coordinate and control point.
    pub bounds: Bounds,
    /// Centre of `bounds`.
    pub center: Option<Point>,
    /// Stroke paint as written in the document.
    pub stroke: Option<String>,
    /// Stroke width, `1` when unspecified.
    pub stroke_width: f64,
}

impl ParsedPath {
    /// Derive closedness, bounds and centre from `commands`.
    pub fn from_commands(commands: Vec<SvgCommand>) -> Self {
        let is_closed = commands
            .iter()
            .any(|c| matches!(c, SvgCommand::ClosePath));
        let bounds = compute_bounds(&commands);
        let center = (!commands.is_empty()).then(|| bounds.center());
        Self {
            commands,
            is_closed,
            bounds,
            center,
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

/// Every path of a parsed document plus its `viewBox` size.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParsedSvgDocument {
    /// Paths in document order.
    pub paths: Vec<ParsedPath>,
    /// `viewBox` width/height, `{0, 0}` when absent.
    pub dimensions: Size,
}

/// SVG pen position tracking shared by bounds, parsing and transforms.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Cursor {
    pub(crate) pos: Point,
    pub(crate) subpath_start: Point,
}

impl Cursor {
    /// Move the pen past `cmd` using standard SVG semantics.
    pub(crate) fn advance(&mut self, cmd: &SvgCommand) {
        match *cmd {
            SvgCommand::MoveTo { x, y } => {
                self.pos = Point::new(x, y);
                self.subpath_start = self.pos;
            }
            SvgCommand::LineTo { x, y }
            | SvgCommand::CurveTo { x, y, .. }
            | SvgCommand::SmoothCurveTo { x, y, .. }
            | SvgCommand::QuadTo { x, y, .. }
            | SvgCommand::SmoothQuadTo { x, y }
            | SvgCommand::Arc { x, y, .. } => self.pos = Point::new(x, y),
            SvgCommand::HorizLineTo { x } => self.pos.x = x,
            SvgCommand::VertLineTo { y } => self.pos.y = y,
            SvgCommand::ClosePath => self.pos = self.subpath_start,
        }
    }
}

/// Axis-aligned box over all command coordinates, including Bézier control points.
///
/// Control points make the box conservative for curves: it can extend past the drawn outline.
/// Scene centring math is tuned against this box, so it is kept as is.
pub fn compute_bounds(commands: &[SvgCommand]) -> Bounds {
    let mut cursor = Cursor::default();
    let mut pts = Vec::with_capacity(commands.len() * 2);

    for cmd in commands {
        match *cmd {
            SvgCommand::CurveTo { x1, y1, x2, y2, .. } => {
                pts.push(Point::new(x1, y1));
                pts.push(Point::new(x2, y2));
            }
            SvgCommand::SmoothCurveTo { x2, y2, .. } => pts.push(Point::new(x2, y2)),
            SvgCommand::QuadTo { x1, y1, .. } => pts.push(Point::new(x1, y1)),
            _ => {}
        }
        cursor.advance(cmd);
        if !matches!(cmd, SvgCommand::ClosePath) {
            pts.push(cursor.pos);
        }
    }

    Bounds::from_points(pts)
}

#[cfg(test)]
#[path = "../../tests/unit/svg/model.rs"]
mod tests;
