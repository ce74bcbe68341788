use std::path::Path;

use svgtypes::{
    Length, NumberListParser, PathParser, PathSegment, TransformListParser, TransformListToken,
};

use crate::foundation::core::{Point, Size, Vec2};
use crate::foundation::error::{SceneryError, SceneryResult};
use crate::svg::model::{ArcCenter, Cursor, ParsedPath, ParsedSvgDocument, SvgCommand};

/// Parse SVG markup into absolute-coordinate paths.
///
/// Every `<path>` and `<rect>` in the document (at any depth) becomes a [`ParsedPath`], in
/// document order. Group and element transforms are not applied, with one exception: a `<rect>`
/// carrying `rotate(-90 ...)` or `rotate(270 ...)` is rotated about the given centre. Other
/// rotation angles are left unrotated.
///
/// Missing `viewBox`, `stroke` or `stroke-width` fall back to `{0, 0}`, `None` and `1`. A
/// `<path>` without `d` is skipped. Malformed XML or path data is an error.
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn parse_svg(text: &str) -> SceneryResult<ParsedSvgDocument> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(SceneryError::svg(format!(
            "root element is <{}>, expected <svg>",
            root.tag_name().name()
        )));
    }

    let dimensions = match root.attribute("viewBox") {
        Some(vb) => parse_view_box(vb).unwrap_or_else(|| {
            tracing::warn!(view_box = vb, "malformed viewBox, using zero dimensions");
            Size::default()
        }),
        None => Size::default(),
    };

    let mut paths = Vec::new();
    for node in root.descendants().filter(|n| n.is_element()) {
        let commands = match node.tag_name().name() {
            "path" => {
                let Some(d) = node.attribute("d") else {
                    tracing::debug!("skipping <path> without d");
                    continue;
                };
                let commands = parse_path_data(d)?;
                if commands.is_empty() {
                    tracing::debug!("skipping <path> with empty d");
                    continue;
                }
                commands
            }
            "rect" => rect_commands(&node),
            _ => continue,
        };

        let mut path = ParsedPath::from_commands(commands);
        path.stroke = node.attribute("stroke").map(str::to_owned);
        path.stroke_width = node
            .attribute("stroke-width")
            .and_then(parse_number)
            .unwrap_or(1.0);
        paths.push(path);
    }

    tracing::debug!(paths = paths.len(), "parsed svg");
    Ok(ParsedSvgDocument { paths, dimensions })
}

/// Read a UTF-8 SVG file and parse it with [`parse_svg`].
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_svg_file(path: impl AsRef<Path>) -> SceneryResult<ParsedSvgDocument> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SceneryError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_svg(&text)
}

/// Parse a `d` attribute into absolute commands.
pub fn parse_path_data(d: &str) -> SceneryResult<Vec<SvgCommand>> {
    let mut cursor = Cursor::default();
    let mut out = Vec::new();

    for seg in PathParser::from(d) {
        let seg = seg.map_err(|source| SceneryError::PathData {
            d: d.to_owned(),
            source,
        })?;
        let cur = cursor.pos;
        let abs_pt = |abs: bool, x: f64, y: f64| {
            if abs {
                Point::new(x, y)
            } else {
                Point::new(cur.x + x, cur.y + y)
            }
        };

        let cmd = match seg {
            PathSegment::MoveTo { abs, x, y } => {
                let p = abs_pt(abs, x, y);
                SvgCommand::MoveTo { x: p.x, y: p.y }
            }
            PathSegment::LineTo { abs, x, y } => {
                let p = abs_pt(abs, x, y);
                SvgCommand::LineTo { x: p.x, y: p.y }
            }
            PathSegment::HorizontalLineTo { abs, x } => SvgCommand::HorizLineTo {
                x: if abs { x } else { cur.x + x },
            },
            PathSegment::VerticalLineTo { abs, y } => SvgCommand::VertLineTo {
                y: if abs { y } else { cur.y + y },
            },
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let c1 = abs_pt(abs, x1, y1);
                let c2 = abs_pt(abs, x2, y2);
                let p = abs_pt(abs, x, y);
                SvgCommand::CurveTo {
                    x1: c1.x,
                    y1: c1.y,
                    x2: c2.x,
                    y2: c2.y,
                    x: p.x,
                    y: p.y,
                }
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let c2 = abs_pt(abs, x2, y2);
                let p = abs_pt(abs, x, y);
                SvgCommand::SmoothCurveTo {
                    x2: c2.x,
                    y2: c2.y,
                    x: p.x,
                    y: p.y,
                }
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let c1 = abs_pt(abs, x1, y1);
                let p = abs_pt(abs, x, y);
                SvgCommand::QuadTo {
                    x1: c1.x,
                    y1: c1.y,
                    x: p.x,
                    y: p.y,
                }
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let p = abs_pt(abs, x, y);
                SvgCommand::SmoothQuadTo { x: p.x, y: p.y }
            }
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let p = abs_pt(abs, x, y);
                SvgCommand::Arc {
                    x: p.x,
                    y: p.y,
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    center: arc_center(cur, p, rx, ry, x_axis_rotation, large_arc, sweep),
                }
            }
            PathSegment::ClosePath { .. } => SvgCommand::ClosePath,
        };

        cursor.advance(&cmd);
        out.push(cmd);
    }

    Ok(out)
}

/// Centre form of an endpoint-parameterized arc. Angles are measured from the centre to the
/// actual start/end points, the same convention the command transformer uses.
fn arc_center(
    from: Point,
    to: Point,
    rx: f64,
    ry: f64,
    x_axis_rotation_deg: f64,
    large_arc: bool,
    sweep: bool,
) -> Option<ArcCenter> {
    let arc = kurbo::Arc::from_svg_arc(&kurbo::SvgArc {
        from,
        to,
        radii: Vec2::new(rx, ry),
        x_rotation: x_axis_rotation_deg.to_radians(),
        large_arc,
        sweep,
    })?;
    let c = arc.center;
    Some(ArcCenter {
        cx: c.x,
        cy: c.y,
        start_angle: (from.y - c.y).atan2(from.x - c.x),
        end_angle: (to.y - c.y).atan2(to.x - c.x),
    })
}

/// Lower a `<rect>` to `M x,y L x+w,y L x+w,y+h L x,y+h Z`.
fn rect_commands(node: &roxmltree::Node<'_, '_>) -> Vec<SvgCommand> {
    let num = |name: &str| node.attribute(name).and_then(parse_number).unwrap_or(0.0);
    let (x, y, w, h) = (num("x"), num("y"), num("width"), num("height"));

    let mut corners = [
        Point::new(x, y),
        Point::new(x + w, y),
        Point::new(x + w, y + h),
        Point::new(x, y + h),
    ];

    if let Some(transform) = node.attribute("transform") {
        match parse_rotate(transform) {
            Some(rot) if rot.angle == -90.0 || rot.angle == 270.0 => {
                corners = corners.map(|p| rot.quarter_turn_ccw(p));
            }
            Some(rot) => {
                tracing::debug!(angle = rot.angle, "rect rotation angle not supported, ignoring");
            }
            None => {
                tracing::debug!(transform, "rect transform not supported, ignoring");
            }
        }
    }

    let [p0, p1, p2, p3] = corners;
    vec![
        SvgCommand::MoveTo { x: p0.x, y: p0.y },
        SvgCommand::LineTo { x: p1.x, y: p1.y },
        SvgCommand::LineTo { x: p2.x, y: p2.y },
        SvgCommand::LineTo { x: p3.x, y: p3.y },
        SvgCommand::ClosePath,
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Rotate {
    angle: f64,
    cx: f64,
    cy: f64,
}

impl Rotate {
    /// SVG `rotate(-90, cx, cy)`, computed without trig so corners stay exact.
    fn quarter_turn_ccw(self, p: Point) -> Point {
        Point::new(self.cx + (p.y - self.cy), self.cy - (p.x - self.cx))
    }
}

/// Extract the first `rotate(angle [cx cy])` from a transform list.
///
/// The list parser expands `rotate(a cx cy)` into `translate(cx cy) rotate(a)
/// translate(-cx -cy)`, so a rotate bracketed by opposite translations recovers its centre.
fn parse_rotate(transform: &str) -> Option<Rotate> {
    let tokens = TransformListParser::from(transform)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;
    let (i, angle) = tokens.iter().enumerate().find_map(|(i, t)| match t {
        TransformListToken::Rotate { angle } => Some((i, *angle)),
        _ => None,
    })?;

    let before = i.checked_sub(1).and_then(|j| tokens.get(j));
    let (cx, cy) = match (before, tokens.get(i + 1)) {
        (
            Some(&TransformListToken::Translate { tx, ty }),
            Some(&TransformListToken::Translate { tx: back_x, ty: back_y }),
        ) if back_x == -tx && back_y == -ty => (tx, ty),
        _ => (0.0, 0.0),
    };
    Some(Rotate { angle, cx, cy })
}

fn parse_view_box(vb: &str) -> Option<Size> {
    let v = NumberListParser::from(vb)
        .collect::<Result<Vec<f64>, _>>()
        .ok()?;
    match v.as_slice() {
        [_, _, w, h] => Some(Size::new(*w, *h)),
        _ => None,
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<Length>().ok().map(|l| l.number)
}

#[cfg(test)]
#[path = "../../tests/unit/svg/parse.rs"]
mod tests;
