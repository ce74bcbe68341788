use crate::foundation::core::Point;
use crate::svg::model::{ArcCenter, Cursor, SvgCommand};

/// Map every coordinate and control point of `commands` through `transform_point`.
///
/// `HorizLineTo`/`VertLineTo` become `LineTo`, since an axis-aligned segment generally stops
/// being axis-aligned under a non-uniform transform; the missing axis comes from the SVG cursor.
/// `ClosePath` passes through. Arcs with a centre get new angles measured from the transformed
/// centre to the transformed start and end points, so the rendered arc still meets its
/// neighbours. Arcs without one only move their endpoint. Radii are not transformed.
pub fn transform_svg_commands<F>(commands: &[SvgCommand], transform_point: F) -> Vec<SvgCommand>
where
    F: Fn(f64, f64) -> Point,
{
    let mut cursor = Cursor::default();
    let mut out = Vec::with_capacity(commands.len());

    for cmd in commands {
        let start = cursor.pos;
        cursor.advance(cmd);
        let end = cursor.pos;

        let mapped = match *cmd {
            SvgCommand::MoveTo { x, y } => {
                let p = transform_point(x, y);
                SvgCommand::MoveTo { x: p.x, y: p.y }
            }
            SvgCommand::LineTo { .. }
            | SvgCommand::HorizLineTo { .. }
            | SvgCommand::VertLineTo { .. } => {
                let p = transform_point(end.x, end.y);
                SvgCommand::LineTo { x: p.x, y: p.y }
            }
            SvgCommand::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let c1 = transform_point(x1, y1);
                let c2 = transform_point(x2, y2);
                let p = transform_point(x, y);
                SvgCommand::CurveTo {
                    x1: c1.x,
                    y1: c1.y,
                    x2: c2.x,
                    y2: c2.y,
                    x: p.x,
                    y: p.y,
                }
            }
            SvgCommand::SmoothCurveTo { x2, y2, x, y } => {
                let c2 = transform_point(x2, y2);
                let p = transform_point(x, y);
                SvgCommand::SmoothCurveTo {
                    x2: c2.x,
                    y2: c2.y,
                    x: p.x,
                    y: p.y,
                }
            }
            SvgCommand::QuadTo { x1, y1, x, y } => {
                let c1 = transform_point(x1, y1);
                let p = transform_point(x, y);
                SvgCommand::QuadTo {
                    x1: c1.x,
                    y1: c1.y,
                    x: p.x,
                    y: p.y,
                }
            }
            SvgCommand::SmoothQuadTo { x, y } => {
                let p = transform_point(x, y);
                SvgCommand::SmoothQuadTo { x: p.x, y: p.y }
            }
            SvgCommand::Arc {
                x,
                y,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                center,
            } => {
                let p = transform_point(x, y);
                let center = center.map(|c| {
                    let tc = transform_point(c.cx, c.cy);
                    let ts = transform_point(start.x, start.y);
                    ArcCenter {
                        cx: tc.x,
                        cy: tc.y,
                        start_angle: (ts.y - tc.y).atan2(ts.x - tc.x),
                        end_angle: (p.y - tc.y).atan2(p.x - tc.x),
                    }
                });
                SvgCommand::Arc {
                    x: p.x,
                    y: p.y,
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    center,
                }
            }
            SvgCommand::ClosePath => SvgCommand::ClosePath,
        };
        out.push(mapped);
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/svg/transform.rs"]
mod tests;
