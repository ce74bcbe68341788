use super::*;

fn shift(x: f64, y: f64) -> Point {
    Point::new(x + 100.0, y + 10.0)
}

#[test]
fn identity_keeps_commands_except_axis_lines() {
    let cmds = vec![
        SvgCommand::MoveTo { x: 1.0, y: 2.0 },
        SvgCommand::QuadTo {
            x1: 3.0,
            y1: 4.0,
            x: 5.0,
            y: 6.0,
        },
        SvgCommand::ClosePath,
    ];
    assert_eq!(transform_svg_commands(&cmds, |x, y| Point::new(x, y)), cmds);
}

#[test]
fn horizontal_and_vertical_become_line_to() {
    let cmds = vec![
        SvgCommand::MoveTo { x: 0.0, y: 5.0 },
        SvgCommand::HorizLineTo { x: 20.0 },
        SvgCommand::VertLineTo { y: 30.0 },
    ];
    let out = transform_svg_commands(&cmds, shift);
    assert_eq!(
        out,
        vec![
            SvgCommand::MoveTo { x: 100.0, y: 15.0 },
            SvgCommand::LineTo { x: 120.0, y: 15.0 },
            SvgCommand::LineTo { x: 120.0, y: 40.0 },
        ]
    );
}

#[test]
fn curve_control_points_are_transformed() {
    let cmds = vec![
        SvgCommand::MoveTo { x: 0.0, y: 0.0 },
        SvgCommand::CurveTo {
            x1: 1.0,
            y1: 1.0,
            x2: 2.0,
            y2: 2.0,
            x: 3.0,
            y: 3.0,
        },
        SvgCommand::SmoothCurveTo {
            x2: 4.0,
            y2: 4.0,
            x: 5.0,
            y: 5.0,
        },
        SvgCommand::SmoothQuadTo { x: 6.0, y: 6.0 },
    ];
    let out = transform_svg_commands(&cmds, |x, y| Point::new(x * 2.0, -y));
    assert_eq!(
        out[1],
        SvgCommand::CurveTo {
            x1: 2.0,
            y1: -1.0,
            x2: 4.0,
            y2: -2.0,
            x: 6.0,
            y: -3.0
        }
    );
    assert_eq!(
        out[2],
        SvgCommand::SmoothCurveTo {
            x2: 8.0,
            y2: -4.0,
            x: 10.0,
            y: -5.0
        }
    );
    assert_eq!(out[3], SvgCommand::SmoothQuadTo { x: 12.0, y: -6.0 });
}

#[test]
fn close_path_passes_through_and_resets_cursor() {
    let cmds = vec![
        SvgCommand::MoveTo { x: 1.0, y: 1.0 },
        SvgCommand::LineTo { x: 9.0, y: 9.0 },
        SvgCommand::ClosePath,
        SvgCommand::VertLineTo { y: 4.0 },
    ];
    let out = transform_svg_commands(&cmds, shift);
    assert_eq!(out[2], SvgCommand::ClosePath);
    assert_eq!(out[3], SvgCommand::LineTo { x: 101.0, y: 14.0 });
}

#[test]
fn arc_angles_follow_transformed_points() {
    let cmds = vec![
        SvgCommand::MoveTo { x: 0.0, y: 0.0 },
        SvgCommand::Arc {
            x: 20.0,
            y: 0.0,
            rx: 10.0,
            ry: 10.0,
            x_axis_rotation: 0.0,
            large_arc: false,
            sweep: true,
            center: Some(ArcCenter {
                cx: 10.0,
                cy: 0.0,
                start_angle: std::f64::consts::PI,
                end_angle: 0.0,
            }),
        },
    ];
    // Swap axes: the start ends up above the centre, the end below it.
    let out = transform_svg_commands(&cmds, |x, y| Point::new(y, x));
    let SvgCommand::Arc {
        x, y, rx, center, ..
    } = out[1]
    else {
        panic!("expected arc, got {:?}", out[1]);
    };
    assert_eq!((x, y, rx), (0.0, 20.0, 10.0));
    let c = center.unwrap();
    assert_eq!((c.cx, c.cy), (0.0, 10.0));
    assert!((c.start_angle + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!((c.end_angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn arc_without_centre_only_moves_endpoint() {
    let cmds = vec![
        SvgCommand::MoveTo { x: 0.0, y: 0.0 },
        SvgCommand::Arc {
            x: 20.0,
            y: 0.0,
            rx: 0.0,
            ry: 0.0,
            x_axis_rotation: 15.0,
            large_arc: true,
            sweep: false,
            center: None,
        },
    ];
    let out = transform_svg_commands(&cmds, shift);
    assert_eq!(
        out[1],
        SvgCommand::Arc {
            x: 120.0,
            y: 10.0,
            rx: 0.0,
            ry: 0.0,
            x_axis_rotation: 15.0,
            large_arc: true,
            sweep: false,
            center: None,
        }
    );
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(transform_svg_commands(&[], shift).is_empty());
}
