use super::*;

fn frame(tilt: f64) -> PerspectiveConfig {
    PerspectiveConfig {
        tilt,
        pivot: 0.5,
        reference: Size::new(200.0, 100.0),
        factors: None,
    }
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn zero_tilt_is_identity() {
    let cfg = frame(0.0);
    for p in [
        Point::new(0.0, 0.0),
        Point::new(13.0, -7.5),
        Point::new(250.0, 400.0),
    ] {
        assert_eq!(
            apply_perspective_transform(p, Some(&cfg), None, None, ScaleAnchor::default()),
            p
        );
    }
}

#[test]
fn missing_config_is_identity() {
    let p = Point::new(42.0, 17.0);
    assert_eq!(
        apply_perspective_transform(p, None, None, None, ScaleAnchor::default()),
        p
    );
}

#[test]
fn left_points_above_pivot_shift_right_for_positive_tilt() {
    let cfg = frame(0.4);
    // Left of centre, above the pivot row at y = 50.
    let p = Point::new(50.0, 20.0);
    let out = apply_perspective_transform(p, Some(&cfg), None, None, ScaleAnchor::default());
    assert!(out.x > p.x, "{out:?}");

    // distance = -0.5, skew = 0.5 * 0.4 * 0.5 = 0.1, y_from_pivot = -30.
    assert!(close(out, Point::new(53.0, 50.0 - 30.0 * (1.0 - 0.4 * 0.3))));
}

#[test]
fn pivot_row_and_centre_column_are_fixed_horizontally() {
    let cfg = frame(0.7);
    let on_pivot = apply_perspective_transform(
        Point::new(10.0, 50.0),
        Some(&cfg),
        None,
        None,
        ScaleAnchor::default(),
    );
    assert!(close(on_pivot, Point::new(10.0, 50.0)));

    let centre = apply_perspective_transform(
        Point::new(100.0, 0.0),
        Some(&cfg),
        None,
        None,
        ScaleAnchor::default(),
    );
    assert!((centre.x - 100.0).abs() < 1e-12);
}

#[test]
fn custom_factors_are_used() {
    let cfg = PerspectiveConfig {
        factors: Some(PerspectiveFactors {
            skew: 1.0,
            scale: 0.0,
        }),
        ..frame(1.0)
    };
    let out = apply_perspective_transform(
        Point::new(0.0, 0.0),
        Some(&cfg),
        None,
        None,
        ScaleAnchor::default(),
    );
    // distance = -1, skew = 1, y_from_pivot = -50 → x' = 0 + 50, no vertical squash.
    assert!(close(out, Point::new(50.0, 0.0)));
}

#[test]
fn zero_reference_width_skips_skew() {
    let cfg = PerspectiveConfig {
        reference: Size::new(0.0, 100.0),
        ..frame(0.5)
    };
    let out = apply_perspective_transform(
        Point::new(30.0, 0.0),
        Some(&cfg),
        None,
        None,
        ScaleAnchor::default(),
    );
    assert!(out.x.is_finite() && out.y.is_finite());
    assert_eq!(out.x, 30.0);
}

#[test]
fn scale_uses_anchor_then_shift_is_added_last() {
    let cfg = frame(0.0);
    let anchor = ScaleAnchor {
        horizontal: HorizontalAnchor::Right,
        vertical: VerticalAnchor::Bottom,
    };
    let out = apply_perspective_transform(
        Point::new(100.0, 50.0),
        Some(&cfg),
        Some(Vec2::new(1.0, 2.0)),
        Some(Vec2::new(0.5, 2.0)),
        anchor,
    );
    // Anchor (200, 100): x = 200 + (100 - 200) * 0.5 = 150, y = 100 + (50 - 100) * 2 = 0.
    assert_eq!(out, Point::new(151.0, 2.0));

    let top_left = apply_perspective_transform(
        Point::new(100.0, 50.0),
        Some(&cfg),
        None,
        Some(Vec2::new(0.5, 2.0)),
        ScaleAnchor::default(),
    );
    assert_eq!(top_left, Point::new(50.0, 100.0));
}

#[test]
fn bundled_transform_matches_free_function() {
    let t = PerspectiveTransform {
        config: Some(frame(-0.3)),
        shift: Some(Vec2::new(5.0, 5.0)),
        scale: Some(Vec2::new(1.5, 1.5)),
        anchor: ScaleAnchor::default(),
    };
    let p = Point::new(12.0, 80.0);
    assert_eq!(
        t.apply(p),
        apply_perspective_transform(p, t.config.as_ref(), t.shift, t.scale, t.anchor)
    );

    let cmds = t.apply_commands(&[
        SvgCommand::MoveTo { x: 12.0, y: 80.0 },
        SvgCommand::HorizLineTo { x: 40.0 },
    ]);
    let moved = t.apply(Point::new(40.0, 80.0));
    assert_eq!(
        cmds[1],
        SvgCommand::LineTo {
            x: moved.x,
            y: moved.y
        }
    );
}

#[test]
fn apply_points_rederives_tangents() {
    let t = PerspectiveTransform {
        scale: Some(Vec2::new(2.0, 3.0)),
        ..PerspectiveTransform::default()
    };
    let out = t.apply_points(&[GeneratedPoint {
        point: Point::new(1.0, 1.0),
        tangent: Vec2::new(1.0, 1.0),
    }]);
    assert_eq!(out[0].point, Point::new(2.0, 3.0));
    assert_eq!(out[0].tangent, Vec2::new(2.0, 3.0));
}
