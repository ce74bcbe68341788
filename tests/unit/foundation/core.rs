use super::*;

#[test]
fn bounds_from_points_covers_all() {
    let b = Bounds::from_points([
        Point::new(2.0, 3.0),
        Point::new(-1.0, 5.0),
        Point::new(4.0, -2.0),
    ]);
    assert_eq!(
        b,
        Bounds {
            x: -1.0,
            y: -2.0,
            width: 5.0,
            height: 7.0
        }
    );
    assert_eq!(b.center(), Point::new(1.5, 1.5));
}

#[test]
fn bounds_of_nothing_is_zero() {
    assert_eq!(Bounds::from_points(std::iter::empty()), Bounds::default());
}

#[test]
fn bounds_rect_round_trip() {
    let b = Bounds {
        x: 1.0,
        y: 2.0,
        width: 3.0,
        height: 4.0,
    };
    assert_eq!(Bounds::from_rect(b.to_rect()), b);
}

#[test]
fn direction_normalizes_and_handles_zero() {
    let p = GeneratedPoint {
        point: Point::ZERO,
        tangent: Vec2::new(3.0, 4.0),
    };
    let d = p.direction();
    assert!((d.x - 0.6).abs() < 1e-12);
    assert!((d.y - 0.8).abs() < 1e-12);

    let z = GeneratedPoint {
        point: Point::ZERO,
        tangent: Vec2::ZERO,
    };
    assert_eq!(z.direction(), Vec2::ZERO);
}

#[test]
fn union_point_grows_only_as_needed() {
    let b = Bounds {
        x: 0.0,
        y: 0.0,
        width: 2.0,
        height: 2.0,
    };
    assert_eq!(b.union_point(Point::new(1.0, 1.0)), b);
    assert_eq!(
        b.union_point(Point::new(-1.0, 5.0)),
        Bounds {
            x: -1.0,
            y: 0.0,
            width: 3.0,
            height: 5.0
        }
    );
}
