use super::*;
use crate::foundation::core::Point;
use crate::geometry::shapes::{CircleEquation, gen_circle_path};

#[test]
fn jittered_circle_radius_reuses_geometry() {
    let cache = GeometryCache::default();
    let a = cache.circle(&CircleConfig {
        radius: 20.001,
        segments: 32,
        origin: None,
    });
    let b = cache.circle(&CircleConfig {
        radius: 20.004,
        segments: 32,
        origin: None,
    });
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.stats().hits, 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn structural_parameters_always_miss() {
    let cache = GeometryCache::default();
    let base = CircleConfig {
        radius: 20.0,
        segments: 32,
        origin: None,
    };
    cache.circle(&base);
    cache.circle(&CircleConfig {
        segments: 33,
        ..base
    });
    cache.circle(&CircleConfig {
        origin: Some(Point::new(1.0, 0.0)),
        ..base
    });
    assert_eq!(cache.len(), 3);
    assert_eq!(cache.stats().hits, 0);
}

#[test]
fn cached_geometry_matches_direct_generation() {
    let cache = GeometryCache::default();
    let cfg = CircleConfig {
        radius: 12.0,
        segments: 24,
        origin: Some(Point::new(3.0, 4.0)),
    };
    assert_eq!(&cache.circle(&cfg)[..], &gen_circle_path(&cfg)[..]);
}

#[test]
fn circle_and_rect_do_not_collide() {
    let cache = GeometryCache::default();
    cache.circle(&CircleConfig::default());
    cache.rect(&RoundedRectConfig::default());
    assert_eq!(cache.len(), 2);
}

#[test]
fn equation_parameters_are_part_of_the_key() {
    let cache = GeometryCache::default();
    let small = EquationConfig::new(CircleEquation { radius: 1.0 }, 0.0, 1.0, 8);
    let large = EquationConfig::new(CircleEquation { radius: 5.0 }, 0.0, 1.0, 8);
    let a = cache.points("custom", &small);
    let b = cache.points("custom", &large);
    assert!(!Arc::ptr_eq(&a, &b));
    assert_ne!(a[1].point, b[1].point);
}

#[test]
fn disabled_cache_stores_nothing() {
    let cache = GeometryCache::new(MemoOpts::geometry().disabled());
    cache.circle(&CircleConfig::default());
    cache.circle(&CircleConfig::default());
    assert!(cache.is_empty());
}

#[test]
fn capacity_bounds_entries() {
    let cache = GeometryCache::new(MemoOpts {
        max_entries: 4,
        ..MemoOpts::geometry()
    });
    for i in 0..10 {
        cache.circle(&CircleConfig {
            radius: f64::from(i),
            segments: 4,
            origin: None,
        });
    }
    assert_eq!(cache.len(), 4);
    assert_eq!(cache.stats().evictions, 6);
}

#[derive(Serialize)]
struct Outline<'a> {
    #[serde(skip)]
    cache: &'a GeometryCache,
    radius: f64,
}

impl ParametricCurve for Outline<'_> {
    fn eval(&self, t: f64) -> Point {
        let ring = self.cache.circle(&CircleConfig {
            radius: self.radius,
            segments: 4,
            origin: None,
        });
        Point::new(t, ring.len() as f64)
    }
}

#[test]
fn curves_may_consult_the_cache_that_memoizes_them() {
    let cache = GeometryCache::default();
    let cfg = EquationConfig::new(
        Outline {
            cache: &cache,
            radius: 3.0,
        },
        0.0,
        1.0,
        5,
    );
    let pts = cache.points("outline", &cfg);
    assert!(pts.iter().all(|p| p.point.y == 4.0));
    assert_eq!(cache.len(), 2);

    let again = cache.points("outline", &cfg);
    assert!(Arc::ptr_eq(&pts, &again));
}
