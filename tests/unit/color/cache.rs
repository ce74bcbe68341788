use super::*;

#[test]
fn repeated_blends_hit_the_cache() {
    let cache = ColorCache::default();
    let a = cache.interpolate_color("#000000", "#ffffff", 0.5).unwrap();
    let b = cache.interpolate_color("#000000", "#FFFFFF", 0.501).unwrap();
    assert_eq!(a, "#808080");
    assert_eq!(a, b);
    let (blend, _) = cache.stats();
    assert_eq!((blend.hits, blend.misses), (1, 1));
}

#[test]
fn bad_hex_is_never_cached() {
    let cache = ColorCache::default();
    assert!(cache.interpolate_color("#zzzzzz", "#ffffff", 0.5).is_err());
    assert!(cache.interpolate_color("#zzzzzz", "#ffffff", 0.5).is_err());
    let (blend, _) = cache.stats();
    assert_eq!(blend, CacheStats::default());
}

#[test]
fn glow_matches_uncached_mapping() {
    let cache = ColorCache::default();
    for b in [0.0, 0.1, 0.35, 0.8, 1.0] {
        assert_eq!(cache.brightness_to_color(b), brightness_to_color(b));
    }
    assert_eq!(cache.brightness_to_color(0.35), brightness_to_color(0.35));
    let (_, glow) = cache.stats();
    assert_eq!(glow.hits, 1);
    assert_eq!(glow.misses, 5);

    cache.clear();
    cache.brightness_to_color(0.35);
    let (_, glow) = cache.stats();
    assert_eq!((glow.hits, glow.misses), (0, 1));
}

#[test]
fn disabled_policy_bypasses_storage() {
    let cache = ColorCache::new(MemoOpts::color().disabled());
    cache.brightness_to_color(0.5);
    cache.brightness_to_color(0.5);
    assert_eq!(cache.stats().1, CacheStats::default());
}

#[test]
fn infinite_brightness_signs_do_not_share_a_glow() {
    let cache = ColorCache::default();
    for b in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        assert_eq!(cache.brightness_to_color(b), brightness_to_color(b));
    }
    let (_, glow) = cache.stats();
    assert_eq!(glow.misses, 3);
}
