use super::*;

#[test]
fn lcg_matches_reference_sequence() {
    let mut rng = Lcg::new(1.0);
    assert_eq!(rng.next_f64(), 58_598.0 / 233_280.0);
    assert_eq!(rng.state(), 58_598.0);

    // (58598 * 9301 + 49297) mod 233280
    let expected = (58_598.0f64 * 9301.0 + 49_297.0) % 233_280.0;
    assert_eq!(rng.next_f64(), expected / 233_280.0);
}

#[test]
fn lcg_accepts_fractional_seeds() {
    let mut a = Lcg::new(4.5);
    let mut b = Lcg::new(4.5);
    for _ in 0..16 {
        let v = a.next_f64();
        assert!((0.0..1.0).contains(&v));
        assert_eq!(v, b.next_f64());
    }
}

#[test]
fn signed_samples_stay_in_range() {
    let mut rng = Lcg::new(42.0);
    for _ in 0..256 {
        let v = rng.next_signed();
        assert!((-1.0..1.0).contains(&v));
    }
}

#[test]
fn round_to_decimals() {
    assert_eq!(round_to(1.004, 1), 1.0);
    assert_eq!(round_to(1.06, 1), 1.1);
    assert_eq!(round_to(2.345, 0), 2.0);
    assert_eq!(round_to(-0.25, 1), -0.3);
}

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
    assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
    assert_eq!(lerp(3.0, 7.0, 0.5), 5.0);
}
