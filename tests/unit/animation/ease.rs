use super::*;

#[test]
fn endpoints_are_fixed() {
    for ease in [Ease::Linear, Ease::InOutQuad, Ease::OutCubic, Ease::InOutCubic] {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-2.0), 0.0);
    assert_eq!(Ease::InOutQuad.apply(3.0), 1.0);
}

#[test]
fn in_out_curves_are_symmetric_at_midpoint() {
    assert!((Ease::InOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
    assert!((Ease::InOutCubic.apply(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn out_cubic_front_loads_progress() {
    assert!(Ease::OutCubic.apply(0.25) > 0.25);
    assert!((Ease::OutCubic.apply(0.5) - 0.875).abs() < 1e-12);
}

#[test]
fn serde_uses_snake_case_names() {
    let v = serde_json::to_string(&Ease::OutCubic).unwrap();
    assert_eq!(v, "\"out_cubic\"");
    let e: Ease = serde_json::from_str("\"in_out_quad\"").unwrap();
    assert_eq!(e, Ease::InOutQuad);
}
