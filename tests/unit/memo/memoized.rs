use super::*;
use std::cell::Cell;

#[test]
fn inputs_within_precision_hit_the_same_entry() {
    let calls = Cell::new(0u32);
    let m = Memoized::new(
        "square",
        |x: &f64| {
            calls.set(calls.get() + 1);
            x * x
        },
        MemoOpts {
            precision: 1,
            ..MemoOpts::geometry()
        },
    );

    let a = m.call(&1.001);
    let b = m.call(&1.004);
    assert_eq!(calls.get(), 1);
    // The second caller receives the first caller's result.
    assert_eq!(a, b);
    assert_eq!(m.stats().hits, 1);
}

#[test]
fn inputs_beyond_precision_miss() {
    let calls = Cell::new(0u32);
    let m = Memoized::new(
        "square",
        |x: &f64| {
            calls.set(calls.get() + 1);
            x * x
        },
        MemoOpts {
            precision: 1,
            ..MemoOpts::geometry()
        },
    );

    m.call(&1.04);
    m.call(&1.06);
    assert_eq!(calls.get(), 2);
    assert_eq!(m.len(), 2);
}

#[test]
fn disabled_always_calls_through() {
    let calls = Cell::new(0u32);
    let m = Memoized::new(
        "id",
        |x: &f64| {
            calls.set(calls.get() + 1);
            *x
        },
        MemoOpts::geometry().disabled(),
    );
    m.call(&2.0);
    m.call(&2.0);
    assert_eq!(calls.get(), 2);
    assert!(m.is_empty());
}

#[test]
fn state_outside_the_argument_goes_stale() {
    // The wrapped closure reads `scale`, which is not part of the key. Changing it does not
    // invalidate anything, so the second call returns the old answer.
    let scale = Cell::new(2.0);
    let m = Memoized::new("scaled", |x: &f64| x * scale.get(), MemoOpts::geometry());
    assert_eq!(m.call(&3.0), 6.0);
    scale.set(10.0);
    assert_eq!(m.call(&3.0), 6.0);

    // Making the state part of the argument fixes it.
    let m = Memoized::new(
        "scaled",
        |(x, s): &(f64, f64)| x * s,
        MemoOpts::geometry(),
    );
    assert_eq!(m.call(&(3.0, 2.0)), 6.0);
    assert_eq!(m.call(&(3.0, 10.0)), 30.0);
}

#[test]
fn clear_forces_recompute() {
    let calls = Cell::new(0u32);
    let m = Memoized::new(
        "id",
        |x: &u32| {
            calls.set(calls.get() + 1);
            *x
        },
        MemoOpts::color(),
    );
    m.call(&7);
    m.clear();
    m.call(&7);
    assert_eq!(calls.get(), 2);
}
