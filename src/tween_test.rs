#![allow(clippy::float_cmp)]

use super::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn easings_fix_endpoints() {
    for easing in [Easing::Linear, Easing::InOutCubic] {
        assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
        assert!(approx_eq(easing.apply(1.0), 1.0), "{easing:?}");
    }
}

#[test]
fn in_out_cubic_is_symmetric_at_half() {
    assert!(approx_eq(Easing::InOutCubic.apply(0.5), 0.5));
}

#[test]
fn easing_clamps_input() {
    assert_eq!(Easing::Linear.apply(-1.0), 0.0);
    assert_eq!(Easing::Linear.apply(3.0), 1.0);
}

#[test]
fn tween_before_delay_holds_start() {
    let t = Tween::new(10.0, 20.0, 100.0, 200.0, Easing::Linear);
    assert_eq!(t.value_at(0.0), 10.0);
    assert_eq!(t.value_at(100.0), 10.0);
}

#[test]
fn tween_midpoint_linear() {
    let t = Tween::new(10.0, 20.0, 100.0, 200.0, Easing::Linear);
    assert!(approx_eq(t.value_at(200.0), 15.0));
}

#[test]
fn tween_after_end_holds_target() {
    let t = Tween::new(10.0, 20.0, 100.0, 200.0, Easing::InOutCubic);
    assert_eq!(t.value_at(10_000.0), 20.0);
    assert_eq!(t.value_at(300.0), 20.0);
}

#[test]
fn zero_duration_jumps_at_delay() {
    let t = Tween::new(0.0, 1.0, 50.0, 0.0, Easing::Linear);
    assert_eq!(t.value_at(49.0), 0.0);
    assert_eq!(t.value_at(50.0), 1.0);
}

#[test]
fn sampling_is_repeatable() {
    let t = Tween::new(-3.0, 7.0, 0.0, 400.0, Easing::InOutCubic);
    assert_eq!(t.value_at(123.0), t.value_at(123.0));
}
