#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::rng::Scripted;
use crate::scene::DrawCmd;

fn entangled() -> Session {
    let mut s = Session::new();
    s.set_entangled(true);
    s
}

// --- measurement ---

#[test]
fn entangled_outcomes_always_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut s = entangled();
    for _ in 0..500 {
        let o = s.measure(&mut rng);
        assert_eq!(o.a, o.b);
    }
    assert_eq!(s.correlation(), Some(1.0));
}

#[test]
fn separable_outcomes_agree_about_half_the_time() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut s = Session::new();
    let runs = 4_000;
    let agree = (0..runs).filter(|_| {
        let o = s.measure(&mut rng);
        o.a == o.b
    });
    let rate = f64::from(u32::try_from(agree.count()).unwrap_or(0)) / f64::from(runs);
    assert!((rate - 0.5).abs() < 0.05, "agreement rate {rate}");
    let corr = s.correlation().unwrap_or(f64::NAN);
    assert!(corr.abs() < 0.1, "correlation {corr}");
}

#[test]
fn separable_uses_two_draws() {
    let mut rng = Scripted::new([0.1, 0.9]);
    let mut s = Session::new();
    let o = s.measure(&mut rng);
    assert_eq!((o.a, o.b), (1, -1));
    assert_eq!(s.correlation(), Some(-1.0));
}

#[test]
fn no_correlation_before_first_run() {
    assert_eq!(Session::new().correlation(), None);
}

// --- resets ---

#[test]
fn mode_toggle_is_soft_reset() {
    let mut rng = Scripted::new([0.2]);
    let mut s = entangled();
    s.measure(&mut rng);
    s.set_entangled(false);
    assert_eq!(s.last(), None);
    assert_eq!(s.count(), 1);
    assert_eq!(s.outcomes().count(), 1);
    assert_eq!(s.correlation(), Some(1.0));
}

#[test]
fn clear_is_hard_reset() {
    let mut rng = Scripted::new([0.2]);
    let mut s = entangled();
    s.measure(&mut rng);
    s.clear();
    assert_eq!(s.last(), None);
    assert_eq!(s.count(), 0);
    assert_eq!(s.outcomes().count(), 0);
    assert_eq!(s.correlation(), None);
    assert!(s.is_entangled());
}

// --- log ---

#[test]
fn log_keeps_most_recent_eight() {
    let mut rng = Scripted::new([0.1, 0.9, 0.1, 0.9, 0.1, 0.9, 0.1, 0.9, 0.1, 0.9, 0.1, 0.9, 0.7]);
    let mut s = Session::new();
    for _ in 0..10 {
        s.measure(&mut rng);
    }
    assert_eq!(s.outcomes().count(), 8);
    assert_eq!(s.count(), 10);
}

#[test]
fn statistic_is_independent_of_log_cap() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = entangled();
    for _ in 0..20 {
        s.measure(&mut rng);
    }
    assert_eq!(s.count(), 20);
    assert_eq!(s.correlation(), Some(1.0));
}

#[test]
fn outcome_line_format() {
    let o = Outcome { a: 1, b: -1, correlated: false };
    assert_eq!(o.line(), "A: +1   B: -1");
    let o = Outcome { a: -1, b: -1, correlated: true };
    assert_eq!(o.line(), "A: -1   B: -1   (corr)");
}

// --- layout ---

#[test]
fn layout_matches_wide_canvas() {
    let layout = Layout::compute(Viewport::new(700.0, 360.0));
    assert!((layout.radius - 59.5).abs() < 1e-9);
    assert_eq!(layout.qubit_a.y, layout.qubit_b.y);
    assert!(layout.qubit_a.x < layout.qubit_b.x);
    let (from, to) = layout.link.unwrap_or((Point::new(0.0, 0.0), Point::new(0.0, 0.0)));
    assert!(from.x > layout.qubit_a.x + layout.radius);
    assert!(to.x < layout.qubit_b.x - layout.radius);
}

#[test]
fn layout_shrinks_on_narrow_canvas() {
    let wide = Layout::compute(Viewport::new(800.0, 360.0));
    let narrow = Layout::compute(Viewport::new(320.0, 360.0));
    assert!(narrow.radius < wide.radius);
    assert!(narrow.radius >= 16.0);
}

#[test]
fn layout_drops_link_when_qubits_crowd() {
    let layout = Layout::compute(Viewport::new(200.0, 200.0));
    assert_eq!(layout.link, None);
}

// --- drawing ---

fn pulse_count(scene: &Scene) -> usize {
    scene
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCmd::Circle { radius, .. } if *radius == 4.0))
        .count()
}

#[test]
fn pulses_only_while_entangled() {
    let vp = Viewport::new(700.0, 360.0);
    let mut demo = EntangleDemo::new();
    assert_eq!(pulse_count(&demo.draw(vp, 100.0)), 0);
    demo.session.set_entangled(true);
    assert_eq!(pulse_count(&demo.draw(vp, 100.0)), 3);
    assert!(demo.draw(vp, 0.0).has_text("Entangled"));
}

#[test]
fn pulses_move_with_clock() {
    let layout = Layout::compute(Viewport::new(700.0, 360.0));
    assert_ne!(EntangleDemo::pulses(&layout, 0.0), EntangleDemo::pulses(&layout, 400.0));
}

#[test]
fn pulses_stay_on_link() {
    let layout = Layout::compute(Viewport::new(700.0, 360.0));
    let (from, to) = layout.link.unwrap_or((Point::new(0.0, 0.0), Point::new(0.0, 0.0)));
    for p in EntangleDemo::pulses(&layout, 12_345.0) {
        assert!(p.x >= from.x && p.x <= to.x);
    }
}

#[test]
fn draw_shows_measured_values_and_correlation() {
    let mut demo = EntangleDemo::new();
    demo.session.set_entangled(true);
    demo.session.measure(&mut Scripted::new([0.8]));
    let scene = demo.draw(Viewport::new(700.0, 360.0), 0.0);
    assert_eq!(scene.texts().into_iter().filter(|t| *t == "−1").count(), 2);
    assert!(scene.has_text("A: -1   B: -1   (corr)"));
    assert!(scene.has_text("⟨AB⟩ = +1.00  over 1 runs"));
}

#[test]
fn draw_before_measuring_shows_unknowns() {
    let scene = EntangleDemo::new().draw(Viewport::new(700.0, 360.0), 0.0);
    assert_eq!(scene.texts().into_iter().filter(|t| *t == "?").count(), 2);
    assert!(scene.has_text("Runs (Z-basis):"));
}
