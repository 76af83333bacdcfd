#![allow(clippy::float_cmp)]

use super::*;
use crate::effect::text_for;

fn attr<'a>(effects: &'a [Effect], anchor: &str, name: &str) -> Option<&'a str> {
    effects.iter().rev().find_map(|e| match e {
        Effect::SetAttr { anchor: a, name: n, value } if a == anchor && n == name => Some(value.as_str()),
        _ => None,
    })
}

// --- steps ---

#[test]
fn clamped_index() {
    assert_eq!(BellStep::clamped(-1), BellStep::Initial);
    assert_eq!(BellStep::clamped(1), BellStep::AfterH);
    assert_eq!(BellStep::clamped(9), BellStep::AfterCnot);
}

#[test]
fn next_and_prev_clamp() {
    let mut s = BellStepper::new();
    assert!(!s.prev(0.0));
    assert!(s.next(0.0));
    assert!(s.next(0.0));
    assert!(!s.next(0.0));
    assert_eq!(s.step(), BellStep::AfterCnot);
    assert!(s.prev(0.0));
    assert_eq!(s.step(), BellStep::AfterH);
}

// --- settled frames ---

#[test]
fn initial_frame() {
    let f = settled(BellStep::Initial);
    assert_eq!((f.top.symbol, f.bottom.symbol), ("|0⟩", "|0⟩"));
    assert_eq!(f.label, "|00⟩");
    assert_eq!(f.gate, None);
    assert_eq!(f.top.x, 40.0);
}

#[test]
fn after_h_frame() {
    let f = settled(BellStep::AfterH);
    assert_eq!(f.top.symbol, "|+⟩");
    assert_eq!(f.top.x, 200.0);
    assert_eq!(f.bottom.symbol, "|0⟩");
    assert_eq!(f.bottom.x, 40.0);
    assert_eq!(f.label, "(|00⟩ + |10⟩)/√2");
    assert_eq!(f.gate, Some(Gate::H));
}

#[test]
fn after_cnot_frame() {
    let f = settled(BellStep::AfterCnot);
    assert_eq!((f.top.symbol, f.bottom.symbol), ("Φ⁺", "Φ⁺"));
    assert_eq!((f.top.x, f.bottom.x), (300.0, 300.0));
    assert_eq!(f.pulse.opacity, 0.0);
    assert_eq!(f.label, "(|00⟩ + |11⟩)/√2");
    assert_eq!(f.gate, Some(Gate::Cnot));
}

// --- transitions ---

#[test]
fn jump_and_walk_reach_same_terminal_frame() {
    let mut jump = BellStepper::new();
    jump.go_to(BellStep::AfterCnot, 0.0);

    let mut walk = BellStepper::new();
    walk.next(0.0);
    walk.next(1_000.0);

    assert_eq!(jump.frame_at(5_000.0), walk.frame_at(5_000.0));
    assert_eq!(jump.frame_at(5_000.0), settled(BellStep::AfterCnot));
}

#[test]
fn jump_only_animates_final_transition() {
    let mut s = BellStepper::new();
    s.go_to(BellStep::AfterCnot, 0.0);
    let f = s.frame_at(0.0);
    // H already applied; CNOT just starting.
    assert_eq!(f.top.x, 200.0);
    assert_eq!(f.top.symbol, "|+⟩");
    assert_eq!(f.bottom.x, 40.0);
}

#[test]
fn h_transition_flips_symbol_past_gate() {
    let mut s = BellStepper::new();
    s.next(1_000.0);
    assert!(s.is_animating(1_000.0));
    let start = s.frame_at(1_000.0);
    assert_eq!((start.top.x, start.top.symbol), (40.0, "|0⟩"));
    let mid = s.frame_at(1_300.0);
    assert_eq!((mid.top.x, mid.top.symbol), (120.0, "|0⟩"));
    let late = s.frame_at(1_500.0);
    assert!(late.top.x > 140.0);
    assert_eq!(late.top.symbol, "|+⟩");
    assert!(!s.is_animating(1_600.0));
}

#[test]
fn label_and_gate_switch_at_transition_start() {
    let mut s = BellStepper::new();
    s.next(0.0);
    let f = s.frame_at(0.0);
    assert_eq!(f.label, "(|00⟩ + |10⟩)/√2");
    assert_eq!(f.gate, Some(Gate::H));
}

#[test]
fn cnot_pulse_rises_and_falls() {
    let mut s = BellStepper::new();
    s.go_to(BellStep::AfterCnot, 0.0);
    assert_eq!(s.frame_at(400.0).pulse.opacity, 0.0);
    assert!((s.frame_at(675.0).pulse.opacity - 1.0).abs() < 1e-12);
    assert_eq!(s.frame_at(900.0).pulse.opacity, 0.0);
    assert!(s.frame_at(800.0).pulse.radius > s.frame_at(500.0).pulse.radius);
}

#[test]
fn cnot_marks_tokens_when_pulse_starts() {
    let mut s = BellStepper::new();
    s.go_to(BellStep::AfterCnot, 0.0);
    assert_eq!(s.frame_at(449.0).top.symbol, "|+⟩");
    assert_eq!(s.frame_at(449.0).bottom.symbol, "|0⟩");
    assert_eq!(s.frame_at(450.0).bottom.symbol, "Φ⁺");
}

#[test]
fn backward_move_snaps() {
    let mut s = BellStepper::new();
    s.go_to(BellStep::AfterCnot, 0.0);
    s.prev(100.0);
    assert!(!s.is_animating(100.0));
    assert_eq!(s.frame_at(100.0), settled(BellStep::AfterH));
}

#[test]
fn new_request_replaces_in_flight_transition() {
    let mut s = BellStepper::new();
    s.next(0.0);
    s.next(100.0);
    // The H transition is abandoned; CNOT starts from the settled H frame.
    let f = s.frame_at(100.0);
    assert_eq!(f.top.x, 200.0);
    assert_eq!(f.gate, Some(Gate::Cnot));
    assert!(s.is_animating(100.0));
    assert!(!s.is_animating(1_000.0));
}

#[test]
fn frame_before_start_clamps_to_start() {
    let mut s = BellStepper::new();
    s.next(500.0);
    assert_eq!(s.frame_at(0.0), s.frame_at(500.0));
}

// --- effects ---

#[test]
fn exactly_one_gate_highlighted() {
    let mut c = BellCircuit::new(&BellConfig::default());
    let e = c.effects(0.0);
    assert_eq!(attr(&e, "gateH", "opacity"), Some("0.35"));
    assert_eq!(attr(&e, "gateCNOT", "opacity"), Some("0.35"));

    c.stepper.next(0.0);
    let e = c.effects(0.0);
    assert_eq!(attr(&e, "gateH", "opacity"), Some("1"));
    assert_eq!(attr(&e, "gateCNOT", "opacity"), Some("0.35"));

    c.stepper.next(0.0);
    let e = c.effects(0.0);
    assert_eq!(attr(&e, "gateH", "opacity"), Some("0.35"));
    assert_eq!(attr(&e, "gateCNOT", "opacity"), Some("1"));
}

#[test]
fn effects_write_label_symbols_and_tokens() {
    let mut c = BellCircuit::new(&BellConfig::default());
    c.stepper.go_to(BellStep::AfterCnot, 0.0);
    let e = c.effects(2_000.0);
    assert_eq!(text_for(&e, "bell-state-label"), Some("(|00⟩ + |11⟩)/√2"));
    assert_eq!(text_for(&e, "bell-symbol-top"), Some("Φ⁺"));
    assert_eq!(text_for(&e, "bell-symbol-bottom"), Some("Φ⁺"));
    assert_eq!(attr(&e, "bell-token-top", "transform"), Some("translate(300.0,60.0)"));
    assert_eq!(attr(&e, "bell-token-bottom", "transform"), Some("translate(300.0,140.0)"));
    assert_eq!(attr(&e, "bell-pulse", "opacity"), Some("0.000"));
}
