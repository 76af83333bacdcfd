use super::*;
use crate::effect::text_for;

#[test]
fn bit_starts_at_zero() {
    let bit = BitToggle::new(&BitConfig::default());
    assert_eq!(bit.bit(), 0);
    assert_eq!(text_for(&bit.view(), "bit-box"), Some("0"));
}

#[test]
fn bit_toggle_sets_text_class_and_flash() {
    let mut bit = BitToggle::new(&BitConfig::default());
    let effects = bit.toggle();
    assert_eq!(bit.bit(), 1);
    assert_eq!(text_for(&effects, "bit-box"), Some("1"));
    assert!(effects.contains(&Effect::set_class("bit-box", "on", true)));
    assert!(effects.contains(&Effect::style_flash("bit-box", "transform", "scale(1.06)", "scale(1)", 160)));
}

#[test]
fn bit_toggle_twice_returns_to_zero() {
    let mut bit = BitToggle::new(&BitConfig::default());
    bit.toggle();
    let effects = bit.toggle();
    assert_eq!(bit.bit(), 0);
    assert!(effects.contains(&Effect::set_class("bit-box", "on", false)));
}

#[test]
fn qubit_cycles_through_three_states() {
    let mut q = QubitCycler::new(&QubitConfig::default());
    assert_eq!(q.state(), QubitState::Zero);
    q.cycle();
    assert_eq!(q.state(), QubitState::One);
    q.cycle();
    assert_eq!(q.state(), QubitState::Superposition);
    q.cycle();
    assert_eq!(q.state(), QubitState::Zero);
}

#[test]
fn qubit_superposition_marks_class() {
    let mut q = QubitCycler::new(&QubitConfig::default());
    q.cycle();
    let effects = q.cycle();
    assert_eq!(text_for(&effects, "qubit-box"), Some("(|0⟩+|1⟩)/√2"));
    assert!(effects.contains(&Effect::set_class("qubit-box", "super", true)));
}

#[test]
fn qubit_cycle_flips_box() {
    let mut q = QubitCycler::new(&QubitConfig::default());
    let effects = q.cycle();
    assert!(effects.iter().any(|e| matches!(
        e,
        Effect::StyleFlash { value, after_ms: 220, .. } if value == "rotateY(180deg)"
    )));
}

#[test]
fn effects_target_configured_anchor() {
    let cfg = QubitConfig { qubit_box: "q".to_owned() };
    let mut q = QubitCycler::new(&cfg);
    assert!(q.cycle().iter().all(|e| e.anchor() == "q"));
}
