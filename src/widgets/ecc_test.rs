use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::effect::{Content, text_for};
use crate::rng::Scripted;

fn code() -> RepetitionCode {
    RepetitionCode::new(&EccConfig::default())
}

fn box_texts(effect: &Effect) -> Vec<(String, String)> {
    match effect {
        Effect::ReplaceChildren { children, .. } => children
            .iter()
            .map(|c| {
                let text = match &c.content {
                    Content::Text(t) | Content::Html(t) => t.clone(),
                };
                (c.class.clone().unwrap_or_default(), text)
            })
            .collect(),
        other => panic!("expected ReplaceChildren, got {other:?}"),
    }
}

#[test]
fn majority_examples() {
    assert_eq!(majority([1, 1, 1]), Logical::Zero);
    assert_eq!(majority([1, -1, -1]), Logical::One);
    assert_eq!(majority([-1, 1, 1]), Logical::Zero);
    assert_eq!(majority([-1, -1, -1]), Logical::One);
}

#[test]
fn starts_encoded() {
    assert_eq!(code().qubits(), [1, 1, 1]);
}

#[test]
fn noise_flips_where_draw_is_below_p() {
    let mut c = code();
    let effects = c.apply_noise(&mut Scripted::new([0.1, 0.9, 0.2]));
    assert_eq!(c.qubits(), [-1, 1, -1]);
    assert_eq!(text_for(&effects, "ecc-msg"), Some("Noise applied — check for flips."));
}

#[test]
fn noise_compounds() {
    let mut c = code();
    c.apply_noise(&mut Scripted::new([0.1, 0.9, 0.9]));
    c.apply_noise(&mut Scripted::new([0.1, 0.1, 0.9]));
    assert_eq!(c.qubits(), [1, -1, 1]);
}

#[test]
fn zero_probability_never_flips() {
    let cfg = EccConfig { flip_probability: 0.0, ..EccConfig::default() };
    let mut c = RepetitionCode::new(&cfg);
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..50 {
        c.apply_noise(&mut rng);
    }
    assert_eq!(c.qubits(), [1, 1, 1]);
}

#[test]
fn decode_reports_majority_and_highlights() {
    let mut c = code();
    c.apply_noise(&mut Scripted::new([0.9, 0.1, 0.1]));
    let effects = c.decode();
    assert_eq!(text_for(&effects, "ecc-msg"), Some("Majority vote ⇒ −1 (logical 1)"));
    let boxes = box_texts(&effects[1]);
    assert_eq!(boxes.len(), 3);
    assert!(boxes.iter().all(|(class, _)| class == "eccQ eccMajor"));
    assert_eq!(boxes[0].1, "+1");
    assert_eq!(boxes[1].1, "−1");
}

#[test]
fn decode_clean_code() {
    let effects = code().decode();
    assert_eq!(text_for(&effects, "ecc-msg"), Some("Majority vote ⇒ +1 (logical 0)"));
}

#[test]
fn reset_restores_encoding() {
    let mut c = code();
    c.apply_noise(&mut Scripted::new([0.0]));
    assert_eq!(c.qubits(), [-1, -1, -1]);
    let effects = c.reset();
    assert_eq!(c.qubits(), [1, 1, 1]);
    assert_eq!(text_for(&effects, "ecc-msg"), Some("Encoded logical 0 as (+1,+1,+1)."));
    assert!(box_texts(&effects[1]).iter().all(|(class, text)| class == "eccQ" && text == "+1"));
}
