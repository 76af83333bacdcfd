//! Three-qubit repetition code toy.

#[cfg(test)]
#[path = "ecc_test.rs"]
mod ecc_test;

use crate::config::EccConfig;
use crate::effect::{Child, Effect};
use crate::rng::RandomSource;

const ENCODED: [i8; 3] = [1, 1, 1];

/// Result of a majority vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logical {
    Zero,
    One,
}

impl Logical {
    fn describe(self) -> &'static str {
        match self {
            Self::Zero => "+1 (logical 0)",
            Self::One => "−1 (logical 1)",
        }
    }
}

/// Majority vote over three ±1 values.
#[must_use]
pub fn majority(qubits: [i8; 3]) -> Logical {
    let sum: i8 = qubits.iter().sum();
    if sum >= 1 { Logical::Zero } else { Logical::One }
}

#[derive(Debug, Clone)]
pub struct RepetitionCode {
    scene: String,
    message: String,
    flip_probability: f64,
    qubits: [i8; 3],
}

impl RepetitionCode {
    #[must_use]
    pub fn new(cfg: &EccConfig) -> Self {
        Self {
            scene: cfg.scene.clone(),
            message: cfg.message.clone(),
            flip_probability: cfg.flip_probability,
            qubits: ENCODED,
        }
    }

    #[must_use]
    pub fn qubits(&self) -> [i8; 3] {
        self.qubits
    }

    /// Flip each qubit independently. Applications compound until reset.
    pub fn apply_noise(&mut self, rng: &mut impl RandomSource) -> Vec<Effect> {
        for q in &mut self.qubits {
            if rng.chance(self.flip_probability) {
                *q = -*q;
            }
        }
        vec![Effect::set_text(&self.message, "Noise applied — check for flips."), self.boxes(false)]
    }

    pub fn decode(&self) -> Vec<Effect> {
        let verdict = majority(self.qubits).describe();
        vec![Effect::set_text(&self.message, format!("Majority vote ⇒ {verdict}")), self.boxes(true)]
    }

    pub fn reset(&mut self) -> Vec<Effect> {
        self.qubits = ENCODED;
        vec![Effect::set_text(&self.message, "Encoded logical 0 as (+1,+1,+1)."), self.boxes(false)]
    }

    /// Boxes for the current values without touching the message.
    #[must_use]
    pub fn boxes(&self, highlight: bool) -> Effect {
        let class = if highlight { "eccQ eccMajor" } else { "eccQ" };
        let children = self
            .qubits
            .iter()
            .map(|&q| Child::text(Some(class), if q > 0 { "+1" } else { "−1" }))
            .collect();
        Effect::replace_children(&self.scene, "div", children)
    }
}
