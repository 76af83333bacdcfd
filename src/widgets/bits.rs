//! Bit vs qubit toggle boxes.
//!
//! Both are driven from inline page markup through the `toggleBit` and
//! `cycleQubit` controls and only touch their own box element.

#[cfg(test)]
#[path = "bits_test.rs"]
mod bits_test;

use crate::config::{BitConfig, QubitConfig};
use crate::consts::{BIT_FLASH_MS, QUBIT_FLIP_MS};
use crate::effect::Effect;

/// A classical bit.
#[derive(Debug, Clone)]
pub struct BitToggle {
    anchor: String,
    bit: u8,
}

impl BitToggle {
    #[must_use]
    pub fn new(cfg: &BitConfig) -> Self {
        Self { anchor: cfg.bit_box.clone(), bit: 0 }
    }

    #[must_use]
    pub fn bit(&self) -> u8 {
        self.bit
    }

    /// Flip the bit and pulse the box.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.bit ^= 1;
        let mut effects = self.view();
        effects.push(Effect::style_flash(&self.anchor, "transform", "scale(1.06)", "scale(1)", BIT_FLASH_MS));
        effects
    }

    /// Current text and `on` class.
    #[must_use]
    pub fn view(&self) -> Vec<Effect> {
        vec![
            Effect::set_text(&self.anchor, self.bit.to_string()),
            Effect::set_class(&self.anchor, "on", self.bit == 1),
        ]
    }
}

/// The three toy qubit states the box cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QubitState {
    #[default]
    Zero,
    One,
    Superposition,
}

impl QubitState {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Superposition,
            Self::Superposition => Self::Zero,
        }
    }

    #[must_use]
    pub fn ket(self) -> &'static str {
        match self {
            Self::Zero => "|0⟩",
            Self::One => "|1⟩",
            Self::Superposition => "(|0⟩+|1⟩)/√2",
        }
    }
}

#[derive(Debug, Clone)]
pub struct QubitCycler {
    anchor: String,
    state: QubitState,
}

impl QubitCycler {
    #[must_use]
    pub fn new(cfg: &QubitConfig) -> Self {
        Self { anchor: cfg.qubit_box.clone(), state: QubitState::Zero }
    }

    #[must_use]
    pub fn state(&self) -> QubitState {
        self.state
    }

    /// Advance to the next state and flip the box.
    pub fn cycle(&mut self) -> Vec<Effect> {
        self.state = self.state.next();
        let mut effects = self.view();
        effects.push(Effect::style_flash(
            &self.anchor,
            "transform",
            "rotateY(180deg)",
            "rotateY(0deg)",
            QUBIT_FLIP_MS,
        ));
        effects
    }

    #[must_use]
    pub fn view(&self) -> Vec<Effect> {
        vec![
            Effect::set_text(&self.anchor, self.state.ket()),
            Effect::set_class(&self.anchor, "super", self.state == QubitState::Superposition),
        ]
    }
}
