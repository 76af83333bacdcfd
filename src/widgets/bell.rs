//! H + CNOT → Bell state circuit stepper.
//!
//! The circuit has three steps. Whatever step is requested, its picture is
//! rebuilt from step 0 by replaying each transition to completion, so a step
//! always looks the same however it was reached. Only the last forward
//! transition is played over time; backward moves snap.
//!
//! Playback is time-projected: a transition remembers when it started and
//! [`BellStepper::frame_at`] computes the frame for any later instant.

#[cfg(test)]
#[path = "bell_test.rs"]
mod bell_test;

use crate::config::BellConfig;
use crate::effect::Effect;
use crate::tween::{Easing, Tween};

const WIRE_TOP: f64 = 60.0;
const WIRE_BOTTOM: f64 = 140.0;
const START_X: f64 = 40.0;
/// Column of the H gate; the top token parks past it.
const H_X: f64 = 140.0;
const H_PARK_X: f64 = 200.0;
/// Column of the CNOT; both tokens end up past it.
const CNOT_X: f64 = 260.0;
const CNOT_PARK_X: f64 = 300.0;

const H_MS: f64 = 600.0;
const CNOT_MOVE_MS: f64 = 600.0;
const PULSE_DELAY_MS: f64 = 450.0;
const PULSE_MS: f64 = 450.0;
const PULSE_MIN_R: f64 = 8.0;
const PULSE_MAX_R: f64 = 36.0;

const KET_ZERO: &str = "|0⟩";
const KET_PLUS: &str = "|+⟩";
const BELL_MARK: &str = "Φ⁺";

const GATE_ON: &str = "1";
const GATE_OFF: &str = "0.35";

/// Position in the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum BellStep {
    #[default]
    Initial,
    AfterH,
    AfterCnot,
}

impl BellStep {
    pub const ALL: [Self; 3] = [Self::Initial, Self::AfterH, Self::AfterCnot];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Initial => 0,
            Self::AfterH => 1,
            Self::AfterCnot => 2,
        }
    }

    /// Step at `index`, clamped into range.
    #[must_use]
    pub fn clamped(index: isize) -> Self {
        match index {
            i if i <= 0 => Self::Initial,
            1 => Self::AfterH,
            _ => Self::AfterCnot,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Initial => "|00⟩",
            Self::AfterH => "(|00⟩ + |10⟩)/√2",
            Self::AfterCnot => "(|00⟩ + |11⟩)/√2",
        }
    }

    /// Gate highlighted at this step.
    #[must_use]
    pub fn gate(self) -> Option<Gate> {
        match self {
            Self::Initial => None,
            Self::AfterH => Some(Gate::H),
            Self::AfterCnot => Some(Gate::Cnot),
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::Initial => None,
            Self::AfterH => Some(Self::Initial),
            Self::AfterCnot => Some(Self::AfterH),
        }
    }

    /// Length of the transition into this step.
    #[must_use]
    pub fn transition_ms(self) -> f64 {
        match self {
            Self::Initial => 0.0,
            Self::AfterH => H_MS,
            Self::AfterCnot => PULSE_DELAY_MS + PULSE_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    H,
    Cnot,
}

/// A qubit token riding a wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub x: f64,
    pub y: f64,
    pub symbol: &'static str,
}

/// The coupling pulse drawn at the CNOT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub opacity: f64,
    pub radius: f64,
}

/// Everything the circuit shows at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BellFrame {
    pub top: Token,
    pub bottom: Token,
    pub pulse: Pulse,
    pub label: &'static str,
    pub gate: Option<Gate>,
}

impl BellFrame {
    fn initial() -> Self {
        Self {
            top: Token { x: START_X, y: WIRE_TOP, symbol: KET_ZERO },
            bottom: Token { x: START_X, y: WIRE_BOTTOM, symbol: KET_ZERO },
            pulse: Pulse { opacity: 0.0, radius: PULSE_MIN_R },
            label: BellStep::Initial.label(),
            gate: None,
        }
    }

    /// Frame `elapsed_ms` into the transition from `self` to `to`.
    #[must_use]
    fn advance(&self, to: BellStep, elapsed_ms: f64) -> Self {
        let mut next = Self { label: to.label(), gate: to.gate(), ..*self };
        match to {
            BellStep::Initial => next = Self::initial(),
            BellStep::AfterH => {
                let x = Tween::new(self.top.x, H_PARK_X, 0.0, H_MS, Easing::InOutCubic).value_at(elapsed_ms);
                let symbol = if x > H_X { KET_PLUS } else { self.top.symbol };
                next.top = Token { x, symbol, ..self.top };
            }
            BellStep::AfterCnot => {
                let mv = |from: f64| Tween::new(from, CNOT_PARK_X, 0.0, CNOT_MOVE_MS, Easing::InOutCubic);
                next.top.x = mv(self.top.x).value_at(elapsed_ms);
                next.bottom.x = mv(self.bottom.x).value_at(elapsed_ms);

                let p = Tween::new(0.0, 1.0, PULSE_DELAY_MS, PULSE_MS, Easing::Linear).value_at(elapsed_ms);
                // Rises and falls back to exactly zero at both ends.
                next.pulse = Pulse {
                    opacity: 4.0 * p * (1.0 - p),
                    radius: PULSE_MIN_R + (PULSE_MAX_R - PULSE_MIN_R) * p,
                };
                if elapsed_ms >= PULSE_DELAY_MS {
                    next.top.symbol = BELL_MARK;
                    next.bottom.symbol = BELL_MARK;
                }
            }
        }
        next
    }
}

/// Settled frame of `step`, replayed from step 0.
#[must_use]
pub fn settled(step: BellStep) -> BellFrame {
    BellStep::ALL[1..=step.index()]
        .iter()
        .fold(BellFrame::initial(), |frame, &s| frame.advance(s, f64::INFINITY))
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    to: BellStep,
    started_ms: f64,
}

/// Step state plus the in-flight transition, if any.
#[derive(Debug, Clone, Default)]
pub struct BellStepper {
    step: BellStep,
    transition: Option<Transition>,
}

impl BellStepper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> BellStep {
        self.step
    }

    /// Move to `target`. A forward move animates its last transition from
    /// `now_ms`; anything else snaps. Any in-flight transition is dropped.
    pub fn go_to(&mut self, target: BellStep, now_ms: f64) {
        self.transition = (target > self.step).then_some(Transition { to: target, started_ms: now_ms });
        self.step = target;
    }

    /// Advance one step. Returns `false` at the last step.
    pub fn next(&mut self, now_ms: f64) -> bool {
        self.shift(1, now_ms)
    }

    /// Go back one step. Returns `false` at the first step.
    pub fn prev(&mut self, now_ms: f64) -> bool {
        self.shift(-1, now_ms)
    }

    fn shift(&mut self, delta: isize, now_ms: f64) -> bool {
        #[allow(clippy::cast_possible_wrap)]
        let target = BellStep::clamped(self.step.index() as isize + delta);
        if target == self.step {
            return false;
        }
        self.go_to(target, now_ms);
        true
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.transition.is_some_and(|t| now_ms - t.started_ms < t.to.transition_ms())
    }

    /// Frame at `now_ms`.
    #[must_use]
    pub fn frame_at(&self, now_ms: f64) -> BellFrame {
        match self.transition {
            Some(t) => {
                let base = t.to.previous().map_or_else(BellFrame::initial, settled);
                base.advance(t.to, (now_ms - t.started_ms).max(0.0))
            }
            None => settled(self.step),
        }
    }
}

/// The stepper wired to its page anchors.
#[derive(Debug, Clone)]
pub struct BellCircuit {
    anchors: BellConfig,
    pub stepper: BellStepper,
}

impl BellCircuit {
    #[must_use]
    pub fn new(cfg: &BellConfig) -> Self {
        Self { anchors: cfg.clone(), stepper: BellStepper::new() }
    }

    /// DOM writes for the frame at `now_ms`.
    #[must_use]
    pub fn effects(&self, now_ms: f64) -> Vec<Effect> {
        let frame = self.stepper.frame_at(now_ms);
        let a = &self.anchors;
        let translate = |t: &Token| format!("translate({:.1},{:.1})", t.x, t.y);
        let opacity = |on: bool| if on { GATE_ON } else { GATE_OFF };
        vec![
            Effect::set_text(&a.label, frame.label),
            Effect::set_attr(&a.gate_h, "opacity", opacity(frame.gate == Some(Gate::H))),
            Effect::set_attr(&a.gate_cnot, "opacity", opacity(frame.gate == Some(Gate::Cnot))),
            Effect::set_attr(&a.token_top, "transform", translate(&frame.top)),
            Effect::set_attr(&a.token_bottom, "transform", translate(&frame.bottom)),
            Effect::set_text(&a.symbol_top, frame.top.symbol),
            Effect::set_text(&a.symbol_bottom, frame.bottom.symbol),
            Effect::set_attr(&a.pulse, "opacity", format!("{:.3}", frame.pulse.opacity)),
            Effect::set_attr(&a.pulse, "r", format!("{:.1}", frame.pulse.radius)),
            Effect::set_attr(&a.pulse, "cx", format!("{CNOT_X:.1}")),
            Effect::set_attr(&a.pulse, "cy", format!("{:.1}", (WIRE_TOP + WIRE_BOTTOM) / 2.0)),
        ]
    }
}
