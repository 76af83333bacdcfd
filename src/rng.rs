//! Pluggable randomness for measurement and noise.
//!
//! Widgets that roll dice take `&mut impl RandomSource` per operation, so the
//! browser can feed `Math.random` while tests use a seeded `StdRng`/`SmallRng`
//! or a scripted sequence.

#[cfg(test)]
#[path = "rng_test.rs"]
mod rng_test;

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::{SmallRng, StdRng};

/// A source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn unit(&mut self) -> f64;

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// Uniform ±1.
    fn sign(&mut self) -> i8 {
        if self.chance(0.5) { 1 } else { -1 }
    }
}

impl RandomSource for SmallRng {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl RandomSource for StdRng {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed list of draws, then repeats the last one (0.0 if empty).
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    draws: VecDeque<f64>,
    last: f64,
}

impl Scripted {
    #[must_use]
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self { draws: draws.into_iter().collect(), last: 0.0 }
    }
}

impl RandomSource for Scripted {
    fn unit(&mut self) -> f64 {
        if let Some(next) = self.draws.pop_front() {
            self.last = next;
        }
        self.last
    }
}

/// Draws straight from the browser's `Math.random`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

#[cfg(feature = "hydrate")]
impl RandomSource for BrowserRandom {
    fn unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
