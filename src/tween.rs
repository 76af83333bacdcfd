//! Time-based interpolation for the circuit stepper.
//!
//! Playback is a projection: given a start time and "now", a tween returns the
//! value it would have at that instant. Nothing is advanced incrementally, so
//! sampling the same instant twice always gives the same answer.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    InOutCubic,
}

impl Easing {
    /// Map progress in `[0, 1]` onto the curve. Input is clamped.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A scalar moving from `from` to `to` over a window of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    /// Offset from the owning transition's start.
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: f64, to: f64, delay_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self { from, to, delay_ms, duration_ms, easing }
    }

    /// Linear progress at `elapsed_ms` since the transition started, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return if elapsed_ms >= self.delay_ms { 1.0 } else { 0.0 };
        }
        ((elapsed_ms - self.delay_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased value at `elapsed_ms`.
    #[must_use]
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let alpha = self.easing.apply(self.progress(elapsed_ms));
        self.from + (self.to - self.from) * alpha
    }
}
