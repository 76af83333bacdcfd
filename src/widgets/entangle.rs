//! Entanglement correlation demo.
//!
//! Two qubits are measured in the Z basis. Entangled pairs share one coin
//! flip; separable pairs flip independently. A running correlation
//! `Σ(a·b) / count` is kept alongside a short log of recent runs.
//!
//! Toggling between entangled and separable only forgets the displayed pair.
//! The statistic survives the toggle and is cleared by [`Session::clear`].

#[cfg(test)]
#[path = "entangle_test.rs"]
mod entangle_test;

use std::collections::VecDeque;

use crate::camera::{Point, Viewport};
use crate::consts::{ACCENT, INK, OUTCOME_LOG_CAP};
use crate::rng::RandomSource;
use crate::scene::{Align, Scene, Stroke};
use crate::widgets::Draw;

const QUBIT_FILL: &str = "rgba(255,255,255,0.06)";
const QUBIT_RIM: &str = "rgba(255,255,255,0.25)";
const LINK: &str = "rgba(41,178,178,0.6)";

const MAX_RADIUS: f64 = 60.0;
const MIN_RADIUS: f64 = 16.0;
/// Gap between a qubit's rim and the link line.
const LINK_GAP: f64 = 40.0;
const PULSES: u32 = 3;
const PULSE_PERIOD_MS: f64 = 1_600.0;
const PULSE_RADIUS: f64 = 4.0;
const LOG_LINE: f64 = 16.0;

/// One measured pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub a: i8,
    pub b: i8,
    /// Whether the pair was entangled when measured.
    pub correlated: bool,
}

impl Outcome {
    /// Log line, e.g. `A: +1   B: -1   (corr)`.
    #[must_use]
    pub fn line(&self) -> String {
        let sign = |v: i8| if v > 0 { "+1" } else { "-1" };
        let tag = if self.correlated { "   (corr)" } else { "" };
        format!("A: {}   B: {}{tag}", sign(self.a), sign(self.b))
    }
}

/// Measurement state of the demo.
#[derive(Debug, Clone, Default)]
pub struct Session {
    entangled: bool,
    outcomes: VecDeque<Outcome>,
    sum: i64,
    count: u64,
    last: Option<(i8, i8)>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_entangled(&self) -> bool {
        self.entangled
    }

    /// Switch mode. Soft reset: only the displayed pair is forgotten.
    pub fn set_entangled(&mut self, entangled: bool) {
        self.entangled = entangled;
        self.last = None;
    }

    /// Hard reset of the log, the statistic and the displayed pair.
    pub fn clear(&mut self) {
        self.outcomes.clear();
        self.sum = 0;
        self.count = 0;
        self.last = None;
    }

    /// Measure both qubits in Z.
    pub fn measure(&mut self, rng: &mut impl RandomSource) -> Outcome {
        let a = rng.sign();
        let b = if self.entangled { a } else { rng.sign() };
        let outcome = Outcome { a, b, correlated: self.entangled };

        self.sum += i64::from(a * b);
        self.count += 1;
        self.last = Some((a, b));
        if self.outcomes.len() == OUTCOME_LOG_CAP {
            self.outcomes.pop_front();
        }
        self.outcomes.push_back(outcome);
        outcome
    }

    /// Most recent runs, oldest first.
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<(i8, i8)> {
        self.last
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running `⟨AB⟩`, or `None` before the first measurement.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn correlation(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / self.count as f64)
    }
}

/// Positions derived from the current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub qubit_a: Point,
    pub qubit_b: Point,
    pub radius: f64,
    /// Link line endpoints; `None` when the qubits are too close for one.
    pub link: Option<(Point, Point)>,
    /// Top-left of the outcome panel.
    pub panel: Point,
}

impl Layout {
    #[must_use]
    pub fn compute(viewport: Viewport) -> Self {
        let Viewport { width, height, .. } = viewport;
        let radius = (width.min(height * 2.0) * 0.085).clamp(MIN_RADIUS, MAX_RADIUS);
        let cy = (radius + 30.0).min(height * 0.5);
        let qubit_a = Point::new(width * 0.23, cy);
        let qubit_b = Point::new(width * 0.77, cy);

        let from = qubit_a.x + radius + LINK_GAP;
        let to = qubit_b.x - radius - LINK_GAP;
        let link = (from < to).then(|| (Point::new(from, cy), Point::new(to, cy)));

        Self { qubit_a, qubit_b, radius, link, panel: Point::new(40.0, cy + radius + 50.0) }
    }
}

/// The demo as drawn on its canvas.
#[derive(Debug, Clone, Default)]
pub struct EntangleDemo {
    pub session: Session,
}

impl EntangleDemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn qubit(scene: &mut Scene, at: Point, radius: f64, state: Option<i8>) {
        scene.circle(at, radius, Some(QUBIT_FILL), Some(Stroke::new(QUBIT_RIM, 2.0)));
        let label = match state {
            None => "?",
            Some(v) if v > 0 => "+1",
            Some(_) => "−1",
        };
        scene.text(Point::new(at.x, at.y + 6.0), label, "16px sans-serif", INK, Align::Center);
    }

    /// Pulse centres along the link at `now_ms`.
    #[must_use]
    pub fn pulses(layout: &Layout, now_ms: f64) -> Vec<Point> {
        let Some((from, to)) = layout.link else {
            return Vec::new();
        };
        let phase = (now_ms / PULSE_PERIOD_MS).rem_euclid(1.0);
        (0..PULSES)
            .map(|i| {
                let t = (phase + f64::from(i) / f64::from(PULSES)).fract();
                Point::new(from.x + (to.x - from.x) * t, from.y)
            })
            .collect()
    }
}

impl Draw for EntangleDemo {
    fn draw(&self, viewport: Viewport, now_ms: f64) -> Scene {
        let layout = Layout::compute(viewport);
        let session = &self.session;
        let mut scene = Scene::new();
        scene.clear();

        let (a, b) = session.last().map_or((None, None), |(a, b)| (Some(a), Some(b)));
        Self::qubit(&mut scene, layout.qubit_a, layout.radius, a);
        Self::qubit(&mut scene, layout.qubit_b, layout.radius, b);

        if session.is_entangled() {
            if let Some((from, to)) = layout.link {
                scene.line(from, to, Stroke::new(LINK, 3.0));
                let mid = Point::new((from.x + to.x) / 2.0, from.y + 22.0);
                scene.text(mid, "Entangled", "14px sans-serif", ACCENT, Align::Center);
            }
            for p in Self::pulses(&layout, now_ms) {
                scene.circle(p, PULSE_RADIUS, Some(ACCENT), None);
            }
        }

        let font = "13px monospace";
        let mut y = layout.panel.y;
        scene.text(layout.panel, "Runs (Z-basis):", font, INK, Align::Left);
        for outcome in session.outcomes() {
            y += LOG_LINE;
            scene.text(Point::new(layout.panel.x, y + 2.0), outcome.line(), font, INK, Align::Left);
        }
        if let Some(c) = session.correlation() {
            let line = format!("⟨AB⟩ = {c:+.2}  over {} runs", session.count());
            scene.text(Point::new(layout.panel.x, y + LOG_LINE + 8.0), line, font, ACCENT, Align::Left);
        }
        scene
    }
}
