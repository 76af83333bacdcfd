//! Plot of `f(x) = a^x mod N` with period markers.

#[cfg(test)]
#[path = "periodic_test.rs"]
mod periodic_test;

use std::collections::{HashMap, HashSet};

use crate::arith::mod_pow;
use crate::camera::{Point, Viewport};
use crate::config::PeriodicConfig;
use crate::consts::{ACCENT, ACCENT_FAINT, GRID, PERIOD_X_MAX};
use crate::scene::{Align, Scene, Stroke};
use crate::widgets::{Draw, parse_leading_int};

const LEFT: f64 = 40.0;
const WIDTH: f64 = 740.0;
const BOTTOM: f64 = 220.0;
const HEIGHT: f64 = 180.0;
/// Vertical offset of a witness connector's endpoints.
const TICK: f64 = 5.0;

/// First and second occurrence of a residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Witness {
    pub first: u64,
    pub second: u64,
    pub value: u64,
}

impl Witness {
    #[must_use]
    pub fn distance(&self) -> u64 {
        self.second - self.first
    }
}

#[derive(Debug, Clone)]
pub struct PeriodicPlot {
    a: u64,
    n: u64,
}

impl PeriodicPlot {
    #[must_use]
    pub fn new(cfg: &PeriodicConfig) -> Self {
        Self { a: cfg.a, n: cfg.n }
    }

    #[must_use]
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Apply slider text. Text that does not parse to a non-negative integer
    /// keeps the previous base. Returns whether `a` changed.
    pub fn set_a(&mut self, raw: &str) -> bool {
        match parse_leading_int(raw).map(u64::try_from) {
            Some(Ok(a)) => {
                let changed = a != self.a;
                self.a = a;
                changed
            }
            _ => {
                log::debug!("periodic: keeping a={} for input {raw:?}", self.a);
                false
            }
        }
    }

    /// `(x, a^x mod N)` for x in `0..=20`.
    #[must_use]
    pub fn values(&self) -> Vec<(u64, u64)> {
        (0..=PERIOD_X_MAX).map(|x| (x, mod_pow(self.a, x, self.n))).collect()
    }

    /// The first repeat of each residue, in ascending `x` order.
    #[must_use]
    pub fn witnesses(&self) -> Vec<Witness> {
        let mut first_seen: HashMap<u64, u64> = HashMap::new();
        let mut marked: HashSet<u64> = HashSet::new();
        let mut out = Vec::new();
        for (x, y) in self.values() {
            match first_seen.get(&y).copied() {
                Some(first) => {
                    if marked.insert(y) {
                        out.push(Witness { first, second: x, value: y });
                    }
                }
                None => {
                    first_seen.insert(y, x);
                }
            }
        }
        out
    }

    /// Smallest witness distance, if any residue repeats inside the window.
    #[must_use]
    pub fn detected_period(&self) -> Option<u64> {
        self.witnesses().iter().map(Witness::distance).min()
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_canvas(&self, x: u64, y: u64) -> Point {
        Point::new(
            LEFT + (x as f64 / PERIOD_X_MAX as f64) * WIDTH,
            BOTTOM - (y as f64 / self.n as f64) * HEIGHT,
        )
    }

    #[must_use]
    pub fn caption(&self) -> String {
        let base = format!("f(x)=a^x mod N   (a={}, N={})", self.a, self.n);
        match self.detected_period() {
            Some(r) => format!("{base}   r={r}"),
            None => base,
        }
    }
}

impl Draw for PeriodicPlot {
    fn draw(&self, viewport: Viewport, _now_ms: f64) -> Scene {
        let mut scene = Scene::new();
        scene.clear();
        scene.stroke_rect(0.0, 0.0, viewport.width, viewport.height, Stroke::new(GRID, 1.0));
        scene.text(Point::new(20.0, 20.0), self.caption(), "14px sans-serif", ACCENT, Align::Left);

        let curve = self.values().into_iter().map(|(x, y)| self.to_canvas(x, y)).collect();
        scene.polyline(curve, Stroke::new(ACCENT, 2.0));

        for w in self.witnesses() {
            let from = self.to_canvas(w.first, w.value);
            let to = self.to_canvas(w.second, w.value);
            scene.line(
                Point::new(from.x, from.y - TICK),
                Point::new(to.x, to.y + TICK),
                Stroke::new(ACCENT_FAINT, 1.0),
            );
        }
        scene
    }
}
