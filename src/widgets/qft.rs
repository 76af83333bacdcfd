//! QFT peak comb.
//!
//! For a period `r` over a domain of size `N` the transform concentrates
//! amplitude near multiples of `N / r`. Each peak is drawn as a Gaussian bump
//! of one-pixel columns.

#[cfg(test)]
#[path = "qft_test.rs"]
mod qft_test;

use crate::camera::Viewport;
use crate::config::QftConfig;
use crate::consts::{ACCENT_SOFT, FRAME, QFT_R_MAX, QFT_R_MIN};
use crate::effect::Effect;
use crate::scene::{Scene, Stroke};
use crate::widgets::{Draw, parse_leading_int};

const LEFT: f64 = 40.0;
const WIDTH: f64 = 740.0;
const BASE_Y: f64 = 220.0;
const EDGE_PEAK: f64 = 40.0;
const INNER_PEAK: f64 = 160.0;
/// Half-width of a peak in columns.
const SPREAD: i32 = 40;
const SIGMA: f64 = 22.0;

/// r used when slider text does not parse.
pub const DEFAULT_R: u32 = 5;

/// Clamp a slider reading to the supported harmonic range.
#[must_use]
pub fn clamp_r(raw: &str) -> u32 {
    match parse_leading_int(raw) {
        // Bounded by the clamp, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(v) => v.clamp(i64::from(QFT_R_MIN), i64::from(QFT_R_MAX)) as u32,
        None => DEFAULT_R,
    }
}

/// One peak of the comb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Frequency bin.
    pub k: u32,
    /// Canvas x of the peak centre.
    pub x: f64,
    pub height: f64,
}

#[derive(Debug, Clone)]
pub struct QftComb {
    label: String,
    r: u32,
    n: u32,
}

impl QftComb {
    #[must_use]
    pub fn new(cfg: &QftConfig) -> Self {
        Self { label: cfg.label.clone(), r: cfg.r.clamp(QFT_R_MIN, QFT_R_MAX), n: cfg.n }
    }

    #[must_use]
    pub fn r(&self) -> u32 {
        self.r
    }

    /// Handle the `updateR` control: clamp, store, and refresh the label.
    pub fn update_r(&mut self, raw: &str) -> Vec<Effect> {
        self.r = clamp_r(raw);
        vec![Effect::set_text(&self.label, self.r.to_string())]
    }

    /// Peaks at `k = round(m·N/r)` for `m` in `0..=r`.
    #[must_use]
    pub fn peaks(&self) -> Vec<Peak> {
        let n = f64::from(self.n);
        let r = f64::from(self.r);
        (0..=self.r)
            .map(|m| {
                // Non-negative and at most N.
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let k = (f64::from(m) * n / r).round() as u32;
                let height = if m == 0 || m == self.r { EDGE_PEAK } else { INNER_PEAK };
                Peak { k, x: LEFT + (f64::from(k) / n) * WIDTH, height }
            })
            .collect()
    }
}

impl Draw for QftComb {
    fn draw(&self, viewport: Viewport, _now_ms: f64) -> Scene {
        let mut scene = Scene::new();
        scene.clear();
        scene.stroke_rect(0.0, 0.0, viewport.width, viewport.height, Stroke::new(FRAME, 1.0));

        for peak in self.peaks() {
            for dx in -SPREAD..=SPREAD {
                let t = f64::from(dx) / SIGMA;
                let y = BASE_Y - peak.height * (-t * t).exp();
                scene.fill_rect(peak.x + f64::from(dx), y, 1.0, BASE_Y - y, ACCENT_SOFT);
            }
        }
        scene
    }
}
