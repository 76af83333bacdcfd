//! Two-wave interference with a phase slider.

#[cfg(test)]
#[path = "interference_test.rs"]
mod interference_test;

use std::f64::consts::{PI, TAU};

use crate::camera::{Point, Viewport};
use crate::config::InterferenceConfig;
use crate::consts::{ACCENT, GRID};
use crate::effect::Effect;
use crate::scene::{Align, Scene, Stroke};
use crate::widgets::{Draw, parse_number};

const WAVELENGTH: f64 = 120.0;
const AMPLITUDE: f64 = 35.0;
const MARGIN: f64 = 20.0;
/// Room kept free on the right for the intensity bar.
const BAR_GUTTER: f64 = 120.0;
const ROWS: [f64; 3] = [60.0, 120.0, 180.0];
const BAR_BASE_Y: f64 = 190.0;
const BAR_MAX_H: f64 = 120.0;
const BAR_W: f64 = 40.0;

const WAVE_A: &str = "rgba(255,255,255,0.9)";
const WAVE_B: &str = "rgba(41,178,178,0.9)";
const BAR_BG: &str = "rgba(255,255,255,0.08)";
const BAR_FG: &str = "rgba(41,178,178,0.85)";
const CAPTION: &str = "rgba(255,255,255,0.7)";

#[derive(Debug, Clone)]
pub struct Interference {
    label: String,
    phi: f64,
}

impl Interference {
    #[must_use]
    pub fn new(cfg: &InterferenceConfig) -> Self {
        Self { label: cfg.label.clone(), phi: cfg.phase_pi * PI }
    }

    #[must_use]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Apply slider value `v` (in units of π). Garbage keeps the phase.
    pub fn set_phase(&mut self, raw: &str) -> Vec<Effect> {
        match parse_number(raw) {
            Some(v) => {
                self.phi = v * PI;
                vec![Effect::set_text(&self.label, self.label_text())]
            }
            None => Vec::new(),
        }
    }

    /// `φ/π` to two decimals, then `π`.
    #[must_use]
    pub fn label_text(&self) -> String {
        format!("{:.2}π", self.phi / PI)
    }

    /// Time-averaged intensity of the sum, `1 + cos φ`, in `[0, 2]`.
    #[must_use]
    pub fn intensity(&self) -> f64 {
        1.0 + self.phi.cos()
    }

    fn wave(x0: f64, x1: f64, y0: f64, f: impl Fn(f64) -> f64) -> Vec<Point> {
        let mut points = Vec::new();
        let mut x = x0;
        while x <= x1 {
            points.push(Point::new(x, y0 - AMPLITUDE * f(x)));
            x += 1.0;
        }
        points
    }
}

impl Draw for Interference {
    fn draw(&self, viewport: Viewport, _now_ms: f64) -> Scene {
        let k = TAU / WAVELENGTH;
        let phi = self.phi;
        let right = viewport.width - BAR_GUTTER;
        let mut scene = Scene::new();
        scene.clear();

        for y in ROWS {
            scene.line(Point::new(MARGIN, y), Point::new(right, y), Stroke::new(GRID, 1.0));
        }

        let full = viewport.width - MARGIN;
        scene.polyline(Self::wave(MARGIN, full, ROWS[0], |x| (k * x).sin()), Stroke::new(WAVE_A, 2.0));
        scene.polyline(Self::wave(MARGIN, full, ROWS[1], |x| (k * x + phi).sin()), Stroke::new(WAVE_B, 2.0));
        scene.polyline(
            Self::wave(MARGIN, right, ROWS[2], |x| (k * x).sin() + (k * x + phi).sin()),
            Stroke::new(ACCENT, 3.0),
        );

        let cx = viewport.width - 80.0;
        let h = self.intensity() / 2.0 * BAR_MAX_H;
        scene.fill_rect(cx - BAR_W / 2.0, BAR_BASE_Y - BAR_MAX_H, BAR_W, BAR_MAX_H, BAR_BG);
        scene.fill_rect(cx - BAR_W / 2.0, BAR_BASE_Y - h, BAR_W, h, BAR_FG);
        scene.text(Point::new(cx - 26.0, BAR_BASE_Y + 18.0), "Intensity", "13px sans-serif", CAPTION, Align::Left);
        scene
    }
}
