//! Classical → quantum pipeline diagram.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use crate::camera::{Point, Viewport};
use crate::consts::{ACCENT, FRAME, INK};
use crate::scene::{Align, Scene, Stroke};
use crate::widgets::Draw;

/// Which pipeline the diagram shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineMode {
    #[default]
    Classical,
    Quantum,
}

impl PipelineMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Classical => Self::Quantum,
            Self::Quantum => Self::Classical,
        }
    }
}

struct Stage {
    label: &'static str,
    x: f64,
    w: f64,
}

const STAGES: [Stage; 3] = [
    Stage { label: "Inputs", x: 80.0, w: 120.0 },
    Stage { label: "Algorithm", x: 280.0, w: 160.0 },
    Stage { label: "Outputs", x: 520.0, w: 120.0 },
];

const STAGE_Y: f64 = 100.0;
const STAGE_H: f64 = 80.0;
const GLOW: &str = "rgba(41,178,178,0.2)";
const ARROW: &str = "rgba(255,255,255,0.7)";

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    mode: PipelineMode,
}

impl Pipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> PipelineMode {
        self.mode
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }
}

impl Draw for Pipeline {
    fn draw(&self, viewport: Viewport, _now_ms: f64) -> Scene {
        let mut scene = Scene::new();
        scene.clear();
        scene.stroke_rect(0.0, 0.0, viewport.width, viewport.height, Stroke::new(FRAME, 1.0));

        let quantum = self.mode == PipelineMode::Quantum;
        let mid_y = STAGE_Y + STAGE_H / 2.0;

        for (i, stage) in STAGES.iter().enumerate() {
            let color = if i == 1 && quantum { ACCENT } else { INK };
            scene.stroke_rect(stage.x, STAGE_Y, stage.w, STAGE_H, Stroke::new(color, 2.0));
            scene.text(
                Point::new(stage.x + stage.w / 2.0, STAGE_Y + 45.0),
                stage.label,
                "16px sans-serif",
                color,
                Align::Center,
            );
        }

        // Connectors between consecutive stages.
        for pair in STAGES.windows(2) {
            let from = Point::new(pair[0].x + pair[0].w, mid_y);
            let to = Point::new(pair[1].x, mid_y);
            scene.line(from, to, Stroke::new(ARROW, 2.0));
        }

        if quantum {
            let center = Point::new(STAGES[1].x + STAGES[1].w / 2.0, mid_y);
            scene.circle(center, 45.0, Some(GLOW), None);
            scene.text(Point::new(center.x, 220.0), "Superposition", "14px sans-serif", ACCENT, Align::Center);
            scene.text(Point::new(center.x, 240.0), "Interference", "14px sans-serif", ACCENT, Align::Center);
        }

        scene
    }
}
