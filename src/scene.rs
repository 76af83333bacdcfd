//! Display lists: the output of every canvas widget.
//!
//! Widgets never talk to a rendering context directly. They describe a frame
//! as an ordered list of [`DrawCmd`]s, which keeps their drawing code a pure
//! function of state and lets tests inspect exactly what would be painted. The
//! browser painter in `render` (feature `hydrate`) replays a [`Scene`] onto a
//! `CanvasRenderingContext2d`.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::camera::Point;

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Canvas `textAlign` keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Stroke colour and width.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self { color: color.into(), width }
    }
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Clear the whole surface.
    Clear,
    StrokeRect { x: f64, y: f64, w: f64, h: f64, stroke: Stroke },
    FillRect { x: f64, y: f64, w: f64, h: f64, fill: String },
    /// Open polyline through `points`.
    Polyline { points: Vec<Point>, stroke: Stroke },
    /// Closed, filled polygon.
    Polygon { points: Vec<Point>, fill: String },
    Circle { center: Point, radius: f64, fill: Option<String>, stroke: Option<Stroke> },
    Text { at: Point, text: String, font: String, color: String, align: Align },
}

/// An ordered display list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    cmds: Vec<DrawCmd>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn clear(&mut self) {
        self.cmds.push(DrawCmd::Clear);
    }

    pub fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, stroke: Stroke) {
        self.cmds.push(DrawCmd::StrokeRect { x, y, w, h, stroke });
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: impl Into<String>) {
        self.cmds.push(DrawCmd::FillRect { x, y, w, h, fill: fill.into() });
    }

    pub fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.cmds.push(DrawCmd::Polyline { points: vec![from, to], stroke });
    }

    /// Add a polyline; fewer than two points draws nothing.
    pub fn polyline(&mut self, points: Vec<Point>, stroke: Stroke) {
        if points.len() >= 2 {
            self.cmds.push(DrawCmd::Polyline { points, stroke });
        }
    }

    /// Add a filled polygon; fewer than three points draws nothing.
    pub fn polygon(&mut self, points: Vec<Point>, fill: impl Into<String>) {
        if points.len() >= 3 {
            self.cmds.push(DrawCmd::Polygon { points, fill: fill.into() });
        }
    }

    pub fn circle(&mut self, center: Point, radius: f64, fill: Option<&str>, stroke: Option<Stroke>) {
        self.cmds.push(DrawCmd::Circle { center, radius, fill: fill.map(str::to_owned), stroke });
    }

    pub fn text(&mut self, at: Point, text: impl Into<String>, font: &str, color: impl Into<String>, align: Align) {
        self.cmds.push(DrawCmd::Text {
            at,
            text: text.into(),
            font: font.to_owned(),
            color: color.into(),
            align,
        });
    }

    /// All text strings in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.cmds
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any text command renders exactly `needle`.
    #[must_use]
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().contains(&needle)
    }
}
