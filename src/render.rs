//! Rendering: replays a [`Scene`] onto a 2D canvas context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It reads a display list and produces
//! pixels; it never sees widget state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The frame or event handler that asked for the paint logs the failure.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Point, Viewport};
use crate::scene::{DrawCmd, Scene, Stroke};

/// Paint `scene` at the viewport's device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn paint(ctx: &CanvasRenderingContext2d, scene: &Scene, viewport: Viewport) -> Result<(), JsValue> {
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    for cmd in scene.commands() {
        draw_cmd(ctx, cmd, viewport)?;
    }
    Ok(())
}

fn draw_cmd(ctx: &CanvasRenderingContext2d, cmd: &DrawCmd, viewport: Viewport) -> Result<(), JsValue> {
    match cmd {
        DrawCmd::Clear => ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height),
        DrawCmd::StrokeRect { x, y, w, h, stroke } => {
            apply_stroke(ctx, stroke);
            ctx.stroke_rect(*x, *y, *w, *h);
        }
        DrawCmd::FillRect { x, y, w, h, fill } => {
            ctx.set_fill_style_str(fill);
            ctx.fill_rect(*x, *y, *w, *h);
        }
        DrawCmd::Polyline { points, stroke } => {
            trace(ctx, points);
            apply_stroke(ctx, stroke);
            ctx.stroke();
        }
        DrawCmd::Polygon { points, fill } => {
            trace(ctx, points);
            ctx.close_path();
            ctx.set_fill_style_str(fill);
            ctx.fill();
        }
        DrawCmd::Circle { center, radius, fill, stroke } => {
            ctx.begin_path();
            ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU)?;
            if let Some(fill) = fill {
                ctx.set_fill_style_str(fill);
                ctx.fill();
            }
            if let Some(stroke) = stroke {
                apply_stroke(ctx, stroke);
                ctx.stroke();
            }
        }
        DrawCmd::Text { at, text, font, color, align } => {
            ctx.set_font(font);
            ctx.set_fill_style_str(color);
            ctx.set_text_align(align.as_css());
            ctx.fill_text(text, at.x, at.y)?;
        }
    }
    Ok(())
}

fn apply_stroke(ctx: &CanvasRenderingContext2d, stroke: &Stroke) {
    ctx.set_stroke_style_str(&stroke.color);
    ctx.set_line_width(stroke.width);
}

fn trace(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.begin_path();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        ctx.move_to(first.x, first.y);
    }
    for p in iter {
        ctx.line_to(p.x, p.y);
    }
}

/// A canvas element with its 2D context and current size.
pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl Surface {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the context is unavailable.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let viewport = Viewport::new(f64::from(canvas.width()), f64::from(canvas.height()));
        Ok(Self { canvas, ctx, viewport })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Size the backing store to `width` x `height` CSS pixels at `dpr`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) {
        let dpr = if dpr > 0.0 { dpr } else { 1.0 };
        self.canvas.set_width((width * dpr).round().max(1.0) as u32);
        self.canvas.set_height((height * dpr).round().max(1.0) as u32);
        self.viewport = Viewport { width, height, dpr };
    }

    /// Paint a scene at the current size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn paint(&self, scene: &Scene) -> Result<(), JsValue> {
        paint(&self.ctx, scene, self.viewport)
    }
}
