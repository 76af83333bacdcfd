//! Geometry shared by the canvas widgets: screen points, viewports, and the
//! perspective camera the Bloch sphere uses to project `glam` scene space onto
//! a 2D canvas.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use glam::{DMat4, DVec3};

/// A point in canvas space (CSS pixels, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawing surface dimensions.
///
/// `width` / `height` are in CSS pixels. `dpr` is the device pixel ratio the
/// backing store is scaled by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, dpr: 1.0 }
    }

    /// Width over height, or 1.0 for a degenerate surface.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        if self.width > 0.0 && self.height > 0.0 { self.width / self.height } else { 1.0 }
    }
}

const FOV_DEG: f64 = 35.0;
const DISTANCE: f64 = 4.0;
const Z_NEAR: f64 = 0.1;
const Z_FAR: f64 = 100.0;

/// Perspective camera on the +z axis looking at the origin, y up.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    viewport: Viewport,
    view_projection: DMat4,
}

impl OrbitCamera {
    /// Camera framing a unit sphere the way the page's Bloch view does.
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let projection = DMat4::perspective_rh(FOV_DEG.to_radians(), viewport.aspect(), Z_NEAR, Z_FAR);
        let view = DMat4::look_at_rh(DVec3::new(0.0, 0.0, DISTANCE), DVec3::ZERO, DVec3::Y);
        Self { viewport, view_projection: projection * view }
    }

    /// Project a scene point to canvas space. Points at or behind the camera
    /// plane return `None`.
    #[must_use]
    pub fn project(&self, p: DVec3) -> Option<Point> {
        let clip = self.view_projection * p.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Point {
            x: (ndc.x + 1.0) * 0.5 * self.viewport.width,
            y: (1.0 - ndc.y) * 0.5 * self.viewport.height,
        })
    }

    /// Screen-space radius of the silhouette of a sphere of `radius` at the origin.
    #[must_use]
    pub fn silhouette_radius(&self, radius: f64) -> f64 {
        if radius >= DISTANCE {
            return self.viewport.height;
        }
        // Tangent rays from the eye meet the sphere at half-angle asin(r/d).
        let focal = 1.0 / (FOV_DEG.to_radians() * 0.5).tan();
        (radius / DISTANCE).asin().tan() * focal * 0.5 * self.viewport.height
    }

    /// Canvas-space image of the origin.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.viewport.width * 0.5, self.viewport.height * 0.5)
    }
}
