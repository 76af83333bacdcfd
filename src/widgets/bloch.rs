//! Bloch sphere with a state-vector arrow.
//!
//! The sphere is a perspective projection of a unit sphere onto a 2D canvas:
//! a filled silhouette, a latitude/longitude wireframe and the arrow. The
//! wireframe spins slowly about the polar (y) axis as a function of the frame
//! clock; the arrow is drawn in world space and never spins, so the state it
//! shows is only ever changed by [`BlochSphere::set_state`].

#[cfg(test)]
#[path = "bloch_test.rs"]
mod bloch_test;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::{DQuat, DVec3};

use crate::camera::{OrbitCamera, Point, Viewport};
use crate::consts::BLOCH_SPIN_RAD_PER_MS;
use crate::scene::{Scene, Stroke};
use crate::widgets::Draw;

const BODY: &str = "rgba(10,15,20,0.85)";
const WIRE: &str = "rgba(41,178,178,0.25)";
const ARROW: &str = "#ffffff";

/// Latitude bands and longitude segments of the wireframe.
const LAT_BANDS: usize = 12;
const LON_SEGMENTS: usize = 16;
/// Samples per wireframe curve.
const CURVE_SAMPLES: usize = 48;

const SHAFT_LEN: f64 = 1.0;
const HEAD_LEN: f64 = 0.16;
const HEAD_RADIUS: f64 = 0.06;

/// Named preset states reachable through `setState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlochState {
    Zero,
    One,
    Super,
}

impl BlochState {
    /// Parse a request name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            "super" => Some(Self::Super),
            _ => None,
        }
    }

    #[must_use]
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Zero => Orientation::new(0.0, 0.0),
            Self::One => Orientation::new(PI, 0.0),
            Self::Super => Orientation::new(FRAC_PI_2, 0.0),
        }
    }
}

/// Polar and azimuthal angles of the state vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub theta: f64,
    pub phi: f64,
}

impl Orientation {
    #[must_use]
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Unit direction with y as the polar axis.
    #[must_use]
    pub fn direction(self) -> DVec3 {
        let (st, ct) = self.theta.sin_cos();
        let (sp, cp) = self.phi.sin_cos();
        DVec3::new(st * cp, ct, st * sp)
    }

    /// Shortest-arc rotation taking the arrow's rest pose (pointing up) onto
    /// the direction. The antipodal `one` state turns about an arbitrary
    /// perpendicular axis.
    #[must_use]
    pub fn arrow_rotation(self) -> DQuat {
        DQuat::from_rotation_arc(DVec3::Y, self.direction())
    }
}

#[derive(Debug, Clone)]
pub struct BlochSphere {
    orientation: Orientation,
}

impl Default for BlochSphere {
    fn default() -> Self {
        Self::new()
    }
}

impl BlochSphere {
    #[must_use]
    pub fn new() -> Self {
        Self { orientation: BlochState::Zero.orientation() }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Apply a named state. Returns `false` and leaves the arrow alone for
    /// unknown names.
    pub fn set_state(&mut self, name: &str) -> bool {
        match BlochState::parse(name) {
            Some(state) => {
                self.orientation = state.orientation();
                true
            }
            None => {
                log::debug!("bloch: ignoring unknown state {name:?}");
                false
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn wireframe(scene: &mut Scene, camera: &OrbitCamera, spin: f64) {
        let stroke = Stroke::new(WIRE, 1.0);
        let spin = DQuat::from_rotation_y(spin);
        let project = |v: DVec3| camera.project(spin * v);

        for band in 1..LAT_BANDS {
            let polar = PI * band as f64 / LAT_BANDS as f64;
            let (r, y) = (polar.sin(), polar.cos());
            let ring: Vec<Point> = (0..=CURVE_SAMPLES)
                .filter_map(|i| {
                    let a = TAU * i as f64 / CURVE_SAMPLES as f64;
                    project(DVec3::new(r * a.cos(), y, r * a.sin()))
                })
                .collect();
            scene.polyline(ring, stroke.clone());
        }

        for seg in 0..LON_SEGMENTS {
            let azimuth = TAU * seg as f64 / LON_SEGMENTS as f64;
            let meridian: Vec<Point> = (0..=CURVE_SAMPLES)
                .filter_map(|i| {
                    let polar = PI * i as f64 / CURVE_SAMPLES as f64;
                    project(Orientation::new(polar, azimuth).direction())
                })
                .collect();
            scene.polyline(meridian, stroke.clone());
        }
    }

    fn arrow(&self, scene: &mut Scene, camera: &OrbitCamera) {
        let rot = self.orientation.arrow_rotation();
        let world = |v: DVec3| camera.project(rot * v);

        if let (Some(base), Some(tip)) = (world(DVec3::ZERO), world(DVec3::new(0.0, SHAFT_LEN, 0.0))) {
            scene.line(base, tip, Stroke::new(ARROW, 2.0));
        }

        let head: Vec<Point> = [
            DVec3::new(-HEAD_RADIUS, SHAFT_LEN, 0.0),
            DVec3::new(0.0, SHAFT_LEN, -HEAD_RADIUS),
            DVec3::new(HEAD_RADIUS, SHAFT_LEN, 0.0),
            DVec3::new(0.0, SHAFT_LEN + HEAD_LEN, 0.0),
            DVec3::new(0.0, SHAFT_LEN, HEAD_RADIUS),
        ]
        .into_iter()
        .filter_map(world)
        .collect();
        scene.polygon(head, ARROW);
    }
}

impl Draw for BlochSphere {
    fn draw(&self, viewport: Viewport, now_ms: f64) -> Scene {
        let camera = OrbitCamera::for_viewport(viewport);
        let spin = (now_ms * BLOCH_SPIN_RAD_PER_MS) % TAU;

        let mut scene = Scene::new();
        scene.clear();
        scene.circle(camera.center(), camera.silhouette_radius(1.0), Some(BODY), None);
        Self::wireframe(&mut scene, &camera, spin);
        self.arrow(&mut scene, &camera);
        scene
    }
}
