#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn camera(width: f64, height: f64) -> OrbitCamera {
    OrbitCamera::for_viewport(Viewport::new(width, height))
}

// --- Point / Viewport ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn viewport_aspect() {
    assert!(approx_eq(Viewport::new(800.0, 400.0).aspect(), 2.0));
}

#[test]
fn viewport_aspect_degenerate_is_one() {
    assert_eq!(Viewport::new(0.0, 400.0).aspect(), 1.0);
    assert_eq!(Viewport::new(300.0, 0.0).aspect(), 1.0);
}

// --- OrbitCamera ---

#[test]
fn origin_projects_to_center() {
    let cam = camera(400.0, 300.0);
    let p = cam.project(DVec3::ZERO).unwrap();
    assert!(approx_eq(p.x, cam.center().x));
    assert!(approx_eq(p.y, cam.center().y));
}

#[test]
fn up_projects_above_center() {
    let cam = camera(400.0, 300.0);
    let p = cam.project(DVec3::Y).unwrap();
    assert!(p.y < 150.0);
    assert!(approx_eq(p.x, 200.0));
}

#[test]
fn projection_matches_pinhole_model() {
    // 35° vertical field of view, eye 4 units out on +z.
    let cam = camera(400.0, 400.0);
    let focal = 1.0 / 17.5_f64.to_radians().tan();
    let p = cam.project(DVec3::X).unwrap();
    assert!(approx_eq(p.x, (focal / 4.0 + 1.0) * 200.0));
    assert!(approx_eq(p.y, 200.0));
}

#[test]
fn wide_viewport_compresses_horizontally() {
    let square = camera(400.0, 400.0).project(DVec3::X).unwrap();
    let wide = camera(800.0, 400.0).project(DVec3::X).unwrap();
    // Same horizontal pixel offset: the aspect divide cancels the extra width.
    assert!(approx_eq(square.x - 200.0, wide.x - 400.0));
}

#[test]
fn nearer_points_project_further_out() {
    let cam = camera(400.0, 400.0);
    let near = cam.project(DVec3::new(0.0, 1.0, 1.0)).unwrap();
    let far = cam.project(DVec3::new(0.0, 1.0, -1.0)).unwrap();
    assert!(near.y < far.y);
}

#[test]
fn point_behind_camera_is_clipped() {
    let cam = camera(400.0, 300.0);
    assert!(cam.project(DVec3::new(0.0, 0.0, 5.0)).is_none());
}

#[test]
fn silhouette_grows_with_viewport() {
    assert!(camera(400.0, 400.0).silhouette_radius(1.0) > camera(200.0, 200.0).silhouette_radius(1.0));
}

#[test]
fn silhouette_larger_than_equator_point_distance() {
    let cam = camera(400.0, 400.0);
    let edge = cam.project(DVec3::Y).unwrap();
    assert!(cam.silhouette_radius(1.0) >= cam.center().y - edge.y);
}
