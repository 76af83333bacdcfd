#![allow(clippy::float_cmp)]

use super::*;
use crate::scene::DrawCmd;

fn viewport() -> Viewport {
    Viewport::new(720.0, 260.0)
}

#[test]
fn starts_classical() {
    assert_eq!(Pipeline::new().mode(), PipelineMode::Classical);
}

#[test]
fn toggle_flips_back_and_forth() {
    let mut p = Pipeline::new();
    p.toggle();
    assert_eq!(p.mode(), PipelineMode::Quantum);
    p.toggle();
    assert_eq!(p.mode(), PipelineMode::Classical);
}

#[test]
fn classical_has_stage_labels_only() {
    let scene = Pipeline::new().draw(viewport(), 0.0);
    assert_eq!(scene.texts(), vec!["Inputs", "Algorithm", "Outputs"]);
}

#[test]
fn quantum_adds_glow_and_captions() {
    let mut p = Pipeline::new();
    p.toggle();
    let scene = p.draw(viewport(), 0.0);
    assert!(scene.has_text("Superposition"));
    assert!(scene.has_text("Interference"));
    assert!(scene.commands().iter().any(|c| matches!(c, DrawCmd::Circle { radius, .. } if *radius == 45.0)));
}

#[test]
fn quantum_highlights_algorithm_box_only() {
    let mut p = Pipeline::new();
    p.toggle();
    let scene = p.draw(viewport(), 0.0);
    let accent_boxes = scene
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCmd::StrokeRect { stroke, .. } if stroke.color == ACCENT))
        .count();
    assert_eq!(accent_boxes, 1);
}

#[test]
fn connectors_join_adjacent_stages() {
    let scene = Pipeline::new().draw(viewport(), 0.0);
    let lines: Vec<_> = scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Polyline { points, .. } => Some((points[0].x, points[1].x)),
            _ => None,
        })
        .collect();
    assert_eq!(lines, vec![(200.0, 280.0), (440.0, 520.0)]);
}

#[test]
fn draw_starts_with_clear() {
    let scene = Pipeline::new().draw(viewport(), 0.0);
    assert_eq!(scene.commands()[0], DrawCmd::Clear);
}
