use super::{InputState, MarkerId};
use crate::core::ConnectorPoints;
use glam::DVec2;

fn demo_points() -> ConnectorPoints {
    ConnectorPoints::new(
        DVec2::new(350.0, 100.0),
        DVec2::new(400.0, 300.0),
        DVec2::new(550.0, 100.0),
    )
}

#[test]
fn test_drag_start_picks_marker_within_radius() {
    let points = demo_points();
    let mut input = InputState::new();

    assert!(input.on_drag_start(DVec2::new(355.0, 103.0), &points, 20.0));
    assert_eq!(input.dragging, Some(MarkerId::Start));
}

#[test]
fn test_drag_start_picks_nearest_of_overlapping_markers() {
    // Pointer zwischen Eck- und End-Marker, näher am Eck-Marker
    let points = ConnectorPoints::new(
        DVec2::new(0.0, 0.0),
        DVec2::new(100.0, 0.0),
        DVec2::new(130.0, 0.0),
    );
    let mut input = InputState::new();

    assert!(input.on_drag_start(DVec2::new(110.0, 0.0), &points, 50.0));
    assert_eq!(input.dragging, Some(MarkerId::Corner));
}

#[test]
fn test_drag_start_outside_radius_stays_idle() {
    let points = demo_points();
    let mut input = InputState::new();

    assert!(!input.on_drag_start(DVec2::new(0.0, 0.0), &points, 20.0));
    assert_eq!(input.dragging, None);
}

#[test]
fn test_drag_update_moves_only_grabbed_marker_by_delta() {
    let mut points = demo_points();
    let before = points;
    let mut input = InputState::new();

    assert!(input.on_drag_start(DVec2::new(400.0, 300.0), &points, 20.0));
    assert_eq!(input.dragging, Some(MarkerId::Corner));

    let moved = input.on_drag_update(DVec2::new(410.0, 295.0), &mut points);
    assert!(moved);
    assert_eq!(points.corner, DVec2::new(410.0, 295.0));
    assert_eq!(points.start, before.start);
    assert_eq!(points.end, before.end);
}

#[test]
fn test_drag_update_without_pointer_movement_reports_unmoved() {
    let mut points = demo_points();
    let mut input = InputState::new();

    input.on_drag_start(DVec2::new(400.0, 300.0), &points, 20.0);
    assert!(input.on_drag_update(DVec2::new(405.0, 300.0), &mut points));
    assert!(!input.on_drag_update(DVec2::new(405.0, 300.0), &mut points));
}

#[test]
fn test_drag_end_returns_to_idle() {
    let mut points = demo_points();
    let mut input = InputState::new();

    input.on_drag_start(DVec2::new(350.0, 100.0), &points, 20.0);
    input.on_drag_end();
    assert_eq!(input.dragging, None);

    // Idle: Updates verändern nichts mehr
    let before = points;
    assert!(!input.on_drag_update(DVec2::new(0.0, 0.0), &mut points));
    assert_eq!(points, before);
}

#[test]
fn test_update_while_idle_is_noop() {
    let mut points = demo_points();
    let mut input = InputState::new();

    assert!(!input.on_drag_update(DVec2::new(123.0, 456.0), &mut points));
    assert_eq!(points, demo_points());
}
