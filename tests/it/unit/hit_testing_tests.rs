//! Unit tests for hit testing through the editor.

use crate::helpers::{TestGraphBuilder, click_at, shift_at};
use nodeboard::hit_testing::{HitTester, SpatialHitTester};
use nodeboard::input::PointerEvent;
use nodeboard::input::PointerUpOutcome;
use nodeboard::{CanvasPoint, GraphStore, NodeId, Settings};

#[test]
fn test_hit_radius_is_exclusive_outside_circle() {
    let graph = TestGraphBuilder::new().with_node("A", (0.0, 0.0)).build_graph();

    assert_eq!(SpatialHitTester.hit_test(&graph, CanvasPoint::new(50.0, 0.0)), Some(NodeId(1)));
    // Inside the bounding box corner, outside the circle
    assert_eq!(SpatialHitTester.hit_test(&graph, CanvasPoint::new(45.0, 45.0)), None);
}

#[test]
fn test_hit_testing_respects_zoom_and_offset() {
    let mut editor = TestGraphBuilder::new()
        .with_node("A", (500.0, 500.0))
        .with_zoom(2.0)
        .with_offset(400.0, 400.0)
        .with_surface((0.0, 0.0), 800.0, 600.0)
        .build();

    // Canvas (500, 500) is at screen (200, 200)
    assert!(editor.pointer_down(&click_at(200.0, 200.0)));
    assert_eq!(editor.gesture().dragged_node_id(), Some(NodeId(1)));
}

#[test]
fn test_injected_hit_tester_is_used() {
    let mut editor = TestGraphBuilder::new()
        .with_node("A", (0.0, 0.0))
        .with_node("B", (1000.0, 1000.0))
        .build()
        .with_hit_tester(|graph: &GraphStore, point: CanvasPoint| {
            // Everything left of x=500 is node A, everything else node B
            let id = if point.x < 500.0 { NodeId(1) } else { NodeId(2) };
            graph.contains_node(id).then_some(id)
        });

    editor.pointer_down(&shift_at(100.0, 300.0));
    editor.pointer_move(&PointerEvent::at(700.0, 300.0));
    let outcome = editor.pointer_up(&PointerEvent::at(700.0, 300.0));

    assert!(matches!(outcome, PointerUpOutcome::EdgeCreated(_)));
    assert!(editor.graph().find_edge_between(NodeId(1), NodeId(2)).is_some());
}

#[test]
fn test_overlapping_nodes_pick_topmost_on_exact_tie() {
    let graph = TestGraphBuilder::new()
        .with_node("under", (100.0, 100.0))
        .with_node("over", (100.0, 100.0))
        .build_graph();

    assert_eq!(SpatialHitTester.hit_test(&graph, CanvasPoint::new(100.0, 120.0)), Some(NodeId(2)));
}

#[test]
fn test_hit_radius_comes_from_settings() {
    let settings = Settings {
        node_radius: 10.0,
        ..Settings::default()
    };
    let graph = TestGraphBuilder::new()
        .with_settings(settings)
        .with_node("small", (0.0, 0.0))
        .build_graph();

    assert_eq!(graph.node_radius(), 10.0);
    assert_eq!(SpatialHitTester.hit_test(&graph, CanvasPoint::new(8.0, 0.0)), Some(NodeId(1)));
    assert_eq!(SpatialHitTester.hit_test(&graph, CanvasPoint::new(20.0, 0.0)), None);
}
