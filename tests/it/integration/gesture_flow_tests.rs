//! Gesture Flow Integration Tests
//!
//! Full pointer-down -> move -> up sequences through the editor.

use crate::helpers::{
    ChangeLog, TestGraphBuilder, alt_at, assert_counts, assert_graph_consistent, assert_linked, click_at, drag,
    shift_at, three_node_editor,
};
use nodeboard::editor::Change;
use nodeboard::input::{PointerEvent, PointerUpOutcome};
use nodeboard::panel::PanelKind;
use nodeboard::{CanvasPoint, EdgeId, NodeId};

#[test]
fn test_connect_scenario() {
    let mut editor = three_node_editor();

    // Onto node 3: (1,3) already exists
    assert!(editor.pointer_down(&shift_at(100.0, 100.0)));
    editor.pointer_move(&PointerEvent::at(150.0, 200.0));
    let outcome = editor.pointer_up(&PointerEvent::at(200.0, 300.0));
    assert_eq!(outcome, PointerUpOutcome::EdgeRejected);
    assert_counts(editor.graph(), 3, 2);
    assert!(!editor.panel().visible);

    // Onto empty space
    assert!(editor.pointer_down(&shift_at(100.0, 100.0)));
    editor.pointer_move(&PointerEvent::at(600.0, 600.0));
    let outcome = editor.pointer_up(&PointerEvent::at(600.0, 600.0));
    assert_eq!(outcome, PointerUpOutcome::PanelOpened);

    let panel = editor.panel();
    assert!(panel.visible);
    assert_eq!(panel.kind, PanelKind::Create);
    assert_eq!(panel.triggering_node, Some(NodeId(1)));
    assert_eq!(panel.drop_position, CanvasPoint::new(600.0, 600.0));

    let created = editor.submit_create("X").unwrap();
    assert_eq!(created, NodeId(4));
    let node = editor.graph().node(created).unwrap();
    assert_eq!(node.name, "X");
    assert_eq!(node.position, CanvasPoint::new(600.0, 600.0));
    assert_linked(editor.graph(), 1, 4);
    assert_counts(editor.graph(), 4, 3);
    assert!(!editor.panel().visible);

    // Removing node 3 drops exactly the edges that touch it
    editor.edit_graph(|graph| graph.remove_node(NodeId(3)));
    let nodes: Vec<NodeId> = editor.graph().nodes().iter().map(|n| n.id).collect();
    assert_eq!(nodes, vec![NodeId(1), NodeId(2), NodeId(4)]);
    assert!(editor.graph().edges().iter().all(|e| !e.touches(NodeId(3))));
    assert_linked(editor.graph(), 1, 2);
    assert_linked(editor.graph(), 1, 4);
    assert_graph_consistent(editor.graph());
}

#[test]
fn test_edge_drop_on_other_node_uses_reserved_id() {
    let mut editor = TestGraphBuilder::new()
        .with_node("A", (100.0, 100.0))
        .with_node("B", (400.0, 100.0))
        .build();

    editor.pointer_down(&shift_at(100.0, 100.0));
    let reserved = match editor.gesture() {
        nodeboard::input::GestureState::DraggingEdge { reserved_edge_id, .. } => *reserved_edge_id,
        other => panic!("expected edge drag, got {other:?}"),
    };
    // No store writes while the preview moves
    let revision = editor.graph().revision();
    editor.pointer_move(&PointerEvent::at(300.0, 120.0));
    assert_eq!(editor.graph().revision(), revision);
    assert_eq!(editor.snapshot().edge_preview.unwrap().endpoint, CanvasPoint::new(300.0, 120.0));

    let outcome = editor.pointer_up(&PointerEvent::at(390.0, 110.0));
    assert_eq!(outcome, PointerUpOutcome::EdgeCreated(reserved));
    assert_eq!(editor.graph().edges()[0].ends, [NodeId(1), NodeId(2)]);
    assert!(editor.snapshot().edge_preview.is_none());
}

#[test]
fn test_unused_reservation_is_discarded() {
    let mut editor = TestGraphBuilder::new()
        .with_node("A", (100.0, 100.0))
        .with_node("B", (400.0, 100.0))
        .build();

    // Abandoned drag: dropped on empty space, panel closed without submit
    drag(&mut editor, shift_at(100.0, 100.0), &[(800.0, 800.0)]);
    editor.close_panel();
    assert!(editor.graph().edges().is_empty());

    drag(&mut editor, shift_at(100.0, 100.0), &[(400.0, 100.0)]);
    let edge = &editor.graph().edges()[0];
    assert!(edge.id > EdgeId(1));
}

#[test]
fn test_drop_on_source_opens_create_panel() {
    let mut editor = TestGraphBuilder::new().with_node("A", (100.0, 100.0)).build();

    editor.pointer_down(&shift_at(100.0, 100.0));
    let outcome = editor.pointer_up(&PointerEvent::at(105.0, 100.0));

    assert_eq!(outcome, PointerUpOutcome::PanelOpened);
    assert_eq!(editor.panel().triggering_node, Some(NodeId(1)));
    assert!(editor.graph().edges().is_empty());
}

#[test]
fn test_node_drag_keeps_grab_offset() {
    let mut editor = three_node_editor();
    let log = ChangeLog::attach(&mut editor);

    // Grab node 1 ten units right of and above its centre
    assert!(editor.pointer_down(&click_at(110.0, 90.0)));
    assert_eq!(editor.gesture().dragged_node_id(), Some(NodeId(1)));

    editor.pointer_move(&PointerEvent::at(210.0, 190.0));
    assert_eq!(editor.graph().node(NodeId(1)).unwrap().position, CanvasPoint::new(200.0, 200.0));

    editor.pointer_move(&PointerEvent::at(260.0, 260.0));
    assert_eq!(editor.pointer_up(&PointerEvent::at(260.0, 260.0)), PointerUpOutcome::Finished);

    assert_eq!(editor.graph().node(NodeId(1)).unwrap().position, CanvasPoint::new(250.0, 270.0));
    assert_eq!(log.count(Change::Graph), 2);
    assert_eq!(log.count(Change::Gesture), 2);
    // Edges follow the node by id, nothing to rewrite
    assert_counts(editor.graph(), 3, 2);
}

#[test]
fn test_node_drag_at_zoom_converts_pointer() {
    let mut editor = TestGraphBuilder::new()
        .with_node("A", (100.0, 100.0))
        .with_zoom(2.0)
        .with_surface((0.0, 0.0), 800.0, 600.0)
        .build();

    // Canvas (100, 100) is screen (200, 200) at zoom 2
    assert!(editor.pointer_down(&click_at(200.0, 200.0)));
    editor.pointer_move(&PointerEvent::at(300.0, 200.0));
    editor.pointer_up(&PointerEvent::at(300.0, 200.0));

    assert_eq!(editor.graph().node(NodeId(1)).unwrap().position, CanvasPoint::new(150.0, 100.0));
}

#[test]
fn test_dragging_deleted_node_is_noop() {
    let mut editor = three_node_editor();
    editor.pointer_down(&click_at(100.0, 100.0));
    editor.edit_graph(|graph| graph.remove_node(NodeId(1)));

    assert!(!editor.pointer_move(&PointerEvent::at(500.0, 500.0)));
    assert_eq!(editor.pointer_up(&PointerEvent::at(500.0, 500.0)), PointerUpOutcome::Finished);
    assert!(editor.gesture().is_idle());
    assert_counts(editor.graph(), 2, 0);
}

#[test]
fn test_gestures_do_not_nest() {
    let mut editor = three_node_editor();

    assert!(editor.pointer_down(&click_at(100.0, 100.0)));
    assert!(!editor.pointer_down(&shift_at(300.0, 100.0)));
    assert_eq!(editor.gesture().dragged_node_id(), Some(NodeId(1)));
}

#[test]
fn test_idle_moves_and_ups_are_ignored() {
    let mut editor = three_node_editor();
    let log = ChangeLog::attach(&mut editor);

    assert!(!editor.pointer_move(&PointerEvent::at(100.0, 100.0)));
    assert_eq!(editor.pointer_up(&PointerEvent::at(100.0, 100.0)), PointerUpOutcome::Ignored);
    assert!(log.changes().is_empty());
}

#[test]
fn test_plain_click_on_empty_canvas_starts_nothing() {
    let mut editor = three_node_editor();
    assert!(!editor.pointer_down(&click_at(700.0, 700.0)));
    assert!(editor.gesture().is_idle());
}

#[test]
fn test_alt_drag_on_empty_canvas_pans() {
    let mut editor = three_node_editor();

    assert!(editor.pointer_down(&alt_at(700.0, 700.0)));
    assert!(editor.gesture().is_panning());
    editor.pointer_move(&PointerEvent::at(750.0, 700.0));
    editor.pointer_move(&PointerEvent::at(700.0, 700.0));
    editor.pointer_up(&PointerEvent::at(700.0, 700.0));

    assert_eq!(editor.viewport().offset, CanvasPoint::ORIGIN);
    // Node positions are canvas-space and untouched by panning
    assert_eq!(editor.graph().node(NodeId(1)).unwrap().position, CanvasPoint::new(100.0, 100.0));
}

#[test]
fn test_alt_on_node_moves_node() {
    let mut editor = three_node_editor();
    assert!(editor.pointer_down(&alt_at(100.0, 100.0)));
    assert!(editor.gesture().is_dragging_node());
}
