//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestGraphBuilder` - Builder pattern for creating test editors with nodes and edges
//! - Pointer event shorthands (`click_at`, `shift_at`, ...)
//! - `ChangeLog` - records the change notifications an editor publishes
//! - Assertion helpers for common graph checks

use nodeboard::editor::Change;
use nodeboard::input::{Modifiers, PointerButton, PointerEvent, SurfaceBounds};
use nodeboard::types::{EdgeSpec, NodeSpec};
use nodeboard::{CanvasPoint, Editor, GraphStore, NodeId, ScreenPoint, Settings};
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// TestGraphBuilder - Builder pattern for creating test editors
// ============================================================================

/// Builder for creating test editors with a graph and viewport configuration.
///
/// Nodes get ids 1, 2, 3... in the order they are added.
///
/// # Example
/// ```ignore
/// let editor = TestGraphBuilder::new()
///     .with_node("A", (100.0, 100.0))
///     .with_node("B", (300.0, 100.0))
///     .with_edge(1, 2)
///     .with_zoom(2.0)
///     .build();
/// ```
pub struct TestGraphBuilder {
    nodes: Vec<NodeSpec>,
    edges: Vec<(u64, u64)>,
    zoom: f32,
    offset: (f32, f32),
    surface: Option<SurfaceBounds>,
    settings: Settings,
}

impl Default for TestGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            zoom: 1.0,
            offset: (0.0, 0.0),
            surface: None,
            settings: Settings::default(),
        }
    }

    pub fn with_node(mut self, name: &str, pos: (f32, f32)) -> Self {
        self.nodes.push(NodeSpec::new(name, CanvasPoint::new(pos.0, pos.1)));
        self
    }

    pub fn with_node_spec(mut self, spec: NodeSpec) -> Self {
        self.nodes.push(spec);
        self
    }

    /// Add an edge between the nodes with these ids.
    pub fn with_edge(mut self, a: u64, b: u64) -> Self {
        self.edges.push((a, b));
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Canvas point shown at the surface's top-left corner.
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = (x, y);
        self
    }

    /// Mount a surface of the given size at `origin`.
    pub fn with_surface(mut self, origin: (f32, f32), width: f32, height: f32) -> Self {
        self.surface = Some(SurfaceBounds::new(ScreenPoint::new(origin.0, origin.1), width, height));
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build_graph(&self) -> GraphStore {
        let mut graph = GraphStore::new(self.settings.node_radius);
        for spec in &self.nodes {
            graph.add_node(spec.clone());
        }
        for &(a, b) in &self.edges {
            graph
                .add_edge(EdgeSpec::between(NodeId(a), NodeId(b)))
                .expect("builder edge should be valid");
        }
        graph
    }

    pub fn build(self) -> Editor {
        let mut editor = Editor::with_graph(self.build_graph(), &self.settings);
        editor.set_zoom(self.zoom);
        editor.pan_by(-self.offset.0, -self.offset.1);
        editor.set_surface(self.surface);
        editor
    }
}

/// Three nodes in a row-and-below layout with edges (1,2) and (1,3).
pub fn three_node_editor() -> Editor {
    TestGraphBuilder::new()
        .with_node("Node 1", (100.0, 100.0))
        .with_node("Node 2", (300.0, 100.0))
        .with_node("Node 3", (200.0, 300.0))
        .with_edge(1, 2)
        .with_edge(1, 3)
        .build()
}

// ============================================================================
// Pointer events
// ============================================================================

pub fn click_at(x: f32, y: f32) -> PointerEvent {
    PointerEvent::at(x, y)
}

pub fn shift_at(x: f32, y: f32) -> PointerEvent {
    PointerEvent::at(x, y).with_modifiers(Modifiers::shift())
}

pub fn alt_at(x: f32, y: f32) -> PointerEvent {
    PointerEvent::at(x, y).with_modifiers(Modifiers::alt())
}

pub fn middle_at(x: f32, y: f32) -> PointerEvent {
    PointerEvent::at(x, y).with_button(PointerButton::Middle)
}

pub fn secondary_at(x: f32, y: f32) -> PointerEvent {
    PointerEvent::at(x, y).with_button(PointerButton::Secondary)
}

/// Full drag: `down`, one move per point in `path`, up at the last point.
pub fn drag(editor: &mut Editor, down: PointerEvent, path: &[(f32, f32)]) {
    editor.pointer_down(&down);
    for &(x, y) in path {
        editor.pointer_move(&PointerEvent::at(x, y));
    }
    let (x, y) = path.last().copied().unwrap_or((down.position.x, down.position.y));
    editor.pointer_up(&PointerEvent::at(x, y));
}

// ============================================================================
// Change recording
// ============================================================================

/// Collects every change an editor publishes.
#[derive(Clone, Default)]
pub struct ChangeLog(Rc<RefCell<Vec<Change>>>);

impl ChangeLog {
    pub fn attach(editor: &mut Editor) -> Self {
        let log = Self::default();
        let sink = log.0.clone();
        editor.subscribe(move |change| sink.borrow_mut().push(change));
        log
    }

    pub fn changes(&self) -> Vec<Change> {
        self.0.borrow().clone()
    }

    pub fn count(&self, change: Change) -> usize {
        self.0.borrow().iter().filter(|&&c| c == change).count()
    }
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert that the graph has exactly this many nodes and edges.
pub fn assert_counts(graph: &GraphStore, nodes: usize, edges: usize) {
    assert_eq!(graph.nodes().len(), nodes, "node count");
    assert_eq!(graph.edges().len(), edges, "edge count");
}

/// Assert that an edge joins `a` and `b` (either direction).
pub fn assert_linked(graph: &GraphStore, a: u64, b: u64) {
    assert!(
        graph.find_edge_between(NodeId(a), NodeId(b)).is_some(),
        "expected an edge between node#{a} and node#{b}"
    );
}

/// Assert that every edge references live nodes and no pair is duplicated.
pub fn assert_graph_consistent(graph: &GraphStore) {
    for edge in graph.edges() {
        for end in edge.ends {
            assert!(graph.contains_node(end), "{} references missing {}", edge.id, end);
        }
        assert_ne!(edge.ends[0], edge.ends[1], "self-loop {}", edge.id);
        let same_pair = graph
            .edges()
            .iter()
            .filter(|e| e.connects(edge.ends[0], edge.ends[1]))
            .count();
        assert_eq!(same_pair, 1, "duplicate pair for {}", edge.id);
    }
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
