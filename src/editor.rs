//! Editor state - the explicitly owned container for everything the pointer
//! handlers touch.
//!
//! The pointer handlers themselves live in `crate::input` as further `impl
//! Editor` blocks, split by event kind the same way the state machine is.
//!
//! Renderers read through the accessors or [`Editor::snapshot`] and learn about
//! changes by subscribing; nothing outside the editor holds a mutable handle
//! to the graph, viewport or panel.

use crate::graph::GraphStore;
use crate::hit_testing::{HitTester, SpatialHitTester};
use crate::input::{GestureState, InputBindings, SurfaceBounds};
use crate::panel::{PanelCoordinator, PanelState};
use crate::settings::Settings;
use crate::types::{CanvasPoint, Edge, Node, NodeId, ScreenPoint};
use crate::viewport::{Viewport, ViewportController};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which unit of state just changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Change {
    Graph,
    Viewport,
    Panel,
    Gesture,
}

type Listener = Box<dyn FnMut(Change)>;

/// Loose end of an edge being dragged out.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgePreview {
    pub source: NodeId,
    pub endpoint: CanvasPoint,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub viewport: Viewport,
    pub panel: PanelState,
    pub edge_preview: Option<EdgePreview>,
}

pub struct Editor {
    pub(crate) graph: GraphStore,
    pub(crate) viewport: ViewportController,
    pub(crate) panel: PanelCoordinator,
    /// Active pointer gesture
    pub(crate) gesture: GestureState,
    /// Mounted rendering surface; None until the host reports one
    pub(crate) surface: Option<SurfaceBounds>,
    pub(crate) bindings: InputBindings,
    pub(crate) hit_tester: Box<dyn HitTester>,
    listeners: Vec<Listener>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl Editor {
    /// Empty editor configured from `settings`.
    pub fn new(settings: &Settings) -> Self {
        Self::with_graph(GraphStore::new(settings.node_radius), settings)
    }

    /// Editor over an existing (e.g. seeded) graph.
    pub fn with_graph(graph: GraphStore, settings: &Settings) -> Self {
        Self {
            graph,
            viewport: ViewportController::new(settings.zoom),
            panel: PanelCoordinator::new(),
            gesture: GestureState::Idle,
            surface: None,
            bindings: settings.bindings,
            hit_tester: Box::new(SpatialHitTester),
            listeners: Vec::new(),
        }
    }

    /// Replace the hit tester, e.g. with one that asks the host's scene.
    pub fn with_hit_tester(mut self, hit_tester: impl HitTester + 'static) -> Self {
        self.hit_tester = Box::new(hit_tester);
        self
    }

    // ==================== Read access ====================

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    pub fn viewport_controller(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn panel(&self) -> &PanelState {
        self.panel.state()
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn surface(&self) -> Option<&SurfaceBounds> {
        self.surface.as_ref()
    }

    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    /// Suggestions of the node the open panel belongs to.
    pub fn panel_suggestions(&self) -> &[String] {
        self.panel.suggestions(&self.graph)
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            nodes: self.graph.nodes().to_vec(),
            edges: self.graph.edges().to_vec(),
            viewport: self.viewport.viewport(),
            panel: self.panel.state().clone(),
            edge_preview: self
                .gesture
                .edge_preview()
                .map(|(source, endpoint)| EdgePreview { source, endpoint }),
        }
    }

    // ==================== Change notification ====================

    /// Register a listener called after every effective change.
    pub fn subscribe(&mut self, listener: impl FnMut(Change) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub(crate) fn notify(&mut self, change: Change) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }

    /// Run a batch of graph edits; listeners hear about it once if anything
    /// changed.
    pub fn edit_graph<R>(&mut self, f: impl FnOnce(&mut GraphStore) -> R) -> R {
        let before = self.graph.revision();
        let result = f(&mut self.graph);
        if self.graph.revision() != before {
            self.notify(Change::Graph);
        }
        result
    }

    // ==================== Surface ====================

    /// Report the rendering surface's bounds, or None when it goes away.
    pub fn set_surface(&mut self, surface: Option<SurfaceBounds>) {
        if self.surface != surface {
            self.surface = surface;
            self.notify(Change::Viewport);
        }
    }

    // ==================== Panel ====================

    /// Open a create panel at `screen`. With `anchor_node`, the node created
    /// from it is linked back to that node.
    pub fn open_create_panel(&mut self, anchor_node: Option<NodeId>, screen: ScreenPoint) {
        let canvas = self.screen_to_canvas(screen);
        self.panel.open_create_panel(anchor_node, screen, canvas);
        self.notify(Change::Panel);
    }

    pub fn open_edit_panel(&mut self, node_id: NodeId, screen: ScreenPoint) {
        let canvas = self.screen_to_canvas(screen);
        self.panel.open_edit_panel(node_id, screen, canvas);
        self.notify(Change::Panel);
    }

    pub fn close_panel(&mut self) {
        if self.panel.close_panel() {
            self.notify(Change::Panel);
        }
    }

    pub fn submit_create(&mut self, name: &str) -> Option<NodeId> {
        let id = self.panel.submit_create(&mut self.graph, name)?;
        self.notify(Change::Graph);
        self.notify(Change::Panel);
        Some(id)
    }

    pub fn submit_edit(&mut self, name: &str) -> bool {
        let renamed = self.panel.submit_edit(&mut self.graph, name);
        if renamed {
            self.notify(Change::Graph);
        }
        renamed
    }

    pub fn submit_delete(&mut self) -> bool {
        let was_open = self.panel.is_open();
        let removed = self.panel.submit_delete(&mut self.graph);
        if removed {
            self.notify(Change::Graph);
        }
        if was_open && !self.panel.is_open() {
            self.notify(Change::Panel);
        }
        removed
    }

    /// Create a node from a suggestion of the panel's triggering node, from a
    /// create or a properties panel alike.
    pub fn select_suggestion(&mut self, label: &str) -> Option<NodeId> {
        debug!(label, "Suggestion selected");
        let id = self.panel.select_suggestion(&mut self.graph, label)?;
        self.notify(Change::Graph);
        self.notify(Change::Panel);
        Some(id)
    }
}
