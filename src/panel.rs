//! Contextual panel - create, edit and delete nodes.
//!
//! At most one panel is open. Opening any panel replaces whatever was open
//! before. The panel refers to its triggering node by id only; that node may
//! be deleted while the panel is up, so every submit re-checks it against the
//! store.
//!
//! Submit operations take the [`GraphStore`] as an explicit mutation handle.

use crate::graph::GraphStore;
use crate::types::{CanvasPoint, EdgeSpec, NodeId, NodePatch, ScreenPoint};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Add a new node, optionally linked back to the triggering node
    #[default]
    Create,
    /// Rename or delete the triggering node
    Properties,
}

/// The panel descriptor the render layer draws from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelState {
    pub visible: bool,
    /// Node that spawned the panel; for a create panel this is the node the
    /// new node gets linked to
    pub triggering_node: Option<NodeId>,
    pub kind: PanelKind,
    /// Where the panel is drawn, in screen pixels
    pub anchor: ScreenPoint,
    /// Where a node created from this panel is placed
    pub drop_position: CanvasPoint,
}

impl PanelState {
    pub fn is_property_panel(&self) -> bool {
        self.kind == PanelKind::Properties
    }
}

#[derive(Default)]
pub struct PanelCoordinator {
    state: PanelState,
}

/// Trimmed name, or None when nothing is left.
fn valid_name(name: &str) -> Option<&str> {
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}

impl PanelCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.visible
    }

    /// Open a create panel. `anchor_node` is the node a drag-to-connect started
    /// from, or None for a panel opened on bare canvas.
    pub fn open_create_panel(&mut self, anchor_node: Option<NodeId>, screen: ScreenPoint, canvas: CanvasPoint) {
        self.state = PanelState {
            visible: true,
            triggering_node: anchor_node,
            kind: PanelKind::Create,
            anchor: screen,
            drop_position: canvas,
        };
        debug!(?anchor_node, "Create panel opened");
    }

    /// Open the properties panel for `node_id`.
    pub fn open_edit_panel(&mut self, node_id: NodeId, screen: ScreenPoint, canvas: CanvasPoint) {
        self.state = PanelState {
            visible: true,
            triggering_node: Some(node_id),
            kind: PanelKind::Properties,
            anchor: screen,
            drop_position: canvas,
        };
        debug!(%node_id, "Properties panel opened");
    }

    pub fn close_panel(&mut self) -> bool {
        let was_open = self.state.visible;
        self.state.visible = false;
        self.state.triggering_node = None;
        was_open
    }

    /// Move the open panel; only its screen anchor changes.
    pub fn move_to(&mut self, anchor: ScreenPoint) {
        if self.state.visible {
            self.state.anchor = anchor;
        }
    }

    /// The triggering node's suggestion list, if it still exists.
    pub fn suggestions<'g>(&self, graph: &'g GraphStore) -> &'g [String] {
        self.state
            .triggering_node
            .and_then(|id| graph.node(id))
            .map(|n| n.suggestions.as_slice())
            .unwrap_or(&[])
    }

    /// Create a node named `name` at the panel's drop position, link it to the
    /// anchor node when there is one, then close the panel.
    pub fn submit_create(&mut self, graph: &mut GraphStore, name: &str) -> Option<NodeId> {
        if !self.state.visible || self.state.kind != PanelKind::Create {
            return None;
        }
        self.create_linked(graph, name)
    }

    /// Rename the triggering node. The panel stays open.
    pub fn submit_edit(&mut self, graph: &mut GraphStore, name: &str) -> bool {
        if !self.state.visible || self.state.kind != PanelKind::Properties {
            return false;
        }
        let Some(name) = valid_name(name) else {
            debug!("Empty node name ignored");
            return false;
        };
        let Some(node_id) = self.state.triggering_node else {
            return false;
        };
        graph.update_node(node_id, NodePatch::name(name))
    }

    /// Delete the triggering node (and its edges), then close the panel.
    pub fn submit_delete(&mut self, graph: &mut GraphStore) -> bool {
        if !self.state.visible || self.state.kind != PanelKind::Properties {
            return false;
        }
        let removed = self
            .state
            .triggering_node
            .and_then(|id| graph.remove_node(id))
            .is_some();
        self.close_panel();
        removed
    }

    /// Create a node from one of the triggering node's suggestions. Works from
    /// either panel kind: in a properties panel the new node is linked to the
    /// node being edited.
    pub fn select_suggestion(&mut self, graph: &mut GraphStore, label: &str) -> Option<NodeId> {
        if !self.state.visible {
            return None;
        }
        self.create_linked(graph, label)
    }

    fn create_linked(&mut self, graph: &mut GraphStore, name: &str) -> Option<NodeId> {
        let Some(name) = valid_name(name) else {
            debug!("Empty node name ignored");
            return None;
        };

        let id = graph.add_node_by_val_and_coord(name, self.state.drop_position);
        if let Some(anchor) = self.state.triggering_node {
            if let Err(e) = graph.add_edge(EdgeSpec::between(anchor, id)) {
                debug!(%anchor, error = %e, "Link to triggering node skipped");
            }
        }
        self.close_panel();
        Some(id)
    }
}
