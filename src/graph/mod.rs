//! Graph store - the authoritative node and edge collections.
//!
//! The store is the only owner of nodes and edges. Everything else sees them
//! through shared borrows or by id, and writes go through the methods here so
//! the invariants below always hold after a call returns:
//!
//! - every edge's two ends name live nodes
//! - no edge joins a node to itself
//! - at most one edge exists per unordered pair of nodes
//! - the spatial index holds exactly one entry per live node
//!
//! Operations that refer to ids which no longer exist are no-ops. The UI can
//! race ahead of the store (a panel still open for a node that was just
//! deleted, say) and that must never be an error.

mod seed;

pub use seed::GraphSeed;

use crate::constants::DEFAULT_NODE_RADIUS;
use crate::error::EdgeError;
use crate::spatial_index::SpatialIndex;
use crate::types::{CanvasPoint, Edge, EdgeId, EdgeSpec, Node, NodeId, NodePatch, NodeSpec};
use tracing::{debug, info, warn};

pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_node_id: u64,
    next_edge_id: u64,
    spatial_index: SpatialIndex,
    revision: u64,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_RADIUS)
    }
}

impl GraphStore {
    /// Empty store whose hit circles use `node_radius`. A radius that is not
    /// a positive finite number falls back to the default.
    pub fn new(node_radius: f32) -> Self {
        let node_radius = if node_radius > 0.0 && node_radius.is_finite() {
            node_radius
        } else {
            DEFAULT_NODE_RADIUS
        };
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            next_node_id: 1,
            next_edge_id: 1,
            spatial_index: SpatialIndex::new(node_radius),
            revision: 0,
        }
    }

    // ==================== Read access ====================

    /// Nodes in insertion order, which is also back-to-front z-order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Edges with `id` at either end.
    pub fn edges_of(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.touches(id))
    }

    /// The edge joining `a` and `b` in either direction, if any.
    pub fn find_edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(a, b))
    }

    /// Position of `id` in z-order (0 is bottom-most).
    pub fn z_index(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    pub fn spatial_index(&self) -> &SpatialIndex {
        &self.spatial_index
    }

    pub fn node_radius(&self) -> f32 {
        self.spatial_index.radius()
    }

    /// Bumped on every mutation that changed something.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn mark_dirty(&mut self) {
        self.revision += 1;
    }

    // ==================== Nodes ====================

    /// Insert a node. Always succeeds and returns the id actually used.
    pub fn add_node(&mut self, spec: NodeSpec) -> NodeId {
        let position = spec.position;
        let id = self.push_node(spec);
        self.spatial_index.insert(id, position);
        id
    }

    /// Append a node without touching the spatial index.
    fn push_node(&mut self, spec: NodeSpec) -> NodeId {
        let id = match spec.id {
            Some(requested) if !self.contains_node(requested) => {
                self.next_node_id = self.next_node_id.max(requested.0.saturating_add(1));
                requested
            }
            Some(requested) => {
                let fresh = self.allocate_node_id();
                warn!(%requested, %fresh, "Node id already taken, allocated a fresh one");
                fresh
            }
            None => self.allocate_node_id(),
        };

        let node = Node {
            id,
            name: spec.name,
            position: spec.position,
            suggestions: spec.suggestions,
            is_intermediate: spec.is_intermediate,
        };
        info!(%id, name = %node.name, "Node added");
        self.nodes.push(node);
        self.mark_dirty();
        id
    }

    /// Insert a plain named node at `position`.
    pub fn add_node_by_val_and_coord(&mut self, name: impl Into<String>, position: CanvasPoint) -> NodeId {
        self.add_node(NodeSpec::new(name, position))
    }

    /// Merge `patch` into the node. Returns false (and changes nothing) when the
    /// id is unknown or the patch is empty.
    pub fn update_node(&mut self, id: NodeId, patch: NodePatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            debug!(%id, "update_node on missing node ignored");
            return false;
        };

        if let Some(name) = patch.name {
            node.name = name;
        }
        if let Some(position) = patch.position {
            node.position = position;
            self.spatial_index.insert(id, position);
        }
        self.mark_dirty();
        true
    }

    /// Remove a node together with every edge touching it.
    ///
    /// The edges go first, so nothing observing the store afterwards can see
    /// an edge pointing at the removed node.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let index = self.z_index(id)?;
        let dropped = self.remove_edges_by_node(id);
        let node = self.nodes.remove(index);
        self.spatial_index.remove(id);
        self.mark_dirty();
        info!(%id, edges_removed = dropped.len(), "Node removed");
        Some(node)
    }

    /// Replace the node's externally supplied suggestion list.
    pub fn set_suggestions(&mut self, id: NodeId, suggestions: Vec<String>) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        node.suggestions = suggestions;
        self.mark_dirty();
        true
    }

    /// Collapse a node into a pass-through connector: its name and suggestions
    /// are cleared and its edges kept.
    ///
    /// Nothing in the interaction layer calls this on its own; hosts opt in.
    pub fn convert_to_intermediate(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        if node.is_intermediate {
            return false;
        }
        node.name.clear();
        node.suggestions.clear();
        node.is_intermediate = true;
        self.mark_dirty();
        debug!(%id, "Node converted to intermediate");
        true
    }

    /// The counter saturates at `u64::MAX` once a supplied id reaches it;
    /// from then on the lowest free id is handed out instead.
    fn allocate_node_id(&mut self) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id = self.next_node_id.saturating_add(1);
        if !self.contains_node(id) {
            return id;
        }
        (1..u64::MAX).map(NodeId).find(|&free| !self.contains_node(free)).unwrap_or(id)
    }

    // ==================== Edges ====================

    /// Hand out a fresh edge id without inserting anything.
    ///
    /// Unused reservations are simply skipped; ids are never reused.
    pub fn reserve_edge_id(&mut self) -> EdgeId {
        let id = EdgeId(self.next_edge_id);
        self.next_edge_id = self.next_edge_id.saturating_add(1);
        if self.edge(id).is_none() {
            return id;
        }
        (1..u64::MAX).map(EdgeId).find(|&free| self.edge(free).is_none()).unwrap_or(id)
    }

    /// Insert an edge unless it would break an invariant.
    ///
    /// Duplicate detection ignores end order; the stored `ends` keep the order
    /// given here.
    pub fn add_edge(&mut self, spec: EdgeSpec) -> Result<EdgeId, EdgeError> {
        let [a, b] = spec.ends;
        if a == b {
            return Err(EdgeError::SelfLoop(a));
        }
        for end in [a, b] {
            if !self.contains_node(end) {
                return Err(EdgeError::MissingEndpoint(end));
            }
        }
        if let Some(existing) = self.find_edge_between(a, b) {
            return Err(EdgeError::Duplicate {
                existing: existing.id,
            });
        }

        let id = match spec.id {
            Some(requested) if self.edge(requested).is_none() => {
                self.next_edge_id = self.next_edge_id.max(requested.0.saturating_add(1));
                requested
            }
            _ => self.reserve_edge_id(),
        };
        self.edges.push(Edge { id, ends: [a, b] });
        self.mark_dirty();
        info!(%id, from = %a, to = %b, "Edge added");
        Ok(id)
    }

    pub fn remove_edge_by_id(&mut self, id: EdgeId) -> Option<Edge> {
        let index = self.edges.iter().position(|e| e.id == id)?;
        let edge = self.edges.remove(index);
        self.mark_dirty();
        Some(edge)
    }

    /// Remove every edge touching `node`, returning what was removed.
    pub fn remove_edges_by_node(&mut self, node: NodeId) -> Vec<Edge> {
        let (removed, kept): (Vec<Edge>, Vec<Edge>) =
            std::mem::take(&mut self.edges).into_iter().partition(|e| e.touches(node));
        self.edges = kept;
        if !removed.is_empty() {
            self.mark_dirty();
        }
        removed
    }
}
