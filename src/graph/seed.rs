//! Initial graph data.
//!
//! A seed is plain JSON: a list of node specs and a list of edge specs. Loading
//! goes through the same insert paths as live edits, so a seed can never put
//! the store into a state the editor could not have produced itself.

use super::GraphStore;
use crate::error::ScriptError;
use crate::spatial_index::SpatialIndex;
use crate::types::{CanvasPoint, EdgeSpec, NodeId, NodeSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSeed {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphSeed {
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Four nodes and four edges, one of the nodes an intermediate connector.
    pub fn demo() -> Self {
        let node = |id: u64, name: &str, x: f32, y: f32| {
            NodeSpec::new(name, CanvasPoint::new(x, y)).with_id(NodeId(id))
        };
        Self {
            nodes: vec![
                node(1, "Node 1", 100.0, 150.0),
                node(2, "Node 2", 300.0, 150.0),
                node(3, "Node 3", 200.0, 300.0),
                node(4, "Node 4", 400.0, 350.0).intermediate(),
            ],
            edges: vec![
                EdgeSpec::between(NodeId(1), NodeId(2)),
                EdgeSpec::between(NodeId(1), NodeId(3)),
                EdgeSpec::between(NodeId(2), NodeId(3)),
                EdgeSpec::between(NodeId(3), NodeId(4)),
            ],
        }
    }
}

impl GraphStore {
    /// Build a store from a seed, skipping edges the store refuses. The hit
    /// circles are bulk-loaded once all nodes are in.
    ///
    /// Seed edges reference seed node ids. If a node's id had to be replaced
    /// (a duplicate in the seed) its edges still refer to the first holder.
    pub fn from_seed(seed: GraphSeed, node_radius: f32) -> Self {
        let mut store = GraphStore::new(node_radius);
        for spec in seed.nodes {
            store.push_node(spec);
        }
        store.spatial_index = SpatialIndex::from_nodes(
            store.nodes.iter().map(|n| (n.id, n.position)),
            store.node_radius(),
        );
        for spec in seed.edges {
            if let Err(e) = store.add_edge(spec) {
                warn!(ends = ?spec.ends, error = %e, "Skipping seed edge");
            }
        }
        store
    }
}
