//! Hit testing - which node, if any, is under a canvas point.
//!
//! The editor never asks a renderer what is under the pointer directly; it
//! goes through [`HitTester`], so a host can answer from its own scene (a DOM
//! query, a GPU pick buffer) while tests and headless use get
//! [`SpatialHitTester`].
//!
//! Only nodes are interactive targets here. Anything else under the point
//! (edges, background) reads as `None`, which gives nodes precedence over
//! every non-node element at the same spot.

use crate::graph::GraphStore;
use crate::profile_scope;
use crate::types::{CanvasPoint, NodeId};

pub trait HitTester {
    /// The top-most node whose hit area contains `point`.
    fn hit_test(&self, graph: &GraphStore, point: CanvasPoint) -> Option<NodeId>;
}

/// Hit tester backed by the store's R-tree of node circles.
///
/// Among overlapping circles the one whose centre is nearest wins; exact
/// ties go to the node highest in z-order (most recently added).
#[derive(Debug, Clone, Copy, Default)]
pub struct SpatialHitTester;

impl HitTester for SpatialHitTester {
    fn hit_test(&self, graph: &GraphStore, point: CanvasPoint) -> Option<NodeId> {
        profile_scope!("hit_test");

        graph
            .spatial_index()
            .query_point(point)
            .into_iter()
            .filter_map(|id| {
                let node = graph.node(id)?;
                let z = graph.z_index(id)?;
                Some((id, node.position.distance_to(point), z))
            })
            .min_by(|a, b| {
                a.1.total_cmp(&b.1)
                    // Higher z wins the tie, so it must sort first
                    .then_with(|| b.2.cmp(&a.2))
            })
            .map(|(id, _, _)| id)
    }
}

impl<F> HitTester for F
where
    F: Fn(&GraphStore, CanvasPoint) -> Option<NodeId>,
{
    fn hit_test(&self, graph: &GraphStore, point: CanvasPoint) -> Option<NodeId> {
        self(graph, point)
    }
}
