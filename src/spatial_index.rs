//! R-tree over node hit circles. Each node is stored by the bounding box of its
//! circle; point queries narrow candidates through the tree and then filter by
//! true distance, so a point inside the box corner but outside the circle
//! does not match.

use crate::types::{CanvasPoint, NodeId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A node's hit circle as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub node_id: NodeId,
    pub center: CanvasPoint,
    pub radius: f32,
}

impl SpatialEntry {
    pub fn new(node_id: NodeId, center: CanvasPoint, radius: f32) -> Self {
        Self {
            node_id,
            center,
            radius,
        }
    }

    #[inline]
    pub fn contains_point(&self, p: CanvasPoint) -> bool {
        self.center.distance_to(p) <= self.radius
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.center.x - self.radius, self.center.y - self.radius],
            [self.center.x + self.radius, self.center.y + self.radius],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

/// Spatial index for node circles.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NodeId, SpatialEntry>,
    radius: f32,
}

impl SpatialIndex {
    pub fn new(radius: f32) -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
            radius,
        }
    }

    /// Build an index from `(id, center)` pairs in one bulk load.
    pub fn from_nodes<I>(nodes: I, radius: f32) -> Self
    where
        I: Iterator<Item = (NodeId, CanvasPoint)>,
    {
        let entries: Vec<SpatialEntry> = nodes
            .map(|(id, center)| SpatialEntry::new(id, center, radius))
            .collect();
        let entries_map = entries.iter().map(|e| (e.node_id, *e)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
            radius,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Insert or move a node's circle.
    pub fn insert(&mut self, node_id: NodeId, center: CanvasPoint) {
        if let Some(old_entry) = self.entries.remove(&node_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(node_id, center, self.radius);
        self.tree.insert(entry);
        self.entries.insert(node_id, entry);
    }

    pub fn remove(&mut self, node_id: NodeId) -> bool {
        if let Some(entry) = self.entries.remove(&node_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All nodes whose circle contains `p`, in no particular order.
    pub fn query_point(&self, p: CanvasPoint) -> Vec<NodeId> {
        let point_envelope = AABB::from_point([p.x, p.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(p))
            .map(|entry| entry.node_id)
            .collect()
    }

    /// All nodes whose bounding box intersects the rectangle.
    pub fn query_rect(&self, min: CanvasPoint, max: CanvasPoint) -> Vec<NodeId> {
        let envelope = AABB::from_corners([min.x, min.y], [max.x, max.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.node_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
