//! Core types for the node board.
//!
//! This module defines the graph model (nodes, edges and their identifiers)
//! and the two coordinate spaces the editor works in. Screen and canvas points
//! are separate types so a pointer position can never be stored as a node
//! position without going through the coordinate transform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

// ============================================================================
// Identifiers
// ============================================================================

/// Stable identity of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

/// Stable identity of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge#{}", self.0)
    }
}

// ============================================================================
// Coordinate Spaces
// ============================================================================

macro_rules! point_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            pub x: f32,
            pub y: f32,
        }

        impl $name {
            pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

            #[inline]
            pub const fn new(x: f32, y: f32) -> Self {
                Self { x, y }
            }

            /// Euclidean distance to another point in the same space.
            #[inline]
            pub fn distance_to(self, other: Self) -> f32 {
                (self.x - other.x).hypot(self.y - other.y)
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::new(self.x + rhs.x, self.y + rhs.y)
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.x - rhs.x, self.y - rhs.y)
            }
        }

        impl From<(f32, f32)> for $name {
            fn from((x, y): (f32, f32)) -> Self {
                Self::new(x, y)
            }
        }
    };
}

point_type! {
    /// A point in pointer/display pixels.
    ScreenPoint
}

point_type! {
    /// A point in canvas (model) space, independent of pan and zoom.
    CanvasPoint
}

/// Axis-aligned rectangle in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasRect {
    pub min: CanvasPoint,
    pub max: CanvasPoint,
}

impl CanvasRect {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

// ============================================================================
// Graph Model
// ============================================================================

/// A labeled point in the diagram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub position: CanvasPoint,
    /// Candidate connection labels supplied from outside; never interpreted here
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Pass-through connector rather than a named concept
    #[serde(default)]
    pub is_intermediate: bool,
}

/// An undirected connection between two distinct nodes.
///
/// `ends` keeps the order it was created with; equality of connections is
/// decided by [`Edge::connects`], which ignores order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub ends: [NodeId; 2],
}

impl Edge {
    /// True if this edge joins `a` and `b` in either direction.
    #[inline]
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.ends[0] == a && self.ends[1] == b) || (self.ends[0] == b && self.ends[1] == a)
    }

    /// True if either end is `node`.
    #[inline]
    pub fn touches(&self, node: NodeId) -> bool {
        self.ends[0] == node || self.ends[1] == node
    }
}

/// Request to create a node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Explicit id; a fresh one is allocated when absent or already taken
    #[serde(default)]
    pub id: Option<NodeId>,
    pub name: String,
    pub position: CanvasPoint,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub is_intermediate: bool,
}

impl NodeSpec {
    pub fn new(name: impl Into<String>, position: CanvasPoint) -> Self {
        Self {
            name: name.into(),
            position,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    pub fn intermediate(mut self) -> Self {
        self.is_intermediate = true;
        self
    }
}

/// Partial update applied by `GraphStore::update_node`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodePatch {
    pub name: Option<String>,
    pub position: Option<CanvasPoint>,
}

impl NodePatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            position: None,
        }
    }

    pub fn position(position: CanvasPoint) -> Self {
        Self {
            name: None,
            position: Some(position),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none()
    }
}

/// Request to create an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    #[serde(default)]
    pub id: Option<EdgeId>,
    pub ends: [NodeId; 2],
}

impl EdgeSpec {
    pub fn between(a: NodeId, b: NodeId) -> Self {
        Self { id: None, ends: [a, b] }
    }

    pub fn with_id(mut self, id: EdgeId) -> Self {
        self.id = Some(id);
        self
    }
}
