//! Gesture state machine - one explicit value for the active pointer gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingNode     (primary down on a node)
//! Idle -> DraggingEdge     (primary down on a node with the connect modifier)
//! Idle -> PanningCanvas    (pan button, or pan modifier, down on empty canvas)
//! Idle -> DraggingPanel    (down on the open panel's drag handle)
//!
//! Any -> Idle              (pointer up - finalizes the gesture)
//! ```
//!
//! Gestures never nest. A pointer-down while a gesture is active is ignored.

use crate::types::{CanvasPoint, EdgeId, NodeId, ScreenPoint};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GestureState {
    /// No active gesture
    #[default]
    Idle,

    /// Moving a node with the pointer
    DraggingNode {
        node_id: NodeId,
        /// Pointer minus node position at drag start, in canvas units
        anchor_offset: CanvasPoint,
    },

    /// Dragging out a new edge from `source`
    DraggingEdge {
        source: NodeId,
        /// Id the edge gets if the drop lands on another node
        reserved_edge_id: EdgeId,
        /// Loose end of the preview line
        endpoint: CanvasPoint,
    },

    /// Panning the canvas
    PanningCanvas {
        /// Last pointer position; each move pans by the delta from here
        last_pos: ScreenPoint,
    },

    /// Moving the contextual panel in screen space
    DraggingPanel {
        /// Pointer minus panel anchor at drag start
        grab_offset: ScreenPoint,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging_node(&self) -> bool {
        matches!(self, Self::DraggingNode { .. })
    }

    pub fn is_dragging_edge(&self) -> bool {
        matches!(self, Self::DraggingEdge { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::PanningCanvas { .. })
    }

    pub fn is_dragging_panel(&self) -> bool {
        matches!(self, Self::DraggingPanel { .. })
    }

    /// Get the node being moved, if any
    pub fn dragged_node_id(&self) -> Option<NodeId> {
        match self {
            Self::DraggingNode { node_id, .. } => Some(*node_id),
            _ => None,
        }
    }

    /// Source node and loose end of the edge being drawn, if any
    pub fn edge_preview(&self) -> Option<(NodeId, CanvasPoint)> {
        match self {
            Self::DraggingEdge { source, endpoint, .. } => Some((*source, *endpoint)),
            _ => None,
        }
    }

    /// Reset to Idle, returning the gesture that was active
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn start_node_drag(&mut self, node_id: NodeId, anchor_offset: CanvasPoint) {
        *self = Self::DraggingNode { node_id, anchor_offset };
    }

    pub fn start_edge_drag(&mut self, source: NodeId, reserved_edge_id: EdgeId, endpoint: CanvasPoint) {
        *self = Self::DraggingEdge {
            source,
            reserved_edge_id,
            endpoint,
        };
    }

    pub fn start_panning(&mut self, last_pos: ScreenPoint) {
        *self = Self::PanningCanvas { last_pos };
    }

    pub fn start_panel_drag(&mut self, grab_offset: ScreenPoint) {
        *self = Self::DraggingPanel { grab_offset };
    }

    /// Update the edge preview's loose end
    pub fn set_edge_endpoint(&mut self, p: CanvasPoint) {
        if let Self::DraggingEdge { endpoint, .. } = self {
            *endpoint = p;
        }
    }

    /// Swap in a new last-seen pointer position, returning the old one (for panning)
    pub fn replace_last_pos(&mut self, pos: ScreenPoint) -> Option<ScreenPoint> {
        match self {
            Self::PanningCanvas { last_pos } => Some(std::mem::replace(last_pos, pos)),
            _ => None,
        }
    }
}
