//! Pointer move handling - node move, edge preview, pan, panel move.
//!
//! ## Performance Notes
//!
//! Moves arrive at display rate for the whole life of a gesture. While Idle
//! the handler returns before doing any work, which stands in for attaching
//! move listeners only for the duration of a gesture.

use super::{CoordinateConverter, GestureState, PointerEvent};
use crate::editor::{Change, Editor};
use crate::profile_scope;
use crate::types::NodePatch;
use tracing::trace;

impl Editor {
    /// Advance the active gesture. Returns true if anything changed.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("pointer_move", crate::perf::FRAME_BUDGET);

        match self.gesture {
            GestureState::Idle => false,

            GestureState::DraggingNode { node_id, anchor_offset } => {
                // Every move is written through so the render layer follows
                // the pointer; the last write of the gesture is the one that sticks
                let position = self.screen_to_canvas(event.position) - anchor_offset;
                if !self.graph.update_node(node_id, NodePatch::position(position)) {
                    return false;
                }
                trace!(%node_id, x = position.x, y = position.y, "Node moved");
                self.notify(Change::Graph);
                true
            }

            GestureState::DraggingEdge { .. } => {
                let endpoint = self.screen_to_canvas(event.position);
                self.gesture.set_edge_endpoint(endpoint);
                self.notify(Change::Gesture);
                true
            }

            GestureState::PanningCanvas { .. } => {
                // Delta from the previous move, not from the gesture start
                let Some(last_pos) = self.gesture.replace_last_pos(event.position) else {
                    return false;
                };
                let delta = CoordinateConverter::delta_screen_to_canvas(
                    event.position - last_pos,
                    self.viewport.zoom(),
                );
                if !self.viewport.pan(delta.x, delta.y) {
                    return false;
                }
                self.notify(Change::Viewport);
                true
            }

            GestureState::DraggingPanel { grab_offset } => {
                self.panel.move_to(event.position - grab_offset);
                self.notify(Change::Panel);
                true
            }
        }
    }
}
