//! Pointer up handling - finishing gestures.
//!
//! Releasing a dragged-out edge is the only release with a real outcome: over
//! another node it links the two, anywhere else it opens a create panel whose
//! new node gets linked back to the source.

use super::{GestureState, PointerEvent};
use crate::editor::{Change, Editor};
use crate::profile_scope;
use crate::types::{EdgeId, EdgeSpec, NodeId};
use tracing::debug;

/// What a pointer-up did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerUpOutcome {
    /// No gesture was active
    Ignored,
    /// Node move, pan or panel move finished
    Finished,
    /// Edge drag dropped on another node and the edge was added
    EdgeCreated(EdgeId),
    /// Edge drag dropped on a node that is already linked to the source
    EdgeRejected,
    /// Edge drag dropped on empty space; a create panel is open
    PanelOpened,
}

impl Editor {
    /// End the active gesture. The state machine is Idle afterwards in every case.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> PointerUpOutcome {
        profile_scope!("pointer_up");

        let outcome = match self.gesture.take() {
            GestureState::Idle => return PointerUpOutcome::Ignored,
            GestureState::DraggingEdge {
                source,
                reserved_edge_id,
                ..
            } => self.finish_edge_drag(source, reserved_edge_id, event),
            GestureState::DraggingNode { node_id, .. } => {
                debug!(%node_id, "Node drag finished");
                PointerUpOutcome::Finished
            }
            GestureState::PanningCanvas { .. } | GestureState::DraggingPanel { .. } => PointerUpOutcome::Finished,
        };

        self.notify(Change::Gesture);
        outcome
    }

    fn finish_edge_drag(&mut self, source: NodeId, reserved: EdgeId, event: &PointerEvent) -> PointerUpOutcome {
        let canvas_pos = self.screen_to_canvas(event.position);
        let target = self
            .hit_tester
            .hit_test(&self.graph, canvas_pos)
            .filter(|&target| target != source);

        match target {
            Some(target) => match self.graph.add_edge(EdgeSpec::between(source, target).with_id(reserved)) {
                Ok(edge_id) => {
                    self.notify(Change::Graph);
                    PointerUpOutcome::EdgeCreated(edge_id)
                }
                Err(e) => {
                    debug!(%source, %target, error = %e, "Edge drop refused");
                    PointerUpOutcome::EdgeRejected
                }
            },
            None => {
                // Dropping back on the source reads as an empty-space drop
                self.open_create_panel(Some(source), event.position);
                PointerUpOutcome::PanelOpened
            }
        }
    }
}
