//! Pointer down handling - gesture start and the context-menu shortcut.
//!
//! ## Performance Notes
//!
//! Every pointer-down hit tests the graph. The default hit tester goes through
//! the R-tree, so this stays O(log n) in the number of nodes.

use super::{PointerButton, PointerEvent};
use crate::editor::{Change, Editor};
use crate::profile_scope;
use crate::types::NodeId;
use tracing::debug;

impl Editor {
    /// Start a gesture. Returns true if one started.
    ///
    /// On a node the primary button moves it, or drags out a new edge while
    /// the connect modifier is held. On empty canvas the pan trigger starts
    /// panning. Anything else, including any press while a gesture is already
    /// active, is ignored.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("pointer_down");

        if !self.gesture.is_idle() {
            debug!(gesture = ?self.gesture, "pointer_down during active gesture ignored");
            return false;
        }
        if event.button == PointerButton::Secondary {
            return false;
        }

        let canvas_pos = self.screen_to_canvas(event.position);
        let hit = self.hit_tester.hit_test(&self.graph, canvas_pos);

        match hit {
            Some(node_id) if event.button == PointerButton::Primary => {
                if self.bindings.wants_connect(event) {
                    let reserved = self.graph.reserve_edge_id();
                    self.gesture.start_edge_drag(node_id, reserved, canvas_pos);
                    debug!(%node_id, %reserved, "Edge drag started");
                } else {
                    let Some(node) = self.graph.node(node_id) else {
                        return false;
                    };
                    // Keep the grab point under the pointer instead of snapping
                    // the node centre to it
                    let anchor_offset = canvas_pos - node.position;
                    self.gesture.start_node_drag(node_id, anchor_offset);
                    debug!(%node_id, "Node drag started");
                }
            }
            None if self.bindings.wants_pan(event) => {
                self.gesture.start_panning(event.position);
                debug!("Pan started");
            }
            _ => return false,
        }

        self.notify(Change::Gesture);
        true
    }

    /// Secondary-button shortcut: open the properties panel for the node under
    /// the pointer. Does not touch the active gesture.
    pub fn context_menu(&mut self, event: &PointerEvent) -> Option<NodeId> {
        let canvas_pos = self.screen_to_canvas(event.position);
        let node_id = self.hit_tester.hit_test(&self.graph, canvas_pos)?;
        self.open_edit_panel(node_id, event.position);
        Some(node_id)
    }

    /// Start moving the open panel. `event.position` is where it was grabbed.
    pub fn begin_panel_drag(&mut self, event: &PointerEvent) -> bool {
        if !self.gesture.is_idle() || !self.panel.is_open() {
            return false;
        }
        let grab_offset = event.position - self.panel.state().anchor;
        self.gesture.start_panel_drag(grab_offset);
        self.notify(Change::Gesture);
        true
    }
}
