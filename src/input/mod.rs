//! Pointer, wheel and context-menu input for the canvas.
//!
//! This module implements the interaction state machine: moving nodes,
//! dragging out edges, panning, and moving the contextual panel.
//!
//! ## Architecture
//!
//! The active gesture is one explicit value (`GestureState`) stored on the
//! [`Editor`](crate::editor::Editor). Handlers read it, act, and replace it;
//! there are no flags spread across the editor.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `events` - Pointer events, modifiers and input bindings
//! - `coords` - Screen/canvas coordinate conversion
//! - `mouse_down` - Pointer down and context menu (gesture start, panels)
//! - `drag` - Pointer move (node move, edge preview, pan, panel move)
//! - `mouse_up` - Pointer up (edge target resolution, gesture end)
//! - `transform` - Wheel/button zoom and coordinate helpers on the editor

pub mod coords;
mod drag;
mod events;
mod mouse_down;
mod mouse_up;
mod state;
mod transform;

pub use coords::{CoordinateContext, CoordinateConverter, SurfaceBounds};
pub use events::{InputBindings, Modifier, Modifiers, PointerButton, PointerEvent};
pub use state::GestureState;
pub use mouse_up::PointerUpOutcome;
pub use transform::WheelDelta;
