//! Headless input replay.
//!
//! An [`InputScript`] is a JSON list of steps, each tagged by `"op"`:
//!
//! ```json
//! { "steps": [
//!     { "op": "pointer_down", "x": 100, "y": 150, "modifiers": { "shift": true } },
//!     { "op": "pointer_move", "x": 600, "y": 600 },
//!     { "op": "pointer_up", "x": 600, "y": 600 },
//!     { "op": "submit_create", "name": "X" }
//! ] }
//! ```
//!
//! Steps feed the same editor entry points a host would, so a script exercises
//! exactly what interactive use does.

use crate::editor::Editor;
use crate::error::ScriptError;
use crate::input::{Modifiers, PointerButton, PointerEvent, SurfaceBounds, WheelDelta};
use crate::types::{NodeId, ScreenPoint};
use crate::viewport::ZoomDirection;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    PointerDown {
        x: f32,
        y: f32,
        #[serde(default)]
        button: PointerButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp {
        x: f32,
        y: f32,
    },
    ContextMenu {
        x: f32,
        y: f32,
    },
    PanelGrab {
        x: f32,
        y: f32,
    },
    Wheel {
        delta: WheelDelta,
    },
    ZoomStep {
        direction: ZoomDirection,
    },
    ResetView,
    SetSurface {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    OpenCreatePanel {
        #[serde(default)]
        anchor_node: Option<NodeId>,
        x: f32,
        y: f32,
    },
    SubmitCreate {
        name: String,
    },
    SubmitEdit {
        name: String,
    },
    SubmitDelete,
    SelectSuggestion {
        label: String,
    },
    ClosePanel,
}

impl InputScript {
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Replay every step against `editor`, in order.
    pub fn run(&self, editor: &mut Editor) {
        for (i, step) in self.steps.iter().enumerate() {
            debug!(step = i, ?step, "Replaying");
            step.apply(editor);
        }
    }
}

impl ScriptStep {
    pub fn apply(&self, editor: &mut Editor) {
        match self {
            Self::PointerDown {
                x,
                y,
                button,
                modifiers,
            } => {
                let event = PointerEvent::at(*x, *y)
                    .with_button(*button)
                    .with_modifiers(*modifiers);
                editor.pointer_down(&event);
            }
            Self::PointerMove { x, y } => {
                editor.pointer_move(&PointerEvent::at(*x, *y));
            }
            Self::PointerUp { x, y } => {
                editor.pointer_up(&PointerEvent::at(*x, *y));
            }
            Self::ContextMenu { x, y } => {
                editor.context_menu(&PointerEvent::at(*x, *y).with_button(PointerButton::Secondary));
            }
            Self::PanelGrab { x, y } => {
                editor.begin_panel_drag(&PointerEvent::at(*x, *y));
            }
            Self::Wheel { delta } => {
                editor.wheel(*delta);
            }
            Self::ZoomStep { direction } => {
                editor.zoom_step(*direction);
            }
            Self::ResetView => editor.reset_view(),
            Self::SetSurface { x, y, width, height } => {
                editor.set_surface(Some(SurfaceBounds::new(ScreenPoint::new(*x, *y), *width, *height)));
            }
            Self::OpenCreatePanel { anchor_node, x, y } => {
                editor.open_create_panel(*anchor_node, ScreenPoint::new(*x, *y));
            }
            Self::SubmitCreate { name } => {
                editor.submit_create(name);
            }
            Self::SubmitEdit { name } => {
                editor.submit_edit(name);
            }
            Self::SubmitDelete => {
                editor.submit_delete();
            }
            Self::SelectSuggestion { label } => {
                editor.select_suggestion(label);
            }
            Self::ClosePanel => editor.close_panel(),
        }
    }
}
