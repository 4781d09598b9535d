//! Nodeboard - the engine behind an interactive node/edge diagram editor.
//!
//! The crate owns the diagram model and the interaction logic; drawing is left
//! to the host. A host forwards pointer, wheel and panel events into an
//! [`Editor`], subscribes to [`Change`] notifications, and renders from
//! [`Editor::snapshot`].
//!
//! ## Modules
//!
//! - `graph` - Node/edge store with id allocation and cascade delete
//! - `viewport` - Pan offset and clamped zoom
//! - `input` - Coordinate conversion and the gesture state machine
//! - `panel` - The single contextual create/properties panel
//! - `hit_testing` - Which node is under a canvas point
//! - `editor` - The container tying the above together
//! - `settings` - JSON user settings
//! - `script` - Headless input replay

pub mod constants;
pub mod editor;
pub mod error;
pub mod graph;
pub mod hit_testing;
pub mod input;
pub mod panel;
pub mod perf;
pub mod script;
pub mod settings;
pub mod spatial_index;
pub mod types;
pub mod viewport;

pub use editor::{Change, EdgePreview, Editor, EditorSnapshot};
pub use error::{EdgeError, ScriptError, SettingsError};
pub use graph::{GraphSeed, GraphStore};
pub use settings::Settings;
pub use types::{CanvasPoint, Edge, EdgeId, Node, NodeId, ScreenPoint};
