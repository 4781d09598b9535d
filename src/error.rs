//! Error types for graph, settings and script operations.
//!
//! None of these are fatal to the editor. Interaction handlers log and drop
//! them; they exist so callers that care can see why a request had no effect.

use crate::types::{EdgeId, NodeId};
use thiserror::Error;

/// Reasons an edge insert was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeError {
    /// An edge with the same unordered end pair already exists
    #[error("edge between these nodes already exists ({existing})")]
    Duplicate { existing: EdgeId },

    /// Both ends name the same node
    #[error("self-loop on node {0}")]
    SelfLoop(NodeId),

    /// One of the ends does not refer to a live node
    #[error("edge endpoint {0} does not exist")]
    MissingEndpoint(NodeId),
}

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while loading a seed graph or an input script
#[derive(Error, Debug)]
pub enum ScriptError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
