//! Editor-wide constants.
//!
//! Centralizes the default tuning values for zoom, hit testing and gestures so
//! the settings layer and the tests agree on a single source.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom change per pixel of wheel delta
pub const WHEEL_ZOOM_SENSITIVITY: f32 = 0.002;

/// Zoom step for the +/- buttons
pub const ZOOM_BUTTON_STEP: f32 = 0.1;

/// Pixels per line when a wheel reports line deltas
pub const WHEEL_LINE_HEIGHT: f32 = 20.0;

// ============================================================================
// Nodes
// ============================================================================

/// Radius of a node's hit circle in canvas units
pub const DEFAULT_NODE_RADIUS: f32 = 50.0;

// ============================================================================
// Settings
// ============================================================================

/// Directory under the platform config dir holding our files
pub const CONFIG_DIR_NAME: &str = "nodeboard";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
