//! User settings - zoom limits, node size and input bindings.
//!
//! Stored as JSON at `<config dir>/nodeboard/settings.json`. Every field has a
//! default, so a partial file (or none at all) is fine.

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_NODE_RADIUS, SETTINGS_FILE_NAME};
use crate::error::SettingsResult;
use crate::input::InputBindings;
use crate::viewport::ZoomConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub zoom: ZoomConfig,
    /// Hit radius of a node in canvas units
    pub node_radius: f32,
    pub bindings: InputBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            zoom: ZoomConfig::default(),
            node_radius: DEFAULT_NODE_RADIUS,
            bindings: InputBindings::default(),
        }
    }
}

impl Settings {
    /// Platform settings location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    pub fn load(path: &Path) -> SettingsResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path` (or the default location), falling back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Repair values that would break the viewport or hit testing.
    pub fn validated(mut self) -> Self {
        self.zoom = self.zoom.normalized();
        if !(self.node_radius > 0.0 && self.node_radius.is_finite()) {
            self.node_radius = DEFAULT_NODE_RADIUS;
        }
        self
    }
}
