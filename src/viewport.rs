//! Viewport controller - pan offset and zoom level.
//!
//! The viewport is the window of canvas space that is currently visible.
//! `offset` is the canvas point shown at the surface's top-left corner and
//! `zoom` is screen pixels per canvas unit, so the visible window spans
//! `[offset, offset + surface_size / zoom]`.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_SENSITIVITY, ZOOM_BUTTON_STEP};
use crate::input::SurfaceBounds;
use crate::types::{CanvasPoint, CanvasRect};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Current pan/zoom.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub offset: CanvasPoint,
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: CanvasPoint::ORIGIN,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Zoom limits and step sizes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min: f32,
    pub max: f32,
    /// Zoom change per unit of wheel delta
    pub wheel_sensitivity: f32,
    /// Zoom change per +/- button press
    pub button_step: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
            wheel_sensitivity: WHEEL_ZOOM_SENSITIVITY,
            button_step: ZOOM_BUTTON_STEP,
        }
    }
}

impl ZoomConfig {
    /// Repair the bounds so `clamp` is always defined: a bound that is not a
    /// positive finite number falls back to its default, and an inverted
    /// range is swapped.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.min > 0.0 && self.min.is_finite()) {
            self.min = defaults.min;
        }
        if !(self.max > 0.0 && self.max.is_finite()) {
            self.max = defaults.max;
        }
        if self.min > self.max {
            std::mem::swap(&mut self.min, &mut self.max);
        }
        self
    }

    #[inline]
    pub fn clamp(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min, self.max)
    }
}

/// Direction of a discrete zoom button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomDirection {
    In,
    Out,
}

pub struct ViewportController {
    viewport: Viewport,
    config: ZoomConfig,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

impl ViewportController {
    pub fn new(config: ZoomConfig) -> Self {
        let config = config.normalized();
        Self {
            viewport: Viewport {
                offset: CanvasPoint::ORIGIN,
                zoom: config.clamp(DEFAULT_ZOOM),
            },
            config,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn zoom(&self) -> f32 {
        self.viewport.zoom
    }

    pub fn offset(&self) -> CanvasPoint {
        self.viewport.offset
    }

    /// Apply a wheel delta. Positive deltas zoom out.
    ///
    /// Returns false when the clamped result equals the current zoom.
    pub fn apply_zoom_delta(&mut self, delta: f32) -> bool {
        let target = self.viewport.zoom - delta * self.config.wheel_sensitivity;
        self.set_zoom(target)
    }

    /// Apply one +/- button press.
    pub fn apply_zoom_step(&mut self, direction: ZoomDirection) -> bool {
        let step = match direction {
            ZoomDirection::In => self.config.button_step,
            ZoomDirection::Out => -self.config.button_step,
        };
        self.set_zoom(self.viewport.zoom + step)
    }

    /// Set zoom directly, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        let zoom = self.config.clamp(zoom);
        if zoom == self.viewport.zoom {
            return false;
        }
        trace!(from = self.viewport.zoom, to = zoom, "Zoom changed");
        self.viewport.zoom = zoom;
        true
    }

    /// Move the visible window. Deltas are canvas units; dragging right
    /// (positive dx) moves the window left.
    pub fn pan(&mut self, dx: f32, dy: f32) -> bool {
        if !(dx.is_finite() && dy.is_finite()) || (dx == 0.0 && dy == 0.0) {
            return false;
        }
        self.viewport.offset = self.viewport.offset - CanvasPoint::new(dx, dy);
        true
    }

    pub fn reset(&mut self) {
        self.viewport = Viewport {
            offset: CanvasPoint::ORIGIN,
            zoom: self.config.clamp(DEFAULT_ZOOM),
        };
    }

    /// The region of canvas space visible on `surface`.
    pub fn visible_rect(&self, surface: &SurfaceBounds) -> CanvasRect {
        let Viewport { offset, zoom } = self.viewport;
        CanvasRect {
            min: offset,
            max: CanvasPoint::new(offset.x + surface.width / zoom, offset.y + surface.height / zoom),
        }
    }
}
