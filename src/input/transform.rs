//! Zoom and coordinate helpers on the editor.
//!
//! Wheel input always zooms; panning is a drag gesture. Wheel and button
//! zoom both keep the viewport offset and only change the scale, so the
//! top-left canvas point stays put.

use super::{CoordinateContext, CoordinateConverter};
use crate::constants::WHEEL_LINE_HEIGHT;
use crate::editor::{Change, Editor};
use crate::types::{CanvasPoint, CanvasRect, NodeId, ScreenPoint};
use crate::viewport::ZoomDirection;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Vertical wheel movement as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelDelta {
    Pixels(f32),
    Lines(f32),
}

impl WheelDelta {
    /// Delta in pixels, positive meaning "scroll down" (zoom out).
    pub fn pixels(self) -> f32 {
        match self {
            Self::Pixels(px) => px,
            Self::Lines(lines) => lines * WHEEL_LINE_HEIGHT,
        }
    }
}

impl Editor {
    pub fn screen_to_canvas(&self, screen: ScreenPoint) -> CanvasPoint {
        let viewport = self.viewport.viewport();
        let ctx = CoordinateContext::new(&viewport, self.surface.as_ref());
        CoordinateConverter::screen_to_canvas(screen, &ctx)
    }

    pub fn canvas_to_screen(&self, canvas: CanvasPoint) -> ScreenPoint {
        let viewport = self.viewport.viewport();
        let ctx = CoordinateContext::new(&viewport, self.surface.as_ref());
        CoordinateConverter::canvas_to_screen(canvas, &ctx)
    }

    /// Wheel zoom. Returns true if the zoom changed.
    pub fn wheel(&mut self, delta: WheelDelta) -> bool {
        let px = delta.pixels();
        if !px.is_finite() || !self.viewport.apply_zoom_delta(px) {
            return false;
        }
        trace!(zoom = self.viewport.zoom(), "Wheel zoom");
        self.notify(Change::Viewport);
        true
    }

    /// Zoom-in/zoom-out button press.
    pub fn zoom_step(&mut self, direction: ZoomDirection) -> bool {
        if !self.viewport.apply_zoom_step(direction) {
            return false;
        }
        self.notify(Change::Viewport);
        true
    }

    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        if !self.viewport.set_zoom(zoom) {
            return false;
        }
        self.notify(Change::Viewport);
        true
    }

    /// Pan by a canvas-space delta.
    pub fn pan_by(&mut self, dx: f32, dy: f32) -> bool {
        if !self.viewport.pan(dx, dy) {
            return false;
        }
        self.notify(Change::Viewport);
        true
    }

    /// Back to zoom 1 at the origin.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.notify(Change::Viewport);
    }

    /// Canvas area covered by the surface; None while no surface is mounted.
    pub fn visible_rect(&self) -> Option<CanvasRect> {
        self.surface.as_ref().map(|surface| self.viewport.visible_rect(surface))
    }

    /// Nodes whose hit circle overlaps the visible area, for render culling.
    /// Every node counts as visible while no surface is mounted.
    pub fn visible_nodes(&self) -> Vec<NodeId> {
        match self.visible_rect() {
            Some(rect) => self.graph.spatial_index().query_rect(rect.min, rect.max),
            None => self.graph.nodes().iter().map(|n| n.id).collect(),
        }
    }
}
