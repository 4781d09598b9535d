//! Coordinate conversion between screen and canvas space.
//!
//! All conversions go through [`CoordinateConverter`] so the affine formula
//! lives in one place:
//!
//! ```text
//! canvas = (screen - surface.origin) / zoom + offset
//! screen = (canvas - offset) * zoom + surface.origin
//! ```
//!
//! Until a rendering surface is mounted there is nothing to measure against,
//! and both directions return the input unchanged.

use crate::types::{CanvasPoint, ScreenPoint};
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};

/// Where the canvas is drawn, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    /// Screen position of the surface's top-left corner
    pub origin: ScreenPoint,
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    pub fn new(origin: ScreenPoint, width: f32, height: f32) -> Self {
        Self { origin, width, height }
    }
}

/// Context needed for coordinate conversions
pub struct CoordinateContext<'a> {
    pub viewport: &'a Viewport,
    pub surface: Option<&'a SurfaceBounds>,
}

impl<'a> CoordinateContext<'a> {
    #[inline]
    pub fn new(viewport: &'a Viewport, surface: Option<&'a SurfaceBounds>) -> Self {
        Self { viewport, surface }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert screen position to canvas position
    #[inline]
    pub fn screen_to_canvas(screen_pos: ScreenPoint, ctx: &CoordinateContext<'_>) -> CanvasPoint {
        let Some(surface) = ctx.surface else {
            return CanvasPoint::new(screen_pos.x, screen_pos.y);
        };
        let Viewport { offset, zoom } = *ctx.viewport;
        CanvasPoint::new(
            (screen_pos.x - surface.origin.x) / zoom + offset.x,
            (screen_pos.y - surface.origin.y) / zoom + offset.y,
        )
    }

    /// Convert canvas position to screen position
    #[inline]
    pub fn canvas_to_screen(canvas_pos: CanvasPoint, ctx: &CoordinateContext<'_>) -> ScreenPoint {
        let Some(surface) = ctx.surface else {
            return ScreenPoint::new(canvas_pos.x, canvas_pos.y);
        };
        let Viewport { offset, zoom } = *ctx.viewport;
        ScreenPoint::new(
            (canvas_pos.x - offset.x) * zoom + surface.origin.x,
            (canvas_pos.y - offset.y) * zoom + surface.origin.y,
        )
    }

    /// Convert a delta from screen to canvas (for drag operations)
    #[inline]
    pub fn delta_screen_to_canvas(delta: ScreenPoint, zoom: f32) -> CanvasPoint {
        CanvasPoint::new(delta.x / zoom, delta.y / zoom)
    }
}
