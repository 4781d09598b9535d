//! Unit tests for screen/canvas coordinate conversion.

use crate::helpers::{TestGraphBuilder, approx_eq};
use nodeboard::input::{CoordinateContext, CoordinateConverter, SurfaceBounds};
use nodeboard::viewport::Viewport;
use nodeboard::{CanvasPoint, ScreenPoint};

fn surface() -> SurfaceBounds {
    SurfaceBounds::new(ScreenPoint::new(40.0, 60.0), 800.0, 600.0)
}

#[test]
fn test_screen_to_canvas_formula() {
    let viewport = Viewport {
        offset: CanvasPoint::new(5.0, 5.0),
        zoom: 2.0,
    };
    let surface = SurfaceBounds::new(ScreenPoint::new(10.0, 20.0), 800.0, 600.0);
    let ctx = CoordinateContext::new(&viewport, Some(&surface));

    let canvas = CoordinateConverter::screen_to_canvas(ScreenPoint::new(110.0, 220.0), &ctx);
    assert_eq!(canvas, CanvasPoint::new(55.0, 105.0));
}

#[test]
fn test_round_trip_many_viewports() {
    let surface = surface();
    let viewports = [
        (0.0, 0.0, 1.0),
        (-250.0, 130.0, 0.1),
        (1000.0, -1000.0, 5.0),
        (12.5, 7.25, 0.37),
        (-3.0, -4.0, 2.6),
    ];
    let points = [
        (0.0, 0.0),
        (1.0, -1.0),
        (123.4, 567.8),
        (-900.0, 250.0),
        (4096.0, -2048.0),
    ];

    for &(ox, oy, zoom) in &viewports {
        let viewport = Viewport {
            offset: CanvasPoint::new(ox, oy),
            zoom,
        };
        let ctx = CoordinateContext::new(&viewport, Some(&surface));
        for &(x, y) in &points {
            let p = CanvasPoint::new(x, y);
            let back = CoordinateConverter::screen_to_canvas(CoordinateConverter::canvas_to_screen(p, &ctx), &ctx);
            let tolerance = 1e-3 * (1.0 + x.abs().max(y.abs()));
            assert!(
                (back.x - p.x).abs() <= tolerance && (back.y - p.y).abs() <= tolerance,
                "round trip {p:?} -> {back:?} at offset ({ox}, {oy}) zoom {zoom}"
            );
        }
    }
}

#[test]
fn test_unmounted_surface_is_identity() {
    let viewport = Viewport {
        offset: CanvasPoint::new(300.0, 300.0),
        zoom: 3.0,
    };
    let ctx = CoordinateContext::new(&viewport, None);

    assert_eq!(
        CoordinateConverter::screen_to_canvas(ScreenPoint::new(12.0, 34.0), &ctx),
        CanvasPoint::new(12.0, 34.0)
    );
    assert_eq!(
        CoordinateConverter::canvas_to_screen(CanvasPoint::new(12.0, 34.0), &ctx),
        ScreenPoint::new(12.0, 34.0)
    );
}

#[test]
fn test_editor_conversion_uses_current_viewport() {
    let mut editor = TestGraphBuilder::new()
        .with_zoom(2.0)
        .with_offset(100.0, 50.0)
        .with_surface((0.0, 0.0), 800.0, 600.0)
        .build();

    let canvas = editor.screen_to_canvas(ScreenPoint::new(200.0, 100.0));
    assert!(approx_eq(canvas.x, 200.0) && approx_eq(canvas.y, 100.0));

    editor.set_surface(None);
    assert_eq!(editor.screen_to_canvas(ScreenPoint::new(200.0, 100.0)), CanvasPoint::new(200.0, 100.0));
}

