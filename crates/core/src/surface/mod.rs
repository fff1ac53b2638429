use crate::{GazeTimeline, MarkerStyle};

/// Width of the fixed source coordinate space gaze samples are recorded in
/// (the Neon scene camera).
pub const REFERENCE_WIDTH: f64 = 1600.0;
/// Height of the fixed source coordinate space gaze samples are recorded in.
pub const REFERENCE_HEIGHT: f64 = 1200.0;

/// A point in render-surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

/// Drawing surface whose pixel dimensions track the media's native
/// resolution.
///
/// The host owns the actual pixels (a canvas, a frame buffer, a file sink in
/// headless runs); the core only clears it and paints one stroked circle per
/// drawn frame.
pub trait OverlaySurface {
    /// Resizes the surface, normally once when media metadata arrives.
    fn resize(&mut self, width: u32, height: u32);

    /// Current pixel dimensions.
    fn size(&self) -> (u32, u32);

    /// Erases the whole surface.
    fn clear(&mut self);

    /// Paints one stroked circle at `point` using the given style snapshot.
    fn stroke_circle(&mut self, point: SurfacePoint, style: &MarkerStyle);
}

/// Scales a gaze coordinate from the reference space into surface space with
/// independent horizontal and vertical ratios.
///
/// A zero reference dimension substitutes a unit ratio instead of dividing.
/// Returns `None` when the scaled point is not finite; such points are never
/// drawn.
pub fn scale_point(
    x: f64,
    y: f64,
    reference: (f64, f64),
    surface: (u32, u32),
) -> Option<SurfacePoint> {
    let ratio_x = if reference.0 == 0.0 {
        1.0
    } else {
        surface.0 as f64 / reference.0
    };
    let ratio_y = if reference.1 == 0.0 {
        1.0
    } else {
        surface.1 as f64 / reference.1
    };

    let point = SurfacePoint {
        x: x * ratio_x,
        y: y * ratio_y,
    };
    (point.x.is_finite() && point.y.is_finite()).then_some(point)
}

/// Draws one overlay frame: clear, then paint the active sample scaled from
/// the reference space, using the style passed in at call time.
///
/// An empty timeline clears the surface and draws nothing.
pub fn draw_frame(timeline: &GazeTimeline, surface: &mut dyn OverlaySurface, style: &MarkerStyle) {
    surface.clear();

    let Some(sample) = timeline.active() else {
        return;
    };

    let reference = (REFERENCE_WIDTH, REFERENCE_HEIGHT);
    if let Some(point) = scale_point(sample.x, sample.y, reference, surface.size()) {
        surface.stroke_circle(point, style);
    }
}
