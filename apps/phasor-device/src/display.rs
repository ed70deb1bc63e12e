//! Surface geometry helpers shared by the widgets.

use phasor_core::diagram::radius_for_surface;
use phasor_protocol::{Point, TouchEvent};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when the diagram circle would collapse on this surface.
    pub fn is_degenerate(&self) -> bool {
        radius_for_surface(self.width, self.height) <= 0.0
    }
}

/// Project a raw touch sample onto the surface, clamping it to the last
/// pixel. Returns `None` for non-finite samples.
pub fn clamp_and_validate_touch(surface: SurfaceSize, event: &TouchEvent) -> Option<Point> {
    if !event.x.is_finite() || !event.y.is_finite() {
        return None;
    }
    let x = event.x.clamp(0.0, (surface.width - 1.0).max(0.0));
    let y = event.y.clamp(0.0, (surface.height - 1.0).max(0.0));
    Some(Point::new(x, y))
}
