use phasor_protocol::Point;

use crate::geometry::Anchor;

/// Points traced per frame.
pub const SAMPLE_COUNT: usize = 50;
/// Phase step between consecutive samples, in radians.
pub const SAMPLE_PHASE_STEP: f32 = -0.15;

/// The traced wave for one frame, relative to the mid-surface anchor.
/// Rebuilt from scratch on every render.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledPath {
    points: Vec<Point>,
}

impl SampledPath {
    pub fn sample(radius: f32, angle_radians: f32, height: f32) -> Self {
        let dy = height / 2.0 / SAMPLE_COUNT as f32;
        let points = (0..SAMPLE_COUNT)
            .map(|i| {
                let x = radius * (i as f32 * SAMPLE_PHASE_STEP + angle_radians).cos();
                Point::new(x, -dy * i as f32)
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn placed(&self, anchor: &Anchor) -> Vec<Point> {
        self.points.iter().map(|p| anchor.place(p.x, p.y)).collect()
    }
}
