//! Touch-driven canvas that splats concentric rings around the touch point.

use phasor_protocol::{Color, DrawInstruction, Paint, TouchEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::display::{clamp_and_validate_touch, SurfaceSize};

pub const DEFAULT_RINGS: u32 = 2000;
const RING_STROKE_WIDTH: f32 = 5.0;
const RING_SPACING_DIVISOR: f32 = 5.0;

pub const RING_COLORS: [Color; 6] = [
    Color::RED,
    Color::GREEN,
    Color::YELLOW,
    Color::MAGENTA,
    Color::BLUE,
    Color::GRAY,
];

pub struct SplatterCanvas {
    surface: SurfaceSize,
    rng: StdRng,
    rings: u32,
}

impl SplatterCanvas {
    pub fn new(surface: SurfaceSize, seed: u64) -> Self {
        Self {
            surface,
            rng: StdRng::seed_from_u64(seed),
            rings: DEFAULT_RINGS,
        }
    }

    pub fn with_rings(mut self, rings: u32) -> Self {
        self.rings = rings;
        self
    }

    pub fn rings(&self) -> u32 {
        self.rings
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Clear to black, then draw every ring centred on the touch, clamped to
    /// the surface. Non-finite touches draw nothing.
    pub fn on_touch(&mut self, event: &TouchEvent) -> Vec<DrawInstruction> {
        let Some(center) = clamp_and_validate_touch(self.surface, event) else {
            debug!(x = event.x, y = event.y, "splatter touch rejected");
            return Vec::new();
        };
        let mut out = Vec::with_capacity(self.rings as usize + 1);
        out.push(DrawInstruction::Clear {
            color: Color::BLACK,
        });
        for i in 0..self.rings {
            let color = RING_COLORS[self.rng.random_range(0..RING_COLORS.len())];
            out.push(DrawInstruction::Circle {
                center,
                radius: i as f32 / RING_SPACING_DIVISOR,
                paint: Paint::stroke(color, RING_STROKE_WIDTH),
            });
        }
        debug!(x = center.x, y = center.y, rings = self.rings, "splatter drawn");
        out
    }
}
