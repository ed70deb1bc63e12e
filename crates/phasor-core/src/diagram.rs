use phasor_protocol::{DrawInstruction, Point};
use tracing::debug;

use crate::geometry::Anchor;
use crate::style::Palette;
use crate::wave::SampledPath;
use crate::{DEFAULT_INITIAL_ANGLE_DEGREES, DEFAULT_STEP_DEGREES, RADIUS_MARGIN};

const LABEL_LEFT: f32 = 100.0;
const LABEL_TOP: f32 = 100.0;
const LABEL_RIGHT: f32 = 500.0;
const LABEL_BOTTOM: f32 = 200.0;
const LABEL_TEXT_ORIGIN: Point = Point::new(120.0, 170.0);
const PROJECTION_DOT_RADIUS: f32 = 10.0;
const WAVE_TEXT_H_OFFSET: f32 = 1000.0;
const WAVE_TEXT_V_OFFSET: f32 = -20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramState {
    pub angle_degrees: f32,
    pub radius: f32,
    pub width: f32,
    pub height: f32,
}

impl DiagramState {
    pub fn new(angle_degrees: f32) -> Self {
        Self {
            angle_degrees,
            radius: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn angle_radians(&self) -> f32 {
        self.angle_degrees.to_radians()
    }

    /// Radius used for drawing; a negative radius collapses to zero.
    pub fn effective_radius(&self) -> f32 {
        self.radius.max(0.0)
    }
}

/// Radius of the reference circle for a surface: the smaller of half the
/// width and a quarter of the height, inset by [`RADIUS_MARGIN`].
pub fn radius_for_surface(width: f32, height: f32) -> f32 {
    let base = if width < height / 2.0 {
        width / 2.0
    } else {
        height / 4.0
    };
    base - RADIUS_MARGIN
}

#[derive(Clone, Debug, PartialEq)]
pub struct Captions {
    pub label: String,
    pub wave: String,
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            label: "Exponential function & rotating vector".to_owned(),
            wave: "I love you".to_owned(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RotatingVectorDiagram {
    state: DiagramState,
    step_degrees: f32,
    captions: Captions,
    palette: Palette,
}

impl RotatingVectorDiagram {
    pub fn new() -> Self {
        Self::with_angle(DEFAULT_INITIAL_ANGLE_DEGREES)
    }

    pub fn with_angle(angle_degrees: f32) -> Self {
        Self {
            state: DiagramState::new(angle_degrees),
            step_degrees: DEFAULT_STEP_DEGREES,
            captions: Captions::default(),
            palette: Palette::default(),
        }
    }

    pub fn with_step(mut self, step_degrees: f32) -> Self {
        self.step_degrees = step_degrees;
        self
    }

    pub fn with_captions(mut self, captions: Captions) -> Self {
        self.captions = captions;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn state(&self) -> &DiagramState {
        &self.state
    }

    pub fn angle_degrees(&self) -> f32 {
        self.state.angle_degrees
    }

    pub fn radius(&self) -> f32 {
        self.state.radius
    }

    pub fn step_degrees(&self) -> f32 {
        self.step_degrees
    }

    pub fn captions(&self) -> &Captions {
        &self.captions
    }

    /// Radius used for drawing; an undersized surface collapses to zero.
    pub fn effective_radius(&self) -> f32 {
        self.state.effective_radius()
    }

    pub fn on_surface_resized(&mut self, width: f32, height: f32) {
        self.state.width = width;
        self.state.height = height;
        self.state.radius = radius_for_surface(width, height);
        debug!(width, height, radius = self.state.radius, "diagram surface resized");
    }

    pub fn tick(&mut self) {
        self.tick_by(self.step_degrees);
    }

    pub fn tick_by(&mut self, delta_degrees: f32) {
        self.state.angle_degrees += delta_degrees;
    }

    /// Centre of the surface; origin of the cross-hair and the wave.
    pub fn mid_anchor(&self) -> Anchor {
        Anchor::new(self.state.width / 2.0, self.state.height / 2.0)
    }

    /// Three-quarter-height anchor; origin of the circle and the vector.
    pub fn lower_anchor(&self) -> Anchor {
        Anchor::new(self.state.width / 2.0, self.state.height / 4.0 * 3.0)
    }

    pub fn sampled_path(&self) -> SampledPath {
        SampledPath::sample(
            self.effective_radius(),
            self.state.angle_radians(),
            self.state.height,
        )
    }

    /// Tip of the rotating vector in surface space.
    pub fn vector_tip(&self) -> Point {
        self.lower_anchor()
            .place_rotated(self.effective_radius(), 0.0, -self.state.angle_degrees)
    }

    /// Horizontal offset of both projection dots from their anchors.
    pub fn projection_x(&self) -> f32 {
        self.effective_radius() * self.state.angle_radians().cos()
    }

    pub fn render(&self) -> Vec<DrawInstruction> {
        let mut out = Vec::with_capacity(14);
        self.draw_axes(&mut out);
        self.draw_label(&mut out);
        self.draw_dashed_circle(&mut out);
        self.draw_vector(&mut out);
        self.draw_projections(&mut out);
        self.draw_wave(&mut out);
        out
    }

    fn draw_axes(&self, out: &mut Vec<DrawInstruction>) {
        let (w, h) = (self.state.width, self.state.height);
        let mid = self.mid_anchor();
        out.push(DrawInstruction::Line {
            from: mid.place(-w / 2.0, 0.0),
            to: mid.place(w / 2.0, 0.0),
            paint: self.palette.solid_line,
        });
        out.push(DrawInstruction::Line {
            from: mid.place(0.0, -h / 2.0),
            to: mid.place(0.0, h / 2.0),
            paint: self.palette.solid_line,
        });
        let lower = self.lower_anchor();
        out.push(DrawInstruction::Line {
            from: lower.place(-w / 2.0, 0.0),
            to: lower.place(w / 2.0, 0.0),
            paint: self.palette.solid_line,
        });
    }

    fn draw_label(&self, out: &mut Vec<DrawInstruction>) {
        out.push(DrawInstruction::Rect {
            left: LABEL_LEFT,
            top: LABEL_TOP,
            right: LABEL_RIGHT,
            bottom: LABEL_BOTTOM,
            paint: self.palette.solid_line,
        });
        out.push(DrawInstruction::Text {
            text: self.captions.label.clone(),
            origin: LABEL_TEXT_ORIGIN,
            paint: self.palette.text,
        });
    }

    fn draw_dashed_circle(&self, out: &mut Vec<DrawInstruction>) {
        out.push(DrawInstruction::Circle {
            center: self.lower_anchor().origin,
            radius: self.effective_radius(),
            paint: self.palette.dashed_line,
        });
    }

    fn draw_vector(&self, out: &mut Vec<DrawInstruction>) {
        out.push(DrawInstruction::Line {
            from: self.lower_anchor().origin,
            to: self.vector_tip(),
            paint: self.palette.vector_line,
        });
    }

    fn draw_projections(&self, out: &mut Vec<DrawInstruction>) {
        let x = self.projection_x();
        let y = self.effective_radius() * self.state.angle_radians().sin();
        let mid = self.mid_anchor();
        let lower = self.lower_anchor();
        out.push(DrawInstruction::Circle {
            center: mid.place(x, 0.0),
            radius: PROJECTION_DOT_RADIUS,
            paint: self.palette.fill_circle,
        });
        out.push(DrawInstruction::Circle {
            center: lower.place(x, 0.0),
            radius: PROJECTION_DOT_RADIUS,
            paint: self.palette.fill_circle,
        });

        // Both segments hang off the vector tip: down to the lower axis, and
        // up to the wave baseline a quarter height above it.
        let tip = lower.translated(x, -y);
        out.push(DrawInstruction::Line {
            from: tip.origin,
            to: tip.place(0.0, y),
            paint: self.palette.solid_line,
        });
        out.push(DrawInstruction::Line {
            from: tip.origin,
            to: tip.place(0.0, -self.state.height / 4.0 + y),
            paint: self.palette.dashed_line,
        });
    }

    fn draw_wave(&self, out: &mut Vec<DrawInstruction>) {
        let points = self.sampled_path().placed(&self.mid_anchor());
        out.push(DrawInstruction::Path {
            points: points.clone(),
            paint: self.palette.vector_line,
        });
        out.push(DrawInstruction::TextOnPath {
            text: self.captions.wave.clone(),
            points,
            h_offset: WAVE_TEXT_H_OFFSET,
            v_offset: WAVE_TEXT_V_OFFSET,
            paint: self.palette.text,
        });
    }
}

impl Default for RotatingVectorDiagram {
    fn default() -> Self {
        Self::new()
    }
}
