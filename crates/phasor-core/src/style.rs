use phasor_protocol::{Color, Paint};

/// Paints used by the rotating-vector diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub solid_line: Paint,
    pub dashed_line: Paint,
    pub vector_line: Paint,
    pub fill_circle: Paint,
    pub text: Paint,
}

impl Palette {
    pub const fn new() -> Self {
        Self {
            solid_line: Paint::stroke(Color::WHITE, 5.0),
            dashed_line: Paint::stroke(Color::YELLOW, 0.0).dashed(10.0, 10.0),
            vector_line: Paint::stroke(Color::TEAL_200, 5.0),
            fill_circle: Paint::fill(Color::WHITE),
            text: Paint::text(Color::WHITE, 40.0, true),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
