pub mod diagram;
pub mod geometry;
pub mod style;
pub mod wave;

pub use diagram::{Captions, DiagramState, RotatingVectorDiagram};
pub use geometry::Anchor;
pub use style::Palette;
pub use wave::SampledPath;

pub use phasor_protocol::{DrawInstruction, Point};

/// Degrees added to the angle by one default tick.
pub const DEFAULT_STEP_DEGREES: f32 = 5.0;
/// Angle the diagram starts at before any tick.
pub const DEFAULT_INITIAL_ANGLE_DEGREES: f32 = 10.0;
/// Inset between the circle and the constraining surface edge.
pub const RADIUS_MARGIN: f32 = 20.0;
