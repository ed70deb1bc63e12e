use serde::{Deserialize, Serialize};

/// Absolute surface coordinate. `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// 32-bit ARGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const YELLOW: Color = Color(0xFFFF_FF00);
    pub const MAGENTA: Color = Color(0xFFFF_00FF);
    pub const GRAY: Color = Color(0xFF88_8888);
    pub const TEAL_200: Color = Color(0xFF03_DAC5);

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintStyle {
    Fill,
    Stroke,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub on: f32,
    pub off: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<DashPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f32>,
    #[serde(default)]
    pub bold: bool,
}

impl Paint {
    pub const fn stroke(color: Color, stroke_width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width,
            dash: None,
            text_size: None,
            bold: false,
        }
    }

    pub const fn fill(color: Color) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            dash: None,
            text_size: None,
            bold: false,
        }
    }

    pub const fn text(color: Color, text_size: f32, bold: bool) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            dash: None,
            text_size: Some(text_size),
            bold,
        }
    }

    pub const fn dashed(mut self, on: f32, off: f32) -> Self {
        self.dash = Some(DashPattern { on, off });
        self
    }

    pub fn is_dashed(&self) -> bool {
        self.dash.is_some()
    }
}

/// One renderer-neutral drawing primitive. Coordinates are absolute; a
/// consumer never needs a transform stack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawInstruction {
    Clear {
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f32,
        paint: Paint,
    },
    Rect {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        paint: Paint,
    },
    Text {
        text: String,
        origin: Point,
        paint: Paint,
    },
    /// Polyline through `points`, in order.
    Path {
        points: Vec<Point>,
        paint: Paint,
    },
    TextOnPath {
        text: String,
        points: Vec<Point>,
        h_offset: f32,
        v_offset: f32,
        paint: Paint,
    },
    /// Icon resource identified by name; the host loads and scales it into
    /// the given bounds.
    Icon {
        name: String,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    },
}

impl DrawInstruction {
    pub fn op_name(&self) -> &'static str {
        match self {
            DrawInstruction::Clear { .. } => "clear",
            DrawInstruction::Line { .. } => "line",
            DrawInstruction::Circle { .. } => "circle",
            DrawInstruction::Rect { .. } => "rect",
            DrawInstruction::Text { .. } => "text",
            DrawInstruction::Path { .. } => "path",
            DrawInstruction::TextOnPath { .. } => "text_on_path",
            DrawInstruction::Icon { .. } => "icon",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub v: u8,
    pub seq: u64,
    pub angle_degrees: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at_ms: Option<u64>,
    pub instructions: Vec<DrawInstruction>,
}

impl Frame {
    pub fn new(seq: u64, angle_degrees: f32, width: f32, height: f32) -> Self {
        Self {
            v: 1,
            seq,
            angle_degrees,
            width,
            height,
            issued_at_ms: None,
            instructions: Vec::new(),
        }
    }

    pub fn with_instructions(mut self, instructions: Vec<DrawInstruction>) -> Self {
        self.instructions = instructions;
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Whether two frames draw the same thing, ignoring sequencing metadata.
    pub fn same_picture(&self, other: &Frame) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.instructions == other.instructions
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub pointer_id: u32,
    pub phase: TouchPhase,
    pub x: f32,
    pub y: f32,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self {
            pointer_id: 0,
            phase,
            x,
            y,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    Resume,
    Pause,
    Destroy,
}
