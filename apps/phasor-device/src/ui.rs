use phasor_config::TextFieldConfig;
use phasor_protocol::{Color, DrawInstruction, Paint, Point, TouchEvent, TouchPhase};

pub const CLEAR_ICON: &str = "clear";
const DEFAULT_ICON_SIZE: f32 = 48.0;
const FIELD_TEXT_SIZE: f32 = 40.0;

/// Rectangular touch region. Edges are exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTarget {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl HitTarget {
    pub fn hit(&self, p: Point) -> bool {
        p.x > self.x && p.x < self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldAction {
    None,
    Cleared,
}

/// Single-line text field with a trailing clear icon, shown only while the
/// field holds text.
#[derive(Clone, Debug)]
pub struct ClearableTextField {
    text: String,
    width: f32,
    height: f32,
    icon_width: f32,
    icon_height: f32,
}

impl ClearableTextField {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_icon_size(width, height, DEFAULT_ICON_SIZE, DEFAULT_ICON_SIZE)
    }

    pub fn with_icon_size(width: f32, height: f32, icon_width: f32, icon_height: f32) -> Self {
        Self {
            text: String::new(),
            width,
            height,
            icon_width,
            icon_height,
        }
    }

    pub fn from_config(width: f32, height: f32, config: &TextFieldConfig) -> Self {
        Self::with_icon_size(width, height, config.icon_width, config.icon_height)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear_icon_visible(&self) -> bool {
        !self.text.is_empty()
    }

    /// Icon region in field-local coordinates: flush with the trailing edge,
    /// vertically centred.
    pub fn icon_bounds(&self) -> HitTarget {
        HitTarget {
            x: self.width - self.icon_width,
            y: self.height / 2.0 - self.icon_height / 2.0,
            w: self.icon_width,
            h: self.icon_height,
        }
    }

    /// Touch in field-local coordinates. Releasing inside the icon clears
    /// the text; the hit test ignores icon visibility.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> FieldAction {
        if event.phase != TouchPhase::Up || !self.icon_bounds().hit(event.point()) {
            return FieldAction::None;
        }
        self.text.clear();
        FieldAction::Cleared
    }

    pub fn draw(&self, origin: Point) -> Vec<DrawInstruction> {
        let mut out = vec![DrawInstruction::Text {
            text: self.text.clone(),
            origin: origin.offset(0.0, self.height / 2.0 + FIELD_TEXT_SIZE / 3.0),
            paint: Paint::text(Color::BLACK, FIELD_TEXT_SIZE, false),
        }];
        if self.clear_icon_visible() {
            let icon = self.icon_bounds();
            out.push(DrawInstruction::Icon {
                name: CLEAR_ICON.to_owned(),
                left: origin.x + icon.x,
                top: origin.y + icon.y,
                right: origin.x + icon.x + icon.w,
                bottom: origin.y + icon.y + icon.h,
            });
        }
        out
    }
}
