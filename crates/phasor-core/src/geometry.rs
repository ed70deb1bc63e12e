//! Anchors replace the canvas translate/rotate scopes: each one folds its
//! origin (and an optional rotation) into absolute coordinates.

use phasor_protocol::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub origin: Point,
}

impl Anchor {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            origin: Point::new(x, y),
        }
    }

    /// Map a point expressed relative to this anchor into surface space.
    pub fn place(&self, x: f32, y: f32) -> Point {
        self.origin.offset(x, y)
    }

    /// Map a local point after rotating it by `degrees` about the anchor.
    /// Positive angles turn clockwise on screen, since `y` grows downward.
    pub fn place_rotated(&self, x: f32, y: f32, degrees: f32) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.place(x * cos - y * sin, x * sin + y * cos)
    }

    /// Nested translation, as a child scope would see it.
    pub fn translated(&self, dx: f32, dy: f32) -> Anchor {
        Anchor {
            origin: self.origin.offset(dx, dy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn rotation_turns_clockwise_on_screen() {
        let anchor = Anchor::new(10.0, 10.0);
        assert!(close(anchor.place_rotated(5.0, 0.0, 90.0), Point::new(10.0, 15.0)));
        assert!(close(anchor.place_rotated(5.0, 0.0, -90.0), Point::new(10.0, 5.0)));
    }

    #[test]
    fn translated_anchor_composes() {
        let anchor = Anchor::new(1.0, 2.0).translated(3.0, -4.0);
        assert_eq!(anchor.place(1.0, 1.0), Point::new(5.0, -1.0));
    }
}
