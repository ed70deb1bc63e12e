use phasor_device::protocol::{Color, DrawInstruction, Point, TouchEvent, TouchPhase};
use phasor_device::display::SurfaceSize;
use phasor_device::splatter::{SplatterCanvas, DEFAULT_RINGS, RING_COLORS};

fn canvas(seed: u64) -> SplatterCanvas {
    SplatterCanvas::new(SurfaceSize::new(360.0, 640.0), seed)
}

fn touch(x: f32, y: f32) -> TouchEvent {
    TouchEvent::new(TouchPhase::Down, x, y)
}

#[test]
fn clears_then_draws_every_ring() {
    let mut splatter = canvas(1);
    assert_eq!(splatter.rings(), DEFAULT_RINGS);
    let drawn = splatter.on_touch(&touch(120.0, 80.0));
    assert_eq!(drawn.len(), 2001);
    assert_eq!(
        drawn[0],
        DrawInstruction::Clear {
            color: Color::BLACK
        }
    );
    match &drawn[2000] {
        DrawInstruction::Circle {
            center,
            radius,
            paint,
        } => {
            assert_eq!(*center, Point::new(120.0, 80.0));
            assert_eq!(*radius, 1999.0 / 5.0);
            assert_eq!(paint.stroke_width, 5.0);
            assert!(RING_COLORS.contains(&paint.color));
        }
        other => panic!("expected ring, got {other:?}"),
    }
}

#[test]
fn same_seed_same_colours() {
    let mut a = canvas(42).with_rings(64);
    let mut b = canvas(42).with_rings(64);
    assert_eq!(a.on_touch(&touch(1.0, 2.0)), b.on_touch(&touch(1.0, 2.0)));
    assert_eq!(a.on_touch(&touch(5.0, 5.0)), b.on_touch(&touch(5.0, 5.0)));
}

#[test]
fn colours_vary_across_rings() {
    let mut splatter = canvas(9).with_rings(200);
    let colours: std::collections::HashSet<Color> = splatter
        .on_touch(&touch(0.0, 0.0))
        .iter()
        .filter_map(|i| match i {
            DrawInstruction::Circle { paint, .. } => Some(paint.color),
            _ => None,
        })
        .collect();
    assert!(colours.len() > 1);
}

#[test]
fn non_finite_touch_draws_nothing() {
    let mut splatter = canvas(3).with_rings(16);
    assert!(splatter.on_touch(&touch(f32::NAN, 10.0)).is_empty());
    assert!(splatter.on_touch(&touch(10.0, f32::INFINITY)).is_empty());
}

#[test]
fn touch_outside_the_surface_is_clamped() {
    let mut splatter = canvas(3).with_rings(4);
    let drawn = splatter.on_touch(&touch(900.0, -25.0));
    assert_eq!(drawn.len(), 5);
    for instruction in &drawn[1..] {
        match instruction {
            DrawInstruction::Circle { center, .. } => {
                assert_eq!(*center, Point::new(359.0, 0.0));
            }
            other => panic!("expected ring, got {other:?}"),
        }
    }
}
