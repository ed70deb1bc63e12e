use phasor_device::display::*;
use phasor_device::protocol::{Point, TouchEvent, TouchPhase};

#[test]
fn clamp_keeps_in_bounds() {
    let surface = SurfaceSize::new(360.0, 640.0);
    let event = TouchEvent::new(TouchPhase::Down, 500.0, -4.0);
    assert_eq!(
        clamp_and_validate_touch(surface, &event),
        Some(Point::new(359.0, 0.0))
    );
}

#[test]
fn clamp_rejects_non_finite_samples() {
    let surface = SurfaceSize::new(360.0, 640.0);
    let event = TouchEvent::new(TouchPhase::Down, f32::NAN, 10.0);
    assert_eq!(clamp_and_validate_touch(surface, &event), None);
}

#[test]
fn degenerate_surfaces_are_detected() {
    assert!(!SurfaceSize::new(1000.0, 800.0).is_degenerate());
    assert!(SurfaceSize::new(40.0, 800.0).is_degenerate());
    assert!(SurfaceSize::new(1000.0, 80.0).is_degenerate());
}
