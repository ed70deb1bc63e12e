use phasor_device::config::TextFieldConfig;
use phasor_device::protocol::{DrawInstruction, Point, TouchEvent, TouchPhase};
use phasor_device::ui::{ClearableTextField, FieldAction, HitTarget, CLEAR_ICON};

fn field_with_text() -> ClearableTextField {
    let mut field = ClearableTextField::new(400.0, 100.0);
    field.set_text("hello");
    field
}

#[test]
fn icon_visibility_follows_text() {
    let mut field = ClearableTextField::new(400.0, 100.0);
    assert!(!field.clear_icon_visible());
    field.set_text("x");
    assert!(field.clear_icon_visible());
    field.set_text("");
    assert!(!field.clear_icon_visible());
}

#[test]
fn icon_bounds_hug_the_trailing_edge() {
    let field = ClearableTextField::with_icon_size(400.0, 100.0, 48.0, 40.0);
    assert_eq!(
        field.icon_bounds(),
        HitTarget {
            x: 352.0,
            y: 30.0,
            w: 48.0,
            h: 40.0
        }
    );
}

#[test]
fn release_inside_icon_clears() {
    let mut field = field_with_text();
    let action = field.handle_touch(&TouchEvent::new(TouchPhase::Up, 380.0, 50.0));
    assert_eq!(action, FieldAction::Cleared);
    assert_eq!(field.text(), "");
}

#[test]
fn press_inside_icon_does_not_clear() {
    let mut field = field_with_text();
    for phase in [TouchPhase::Down, TouchPhase::Move, TouchPhase::Cancel] {
        assert_eq!(
            field.handle_touch(&TouchEvent::new(phase, 380.0, 50.0)),
            FieldAction::None
        );
    }
    assert_eq!(field.text(), "hello");
}

#[test]
fn icon_edges_are_exclusive() {
    let mut field = field_with_text();
    for (x, y) in [(352.0, 50.0), (400.0, 50.0), (380.0, 26.0), (380.0, 74.0), (100.0, 50.0)] {
        assert_eq!(
            field.handle_touch(&TouchEvent::new(TouchPhase::Up, x, y)),
            FieldAction::None,
            "touch at ({x}, {y}) should miss"
        );
    }
    assert_eq!(field.text(), "hello");
}

#[test]
fn draw_includes_icon_only_with_text() {
    let empty = ClearableTextField::new(400.0, 100.0);
    assert_eq!(empty.draw(Point::new(0.0, 0.0)).len(), 1);

    let field = field_with_text();
    let drawn = field.draw(Point::new(10.0, 20.0));
    assert_eq!(drawn.len(), 2);
    match &drawn[1] {
        DrawInstruction::Icon {
            name,
            left,
            top,
            right,
            bottom,
        } => {
            assert_eq!(name, CLEAR_ICON);
            assert_eq!((*left, *top, *right, *bottom), (362.0, 46.0, 410.0, 94.0));
        }
        other => panic!("expected icon, got {other:?}"),
    }
}

#[test]
fn icon_size_comes_from_config() {
    let config = TextFieldConfig {
        icon_width: 24.0,
        icon_height: 24.0,
    };
    let mut field = ClearableTextField::from_config(200.0, 60.0, &config);
    field.set_text("abc");
    assert_eq!(field.icon_bounds().x, 176.0);
    assert_eq!(
        field.handle_touch(&TouchEvent::new(TouchPhase::Up, 190.0, 30.0)),
        FieldAction::Cleared
    );
}
