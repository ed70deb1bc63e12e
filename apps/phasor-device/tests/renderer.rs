use phasor_device::protocol::{Color, DrawInstruction, Frame};
use phasor_device::renderer::*;

fn frame(seq: u64, angle: f32) -> Frame {
    Frame::new(seq, angle, 100.0, 100.0).with_instructions(vec![DrawInstruction::Circle {
        center: phasor_device::protocol::Point::new(angle, 0.0),
        radius: 1.0,
        paint: phasor_device::protocol::Paint::fill(Color::WHITE),
    }])
}

#[test]
fn null_renderer_counts_changes() {
    let mut renderer = NullRenderer::new();
    assert!(renderer.present(&frame(1, 0.0)).unwrap());
    assert!(!renderer.present(&frame(2, 0.0)).unwrap());
    assert!(renderer.present(&frame(3, 5.0)).unwrap());
    assert_eq!(
        renderer.stats(),
        &RenderStats {
            frames_presented: 3,
            frames_changed: 2
        }
    );
}

#[test]
fn recording_renderer_is_bounded() {
    let mut renderer = RecordingRenderer::with_capacity(2);
    for seq in 1..=5 {
        renderer.present(&frame(seq, seq as f32)).unwrap();
    }
    assert_eq!(renderer.frames().len(), 2);
    assert_eq!(renderer.last_frame().map(|f| f.seq), Some(5));
    assert_eq!(renderer.stats().frames_presented, 5);
}

#[test]
fn json_lines_renderer_writes_one_frame_per_line() {
    let mut renderer = JsonLinesRenderer::new(Vec::new());
    renderer.present(&frame(1, 0.0)).unwrap();
    renderer.present(&frame(2, 5.0)).unwrap();
    let raw = String::from_utf8(renderer.into_inner()).unwrap();
    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines.len(), 2);
    let parsed = Frame::from_json(lines[1]).unwrap();
    assert_eq!(parsed.seq, 2);
    assert_eq!(parsed.instructions.len(), 1);
}
