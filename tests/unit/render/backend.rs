use super::*;
use crate::foundation::core::Point;

#[derive(Default)]
struct MockBackend {
    calls: Vec<&'static str>,
}

impl RenderBackend for MockBackend {
    fn begin_frame(&mut self, _background: Rgba8) -> ReelResult<()> {
        self.calls.push("begin_frame");
        Ok(())
    }

    fn draw(&mut self, _op: &DrawOp) -> ReelResult<()> {
        self.calls.push("draw");
        Ok(())
    }

    fn end_frame(&mut self) -> ReelResult<()> {
        self.calls.push("end_frame");
        Ok(())
    }
}

fn line() -> DrawOp {
    DrawOp::Line {
        from: Point::ZERO,
        to: Point::new(10.0, 0.0),
        thickness: 2.0,
        color: Rgba8::BLACK,
    }
}

#[test]
fn execute_frame_calls_in_expected_order() {
    let frame = Frame {
        background: Rgba8::WHITE,
        ops: vec![line(), line()],
    };
    let mut backend = MockBackend::default();
    execute_frame(&mut backend, &frame).unwrap();
    assert_eq!(
        backend.calls,
        vec!["begin_frame", "draw", "draw", "end_frame"]
    );
}

#[test]
fn recorder_keeps_only_last_frame_by_default() {
    let mut rec = RecordingBackend::new();
    execute_frame(&mut rec, &Frame::new(Rgba8::WHITE)).unwrap();
    execute_frame(
        &mut rec,
        &Frame {
            background: Rgba8::BLACK,
            ops: vec![line()],
        },
    )
    .unwrap();
    assert_eq!(rec.frame_count(), 2);
    assert_eq!(rec.frames().len(), 1);
    assert_eq!(rec.last_frame().unwrap().background, Rgba8::BLACK);
}

#[test]
fn recorder_keep_all_retains_history() {
    let mut rec = RecordingBackend::keep_all();
    for _ in 0..3 {
        execute_frame(&mut rec, &Frame::new(Rgba8::WHITE)).unwrap();
    }
    assert_eq!(rec.frames().len(), 3);
}

#[test]
fn recorder_rejects_unbalanced_calls() {
    let mut rec = RecordingBackend::new();
    assert!(rec.draw(&line()).is_err());
    assert!(rec.end_frame().is_err());
    rec.begin_frame(Rgba8::WHITE).unwrap();
    assert!(rec.begin_frame(Rgba8::WHITE).is_err());
}
