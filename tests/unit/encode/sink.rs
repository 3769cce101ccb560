use super::*;

use crate::foundation::core::Fps;

fn frame(width: u32, height: u32) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: vec![0; (width * height * 4) as usize],
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps { num: 30, den: 1 },
    }
}

#[test]
fn in_memory_sink_collects_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(2, 2)).unwrap();
    sink.push_frame(FrameIndex(1), &frame(2, 2)).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.config(), Some(cfg()));
    assert_eq!(sink.frames().len(), 2);
    assert!(sink.is_ended());
}

#[test]
fn in_memory_sink_rejects_repeated_index() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(3), &frame(2, 2)).unwrap();
    let err = sink.push_frame(FrameIndex(3), &frame(2, 2)).unwrap_err();
    assert!(matches!(err, RadarError::Encode(_)));
}

#[test]
fn push_without_begin_fails() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(FrameIndex(0), &frame(2, 2)).is_err());
}

#[test]
fn frame_size_must_match_config() {
    assert!(check_frame_size(&cfg(), &frame(2, 2)).is_ok());
    assert!(check_frame_size(&cfg(), &frame(4, 2)).is_err());
    let mut short = frame(2, 2);
    short.data.pop();
    assert!(check_frame_size(&cfg(), &short).is_err());
}
