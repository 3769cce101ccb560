use super::*;

use crate::foundation::core::Fps;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps { num: 30, den: 1 },
    }
}

#[test]
fn odd_or_empty_sizes_are_rejected() {
    assert!(validate_config(&cfg(64, 64)).is_ok());
    assert!(validate_config(&cfg(63, 64)).is_err());
    assert!(validate_config(&cfg(0, 64)).is_err());
    let mut c = cfg(64, 64);
    c.fps.num = 0;
    assert!(validate_config(&c).is_err());
}

#[test]
fn flatten_transparent_pixel_returns_background() {
    let mut dst = vec![0u8; 8];
    flatten_to_opaque(&mut dst, &[0, 0, 0, 0, 1, 2, 3, 255], [10, 20, 30]);
    assert_eq!(dst, vec![10, 20, 30, 255, 1, 2, 3, 255]);
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}
