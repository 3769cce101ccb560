use super::*;

use crate::foundation::core::Fps;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("radar-chart-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        // Half-transparent red, then opaque green.
        data: vec![128, 0, 0, 128, 0, 255, 0, 255],
        premultiplied: true,
    }
}

#[test]
fn sequence_files_are_numbered_and_unpremultiplied() {
    let dir = temp_dir("png-seq");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(SinkConfig {
        width: 2,
        height: 1,
        fps: Fps { num: 30, den: 1 },
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &frame()).unwrap();
    sink.push_frame(FrameIndex(1), &frame()).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.written(), 2);

    let first = dir.join("frame_00000.png");
    assert_eq!(sink.frame_path(FrameIndex(0)), first);
    assert!(dir.join("frame_00001.png").exists());

    let img = image::open(&first).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 255, 0, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn out_of_order_frames_are_rejected() {
    let dir = temp_dir("png-order");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(SinkConfig {
        width: 2,
        height: 1,
        fps: Fps { num: 30, den: 1 },
    })
    .unwrap();
    sink.push_frame(FrameIndex(1), &frame()).unwrap();
    assert!(sink.push_frame(FrameIndex(0), &frame()).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn save_png_creates_parent_directories() {
    let dir = temp_dir("png-single");
    let path = dir.join("nested").join("chart.png");
    save_png(&path, &frame()).unwrap();
    assert!(path.exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn save_png_rejects_a_short_buffer() {
    let dir = temp_dir("png-short");
    let path = dir.join("chart.png");
    let short = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0; 8],
        premultiplied: true,
    };
    let err = save_png(&path, &short).unwrap_err();
    assert!(matches!(err, RadarError::Validation(_)));
    assert!(!path.exists());
    let _ = std::fs::remove_dir_all(&dir);
}
