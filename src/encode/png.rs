use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    encode::{
        ensure_parent_dir,
        sink::{FrameSink, SinkConfig, check_frame_buffer, check_frame_size, check_order},
    },
    foundation::{
        core::FrameIndex,
        error::{RadarError, RadarResult},
        math::unpremultiply_px,
    },
    render::backend::FrameRGBA,
};

/// Writes each frame as `frame_00000.png`, `frame_00001.png`, ... into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    scratch: Vec<u8>,
    written: u64,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            last_idx: None,
            scratch: Vec::new(),
            written: 0,
        }
    }

    /// Path of the file written for `idx`.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", idx.0))
    }

    /// Number of files written since `begin`.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> RadarResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create output directory '{}'", self.dir.display()))?;
        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> RadarResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| RadarError::encode("png sink not started"))?;
        check_order(self.last_idx, idx)?;
        check_frame_size(&cfg, frame)?;
        self.last_idx = Some(idx);

        let path = self.frame_path(idx);
        write_png(&path, frame, &mut self.scratch)?;
        self.written += 1;
        tracing::trace!(frame = idx.0, path = %path.display(), "png written");
        Ok(())
    }

    fn end(&mut self) -> RadarResult<()> {
        if self.cfg.take().is_none() {
            return Err(RadarError::encode("png sink not started"));
        }
        tracing::debug!(frames = self.written, dir = %self.dir.display(), "png sequence done");
        Ok(())
    }
}

/// Save one frame as a straight-alpha PNG.
pub fn save_png(path: &Path, frame: &FrameRGBA) -> RadarResult<()> {
    check_frame_buffer(frame)?;
    ensure_parent_dir(path)?;
    let mut scratch = Vec::new();
    write_png(path, frame, &mut scratch)
}

fn write_png(path: &Path, frame: &FrameRGBA, scratch: &mut Vec<u8>) -> RadarResult<()> {
    scratch.clear();
    scratch.extend_from_slice(&frame.data);
    if frame.premultiplied {
        for px in scratch.chunks_exact_mut(4) {
            unpremultiply_px(px);
        }
    }
    image::save_buffer_with_format(
        path,
        scratch,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| RadarError::encode(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
