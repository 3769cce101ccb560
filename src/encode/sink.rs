use crate::{
    foundation::{
        core::{Fps, FrameIndex},
        error::{RadarError, RadarResult},
    },
    render::backend::FrameRGBA,
};

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
}

/// Consumer of rendered frames.
///
/// `push_frame` is called with strictly increasing [`FrameIndex`] values between one `begin`
/// and one `end`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> RadarResult<()>;
    /// Push one premultiplied frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> RadarResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> RadarResult<()>;
}

/// Keeps every frame in memory. Used by tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> RadarResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> RadarResult<()> {
        if self.cfg.is_none() {
            return Err(RadarError::encode("in-memory sink not started"));
        }
        check_order(self.frames.last().map(|(i, _)| *i), idx)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> RadarResult<()> {
        self.ended = true;
        Ok(())
    }
}

pub(crate) fn check_order(last: Option<FrameIndex>, idx: FrameIndex) -> RadarResult<()> {
    match last {
        Some(last) if idx <= last => Err(RadarError::encode(format!(
            "out-of-order frame index {} after {}",
            idx.0, last.0
        ))),
        _ => Ok(()),
    }
}

pub(crate) fn check_frame_size(cfg: &SinkConfig, frame: &FrameRGBA) -> RadarResult<()> {
    if frame.width != cfg.width || frame.height != cfg.height {
        return Err(RadarError::validation(format!(
            "frame size mismatch: got {}x{}, expected {}x{}",
            frame.width, frame.height, cfg.width, cfg.height
        )));
    }
    check_frame_buffer(frame)
}

pub(crate) fn check_frame_buffer(frame: &FrameRGBA) -> RadarResult<()> {
    if frame.data.len() != (frame.width as usize) * (frame.height as usize) * 4 {
        return Err(RadarError::validation(
            "frame.data size mismatch with width*height*4",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
