use crate::{
    chart::RadarChart,
    encode::sink::{FrameSink, SinkConfig},
    foundation::{
        core::{Canvas, Fps, FrameIndex},
        error::{RadarError, RadarResult},
    },
    model::SeriesAnimation,
    render::backend::{FrameRGBA, RenderBackend},
};

/// Output settings shared by still and animated renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub canvas: Canvas,
    pub fps: Fps,
    /// Frames rendered after the chain went idle.
    pub tail_frames: u64,
    /// Hard cap on the number of frames of one animation.
    pub max_frames: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 512,
                height: 512,
            },
            fps: Fps { num: 30, den: 1 },
            tail_frames: 15,
            max_frames: 3_600,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> RadarResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(RadarError::validation("fps must be non-zero"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(RadarError::validation("canvas width/height must be > 0"));
        }
        if self.max_frames == 0 {
            return Err(RadarError::validation("max_frames must be > 0"));
        }
        Ok(())
    }
}

/// Counters of one [`render_animation`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    /// Frames rendered while the chain was animating, including the first one.
    pub frames_animated: u64,
    pub frames_tail: u64,
    /// The cap was hit and the animation was interrupted.
    pub truncated: bool,
}

/// Fit `chart` to `canvas` when its bounds differ.
fn fit_to_canvas(chart: &mut RadarChart, canvas: Canvas) {
    if chart.bounds() != canvas.bounds() {
        chart.set_bounds(canvas.bounds());
    }
}

/// Render the chart as it looks `time` seconds after `mode` started.
///
/// The clock advances in frame-sized ticks so chained steps start on time.
#[tracing::instrument(skip(chart, backend))]
pub fn render_frame_at(
    chart: &mut RadarChart,
    backend: &mut dyn RenderBackend,
    settings: &RenderSettings,
    mode: SeriesAnimation,
    time: f64,
) -> RadarResult<FrameRGBA> {
    settings.validate()?;
    if !time.is_finite() || time < 0.0 {
        return Err(RadarError::validation("time must be a finite value >= 0"));
    }
    fit_to_canvas(chart, settings.canvas);
    chart.animate(mode);

    let fps = settings.fps;
    let whole = fps.secs_to_frames_floor(time);
    for _ in 0..whole {
        if !chart.is_animating() {
            break;
        }
        chart.advance(fps.frame_duration_secs());
    }
    let rest = time - fps.frames_to_secs(whole);
    if rest > 0.0 && chart.is_animating() {
        chart.advance(rest);
    }
    backend.render_snapshot(&chart.snapshot(), settings.canvas)
}

/// Play `mode` to completion and push every frame into `sink`.
///
/// Frame 0 shows the first instant of the animation; each following frame advances the clock by
/// one frame duration. Once the chain is idle, `tail_frames` still frames follow. Hitting
/// `max_frames` interrupts the animation, leaving the chart fully drawn.
#[tracing::instrument(skip(chart, backend, sink))]
pub fn render_animation(
    chart: &mut RadarChart,
    backend: &mut dyn RenderBackend,
    settings: &RenderSettings,
    mode: SeriesAnimation,
    sink: &mut dyn FrameSink,
) -> RadarResult<RenderStats> {
    settings.validate()?;
    fit_to_canvas(chart, settings.canvas);

    let dt = settings.fps.frame_duration_secs();
    let mut stats = RenderStats::default();
    let mut idx = 0u64;

    sink.begin(SinkConfig {
        width: settings.canvas.width,
        height: settings.canvas.height,
        fps: settings.fps,
    })?;

    chart.animate(mode);
    loop {
        let frame = backend.render_snapshot(&chart.snapshot(), settings.canvas)?;
        sink.push_frame(FrameIndex(idx), &frame)?;
        idx += 1;
        stats.frames_animated += 1;

        if !chart.is_animating() {
            break;
        }
        if idx >= settings.max_frames {
            tracing::warn!(max_frames = settings.max_frames, "frame cap reached, interrupting");
            chart.interrupt();
            stats.truncated = true;
            break;
        }
        chart.advance(dt);
    }

    if idx < settings.max_frames && settings.tail_frames > 0 {
        let frame = backend.render_snapshot(&chart.snapshot(), settings.canvas)?;
        let tail_end = (idx + settings.tail_frames).min(settings.max_frames);
        while idx < tail_end {
            sink.push_frame(FrameIndex(idx), &frame)?;
            idx += 1;
            stats.frames_tail += 1;
        }
    }

    sink.end()?;
    stats.frames_total = idx;
    tracing::debug!(
        frames = stats.frames_total,
        secs = settings.fps.frames_to_secs(idx),
        truncated = stats.truncated,
        "animation rendered"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
