//! Radar (spider) chart engine.
//!
//! A chart plots one closed polygon per [`Serie`] over N radial axes, one per [`Parameter`].
//! The crate covers the whole path from data to pixels:
//!
//! - Build a [`RadarChart`] from a [`ChartModel`] and lay it out in a [`Rect`]
//! - Reveal the series with a [`SeriesAnimation`], driven by [`RadarChart::advance`]
//! - Rasterize [`ChartSnapshot`]s with the [`CpuBackend`] and stream them into a [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod chart;
pub(crate) mod decoration;
pub(crate) mod demo;
pub(crate) mod encode;
pub(crate) mod geometry;
pub(crate) mod layer;
pub(crate) mod model;
pub(crate) mod render;

pub use crate::foundation::core::{BezPath, Canvas, Fps, FrameIndex, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{RadarError, RadarResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::sequencer::{ChainEvent, Sequencer};
pub use crate::animation::step::PathStep;
pub use crate::chart::{ChartSnapshot, ChartStyle, LayerSnapshot, RadarChart};
pub use crate::decoration::glyph::{DecorationLayer, glyph_color, glyph_path};
pub use crate::demo::{AnimationPick, DEFAULT_STEP_DURATION, PALETTE};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::{PngSequenceSink, save_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::geometry::layout::ChartLayout;
pub use crate::geometry::polygon::{
    closed_polygon, collapsed, generate_path, outer_vertices, reveal_until,
};
pub use crate::geometry::web::{WebGeometry, web_geometry};
pub use crate::layer::chain::LayerChain;
pub use crate::layer::serie_layer::{LayerId, LayerState, SerieLayer};
pub use crate::model::{ChartModel, Decoration, FillMode, Parameter, Serie, SeriesAnimation};
pub use crate::render::backend::{FrameRGBA, RenderBackend};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::pipeline::{RenderSettings, RenderStats, render_animation, render_frame_at};
