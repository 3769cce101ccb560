use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};

use radar_chart::{
    AnimationPick, Canvas, ChartModel, ChartStyle, CpuBackend, DEFAULT_STEP_DURATION,
    FfmpegSink, FfmpegSinkOpts, Fps, PngSequenceSink, RadarChart, RenderSettings,
    SeriesAnimation,
};

#[derive(Parser, Debug)]
#[command(name = "radar", version, about = "Render animated radar charts")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render an animation as a numbered PNG sequence.
    Frames(FramesArgs),
    /// Render an animation as an MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Write a demo chart model as JSON.
    Model(ModelArgs),
}

#[derive(Args, Debug)]
struct ChartArgs {
    /// Input chart model JSON. Defaults to the built-in demo model.
    #[arg(long = "in", conflicts_with = "random")]
    in_path: Option<PathBuf>,

    /// Generate a random model from this seed.
    #[arg(long)]
    random: Option<u64>,

    /// Animation used to reveal the series.
    #[arg(long, value_enum, default_value_t = Mode::ScaleOneByOne)]
    mode: Mode,

    /// Seconds per animation step.
    #[arg(long, default_value_t = DEFAULT_STEP_DURATION)]
    duration: f64,

    /// Output size as WIDTHxHEIGHT.
    #[arg(long, default_value = "512x512", value_parser = parse_size)]
    size: Canvas,

    /// Optional chart style JSON.
    #[arg(long)]
    style: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    chart: ChartArgs,

    /// Seconds since the animation started.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    chart: ChartArgs,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Still frames appended once the animation is done.
    #[arg(long, default_value_t = 15)]
    tail: u64,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    chart: ChartArgs,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Still frames appended once the animation is done.
    #[arg(long, default_value_t = 15)]
    tail: u64,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Fail instead of replacing an existing file.
    #[arg(long)]
    no_overwrite: bool,
}

#[derive(Args, Debug)]
struct ModelArgs {
    /// Generate a random model from this seed instead of the demo model.
    #[arg(long)]
    random: Option<u64>,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    None,
    ScaleAll,
    ScaleOneByOne,
    ParameterByParameter,
}

impl Mode {
    fn series_animation(self, duration: f64) -> SeriesAnimation {
        let pick = match self {
            Mode::None => return SeriesAnimation::None,
            Mode::ScaleAll => AnimationPick::ScaleAll,
            Mode::ScaleOneByOne => AnimationPick::ScaleOneByOne,
            Mode::ParameterByParameter => AnimationPick::ParameterByParameter,
        };
        pick.series_animation(duration)
    }
}

fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Render(args) => cmd_render(args),
        Command::Model(args) => cmd_model(args),
    }
}

fn parse_size(s: &str) -> Result<Canvas, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: u32 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let height: u32 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    if width == 0 || height == 0 {
        return Err("width and height must be > 0".to_owned());
    }
    Ok(Canvas { width, height })
}

fn load_model(args: &ChartArgs) -> anyhow::Result<ChartModel> {
    if let Some(path) = &args.in_path {
        return ChartModel::from_path(path)
            .with_context(|| format!("load chart model '{}'", path.display()));
    }
    Ok(demo_model(args.random))
}

fn demo_model(seed: Option<u64>) -> ChartModel {
    match seed {
        Some(seed) => ChartModel::random(&mut StdRng::seed_from_u64(seed)),
        None => ChartModel::default_model(),
    }
}

fn load_style(path: Option<&Path>) -> anyhow::Result<ChartStyle> {
    let Some(path) = path else {
        return Ok(ChartStyle::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read style '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse style '{}'", path.display()))
}

fn build_chart(args: &ChartArgs) -> anyhow::Result<(RadarChart, SeriesAnimation)> {
    if !args.duration.is_finite() || args.duration <= 0.0 {
        anyhow::bail!("--duration must be a positive number of seconds");
    }
    let model = load_model(args)?;
    let style = load_style(args.style.as_deref())?;
    let chart = RadarChart::with_model(model, style, args.size.bounds());
    Ok((chart, args.mode.series_animation(args.duration)))
}

fn settings(canvas: Canvas, fps: u32, tail_frames: u64) -> anyhow::Result<RenderSettings> {
    Ok(RenderSettings {
        canvas,
        fps: Fps::new(fps, 1)?,
        tail_frames,
        ..RenderSettings::default()
    })
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (mut chart, mode) = build_chart(&args.chart)?;
    let settings = RenderSettings {
        canvas: args.chart.size,
        ..RenderSettings::default()
    };
    let mut backend = CpuBackend::new();
    let frame =
        radar_chart::render_frame_at(&mut chart, &mut backend, &settings, mode, args.time)?;
    radar_chart::save_png(&args.out, &frame)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let (mut chart, mode) = build_chart(&args.chart)?;
    let settings = settings(args.chart.size, args.fps, args.tail)?;
    let mut backend = CpuBackend::new();
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats =
        radar_chart::render_animation(&mut chart, &mut backend, &settings, mode, &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_total,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (mut chart, mode) = build_chart(&args.chart)?;
    let settings = settings(args.chart.size, args.fps, args.tail)?;
    let mut backend = CpuBackend::new();
    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        overwrite: !args.no_overwrite,
        ..FfmpegSinkOpts::new(&args.out)
    });
    let stats =
        radar_chart::render_animation(&mut chart, &mut backend, &settings, mode, &mut sink)?;

    eprintln!("wrote {} ({} frames)", args.out.display(), stats.frames_total);
    Ok(())
}

fn cmd_model(args: ModelArgs) -> anyhow::Result<()> {
    let model = demo_model(args.random);
    let json = model.to_json_pretty()?;
    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, json)
        .with_context(|| format!("write model '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
