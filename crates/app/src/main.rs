use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use gaze_overlay_core::{
    load_gaze_file, sync::NANOS_PER_SECOND, GazeOverlayError, GazeTimeline, ManualScheduler,
    MarkerStyle, MediaEvent, MediaSource, OverlaySurface, RenderLoop, SurfacePoint,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() -> gaze_overlay_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { input } => run_inspect(&input),
        Commands::Replay {
            gaze,
            width,
            height,
            fps,
            style,
            output,
        } => run_replay(&gaze, width, height, fps, style.as_deref(), output.as_deref()),
    }
}

fn run_inspect(input: &Path) -> gaze_overlay_core::Result<()> {
    tracing::info!(?input, "inspecting gaze file");

    let parsed = load_gaze_file(input)?;
    let summary = parsed.summary;
    let timeline = GazeTimeline::new(parsed.samples);

    println!("rows:     {}", summary.total_rows);
    println!("samples:  {}", timeline.len());
    println!("dropped:  {}", summary.dropped_rows);
    println!(
        "header:   {}",
        if summary.header_skipped { "skipped" } else { "absent" }
    );
    if let Some(baseline_ns) = timeline.baseline_ns() {
        println!("baseline: {baseline_ns} ns");
        println!("span:     {:.3} s", span_seconds(&timeline));
    }
    Ok(())
}

fn run_replay(
    gaze: &Path,
    width: u32,
    height: u32,
    fps: f64,
    style: Option<&Path>,
    output: Option<&Path>,
) -> gaze_overlay_core::Result<()> {
    if !(fps.is_finite() && fps > 0.0) {
        return Err(GazeOverlayError::msg(format!("invalid frame rate: {fps}")));
    }

    tracing::info!(?gaze, width, height, fps, "replaying gaze overlay");

    let parsed = load_gaze_file(gaze)?;
    let timeline = GazeTimeline::new(parsed.samples);
    let style = match style {
        Some(path) => MarkerStyle::from_json(&std::fs::read_to_string(path)?)?,
        None => MarkerStyle::default(),
    };

    let records = replay_frames(timeline, &style, width, height, fps);

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };
    for record in &records {
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{line}")?;
    }

    tracing::info!(frames = records.len(), "replay finished");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

/// One drawn overlay marker, emitted as a JSON line.
#[derive(Debug, Clone, Serialize)]
struct FrameRecord {
    frame: u64,
    position_seconds: f64,
    x: f64,
    y: f64,
    radius: f64,
    stroke_width: f64,
    color: String,
}

/// Media stand-in advanced by the replay driver instead of a real player.
struct ScriptedMedia {
    position_seconds: f64,
    native_size: (u32, u32),
}

impl MediaSource for ScriptedMedia {
    fn position_seconds(&self) -> f64 {
        self.position_seconds
    }

    fn native_size(&self) -> (u32, u32) {
        self.native_size
    }
}

/// Surface that captures every drawn marker together with the frame it was
/// drawn on.
#[derive(Default)]
struct CaptureSurface {
    size: (u32, u32),
    frame: u64,
    position_seconds: f64,
    records: Vec<FrameRecord>,
}

impl OverlaySurface for CaptureSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn clear(&mut self) {}

    fn stroke_circle(&mut self, point: SurfacePoint, style: &MarkerStyle) {
        self.records.push(FrameRecord {
            frame: self.frame,
            position_seconds: self.position_seconds,
            x: point.x,
            y: point.y,
            radius: style.radius,
            stroke_width: style.stroke_width,
            color: style.color.clone(),
        });
    }
}

/// Drives the full render loop headlessly: metadata, play, one scheduled
/// frame per tick of a scripted clock, then ended and disposal.
fn replay_frames(
    timeline: GazeTimeline,
    style: &MarkerStyle,
    width: u32,
    height: u32,
    fps: f64,
) -> Vec<FrameRecord> {
    let total_frames = (span_seconds(&timeline) * fps).ceil() as u64 + 1;

    let mut player = RenderLoop::new(ManualScheduler::new());
    player.load_timeline(timeline);

    let mut media = ScriptedMedia {
        position_seconds: 0.0,
        native_size: (width, height),
    };
    let mut surface = CaptureSurface::default();

    player.handle_event(MediaEvent::MetadataReady, &media, &mut surface, style);
    player.handle_event(MediaEvent::Play, &media, &mut surface, style);

    for frame in 0..total_frames {
        media.position_seconds = frame as f64 / fps;
        if player.scheduler_mut().take_fired().is_some() {
            surface.frame = frame;
            surface.position_seconds = media.position_seconds;
            player.on_frame(&media, &mut surface, style);
        }
    }

    player.handle_event(MediaEvent::Ended, &media, &mut surface, style);
    player.dispose();

    surface.records
}

fn span_seconds(timeline: &GazeTimeline) -> f64 {
    match (timeline.baseline_ns(), timeline.samples().last()) {
        (Some(baseline_ns), Some(last)) => {
            (last.timestamp_ns - baseline_ns) as f64 / NANOS_PER_SECOND
        }
        _ => 0.0,
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Overlay eye-tracking gaze data on video playback", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a gaze CSV file and report what it contains.
    Inspect {
        /// Path to the gaze CSV export.
        input: PathBuf,
    },
    /// Replay a gaze file against a scripted playback clock and emit the
    /// drawn markers as JSON lines.
    Replay {
        /// Path to the gaze CSV export.
        gaze: PathBuf,
        /// Native media width in pixels.
        #[arg(long, default_value_t = 1600)]
        width: u32,
        /// Native media height in pixels.
        #[arg(long, default_value_t = 1200)]
        height: u32,
        /// Simulated playback frame rate.
        #[arg(long, default_value_t = 30.0)]
        fps: f64,
        /// Optional JSON file with marker style overrides.
        #[arg(long)]
        style: Option<PathBuf>,
        /// Write JSON lines here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
