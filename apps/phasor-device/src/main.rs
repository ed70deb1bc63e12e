use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use phasor_device::{
    animate,
    config::DeviceConfig,
    display::SurfaceSize,
    protocol::{Point, TouchEvent, TouchPhase},
    splatter::SplatterCanvas,
    telemetry,
};
use tokio::task::LocalSet;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Summary,
    Json,
}

/// Drive the rotating-vector diagram headlessly and report what it drew.
#[derive(Parser, Debug)]
#[command(name = "phasor-device", version)]
struct Cli {
    /// JSON config file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Surface width in pixels.
    #[arg(long)]
    width: Option<f32>,

    /// Surface height in pixels.
    #[arg(long)]
    height: Option<f32>,

    /// Ticks to run before stopping the animation.
    #[arg(long, default_value_t = 10)]
    ticks: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Also splat rings at X,Y.
    #[arg(long, value_parser = parse_point)]
    splat: Option<Point>,

    /// Seed for the splatter colours.
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {raw:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    telemetry::init_tracing(&config.log.filter)?;
    info!("{}", phasor_device::boot_message());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build runtime")?;
    let report = LocalSet::new().block_on(&rt, animate(&config, u64::from(cli.ticks)));

    match cli.format {
        OutputFormat::Summary => println!(
            "angle={} radius={} ticks={} redraws={} frames={} instructions={}",
            report.final_frame.angle_degrees,
            phasor_core::diagram::radius_for_surface(
                report.final_frame.width,
                report.final_frame.height
            ),
            report.ticks,
            report.redraws,
            report.frames_presented,
            report.final_frame.instructions.len()
        ),
        OutputFormat::Json => println!(
            "{}",
            report
                .final_frame
                .to_json()
                .context("failed to encode frame")?
        ),
    }

    if let Some(point) = cli.splat {
        let surface = SurfaceSize::new(config.surface.width, config.surface.height);
        let mut canvas =
            SplatterCanvas::new(surface, config.splatter.seed).with_rings(config.splatter.rings);
        let drawn = canvas.on_touch(&TouchEvent::new(TouchPhase::Down, point.x, point.y));
        println!("splat x={} y={} instructions={}", point.x, point.y, drawn.len());
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<DeviceConfig> {
    let mut config = match &cli.config {
        Some(path) => DeviceConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DeviceConfig::default(),
    };
    if let Some(width) = cli.width {
        config.surface.width = width;
    }
    if let Some(height) = cli.height {
        config.surface.height = height;
    }
    if let Some(seed) = cli.seed {
        config.splatter.seed = seed;
    }
    config.validate().context("invalid configuration")?;
    if cli.ticks == 0 {
        bail!("--ticks must be at least 1");
    }
    Ok(config)
}
