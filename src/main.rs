//! Command-line renderer: load a frame description, render it, write a PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use smoothmarch::FrameConfig;

#[derive(Parser, Debug)]
#[command(name = "smoothmarch", about = "Raymarch a smooth-union SDF scene to a PNG")]
struct Args {
    /// JSON frame description. The built-in demo scene is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the output width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Override the output height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Destination PNG.
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => FrameConfig::load(path)?,
        None => FrameConfig::default(),
    };
    if let Some(width) = args.width {
        config.output.width = width;
    }
    if let Some(height) = args.height {
        config.output.height = height;
    }
    config.validate()?;

    let frame = config.frame()?;
    let started = std::time::Instant::now();
    let rendered = frame.render(&config.camera, config.output.width, config.output.height)?;
    info!(
        width = rendered.width,
        height = rendered.height,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "frame rendered"
    );

    let rgba = image::RgbaImage::from_raw(rendered.width, rendered.height, rendered.to_rgba8())
        .context("pixel buffer does not match image size")?;
    rgba.save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(path = %args.output.display(), "wrote image");
    Ok(())
}
