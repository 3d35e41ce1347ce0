use std::path::PathBuf;

use clap::Parser;

use sonogrid::{PathCache, PathProvider, PipelineConfig, sonify_to_wav};

/// Turn an image or video into sound.
#[derive(Parser, Debug)]
#[command(name = "sonogrid", version)]
struct Cli {
    /// Input image or video file.
    input: PathBuf,

    /// Output WAV path (overwritten on each run).
    #[arg(long, default_value = "freq.wav")]
    out: PathBuf,

    /// Grid edge length; must be a power of two.
    #[arg(long, default_value_t = sonogrid::DEFAULT_GRID_SIZE)]
    size: u32,

    /// Output sample rate in Hz.
    #[arg(long, default_value_t = sonogrid::SAMPLE_RATE_HZ)]
    sample_rate: u32,

    /// Seconds of audio per frame; also the video sampling interval.
    #[arg(long, default_value_t = sonogrid::DEFAULT_FRAME_DURATION_SEC)]
    frame_duration: f64,

    /// Hilbert path cache directory.
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = PipelineConfig {
        grid_size: cli.size,
        sample_rate: cli.sample_rate,
        frame_duration_sec: cli.frame_duration,
    };
    let provider = PathProvider::new(PathCache::new(
        cli.cache_dir.unwrap_or_else(PathCache::default_root),
    ));

    let stats = sonify_to_wav(&cli.input, &cli.out, &config, &provider)?;
    eprintln!(
        "wrote {} ({} frames, {} samples)",
        cli.out.display(),
        stats.frames,
        stats.samples
    );
    Ok(())
}
