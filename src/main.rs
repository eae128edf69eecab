use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use slideshow::constants::FRAME_TIME;
use slideshow::{Container, ElementId, Manifest, Registry};

#[derive(Parser, Debug)]
#[command(name = "slideshow", version, about = "Fade through a set of images on a timer")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the slideshow without a window and log every slide change.
    Simulate(SimulateArgs),
    /// Open a window and play the slideshow.
    #[cfg(feature = "viewer")]
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Manifest JSON file or directory of images.
    source: PathBuf,

    /// Simulated run time in seconds.
    #[arg(long, default_value_t = 30.0, value_parser = parse_seconds)]
    seconds: f32,

    /// Override the manifest's time between slides.
    #[arg(long)]
    interval_ms: Option<u64>,
}

#[cfg(feature = "viewer")]
#[derive(Parser, Debug)]
struct PlayArgs {
    /// Manifest JSON file or directory of images.
    source: PathBuf,

    /// Override the manifest's time between slides.
    #[arg(long)]
    interval_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => {
            let manifest = load_manifest(&args.source, args.interval_ms)?;
            simulate(manifest, args.seconds);
            Ok(())
        }
        #[cfg(feature = "viewer")]
        Command::Play(args) => {
            let manifest = load_manifest(&args.source, args.interval_ms)?;
            slideshow::viewer::run(manifest).context("viewer failed")
        }
    }
}

fn parse_seconds(s: &str) -> Result<f32, String> {
    let seconds: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(format!("expected a finite, non-negative number of seconds, got {s}"))
    }
}

fn load_manifest(source: &Path, interval_ms: Option<u64>) -> anyhow::Result<Manifest> {
    let mut manifest = Manifest::load(source)
        .with_context(|| format!("failed to load slides from {}", source.display()))?;
    if let Some(ms) = interval_ms {
        manifest.options.time_interval_ms = ms;
    }
    Ok(manifest)
}

fn simulate(manifest: Manifest, seconds: f32) {
    let id = ElementId(0);
    let options = manifest.options;
    let container = Container::new(id)
        .with_region(options.caption_class.as_str())
        .with_region(options.heading_class.as_str());

    let mut registry = Registry::new();
    let Some(show) = registry.attach(Some(container), options) else {
        return;
    };
    info!(
        slides = show.slide_count(),
        caption = show.caption().unwrap_or(""),
        heading = show.heading().unwrap_or(""),
        "slide 0 shown"
    );

    let frames = (seconds / FRAME_TIME).ceil() as u64;
    let mut last_index = 0;
    for frame in 0..frames {
        registry.update(FRAME_TIME);

        let Some(show) = registry.get(id) else { break };
        if show.current_index() != last_index {
            last_index = show.current_index();
            info!(
                at = %format!("{:.2}s", (frame + 1) as f32 * FRAME_TIME),
                slide = last_index,
                caption = show.caption().unwrap_or(""),
                heading = show.heading().unwrap_or(""),
                "slide shown"
            );
        }
    }

    registry.detach(id);
}
