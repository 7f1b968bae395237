//! Binary entrypoint for the slideshow viewer.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "slide-frame", about = "Captioned image slideshow viewer")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Start at this image number (1-based) instead of the first
    #[arg(long, value_name = "NUMBER")]
    start_at: Option<String>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("slide_frame={}", level).parse().unwrap());
    // Diagnostics go to stderr; the viewer owns stdout.
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    // Use the library crate only.
    let cfg = slide_frame::config::Configuration::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?
        .validated()
        .context("validating configuration")?;

    let gallery = slide_frame::gallery::Gallery::from_config(&cfg)?;
    gallery.verify().context("verifying gallery images")?;
    info!(count = gallery.len(), "gallery ready");

    let mut show = slide_frame::controller::Slideshow::new(gallery);
    if let Some(start) = cli.start_at {
        show.edit_jump_input(start);
        show.attempt_jump();
        if show.validation_error().is_some() {
            warn!("ignoring invalid --start-at; starting at the first image");
            show.edit_jump_input("");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    slide_frame::viewer::run(stdin.lock(), stdout.lock(), &mut show, &cfg.title)
}
