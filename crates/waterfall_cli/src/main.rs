//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `waterfall_core` linkage.
//! - Print a deterministic text rendering of a sample grid in both
//!   orientations.
//!
//! Set `WATERFALL_LOG_DIR` to an absolute path to enable file logging.

use clap::Parser;
use log::info;
use std::num::NonZeroUsize;
use std::process::ExitCode;
use waterfall_core::{
    core_version, init_logging, AxisConfiguration, GridSettings, LoggingConfig, TrackInfo,
    WaterfallGrid,
};

/// Deal a sample item range across waterfall tracks and print each track.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of sample items
    #[arg(default_value_t = 30)]
    items: usize,
    /// Number of columns (and rows, once flipped)
    #[arg(default_value = "4")]
    tracks: NonZeroUsize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Ok(log_dir) = std::env::var("WATERFALL_LOG_DIR") {
        if let Err(err) = init_logging(&LoggingConfig::with_default_level(log_dir)) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("waterfall_core version={}", core_version());

    let data: Vec<usize> = (0..args.items).collect();
    let settings = GridSettings::default();
    let mut axis = AxisConfiguration::uniform_columns(args.tracks.get());
    if let Err(err) = settings.apply_to(&mut axis) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    for axis in [axis.clone(), axis.flipped()] {
        let grid = match WaterfallGrid::new(&axis, &data).with_settings(&settings) {
            Ok(grid) => grid,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        };
        let label = if grid.is_vertical() { "columns" } else { "rows" };
        println!(
            "{label}={} items={} spacing={}",
            grid.track_count(),
            data.len(),
            settings.spacing
        );
        for line in grid.render_with(|track| render_track_line(&track)) {
            println!("  {line}");
        }
    }

    info!(
        "event=cli_probe module=cli status=ok items={} tracks={}",
        args.items, args.tracks
    );
    ExitCode::SUCCESS
}

fn render_track_line(track: &TrackInfo<'_, Vec<usize>>) -> String {
    let kind = if track.spec().is_column() { "col" } else { "row" };
    format!("{kind}[{}] {}", track.index(), track.view())
}
