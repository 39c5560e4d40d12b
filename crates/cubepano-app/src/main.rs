//! Render one frame of a cube-map panorama to a PNG.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p cubepano-app -- --faces ./faces --yaw 30 -o view.png`.
//! Add `--dry-run` to only report how many tiles the view would draw.

mod error;
mod render;

use std::path::PathBuf;

use clap::Parser;
use cubepano_config::{CliArgs, Config};
use tracing::{error, info};

use crate::error::AppError;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(Config::default_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    cubepano_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = run(&config, args.dry_run) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: &Config, dry_run: bool) -> Result<(), AppError> {
    config.validate()?;
    info!(
        width = config.viewport.width,
        height = config.viewport.height,
        fov = config.camera.fov_deg,
        yaw = config.camera.yaw_deg,
        pitch = config.camera.pitch_deg,
        max_depth = config.tessellation.max_depth,
        "rendering"
    );

    if dry_run {
        render::dry_run(config);
    } else {
        render::render_to_file(config)?;
    }
    Ok(())
}
