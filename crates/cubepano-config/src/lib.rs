//! Configuration for the cubepano renderer.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and stay readable across versions thanks to
//! `#[serde(default)]` on every section.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DEFAULT_MAX_DEPTH, DEFAULT_SEAM_MARGIN, DEFAULT_TILE_STRETCH,
    DebugConfig, FacesConfig, OutputConfig, TessellationConfig, ViewportConfig,
};
pub use error::ConfigError;
