//! Command-line argument parsing for cubepano.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Render one frame of a cube-map panorama.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "cubepano", about = "Cube-map panorama renderer")]
pub struct CliArgs {
    /// Output width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Vertical field of view in degrees.
    #[arg(long)]
    pub fov: Option<f64>,

    /// Yaw in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub yaw: Option<f64>,

    /// Pitch in degrees (negative looks up).
    #[arg(long, allow_hyphen_values = true)]
    pub pitch: Option<f64>,

    /// Quadtree depth of the leaf tiles.
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Directory containing the face images.
    #[arg(long)]
    pub faces: Option<PathBuf>,

    /// PNG file to write.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Traverse and report tile counts without loading or writing images.
    #[arg(long)]
    pub dry_run: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.viewport.width = w;
        }
        if let Some(h) = args.height {
            self.viewport.height = h;
        }
        if let Some(fov) = args.fov {
            self.camera.fov_deg = fov;
        }
        if let Some(yaw) = args.yaw {
            self.camera.yaw_deg = yaw;
        }
        if let Some(pitch) = args.pitch {
            self.camera.pitch_deg = pitch;
        }
        if let Some(depth) = args.max_depth {
            self.tessellation.max_depth = depth;
        }
        if let Some(ref dir) = args.faces {
            self.faces.dir = dir.clone();
        }
        if let Some(ref path) = args.output {
            self.output.path = path.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            yaw: Some(-45.0),
            faces: Some(PathBuf::from("/tmp/cube")),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.viewport.width, 1920);
        assert_eq!(config.camera.yaw_deg, -45.0);
        assert_eq!(config.faces.dir, PathBuf::from("/tmp/cube"));
        // Non-overridden fields retain defaults
        assert_eq!(config.viewport.height, 600);
        assert_eq!(config.camera.fov_deg, 75.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "cubepano",
            "--width",
            "640",
            "--pitch",
            "-30",
            "--max-depth",
            "5",
            "-o",
            "out.png",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(args.width, Some(640));
        assert_eq!(args.pitch, Some(-30.0));
        assert_eq!(args.max_depth, Some(5));
        assert_eq!(args.output, Some(PathBuf::from("out.png")));
        assert!(args.dry_run);
        assert!(args.fov.is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(CliArgs::try_parse_from(["cubepano", "--width", "wide"]).is_err());
    }
}
