//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Tessellation defaults. These mirror `cubepano_canvas::{MAX_DEPTH,
/// SEAM_MARGIN, TILE_STRETCH}` and must be kept equal to them.
pub const DEFAULT_MAX_DEPTH: u32 = 4;
pub const DEFAULT_SEAM_MARGIN: f64 = 0.08;
pub const DEFAULT_TILE_STRETCH: f64 = 1.0 + 16.0 / 1014.0;

/// Top-level renderer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Output frame size.
    pub viewport: ViewportConfig,
    /// Where the viewer looks.
    pub camera: CameraConfig,
    /// Quadtree and seam-hiding knobs.
    pub tessellation: TessellationConfig,
    /// Where the six face images live.
    pub faces: FacesConfig,
    /// Where the rendered frame goes.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Output frame size in pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

/// Camera at the cube centre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    /// Rotation about the vertical axis in degrees.
    pub yaw_deg: f64,
    /// Rotation about the horizontal axis in degrees; negative looks up.
    pub pitch_deg: f64,
    pub near: f64,
    pub far: f64,
}

/// Tile subdivision settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TessellationConfig {
    /// Quadtree depth of the leaf tiles (a face has `4^max_depth` leaves).
    pub max_depth: u32,
    /// How far clip triangles extend past their edges, in tile units.
    pub seam_margin: f64,
    /// Scale applied to each tile triangle so neighbours overlap.
    pub tile_stretch: f64,
}

/// Face image source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FacesConfig {
    /// Directory holding `north`, `south`, `east`, `west`, `top` and `bottom`
    /// images (`.jpg`, `.jpeg` or `.png`).
    pub dir: PathBuf,
}

/// Rendered frame destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// PNG file to write.
    pub path: PathBuf,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            seam_margin: DEFAULT_SEAM_MARGIN,
            tile_stretch: DEFAULT_TILE_STRETCH,
        }
    }
}

impl Default for FacesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("faces"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("panorama.png"),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Platform config directory for cubepano, if the platform has one.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cubepano"))
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }

    /// Reject values the renderer can't work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        let ViewportConfig { width, height } = self.viewport;
        if width == 0 || height == 0 {
            return invalid(format!("viewport must be non-empty, got {width}x{height}"));
        }

        let camera = &self.camera;
        if !(camera.fov_deg > 0.0 && camera.fov_deg < 180.0) {
            return invalid(format!(
                "camera.fov_deg must be in (0, 180), got {}",
                camera.fov_deg
            ));
        }
        if !camera.yaw_deg.is_finite() || !camera.pitch_deg.is_finite() {
            return invalid("camera yaw and pitch must be finite".to_string());
        }
        if !(camera.near > 0.0 && camera.near < camera.far && camera.far.is_finite()) {
            return invalid(format!(
                "camera clip planes must satisfy 0 < near < far, got near {} far {}",
                camera.near, camera.far
            ));
        }

        let tess = &self.tessellation;
        if !(1..=8).contains(&tess.max_depth) {
            return invalid(format!(
                "tessellation.max_depth must be in 1..=8, got {}",
                tess.max_depth
            ));
        }
        if !(tess.seam_margin.is_finite() && tess.seam_margin >= 0.0) {
            return invalid(format!(
                "tessellation.seam_margin must be >= 0, got {}",
                tess.seam_margin
            ));
        }
        if !(tess.tile_stretch.is_finite() && tess.tile_stretch >= 1.0) {
            return invalid(format!(
                "tessellation.tile_stretch must be >= 1, got {}",
                tess.tile_stretch
            ));
        }
        Ok(())
    }
}
