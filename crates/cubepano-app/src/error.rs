//! Errors surfaced by the renderer binary.

use std::path::PathBuf;

use cubepano_config::ConfigError;
use cubepano_cube::CubeFace;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A face image exists but couldn't be decoded.
    #[error("failed to load {face} face from {}: {source}", path.display())]
    Image {
        face: CubeFace,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The faces directory had none of the six images.
    #[error("no face images found in {}", .0.display())]
    NoFaces(PathBuf),

    /// Writing the rendered frame failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
