//! Loading faces, rendering a frame and writing it out.

use std::path::{Path, PathBuf};

use cubepano_canvas::{
    FrameStats, ImageHandle, PixmapSurface, RecordingSurface, TessellationParams, render_frame,
};
use cubepano_config::{CameraConfig, Config, TessellationConfig};
use cubepano_cube::{CubeFace, CubeMap, ViewCamera};
use image::{ImageFormat, RgbaImage};
use tracing::{info, warn};

use crate::error::AppError;

/// Extensions tried, in order, for each face image.
pub const FACE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Nominal face size used for dry runs.
const DRY_RUN_FACE_SIZE: u32 = 1024;

#[must_use]
pub fn camera_from_config(camera: &CameraConfig) -> ViewCamera {
    ViewCamera {
        fov_deg: camera.fov_deg,
        yaw: camera.yaw_deg.to_radians(),
        pitch: camera.pitch_deg.to_radians(),
        near: camera.near,
        far: camera.far,
    }
}

#[must_use]
pub fn params_from_config(tessellation: &TessellationConfig) -> TessellationParams {
    TessellationParams {
        max_depth: tessellation.max_depth,
        seam_margin: tessellation.seam_margin,
        tile_stretch: tessellation.tile_stretch,
    }
}

/// First existing `<dir>/<face>.<ext>` for the face.
fn face_path(dir: &Path, face: CubeFace) -> Option<PathBuf> {
    FACE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{ext}", face.name())))
        .find(|path| path.is_file())
}

/// Load whichever of the six faces exist in `dir`.
///
/// Missing faces are logged and left empty; a face file that fails to decode
/// is an error. Finding no faces at all is an error too.
pub fn load_faces(dir: &Path) -> Result<CubeMap<RgbaImage>, AppError> {
    let mut faces = CubeMap::new();
    for face in CubeFace::ALL {
        let Some(path) = face_path(dir, face) else {
            warn!(%face, dir = %dir.display(), "face image missing");
            continue;
        };
        let image = image::open(&path)
            .map_err(|source| AppError::Image {
                face,
                path: path.clone(),
                source,
            })?
            .to_rgba8();
        info!(
            %face,
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "loaded face"
        );
        faces.insert(face, image);
    }

    if faces.is_empty() {
        return Err(AppError::NoFaces(dir.to_path_buf()));
    }
    Ok(faces)
}

/// Render the configured view of the faces into a new image.
pub fn render_image(config: &Config, faces: &CubeMap<RgbaImage>) -> (RgbaImage, FrameStats) {
    let mut surface = PixmapSurface::new(config.viewport.width, config.viewport.height);
    let stats = render_frame(
        &mut surface,
        &camera_from_config(&config.camera),
        &faces.borrowed(),
        &params_from_config(&config.tessellation),
    );
    (surface.into_image(), stats)
}

/// Load faces, render, and write the PNG named in the config.
pub fn render_to_file(config: &Config) -> Result<FrameStats, AppError> {
    let faces = load_faces(&config.faces.dir)?;
    let (frame, stats) = render_image(config, &faces);

    let path = &config.output.path;
    let write_err = |source| AppError::Write {
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_err(image::ImageError::IoError(e)))?;
    }
    frame
        .save_with_format(path, ImageFormat::Png)
        .map_err(write_err)?;

    info!(
        path = %path.display(),
        faces = stats.faces,
        drawn = stats.tiles.drawn,
        culled = stats.tiles.culled,
        wrapped = stats.tiles.wrapped_dropped,
        "frame written"
    );
    Ok(stats)
}

/// Traverse every face with placeholder images and report what would be
/// drawn, without touching the filesystem.
pub fn dry_run(config: &Config) -> FrameStats {
    let handles: CubeMap<ImageHandle> = CubeFace::ALL
        .into_iter()
        .map(|face| {
            let id = face.index() as u32;
            (face, ImageHandle::new(id, DRY_RUN_FACE_SIZE, DRY_RUN_FACE_SIZE))
        })
        .collect();
    let mut surface = RecordingSurface::new(config.viewport.width, config.viewport.height);
    let stats = render_frame(
        &mut surface,
        &camera_from_config(&config.camera),
        &handles.borrowed(),
        &params_from_config(&config.tessellation),
    );
    info!(
        visited = stats.tiles.visited,
        drawn = stats.tiles.drawn,
        culled = stats.tiles.culled,
        wrapped = stats.tiles.wrapped_dropped,
        draw_calls = surface.image_draws().count(),
        "dry run"
    );
    stats
}
