//! Per-face and per-frame rendering entry points.

use cubepano_cube::{CubeFace, CubeMap, ViewCamera, Viewport, face_to_screen};
use glam::DMat4;
use tracing::{debug, info_span};

use crate::{Subdivider, Surface, TessellationParams, TraversalStats, draw_tile};

/// Everything needed to draw one face this frame.
#[derive(Debug)]
pub struct FaceView<'a, I: ?Sized> {
    pub face: CubeFace,
    /// Face texture square to screen, as built by [`face_to_screen`].
    pub transform: DMat4,
    pub image: &'a I,
}

/// Draw one face onto `surface`.
pub fn draw_face<S: Surface + ?Sized>(
    surface: &mut S,
    view: &FaceView<'_, S::Image>,
    params: &TessellationParams,
) -> TraversalStats {
    let (width, height) = surface.size();
    let subdivider = Subdivider::new(
        view.transform,
        f64::from(width),
        f64::from(height),
        params.max_depth,
    );
    let stats = subdivider.traverse(|quad, corners| {
        draw_tile(surface, view.image, quad.origin(), quad.size, corners, params);
    });
    debug!(
        face = %view.face,
        visited = stats.visited,
        culled = stats.culled,
        wrapped = stats.wrapped_dropped,
        drawn = stats.drawn,
        "face traversed"
    );
    stats
}

/// Totals for a rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Faces that had an image and were traversed.
    pub faces: u32,
    pub tiles: TraversalStats,
}

/// Clear `surface` and draw every face in `faces` for the given camera.
///
/// Faces are drawn in [`CubeFace::ALL`] order; faces without an image are
/// skipped.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    camera: &ViewCamera,
    faces: &CubeMap<&S::Image>,
    params: &TessellationParams,
) -> FrameStats {
    let (width, height) = surface.size();
    let viewport = Viewport::new(width, height);
    let _span = info_span!("frame", width, height, fov = camera.fov_deg).entered();

    surface.clear();
    let mut frame = FrameStats::default();
    for (face, image) in faces.iter() {
        let view = FaceView {
            face,
            transform: face_to_screen(camera, face, viewport),
            image: *image,
        };
        frame.tiles += draw_face(surface, &view, params);
        frame.faces += 1;
    }
    frame
}
