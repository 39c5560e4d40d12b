//! Whole-frame traversal through the public API.

use cubepano_canvas::{
    DrawOp, ImageHandle, PixmapSurface, RecordingSurface, TessellationParams, render_frame,
};
use cubepano_cube::{CubeFace, CubeMap, ViewCamera};
use image::{Rgba, RgbaImage};

fn handles() -> CubeMap<ImageHandle> {
    CubeFace::ALL
        .into_iter()
        .map(|f| (f, ImageHandle::new(f.index() as u32, 1024, 1024)))
        .collect()
}

fn record(camera: &ViewCamera, params: &TessellationParams) -> Vec<DrawOp> {
    let images = handles();
    let mut surface = RecordingSurface::new(800, 600);
    render_frame(&mut surface, camera, &images.borrowed(), params);
    surface.take_ops()
}

#[test]
fn test_same_inputs_give_identical_draws() {
    let camera = ViewCamera {
        yaw: 0.7,
        pitch: -0.3,
        ..ViewCamera::default()
    };
    let params = TessellationParams::default();
    assert_eq!(record(&camera, &params), record(&camera, &params));
}

#[test]
fn test_saves_and_restores_balance() {
    let camera = ViewCamera {
        yaw: 2.1,
        pitch: 0.9,
        fov_deg: 100.0,
        ..ViewCamera::default()
    };
    let ops = record(&camera, &TessellationParams::default());
    let saves = ops.iter().filter(|op| **op == DrawOp::Save).count();
    let restores = ops.iter().filter(|op| **op == DrawOp::Restore).count();
    let draws = ops
        .iter()
        .filter(|op| matches!(op, DrawOp::DrawImage { .. }))
        .count();
    assert!(draws > 0);
    assert_eq!(saves, restores);
    assert_eq!(saves, draws, "every image draw should be in its own scope");
}

#[test]
fn test_deeper_trees_draw_more_smaller_tiles() {
    let camera = ViewCamera::default();
    let mut counts = Vec::new();
    for max_depth in 1..=5 {
        let params = TessellationParams {
            max_depth,
            ..TessellationParams::default()
        };
        let images = handles();
        let mut surface = RecordingSurface::new(800, 600);
        let stats = render_frame(&mut surface, &camera, &images.borrowed(), &params);
        assert!(u64::from(stats.tiles.drawn) <= params.max_tiles().saturating_mul(6));
        counts.push(stats.tiles.drawn);
    }
    assert!(
        counts.windows(2).all(|w| w[0] < w[1]),
        "tile counts should grow with depth: {counts:?}"
    );
}

#[test]
fn test_source_rects_cover_tile_fractions() {
    let ops = record(&ViewCamera::default(), &TessellationParams::default());
    let tile = 1024.0 / 16.0;
    for op in ops {
        if let DrawOp::DrawImage { source, .. } = op {
            assert_eq!(source.width, tile);
            assert_eq!(source.height, tile);
            assert_eq!(source.x % tile, 0.0);
            assert_eq!(source.y % tile, 0.0);
        }
    }
}

#[test]
fn test_pixmap_renders_front_face() {
    let red = RgbaImage::from_pixel(64, 64, Rgba([255, 0, 0, 255]));
    let mut faces = CubeMap::new();
    faces.insert(CubeFace::North, &red);

    let mut surface = PixmapSurface::new(200, 150);
    let stats = render_frame(
        &mut surface,
        &ViewCamera::default(),
        &faces,
        &TessellationParams::default(),
    );
    assert!(stats.tiles.drawn > 0);
    let out = surface.into_image();
    assert_eq!(*out.get_pixel(100, 75), Rgba([255, 0, 0, 255]));
    assert_eq!(*out.get_pixel(100, 0), Rgba([255, 0, 0, 255]));
}

#[test]
fn test_pixmap_face_behind_viewer_leaves_surface_clear() {
    let green = RgbaImage::from_pixel(64, 64, Rgba([0, 255, 0, 255]));
    let mut faces = CubeMap::new();
    faces.insert(CubeFace::South, &green);

    let mut surface = PixmapSurface::from_image(RgbaImage::from_pixel(
        100,
        100,
        Rgba([9, 9, 9, 255]),
    ));
    render_frame(
        &mut surface,
        &ViewCamera::default(),
        &faces,
        &TessellationParams::default(),
    );
    assert!(
        surface.image().pixels().all(|p| p[3] == 0),
        "frame should be cleared and nothing drawn"
    );
}

#[test]
fn test_pixmap_full_cube_has_no_holes() {
    let red = RgbaImage::from_pixel(32, 32, Rgba([255, 0, 0, 255]));
    let faces: CubeMap<&RgbaImage> = CubeFace::ALL.into_iter().map(|f| (f, &red)).collect();
    let camera = ViewCamera {
        yaw: 0.4,
        pitch: -0.5,
        ..ViewCamera::default()
    };
    let mut surface = PixmapSurface::new(160, 120);
    render_frame(&mut surface, &camera, &faces, &TessellationParams::default());

    let out = surface.into_image();
    let total = out.pixels().count();
    let covered = out.pixels().filter(|p| p[3] == 255).count();
    assert!(
        covered * 100 >= total * 99,
        "only {covered} of {total} pixels covered"
    );
}
