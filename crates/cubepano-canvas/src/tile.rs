//! Leaf tile rasterization: one screen quad as two affine-mapped triangles.
//!
//! Each triangle gets the affine map that takes the local unit square onto
//! the screen so that its three corners land exactly; the image region is
//! drawn over the whole unit square and clipped to the triangle.
//!
//! Two tricks hide hairline seams. The map is stretched by
//! [`TessellationParams::tile_stretch`] about the triangle's first corner so
//! neighbouring tiles overlap a little, and the clip triangle is pushed out by
//! [`TessellationParams::seam_margin`] past every edge so anti-aliased edges
//! get covered by the neighbour.

use glam::{DAffine2, DVec2};
use tracing::trace;

use crate::{ScreenQuad, SourceRect, Surface, TessellationParams, scoped};

/// Affine maps for triangles `{0, 1, 2}` and `{0, 2, 3}` of `corners`.
///
/// The first maps local `(0,0) (1,0) (1,1)` to corners 0, 1, 2; the second
/// maps local `(0,0) (1,1) (0,1)` to corners 0, 2, 3.
#[must_use]
pub fn triangle_transforms(corners: &[DVec2; 4]) -> [DAffine2; 2] {
    let [p0, p1, p2, p3] = *corners;
    [
        DAffine2::from_cols(p1 - p0, p2 - p1, p0),
        DAffine2::from_cols(p2 - p3, p3 - p0, p0),
    ]
}

/// Local clip triangles for the two halves, grown by `margin`.
#[must_use]
pub fn clip_triangles(margin: f64) -> [[DVec2; 3]; 2] {
    let d = margin;
    [
        [
            DVec2::new(-2.0 * d, -d),
            DVec2::new(1.0 + d, -d),
            DVec2::new(1.0 + d, 1.0 + 2.0 * d),
        ],
        [
            DVec2::new(1.0 + 2.0 * d, 1.0 + d),
            DVec2::new(-d, 1.0 + d),
            DVec2::new(-d, -2.0 * d),
        ],
    ]
}

/// Draw one leaf tile.
///
/// `origin` and `size` select the image region as fractions of the image.
pub fn draw_tile<S: Surface + ?Sized>(
    surface: &mut S,
    image: &S::Image,
    origin: DVec2,
    size: f64,
    corners: &ScreenQuad,
    params: &TessellationParams,
) {
    let source = SourceRect::from_fraction(image, origin, DVec2::splat(size));
    let stretch = DAffine2::from_scale(DVec2::splat(params.tile_stretch));
    let clips = clip_triangles(params.seam_margin);

    for (transform, clip) in triangle_transforms(&corners.xy()).into_iter().zip(clips) {
        let mut s = scoped(surface);
        s.set_transform(transform);
        s.transform(stretch);
        s.clip(&clip);
        s.draw_image(image, source);
    }
    trace!(?origin, size, "tile drawn");
}
