//! Cube-map faces drawn on an affine-only 2D surface.
//!
//! A 2D surface can't do perspective, so each face is cut into a quadtree of
//! tiles small enough that an affine map per triangle looks right. Tiles are
//! classified against the viewport, culled, subdivided further when they
//! straddle the viewer, and finally drawn as two clipped, slightly stretched
//! triangles.

mod face;
mod params;
mod pixmap;
mod point;
mod quad;
mod recording;
mod subdivide;
mod surface;
mod tile;
mod visibility;

pub use face::{FaceView, FrameStats, draw_face, render_frame};
pub use params::{MAX_DEPTH, SEAM_MARGIN, TILE_STRETCH, TessellationParams};
pub use pixmap::PixmapSurface;
pub use point::HomogeneousPoint;
pub use quad::{ScreenQuad, TextureQuad};
pub use recording::{DrawOp, ImageHandle, RecordingSurface};
pub use subdivide::{Subdivider, TraversalStats};
pub use surface::{SourceImage, SourceRect, Surface, SurfaceGuard, scoped};
pub use tile::{clip_triangles, draw_tile, triangle_transforms};
pub use visibility::{Visibility, classify};
