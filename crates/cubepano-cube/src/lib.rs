//! Cube-map geometry: face orientations, per-face storage, and the
//! face-to-screen projection for a viewer at the cube centre.

mod cube_face;
mod cube_map;
pub mod projection;

pub use cube_face::CubeFace;
pub use cube_map::CubeMap;
pub use projection::{SEAM_DEPTH_SCALE, ViewCamera, Viewport, face_to_screen};
