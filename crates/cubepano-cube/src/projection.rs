//! Face-to-screen transforms for a viewer at the centre of the cube.
//!
//! The combined transform maps a point `(tx, ty, 1)` of a face's `[-1, 1]²`
//! texture square to screen pixels in homogeneous form:
//!
//! ```text
//! screen · perspective · Rx(pitch) · Ry(yaw) · orientation(face) · seam
//! ```
//!
//! `seam` mirrors the face horizontally (images are viewed from inside the
//! cube) and pulls the face plane in by [`SEAM_DEPTH_SCALE`] so neighbouring
//! faces overlap slightly at the cube edges.
//!
//! The face square sits on the `+z` side of the camera, so the visible part of
//! the cube arrives with a negative `w`. After the homogeneous divide this
//! leaves the third coordinate `>= 1` for visible points and `< 1` for points
//! on the other side of the viewer, which is what the tile classifier keys on.

use glam::{DMat4, DVec3};

use crate::CubeFace;

/// Depth squeeze applied to every face plane.
pub const SEAM_DEPTH_SCALE: f64 = 0.9985;

/// Camera state for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewCamera {
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    /// Rotation about the vertical axis, radians.
    pub yaw: f64,
    /// Rotation about the horizontal axis, radians. Negative looks up.
    pub pitch: f64,
    /// Near clip distance (positive).
    pub near: f64,
    /// Far clip distance (positive, > near).
    pub far: f64,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            yaw: 0.0,
            pitch: 0.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl ViewCamera {
    /// Perspective combined with the camera rotation.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f64) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_deg.to_radians(), aspect, self.near, self.far)
            * DMat4::from_rotation_x(self.pitch)
            * DMat4::from_rotation_y(self.yaw)
    }
}

/// Pixel size of the target surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width / height.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Maps normalized device coordinates to pixels with `y` pointing down.
    #[must_use]
    pub fn screen_matrix(&self) -> DMat4 {
        let half_w = f64::from(self.width) / 2.0;
        let half_h = f64::from(self.height) / 2.0;
        DMat4::from_translation(DVec3::new(half_w, half_h, 0.0))
            * DMat4::from_scale(DVec3::new(half_w, half_h, 1.0))
            * DMat4::from_scale(DVec3::new(1.0, -1.0, 1.0))
    }
}

/// Build the transform taking `face`'s texture square to screen space.
#[must_use]
pub fn face_to_screen(camera: &ViewCamera, face: CubeFace, viewport: Viewport) -> DMat4 {
    viewport.screen_matrix()
        * camera.projection_matrix(viewport.aspect())
        * face.orientation()
        * DMat4::from_scale(DVec3::new(-1.0, 1.0, SEAM_DEPTH_SCALE))
}
