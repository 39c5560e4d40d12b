//! Projected points.

use glam::{DMat4, DVec2, DVec4};

/// A texture-space point pushed through a face-to-screen transform.
///
/// `x` and `y` are screen pixels. `z_raw` is the transform's third output
/// component, not remapped into any depth range. A value below 1 marks a
/// point whose `x`/`y` cannot be trusted (it lies on the far side of the
/// viewer or next to the projective singularity).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HomogeneousPoint {
    pub x: f64,
    pub y: f64,
    pub z_raw: f64,
}

impl HomogeneousPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64, z_raw: f64) -> Self {
        Self { x, y, z_raw }
    }

    /// Transform the face point `(tx, ty, 1)`.
    #[must_use]
    pub fn project(transform: &DMat4, texture: DVec2) -> Self {
        let p = *transform * DVec4::new(texture.x, texture.y, 1.0, 1.0);
        let inv_w = p.w.recip();
        Self {
            x: p.x * inv_w,
            y: p.y * inv_w,
            z_raw: p.z * inv_w,
        }
    }

    /// `true` when this point must not be used for screen-space decisions.
    #[inline]
    #[must_use]
    pub fn is_wrapped(&self) -> bool {
        self.z_raw < 1.0
    }

    #[inline]
    #[must_use]
    pub fn xy(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}
