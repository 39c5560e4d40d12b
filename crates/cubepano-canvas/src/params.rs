//! Tessellation constants.

/// Default subdivision depth: 16×16 leaf tiles per face at most.
pub const MAX_DEPTH: u32 = 4;

/// How far each triangle's clip path reaches past its edges, in local
/// unit-triangle coordinates.
pub const SEAM_MARGIN: f64 = 0.08;

/// Uniform stretch applied to every tile triangle before clipping.
pub const TILE_STRETCH: f64 = 1.0 + 16.0 / 1014.0;

/// Knobs for one face traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TessellationParams {
    /// Quadtree depth at which tiles are drawn.
    pub max_depth: u32,
    /// Clip margin `d`.
    pub seam_margin: f64,
    /// Stretch factor `s`, slightly above 1.
    pub tile_stretch: f64,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            seam_margin: SEAM_MARGIN,
            tile_stretch: TILE_STRETCH,
        }
    }
}

impl TessellationParams {
    /// Number of leaf tiles per face when nothing is culled or wrapped.
    ///
    /// Saturates at `u64::MAX` for depths too deep to count.
    #[must_use]
    pub fn max_tiles(&self) -> u64 {
        4u64.checked_pow(self.max_depth).unwrap_or(u64::MAX)
    }
}
