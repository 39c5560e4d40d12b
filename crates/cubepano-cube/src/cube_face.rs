//! The six faces of a panorama cube and their orientation transforms.

use std::f64::consts::{FRAC_PI_2, PI};
use std::sync::LazyLock;

use glam::DMat4;

/// The six faces of the cube a panorama is mapped onto.
///
/// The viewer sits at the centre of the cube. `North` is the face seen with
/// zero yaw and zero pitch; the others are reached by turning the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// Straight ahead at zero yaw.
    North = 0,
    /// Behind the viewer.
    South = 1,
    /// To the west (yaw +90°).
    West = 2,
    /// To the east (yaw −90°).
    East = 3,
    /// Overhead.
    Top = 4,
    /// Underfoot.
    Bottom = 5,
}

/// Orientation of each face relative to `North`, indexed by `CubeFace as usize`.
static ORIENTATIONS: LazyLock<[DMat4; 6]> = LazyLock::new(|| {
    [
        DMat4::IDENTITY,
        DMat4::from_rotation_y(PI),
        DMat4::from_rotation_y(FRAC_PI_2),
        DMat4::from_rotation_y(-FRAC_PI_2),
        DMat4::from_rotation_x(FRAC_PI_2),
        DMat4::from_rotation_x(-FRAC_PI_2),
    ]
});

impl CubeFace {
    /// All six faces in canonical draw order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::North,
        CubeFace::South,
        CubeFace::West,
        CubeFace::East,
        CubeFace::Top,
        CubeFace::Bottom,
    ];

    /// Index of this face into per-face tables.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name, also used as the image file stem.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CubeFace::North => "north",
            CubeFace::South => "south",
            CubeFace::West => "west",
            CubeFace::East => "east",
            CubeFace::Top => "top",
            CubeFace::Bottom => "bottom",
        }
    }

    /// Inverse of [`name`](Self::name). Case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<CubeFace> {
        CubeFace::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(name))
    }

    /// Model transform that rotates the `North` face square onto this face.
    ///
    /// The table is built once on first use and is read-only afterwards.
    #[must_use]
    pub fn orientation(self) -> DMat4 {
        ORIENTATIONS[self.index()]
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
