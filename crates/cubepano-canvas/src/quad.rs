//! Texture-space quads and their projected screen quads.
//!
//! Corner order is fixed everywhere: top-left, top-right, bottom-right,
//! bottom-left.
//!
//! ```text
//! 0 --- 1
//! |     |
//! 3 --- 2
//! ```

use glam::{DMat4, DVec2};

use crate::HomogeneousPoint;

/// A square region of a face image.
///
/// `i`, `j` and `size` are fractions of the image (`[0, 1]`). The same region
/// in the face's `[-1, 1]²` texture space starts at `-1 + 2i`, `-1 + 2j` and
/// has edge `2 * size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureQuad {
    pub i: f64,
    pub j: f64,
    pub size: f64,
    /// Depth in the quadtree; the whole face is level 0.
    pub level: u32,
}

impl TextureQuad {
    /// The whole face.
    pub const ROOT: TextureQuad = TextureQuad {
        i: 0.0,
        j: 0.0,
        size: 1.0,
        level: 0,
    };

    /// Image-fraction origin of this quad.
    #[must_use]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.i, self.j)
    }

    /// Corners in `[-1, 1]²` texture space.
    #[must_use]
    pub fn texture_corners(&self) -> [DVec2; 4] {
        let o = DVec2::new(-1.0 + 2.0 * self.i, -1.0 + 2.0 * self.j);
        let e = 2.0 * self.size;
        [
            o,
            o + DVec2::new(e, 0.0),
            o + DVec2::new(e, e),
            o + DVec2::new(0.0, e),
        ]
    }

    /// Midpoints of edges 0-1, 1-2, 2-3, 3-0 followed by the centre, in
    /// texture space.
    #[must_use]
    pub fn texture_midpoints(&self) -> [DVec2; 5] {
        let o = DVec2::new(-1.0 + 2.0 * self.i, -1.0 + 2.0 * self.j);
        let e = 2.0 * self.size;
        let h = self.size;
        [
            o + DVec2::new(h, 0.0),
            o + DVec2::new(e, h),
            o + DVec2::new(h, e),
            o + DVec2::new(0.0, h),
            o + DVec2::new(h, h),
        ]
    }

    /// The four half-size children in visiting order.
    #[must_use]
    pub fn children(&self) -> [TextureQuad; 4] {
        let h = self.size / 2.0;
        let level = self.level + 1;
        [
            TextureQuad {
                i: self.i,
                j: self.j,
                size: h,
                level,
            },
            TextureQuad {
                i: self.i + h,
                j: self.j,
                size: h,
                level,
            },
            TextureQuad {
                i: self.i + h,
                j: self.j + h,
                size: h,
                level,
            },
            TextureQuad {
                i: self.i,
                j: self.j + h,
                size: h,
                level,
            },
        ]
    }
}

/// The four projected corners of a [`TextureQuad`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenQuad {
    pub corners: [HomogeneousPoint; 4],
}

impl ScreenQuad {
    #[must_use]
    pub fn new(corners: [HomogeneousPoint; 4]) -> Self {
        Self { corners }
    }

    /// Project all four corners of `quad`.
    #[must_use]
    pub fn project(transform: &DMat4, quad: &TextureQuad) -> Self {
        Self {
            corners: quad
                .texture_corners()
                .map(|t| HomogeneousPoint::project(transform, t)),
        }
    }

    /// Child screen quads sharing this quad's corners.
    ///
    /// `mid` holds the projected edge midpoints and centre in the order of
    /// [`TextureQuad::texture_midpoints`]. Neighbouring children share the
    /// exact same points, so their edges meet without rounding drift.
    #[must_use]
    pub fn children(&self, mid: [HomogeneousPoint; 5]) -> [ScreenQuad; 4] {
        let [p0, p1, p2, p3] = self.corners;
        let [p01, p12, p23, p30, pc] = mid;
        [
            ScreenQuad::new([p0, p01, pc, p30]),
            ScreenQuad::new([p01, p1, p12, pc]),
            ScreenQuad::new([pc, p12, p2, p23]),
            ScreenQuad::new([p30, pc, p23, p3]),
        ]
    }

    /// Screen positions of the corners.
    #[must_use]
    pub fn xy(&self) -> [DVec2; 4] {
        self.corners.map(|p| p.xy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_covers_texture_square() {
        let c = TextureQuad::ROOT.texture_corners();
        assert_eq!(
            c,
            [
                DVec2::new(-1.0, -1.0),
                DVec2::new(1.0, -1.0),
                DVec2::new(1.0, 1.0),
                DVec2::new(-1.0, 1.0)
            ]
        );
        assert_eq!(TextureQuad::ROOT.texture_midpoints()[4], DVec2::ZERO);
    }

    #[test]
    fn test_children_tile_parent_exactly() {
        let parent = TextureQuad {
            i: 0.25,
            j: 0.5,
            size: 0.25,
            level: 2,
        };
        let children = parent.children();
        let area: f64 = children.iter().map(|c| c.size * c.size).sum();
        assert_eq!(area, parent.size * parent.size);
        for c in &children {
            assert_eq!(c.level, 3);
            assert_eq!(c.size, 0.125);
            assert!(c.i >= parent.i && c.i + c.size <= parent.i + parent.size);
            assert!(c.j >= parent.j && c.j + c.size <= parent.j + parent.size);
        }
        // Distinct origins, so no two children overlap.
        for (a, ca) in children.iter().enumerate() {
            for cb in &children[a + 1..] {
                assert!(ca.origin() != cb.origin(), "children overlap at {:?}", ca.origin());
            }
        }
    }

    #[test]
    fn test_child_order_is_tl_tr_br_bl() {
        let [tl, tr, br, bl] = TextureQuad::ROOT.children();
        assert_eq!(tl.origin(), DVec2::new(0.0, 0.0));
        assert_eq!(tr.origin(), DVec2::new(0.5, 0.0));
        assert_eq!(br.origin(), DVec2::new(0.5, 0.5));
        assert_eq!(bl.origin(), DVec2::new(0.0, 0.5));
    }

    #[test]
    fn test_screen_children_match_projected_children() {
        let m = DMat4::from_scale(glam::DVec3::new(100.0, 50.0, 1.0));
        let parent = ScreenQuad::project(&m, &TextureQuad::ROOT);
        let mid = TextureQuad::ROOT
            .texture_midpoints()
            .map(|t| HomogeneousPoint::project(&m, t));
        let from_parent = parent.children(mid);
        for (quad, screen) in TextureQuad::ROOT.children().iter().zip(from_parent) {
            assert_eq!(ScreenQuad::project(&m, quad), screen);
        }
    }

    #[test]
    fn test_texture_corners_track_image_fraction() {
        let q = TextureQuad {
            i: 0.75,
            j: 0.0,
            size: 0.25,
            level: 2,
        };
        let c = q.texture_corners();
        assert_eq!(c[0], DVec2::new(0.5, -1.0));
        assert_eq!(c[2], DVec2::new(1.0, -0.5));
    }
}
