//! Screen-quad visibility classification.

use crate::ScreenQuad;

/// What to do with a projected quad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Entirely off one side of the viewport. Nothing below it can be visible.
    Cull,
    /// At least one corner is untrustworthy. Never drawn as is, but its
    /// children may still resolve.
    Wrapped,
    /// Can be drawn with an affine approximation.
    Safe,
}

/// Classify `quad` against a `width` × `height` viewport.
///
/// The cull test is a separating-axis check against the four viewport edges
/// only, so a quad hanging off a viewport corner diagonally is kept. It is
/// skipped for wrapped quads because their screen positions are meaningless.
#[must_use]
pub fn classify(quad: &ScreenQuad, width: f64, height: f64) -> Visibility {
    let c = &quad.corners;
    if c.iter().any(|p| p.is_wrapped()) {
        return Visibility::Wrapped;
    }

    let culled = c.iter().all(|p| p.x < 0.0)
        || c.iter().all(|p| p.y < 0.0)
        || c.iter().all(|p| p.x > width)
        || c.iter().all(|p| p.y > height);

    if culled {
        Visibility::Cull
    } else {
        Visibility::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HomogeneousPoint;

    fn quad(xy: [(f64, f64); 4]) -> ScreenQuad {
        ScreenQuad::new(xy.map(|(x, y)| HomogeneousPoint::new(x, y, 1.5)))
    }

    #[test]
    fn test_all_left_of_viewport_is_culled() {
        let q = quad([(-50.0, 10.0), (-50.0, 20.0), (-50.0, 300.0), (-50.0, 590.0)]);
        assert_eq!(classify(&q, 800.0, 600.0), Visibility::Cull);
    }

    #[test]
    fn test_inside_viewport_is_safe() {
        let q = quad([(10.0, 10.0), (790.0, 10.0), (790.0, 590.0), (10.0, 590.0)]);
        assert_eq!(classify(&q, 800.0, 600.0), Visibility::Safe);
    }

    #[test]
    fn test_each_side_culls() {
        let w = 800.0;
        let h = 600.0;
        let right = quad([(801.0, 0.0), (900.0, 0.0), (900.0, 10.0), (801.0, 10.0)]);
        let above = quad([(0.0, -1.0), (10.0, -5.0), (10.0, -2.0), (0.0, -9.0)]);
        let below = quad([(0.0, 601.0), (10.0, 700.0), (10.0, 650.0), (0.0, 610.0)]);
        assert_eq!(classify(&right, w, h), Visibility::Cull);
        assert_eq!(classify(&above, w, h), Visibility::Cull);
        assert_eq!(classify(&below, w, h), Visibility::Cull);
    }

    #[test]
    fn test_cull_is_strict_at_viewport_edge() {
        let on_edge = quad([(0.0, 10.0), (-5.0, 10.0), (-5.0, 20.0), (-5.0, 20.0)]);
        assert_eq!(classify(&on_edge, 800.0, 600.0), Visibility::Safe);
        let on_far_edge = quad([(800.0, 10.0), (900.0, 10.0), (900.0, 20.0), (900.0, 20.0)]);
        assert_eq!(classify(&on_far_edge, 800.0, 600.0), Visibility::Safe);
    }

    #[test]
    fn test_diagonal_offscreen_quad_is_kept() {
        // Straddles the top-left corner from outside: no single axis separates it.
        let q = quad([(-100.0, 50.0), (-10.0, -10.0), (50.0, -100.0), (-100.0, -100.0)]);
        assert_eq!(classify(&q, 800.0, 600.0), Visibility::Safe);
    }

    #[test]
    fn test_one_low_depth_corner_wraps_regardless_of_position() {
        let mut q = quad([(-50.0, -50.0), (-50.0, -50.0), (-50.0, -50.0), (-50.0, -50.0)]);
        q.corners[2].z_raw = 0.5;
        assert_eq!(classify(&q, 800.0, 600.0), Visibility::Wrapped);

        let mut q = quad([(10.0, 10.0), (790.0, 10.0), (790.0, 590.0), (10.0, 590.0)]);
        q.corners[0].z_raw = 0.5;
        assert_eq!(classify(&q, 800.0, 600.0), Visibility::Wrapped);
    }

    #[test]
    fn test_classify_is_pure() {
        let q = quad([(3.0, 4.0), (500.0, -20.0), (900.0, 700.0), (-1.0, 0.0)]);
        let first = classify(&q, 800.0, 600.0);
        for _ in 0..10 {
            assert_eq!(classify(&q, 800.0, 600.0), first);
        }
    }
}
