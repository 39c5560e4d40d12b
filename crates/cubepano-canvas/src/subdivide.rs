//! Quadtree subdivision of a face into drawable leaf tiles.

use std::ops::AddAssign;

use glam::DMat4;

use crate::{HomogeneousPoint, ScreenQuad, TextureQuad, Visibility, classify};

/// Counters from one traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Nodes classified, leaves included.
    pub visited: u32,
    /// Nodes pruned by the cull test (their subtrees are not counted).
    pub culled: u32,
    /// Leaves skipped because they were still wrapped at full depth.
    pub wrapped_dropped: u32,
    /// Leaves handed to the tile callback.
    pub drawn: u32,
}

impl AddAssign for TraversalStats {
    fn add_assign(&mut self, rhs: Self) {
        self.visited += rhs.visited;
        self.culled += rhs.culled;
        self.wrapped_dropped += rhs.wrapped_dropped;
        self.drawn += rhs.drawn;
    }
}

/// Walks one face's quadtree for one frame.
///
/// Holds only per-frame inputs; every node's geometry lives on the stack of
/// the recursive call that visits it.
#[derive(Clone, Copy, Debug)]
pub struct Subdivider {
    transform: DMat4,
    width: f64,
    height: f64,
    max_level: u32,
}

impl Subdivider {
    #[must_use]
    pub fn new(transform: DMat4, width: f64, height: f64, max_level: u32) -> Self {
        Self {
            transform,
            width,
            height,
            max_level,
        }
    }

    /// Traverse the whole face, calling `on_leaf` for every drawable leaf in
    /// visiting order.
    pub fn traverse<F>(&self, mut on_leaf: F) -> TraversalStats
    where
        F: FnMut(&TextureQuad, &ScreenQuad),
    {
        let root = TextureQuad::ROOT;
        let corners = ScreenQuad::project(&self.transform, &root);
        let mut stats = TraversalStats::default();
        self.subdivide(&root, &corners, &mut stats, &mut on_leaf);
        stats
    }

    /// Visit `quad`, whose projected corners are `corners`, and everything
    /// below it.
    pub fn subdivide<F>(
        &self,
        quad: &TextureQuad,
        corners: &ScreenQuad,
        stats: &mut TraversalStats,
        on_leaf: &mut F,
    ) where
        F: FnMut(&TextureQuad, &ScreenQuad),
    {
        stats.visited += 1;
        let visibility = classify(corners, self.width, self.height);

        if visibility == Visibility::Cull {
            stats.culled += 1;
            return;
        }

        if quad.level >= self.max_level {
            if visibility == Visibility::Wrapped {
                stats.wrapped_dropped += 1;
            } else {
                stats.drawn += 1;
                on_leaf(quad, corners);
            }
            return;
        }

        // Wrapped interior nodes still recurse: a child may come out clean.
        let mid = quad
            .texture_midpoints()
            .map(|t| HomogeneousPoint::project(&self.transform, t));
        for (child, child_corners) in quad.children().iter().zip(corners.children(mid)) {
            self.subdivide(child, &child_corners, stats, on_leaf);
        }
    }
}
