//! A surface that records draw calls instead of rasterizing them.

use glam::{DAffine2, DVec2};

use crate::{SourceImage, SourceRect, Surface};

/// Opaque image stand-in: an id plus pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

impl ImageHandle {
    #[must_use]
    pub fn new(id: u32, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }
}

impl SourceImage for ImageHandle {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Save,
    Restore,
    SetTransform(DAffine2),
    Transform(DAffine2),
    Clip(Vec<DVec2>),
    DrawImage {
        /// [`ImageHandle::id`] of the drawn image.
        image: u32,
        source: SourceRect,
    },
}

/// Records every call in order and tracks save/restore nesting.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
    depth: usize,
    max_depth: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            depth: 0,
            max_depth: 0,
        }
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Hand over the recording and start a fresh one.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Current number of unrestored saves.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Deepest save nesting seen.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Image draws as `(image id, source rect)`.
    pub fn image_draws(&self) -> impl Iterator<Item = (u32, SourceRect)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::DrawImage { image, source } => Some((*image, *source)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    type Image = ImageHandle;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(DrawOp::Restore);
    }

    fn set_transform(&mut self, transform: DAffine2) {
        self.ops.push(DrawOp::SetTransform(transform));
    }

    fn transform(&mut self, transform: DAffine2) {
        self.ops.push(DrawOp::Transform(transform));
    }

    fn clip(&mut self, polygon: &[DVec2]) {
        self.ops.push(DrawOp::Clip(polygon.to_vec()));
    }

    fn draw_image(&mut self, image: &ImageHandle, source: SourceRect) {
        self.ops.push(DrawOp::DrawImage {
            image: image.id,
            source,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut s = RecordingSurface::new(4, 4);
        s.clear();
        s.save();
        s.clip(&[DVec2::ZERO, DVec2::X, DVec2::Y]);
        s.restore();
        assert_eq!(s.ops().len(), 4);
        assert_eq!(s.ops()[0], DrawOp::Clear);
        assert_eq!(s.ops()[2], DrawOp::Clip(vec![DVec2::ZERO, DVec2::X, DVec2::Y]));
    }

    #[test]
    fn test_unmatched_restore_is_ignored() {
        let mut s = RecordingSurface::new(4, 4);
        s.restore();
        assert_eq!(s.depth(), 0);
        s.save();
        s.save();
        s.restore();
        assert_eq!(s.depth(), 1);
        assert_eq!(s.max_depth(), 2);
    }

    #[test]
    fn test_take_ops_resets_recording() {
        let mut s = RecordingSurface::new(4, 4);
        s.clear();
        assert_eq!(s.take_ops(), vec![DrawOp::Clear]);
        assert!(s.ops().is_empty());
    }
}
