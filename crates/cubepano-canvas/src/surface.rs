//! The affine-only drawing surface the tiles are rendered onto.

use std::ops::{Deref, DerefMut};

use glam::{DAffine2, DVec2};

/// Anything that can be drawn from: only its pixel size matters here.
pub trait SourceImage {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);
}

impl SourceImage for image::RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// A rectangle of source pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SourceRect {
    /// Scale an image-fraction rectangle up to `image`'s pixels.
    #[must_use]
    pub fn from_fraction<I: SourceImage + ?Sized>(image: &I, origin: DVec2, size: DVec2) -> Self {
        let (w, h) = image.dimensions();
        let (w, h) = (f64::from(w), f64::from(h));
        Self {
            x: origin.x * w,
            y: origin.y * h,
            width: size.x * w,
            height: size.y * h,
        }
    }
}

/// An immediate-mode 2D surface limited to affine image transforms.
///
/// State (transform and clip) is pushed with [`save`](Self::save) and popped
/// with [`restore`](Self::restore). Prefer [`scoped`] over calling the pair by
/// hand.
pub trait Surface {
    type Image: SourceImage + ?Sized;

    /// Pixel size of the surface.
    fn size(&self) -> (u32, u32);

    /// Erase everything drawn so far.
    fn clear(&mut self);

    fn save(&mut self);

    /// Pop the most recent [`save`](Self::save). Unmatched calls are ignored.
    fn restore(&mut self);

    /// Replace the current transform.
    fn set_transform(&mut self, transform: DAffine2);

    /// Post-multiply the current transform (`current * transform`).
    fn transform(&mut self, transform: DAffine2);

    /// Intersect the clip region with `polygon`, given in current local
    /// coordinates.
    fn clip(&mut self, polygon: &[DVec2]);

    /// Draw `source` of `image` stretched over the local unit square.
    fn draw_image(&mut self, image: &Self::Image, source: SourceRect);
}

/// Saved surface state, restored on drop.
///
/// Restoration also happens while unwinding, so a panic inside a draw can't
/// leak a transform or clip into later draws.
#[derive(Debug)]
pub struct SurfaceGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

/// Save `surface` state and hand back a guard that restores it.
pub fn scoped<S: Surface + ?Sized>(surface: &mut S) -> SurfaceGuard<'_, S> {
    surface.save();
    SurfaceGuard { surface }
}

impl<S: Surface + ?Sized> Drop for SurfaceGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

impl<S: Surface + ?Sized> Deref for SurfaceGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SurfaceGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}
