//! Software [`Surface`] that rasterizes into an [`RgbaImage`].

use glam::{DAffine2, DVec2};
use image::{Rgba, RgbaImage};
use tracing::trace;

use crate::{SourceRect, Surface};

/// Determinants below this are treated as singular.
const MIN_DETERMINANT: f64 = 1e-12;

#[derive(Clone, Debug, Default)]
struct State {
    transform: DAffine2,
    /// Clip polygons already mapped to device pixels. A pixel is drawable when
    /// it lies inside all of them.
    clips: Vec<Vec<DVec2>>,
}

/// Rasterizes draws by inverse-mapping every covered pixel centre into the
/// local unit square and sampling the nearest source pixel.
#[derive(Clone, Debug)]
pub struct PixmapSurface {
    target: RgbaImage,
    state: State,
    stack: Vec<State>,
}

impl PixmapSurface {
    /// A fully transparent `width × height` surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(RgbaImage::new(width, height))
    }

    /// Draw on top of an existing image.
    #[must_use]
    pub fn from_image(target: RgbaImage) -> Self {
        Self {
            target,
            state: State::default(),
            stack: Vec::new(),
        }
    }

    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.target
    }

    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.target
    }

    /// Device-pixel range `[x0, x1) × [y0, y1)` that can be touched by the
    /// unit square under `transform` and the current clips.
    fn covered_pixels(&self, transform: &DAffine2) -> Option<(u32, u32, u32, u32)> {
        let unit =
            [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y].map(|p| transform.transform_point2(p));
        let (mut min, mut max) = bounds(&unit);
        for clip in &self.state.clips {
            let (cmin, cmax) = bounds(clip);
            min = min.max(cmin);
            max = max.min(cmax);
        }

        let (w, h) = self.target.dimensions();
        let x0 = min.x.floor().max(0.0);
        let y0 = min.y.floor().max(0.0);
        let x1 = max.x.ceil().min(f64::from(w));
        let y1 = max.y.ceil().min(f64::from(h));
        if !(x0 < x1 && y0 < y1) {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

impl Surface for PixmapSurface {
    type Image = RgbaImage;

    fn size(&self) -> (u32, u32) {
        self.target.dimensions()
    }

    fn clear(&mut self) {
        for pixel in self.target.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn set_transform(&mut self, transform: DAffine2) {
        self.state.transform = transform;
    }

    fn transform(&mut self, transform: DAffine2) {
        self.state.transform = self.state.transform * transform;
    }

    fn clip(&mut self, polygon: &[DVec2]) {
        let t = self.state.transform;
        self.state
            .clips
            .push(polygon.iter().map(|&p| t.transform_point2(p)).collect());
    }

    fn draw_image(&mut self, image: &RgbaImage, source: SourceRect) {
        let transform = self.state.transform;
        let det = transform.matrix2.determinant();
        if !det.is_finite() || det.abs() < MIN_DETERMINANT || !transform.translation.is_finite() {
            trace!(det, "skipping draw with singular transform");
            return;
        }
        let (iw, ih) = image.dimensions();
        if iw == 0 || ih == 0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.covered_pixels(&transform) else {
            return;
        };

        let inverse = transform.inverse();
        for y in y0..y1 {
            for x in x0..x1 {
                let centre = DVec2::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let local = inverse.transform_point2(centre);
                if !(0.0..1.0).contains(&local.x) || !(0.0..1.0).contains(&local.y) {
                    continue;
                }
                if !self.state.clips.iter().all(|clip| contains(clip, centre)) {
                    continue;
                }
                let sx = sample_index(source.x + local.x * source.width, iw);
                let sy = sample_index(source.y + local.y * source.height, ih);
                let src = *image.get_pixel(sx, sy);
                let dst = self.target.get_pixel_mut(x, y);
                *dst = source_over(src, *dst);
            }
        }
    }
}

fn bounds(points: &[DVec2]) -> (DVec2, DVec2) {
    points.iter().fold(
        (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
        |(min, max), &p| (min.min(p), max.max(p)),
    )
}

fn sample_index(coord: f64, len: u32) -> u32 {
    (coord.floor().max(0.0) as u32).min(len - 1)
}

/// Even-odd point in polygon.
fn contains(polygon: &[DVec2], p: DVec2) -> bool {
    let mut inside = false;
    let mut prev = match polygon.last() {
        Some(&last) => last,
        None => return false,
    };
    for &cur in polygon {
        if (cur.y > p.y) != (prev.y > p.y) {
            let x = cur.x + (p.y - cur.y) * (prev.x - cur.x) / (prev.y - cur.y);
            if p.x < x {
                inside = !inside;
            }
        }
        prev = cur;
    }
    inside
}

fn source_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = f32::from(src[3]) / 255.0;
    if sa >= 1.0 {
        return src;
    }
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |i: usize| {
        let c = (f32::from(src[i]) * sa + f32::from(dst[i]) * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round() as u8,
    ])
}
