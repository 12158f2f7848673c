//! Drawing surface for the generated images.
//!
//! A `Canvas` wraps an RGBA pixel buffer and knows how to alpha-blend the
//! handful of filled primitives the pages are built from. Shapes are
//! addressed with inclusive bounding boxes: a box from `x0` to `x1` covers
//! the pixels `x0..=x1`, so a box with equal corners still paints one pixel.

use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::types::Colour;

/// An inclusive bounding box in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box of half-extents `rx`, `ry` around a centre point.
    pub fn around(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::new(cx - rx, cy - ry, cx + rx, cy + ry)
    }

    fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Continuous extent: left, top, right, bottom edges.
    fn edges(&self) -> (f64, f64, f64, f64) {
        (self.x0, self.y0, self.x1 + 1.0, self.y1 + 1.0)
    }
}

/// An RGBA drawing surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background.to_rgba())),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Colour::new(p[0], p[1], p[2], p[3]))
    }

    /// Borrow the underlying pixel buffer.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Composite `colour` over a single pixel. Out-of-bounds writes are ignored.
    pub fn blend_pixel(&mut self, x: i64, y: i64, colour: Colour) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        pixel.0 = blend(pixel.0, colour);
    }

    /// Paint each scanline with `top.lerp(bottom, y / height)`.
    pub fn fill_vertical_gradient(&mut self, top: Colour, bottom: Colour) {
        let height = self.height();
        for y in 0..height {
            let colour = top.lerp(bottom, y as f64 / height as f64).with_alpha(255);
            for x in 0..self.width() {
                self.image.put_pixel(x, y, Rgba(colour.to_rgba()));
            }
        }
    }

    /// Fill the ellipse inscribed in `bbox`.
    pub fn fill_ellipse(&mut self, bbox: BoundingBox, colour: Colour) {
        if bbox.is_empty() || colour.a == 0 {
            return;
        }
        let (left, top, right, bottom) = bbox.edges();
        let (cx, cy) = ((left + right) / 2.0, (top + bottom) / 2.0);
        let (rx, ry) = ((right - left) / 2.0, (bottom - top) / 2.0);

        let (row_start, row_end) = self.clip_rows(top, bottom);
        for py in row_start..row_end {
            let dy = (py as f64 + 0.5 - cy) / ry;
            if dy.abs() > 1.0 {
                continue;
            }
            let half = rx * (1.0 - dy * dy).sqrt();
            self.fill_span(py, cx - half, cx + half, colour);
        }
    }

    /// Fill a circle of radius `r` around a centre point.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, colour: Colour) {
        self.fill_ellipse(BoundingBox::around(cx, cy, r, r), colour);
    }

    /// Fill `bbox` with its corners rounded to `radius`.
    pub fn fill_rounded_rect(&mut self, bbox: BoundingBox, radius: f64, colour: Colour) {
        if bbox.is_empty() || colour.a == 0 {
            return;
        }
        let (left, top, right, bottom) = bbox.edges();
        let radius = radius.min((right - left) / 2.0).min((bottom - top) / 2.0).max(0.0);

        let (row_start, row_end) = self.clip_rows(top, bottom);
        for py in row_start..row_end {
            let sy = py as f64 + 0.5;
            if sy < top || sy > bottom {
                continue;
            }
            let ny = sy.clamp(top + radius, bottom - radius);
            let dy = sy - ny;
            let inset = radius - (radius * radius - dy * dy).max(0.0).sqrt();
            self.fill_span(py, left + inset, right - inset, colour);
        }
    }

    /// Composite the canvas onto an opaque `background`, using each
    /// pixel's alpha as the paste mask.
    pub fn flatten(&self, background: Colour) -> RgbImage {
        let mut out = RgbImage::from_pixel(self.width(), self.height(), Rgb(background.to_rgb()));
        for (x, y, pixel) in self.image.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            let bg = out.get_pixel(x, y).0;
            let a = a as u32;
            let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
            out.put_pixel(x, y, Rgb([mix(r, bg[0]), mix(g, bg[1]), mix(b, bg[2])]));
        }
        out
    }

    /// Rows whose centres may fall inside `[top, bottom)`, clipped to the canvas.
    fn clip_rows(&self, top: f64, bottom: f64) -> (u32, u32) {
        let start = top.floor().max(0.0) as u32;
        let end = (bottom.ceil().max(0.0) as u32).min(self.height());
        (start.min(end), end)
    }

    /// Blend every pixel of row `y` whose centre lies within `[from, to]`.
    fn fill_span(&mut self, y: u32, from: f64, to: f64, colour: Colour) {
        let start = (from - 0.5).ceil().max(0.0);
        let end = (to - 0.5).floor().min(self.width() as f64 - 1.0);
        if end < start {
            return;
        }
        for x in start as u32..=end as u32 {
            let pixel = self.image.get_pixel_mut(x, y);
            pixel.0 = blend(pixel.0, colour);
        }
    }
}

/// Source-over compositing of `src` onto `dst`.
fn blend(dst: [u8; 4], src: Colour) -> [u8; 4] {
    let sa = src.a as u32;
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src.to_rgba();
    }
    let da = dst[3] as u32 * (255 - sa) / 255;
    let out_a = sa + da;
    let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * da + out_a / 2) / out_a) as u8;
    [
        mix(src.r, dst[0]),
        mix(src.g, dst[1]),
        mix(src.b, dst[2]),
        out_a as u8,
    ]
}
