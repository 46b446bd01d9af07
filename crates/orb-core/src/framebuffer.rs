//! The CPU-side [`Framebuffer`] every window renders into before presenting.
//!
//! Pixels are packed `0x00RRGGBB`, row-major, the layout softbuffer expects.

use crate::color::Color;
use crate::geom::Vec2;

/// A fixed-size buffer of packed pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// A buffer of the given size, cleared to the default colour.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::default().to_pixel(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_pixel());
    }

    /// Colour at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| Color::from_pixel(self.pixels[i]))
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.to_pixel();
        }
    }

    /// Source-over blend `color` onto the pixel at `(x, y)`.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.blend_over(self.pixels[i]);
        }
    }

    /// Fill a convex polygon given by its vertices in order (either winding).
    ///
    /// A pixel is covered when its centre lies inside or on the boundary.
    /// Returns the number of pixels written.
    pub fn fill_convex_polygon(&mut self, points: &[Vec2], color: Color) -> usize {
        if points.len() < 3 || color.a == 0 || self.pixels.is_empty() {
            return 0;
        }

        let (mut min, mut max) = (points[0], points[0]);
        for p in &points[1..] {
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }

        // Clip the bounding box to the buffer.
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(self.width);
        let y1 = (max.y.ceil().max(0.0) as u32).min(self.height);

        let mut written = 0;
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if convex_contains(points, center) {
                    self.blend_pixel(x, y, color);
                    written += 1;
                }
            }
        }
        written
    }
}

/// Whether `p` is inside (or on the edge of) the convex polygon `points`.
pub fn convex_contains(points: &[Vec2], p: Vec2) -> bool {
    let mut has_pos = false;
    let mut has_neg = false;
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let turn = (b - a).cross(p - a);
        has_pos |= turn > 0.0;
        has_neg |= turn < 0.0;
        if has_pos && has_neg {
            return false;
        }
    }
    true
}
