//! Drawable shapes: the [`Drawable`] trait and [`CircleShape`].

use std::f32::consts::PI;

use crate::color::Color;
use crate::framebuffer::{self, Framebuffer};
use crate::geom::{Rect, Vec2};

/// Anything that can render itself onto a [`Framebuffer`].
pub trait Drawable {
    fn draw(&self, target: &mut Framebuffer);
}

// ---------------------------------------------------------------------------
// CircleShape
// ---------------------------------------------------------------------------

/// A filled circle approximated by a regular polygon.
///
/// The position is the top-left corner of the shape's bounding box, so a
/// circle of radius `r` at `(x, y)` is centred on `(x + r, y + r)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleShape {
    radius: f32,
    point_count: usize,
    fill_color: Color,
    position: Vec2,
}

impl CircleShape {
    /// Polygon resolution used unless told otherwise.
    pub const DEFAULT_POINT_COUNT: usize = 30;

    /// A white circle of the given radius at the origin.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            point_count: Self::DEFAULT_POINT_COUNT,
            fill_color: Color::WHITE,
            position: Vec2::ZERO,
        }
    }

    /// Set the fill colour (builder).
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Set the position (builder).
    pub fn with_position(mut self, position: impl Into<Vec2>) -> Self {
        self.position = position.into();
        self
    }

    /// Set the number of polygon vertices (builder). Clamped to at least 3.
    pub fn with_point_count(mut self, count: usize) -> Self {
        self.point_count = count.max(3);
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    #[inline]
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Centre of the circle in window coordinates.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::new(self.radius, self.radius)
    }

    /// Vertex `index` in local coordinates (relative to the position).
    ///
    /// Vertex 0 sits at the top; the rest follow clockwise on screen.
    pub fn local_point(&self, index: usize) -> Vec2 {
        let angle = index as f32 * 2.0 * PI / self.point_count as f32 - PI / 2.0;
        let r = Vec2::new(self.radius, self.radius);
        r + Vec2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// All vertices in window coordinates.
    pub fn points(&self) -> Vec<Vec2> {
        (0..self.point_count)
            .map(|i| self.position + self.local_point(i))
            .collect()
    }

    /// Bounding box in window coordinates.
    pub fn global_bounds(&self) -> Rect {
        let d = self.radius * 2.0;
        Rect::new(self.position.x, self.position.y, d, d)
    }

    /// Whether a window-space point lies inside the filled polygon.
    pub fn contains(&self, p: Vec2) -> bool {
        self.global_bounds().contains(p) && framebuffer::convex_contains(&self.points(), p)
    }
}

impl Drawable for CircleShape {
    fn draw(&self, target: &mut Framebuffer) {
        if self.radius <= 0.0 {
            return;
        }
        target.fill_convex_polygon(&self.points(), self.fill_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_circle() -> CircleShape {
        CircleShape::new(100.0)
            .with_fill_color(Color::GREEN)
            .with_position((350.0, 250.0))
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn defaults() {
        let c = CircleShape::new(10.0);
        assert_eq!(c.point_count(), 30);
        assert_eq!(c.fill_color(), Color::WHITE);
        assert_eq!(c.position(), Vec2::ZERO);
    }

    #[test]
    fn point_count_is_clamped() {
        assert_eq!(CircleShape::new(1.0).with_point_count(0).point_count(), 3);
        assert_eq!(CircleShape::new(1.0).with_point_count(64).point_count(), 64);
    }

    #[test]
    fn first_vertex_is_top_centre() {
        let c = demo_circle();
        assert!(close(c.local_point(0), Vec2::new(100.0, 0.0)));
        assert!(close(c.points()[0], Vec2::new(450.0, 250.0)));
        let quarter = CircleShape::new(100.0).with_point_count(4);
        assert!(close(quarter.local_point(1), Vec2::new(200.0, 100.0)));
        assert!(close(quarter.local_point(2), Vec2::new(100.0, 200.0)));
    }

    #[test]
    fn bounds_start_at_position() {
        let c = demo_circle();
        assert_eq!(c.global_bounds(), Rect::new(350.0, 250.0, 200.0, 200.0));
        assert_eq!(c.center(), Vec2::new(450.0, 350.0));
    }

    #[test]
    fn containment() {
        let c = demo_circle();
        assert!(c.contains(c.center()));
        assert!(c.contains(Vec2::new(450.0, 255.0)));
        // Corners of the bounding box are outside the circle.
        assert!(!c.contains(Vec2::new(352.0, 252.0)));
        assert!(!c.contains(Vec2::new(548.0, 448.0)));
        assert!(!c.contains(Vec2::new(345.0, 350.0)));
    }

    #[test]
    fn draw_fills_circle_only() {
        let mut fb = Framebuffer::new(800, 600);
        demo_circle().draw(&mut fb);
        assert_eq!(fb.pixel(450, 350), Some(Color::GREEN));
        assert_eq!(fb.pixel(355, 350), Some(Color::GREEN));
        assert_eq!(fb.pixel(545, 350), Some(Color::GREEN));
        assert_eq!(fb.pixel(450, 445), Some(Color::GREEN));
        assert_eq!(fb.pixel(345, 350), Some(Color::BLACK));
        assert_eq!(fb.pixel(352, 252), Some(Color::BLACK));
        assert_eq!(fb.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn zero_radius_draws_nothing() {
        let mut fb = Framebuffer::new(8, 8);
        CircleShape::new(0.0).with_fill_color(Color::RED).draw(&mut fb);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }
}
