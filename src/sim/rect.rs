//! Axis-aligned rectangle geometry for houses, walls and the character
//!
//! Rectangles are half-open: a rectangle covers `[x, x + w) × [y, y + h)`, so
//! two rectangles that merely share an edge do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle with its top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// True when the rectangle covers no area
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Grow by `margin` on every side
    pub fn inflate(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.w + margin * 2.0,
            self.h + margin * 2.0,
        )
    }

    /// Same rectangle moved by `offset`
    pub fn translate(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Strict overlap test. Touching edges and empty rectangles never overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True when `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(100.0, 50.0, 200.0, 30.0);
        assert_eq!(r.left(), 100.0);
        assert_eq!(r.right(), 300.0);
        assert_eq!(r.top(), 50.0);
        assert_eq!(r.bottom(), 80.0);
    }

    #[test]
    fn test_overlap_is_half_open() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge only
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        // Shares the bottom edge only
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Real overlap
        assert!(a.overlaps(&Rect::new(9.5, 9.5, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(-5.0, -5.0, 6.0, 6.0)));
    }

    #[test]
    fn test_empty_never_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(5.0, 5.0, 0.0, 3.0)));
        assert!(!Rect::new(5.0, 5.0, 3.0, 0.0).overlaps(&a));
    }

    #[test]
    fn test_inflate() {
        let r = Rect::new(100.0, 100.0, 200.0, 150.0).inflate(50.0);
        assert_eq!(r, Rect::new(50.0, 50.0, 300.0, 250.0));
    }

    #[test]
    fn test_translate_and_contains() {
        let r = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert_eq!(r.translate(Vec2::new(-10.0, 2.0)), Rect::new(0.0, 12.0, 5.0, 5.0));

        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 90.0, 100.0, 10.0)));
        assert!(!outer.contains_rect(&Rect::new(95.0, 0.0, 10.0, 10.0)));
    }
}
