//! Axis-aligned boxes
//!
//! Used both for the entity's collision box and for the play-area bounds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its min and max corners
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build a rectangle of the given full size around `center`
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Square box with the given half side around `center`
    pub fn square(center: Vec2, half_extent: f32) -> Self {
        Self::from_center_size(center, Vec2::splat(half_extent * 2.0))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Translate both corners by `delta`
    #[inline]
    pub fn moved(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Same size, re-centered on `center`
    pub fn centered_at(&self, center: Vec2) -> Self {
        self.moved(center - self.center())
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// True when `other` lies entirely inside (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Corners in counter-clockwise order starting at min
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let r = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(1920.0, 1080.0));
        assert_eq!(r.center(), Vec2::new(960.0, 540.0));
        assert_eq!(r.width(), 1920.0);
        assert_eq!(r.height(), 1080.0);
    }

    #[test]
    fn test_square_and_move() {
        let r = Rect::square(Vec2::new(5.0, 5.0), 10.0);
        assert_eq!(r.min, Vec2::new(-5.0, -5.0));
        assert_eq!(r.max, Vec2::new(15.0, 15.0));

        let moved = r.moved(Vec2::new(10.0, -5.0));
        assert_eq!(moved.center(), Vec2::new(15.0, 0.0));
        assert_eq!(moved.size(), r.size());

        let recentered = r.centered_at(Vec2::ZERO);
        assert_eq!(recentered.center(), Vec2::ZERO);
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(Vec2::ZERO, Vec2::new(100.0, 100.0));
        assert!(outer.contains_rect(&Rect::square(Vec2::new(50.0, 50.0), 10.0)));
        assert!(outer.contains_rect(&Rect::square(Vec2::new(10.0, 10.0), 10.0)));
        assert!(!outer.contains_rect(&Rect::square(Vec2::new(95.0, 50.0), 10.0)));
    }
}
