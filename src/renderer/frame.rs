//! Drawable frames handed to a rendering surface

use glam::{Affine2, Vec2};

use crate::sim::RectangularDebris;
use crate::view::DrawableCircle;

/// A filled convex polygon in world space
#[derive(Debug, Clone, PartialEq)]
pub struct DrawablePolygon {
    pub corners: [Vec2; 4],
    pub color: [f32; 4],
}

impl From<&RectangularDebris> for DrawablePolygon {
    fn from(debris: &RectangularDebris) -> Self {
        Self {
            corners: debris.rotated_corners(),
            color: debris.color,
        }
    }
}

/// Everything drawn in one tick, in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// World-space point circle offsets are relative to (the entity center)
    pub anchor: Vec2,
    /// Drawn first
    pub polygons: Vec<DrawablePolygon>,
    /// Trail circles oldest first; the entity itself is last
    pub circles: Vec<DrawableCircle>,
    /// World-to-view (camera) transform
    pub view: Affine2,
    /// View-to-output (letterbox) transform
    pub output: Affine2,
}

impl Frame {
    /// Combined world-to-output transform
    pub fn world_to_output(&self) -> Affine2 {
        self.output * self.view
    }

    /// World-space center of a circle
    pub fn circle_center(&self, circle: &DrawableCircle) -> Vec2 {
        self.anchor + circle.offset
    }
}

/// Receives finished frames
pub trait RenderSurface {
    fn submit(&mut self, frame: &Frame);
}
