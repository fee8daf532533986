//! Boundary collision against the play area
//!
//! The four edges are tested as independent half-planes in a fixed order and
//! only the first violated edge is reported.

use glam::Vec2;

use super::rect::Rect;

/// The play-area edge a box crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Right,
    Left,
    Top,
    Bottom,
}

impl Edge {
    /// Edges in the order they are tested
    pub const PRIORITY: [Edge; 4] = [Edge::Right, Edge::Left, Edge::Top, Edge::Bottom];

    /// Whether `body` lies beyond this edge of `bounds`
    pub fn violated_by(self, body: &Rect, bounds: &Rect) -> bool {
        match self {
            Edge::Right => body.max.x > bounds.max.x,
            Edge::Left => body.min.x < bounds.min.x,
            Edge::Top => body.max.y > bounds.max.y,
            Edge::Bottom => body.min.y < bounds.min.y,
        }
    }

    /// Flip the velocity component perpendicular to this edge
    pub fn reflect(self, velocity: Vec2) -> Vec2 {
        match self {
            Edge::Right | Edge::Left => Vec2::new(-velocity.x, velocity.y),
            Edge::Top | Edge::Bottom => Vec2::new(velocity.x, -velocity.y),
        }
    }
}

/// First edge of `bounds` crossed by `body`, if any
pub fn boundary_violation(body: &Rect, bounds: &Rect) -> Option<Edge> {
    Edge::PRIORITY
        .into_iter()
        .find(|edge| edge.violated_by(body, bounds))
}
