//! CPU-side surface that tessellates frames into a vertex batch

use super::frame::{Frame, RenderSurface};
use super::shapes;
use super::vertex::Vertex;
use crate::consts::CIRCLE_SEGMENTS;

/// Turns each submitted frame into output-space triangles
#[derive(Debug)]
pub struct VertexSurface {
    vertices: Vec<Vertex>,
    frames: u64,
    circles_drawn: u64,
    segments: u32,
}

impl VertexSurface {
    pub fn new() -> Self {
        Self::with_segments(CIRCLE_SEGMENTS)
    }

    pub fn with_segments(segments: u32) -> Self {
        Self {
            vertices: Vec::new(),
            frames: 0,
            circles_drawn: 0,
            segments,
        }
    }

    /// Buffer layout a GPU pipeline needs to consume [`Self::bytes`]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        Vertex::desc()
    }

    /// Triangles of the last submitted frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes ready for a vertex buffer upload
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn circles_drawn(&self) -> u64 {
        self.circles_drawn
    }
}

impl Default for VertexSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for VertexSurface {
    fn submit(&mut self, frame: &Frame) {
        let to_output = frame.world_to_output();
        // Both transforms are translations or uniform scales
        let scale = to_output.matrix2.x_axis.length();

        self.vertices.clear();
        for polygon in &frame.polygons {
            let corners = polygon.corners.map(|c| to_output.transform_point2(c));
            self.vertices
                .extend(shapes::convex_polygon(&corners, polygon.color));
        }
        for circle in &frame.circles {
            let center = to_output.transform_point2(frame.circle_center(circle));
            self.vertices.extend(shapes::circle(
                center,
                circle.radius * scale,
                circle.color(),
                self.segments,
            ));
        }
        self.frames += 1;
        self.circles_drawn += frame.circles.len() as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::DrawableCircle;
    use glam::{Affine2, Vec2};

    #[test]
    fn test_submit_tessellates_in_order() {
        let frame = Frame {
            anchor: Vec2::new(100.0, 100.0),
            polygons: Vec::new(),
            circles: vec![
                DrawableCircle {
                    offset: Vec2::new(-10.0, 0.0),
                    intensity: 0,
                    radius: 5.0,
                },
                DrawableCircle::body(10.0),
            ],
            view: Affine2::from_translation(Vec2::new(-100.0, -100.0)),
            output: Affine2::from_scale(Vec2::splat(2.0)),
        };
        let mut surface = VertexSurface::with_segments(8);
        surface.submit(&frame);

        assert_eq!(surface.vertices().len(), 2 * 8 * 3);
        assert_eq!(surface.frames(), 1);
        assert_eq!(surface.circles_drawn(), 2);

        // First circle: world (90, 100) -> view (-10, 0) -> output (-20, 0)
        assert_eq!(surface.vertices()[0].position, [-20.0, 0.0]);
        assert_eq!(surface.vertices()[0].color, [0.0, 0.0, 0.0, 1.0]);
        // Entity drawn last, at the output origin, white, radius doubled
        let last = &surface.vertices()[8 * 3];
        assert_eq!(last.position, [0.0, 0.0]);
        assert_eq!(last.color, [1.0; 4]);
        let rim = Vec2::from(surface.vertices()[8 * 3 + 1].position);
        assert!((rim.length() - 20.0).abs() < 1e-4);
        let stride = VertexSurface::layout().array_stride as usize;
        assert_eq!(surface.bytes().len(), surface.vertices().len() * stride);
    }
}
