//! Decorative rotating debris
//!
//! Purely visual: debris never collides with the entity.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// A rectangle rotated about a pivot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangularDebris {
    /// RGBA color
    pub color: [f32; 4],
    /// Rotation pivot
    pub position: Vec2,
    /// Current rotation (radians, counter-clockwise)
    pub rotation: f32,
    /// Unrotated extent
    pub bounds: Rect,
    pub mass: f32,
    /// Rotation speed in radians/sec
    #[serde(default)]
    pub spin: f32,
}

impl RectangularDebris {
    /// Rotate one point about the pivot by the current rotation
    pub fn rotated_corner(&self, corner: Vec2) -> Vec2 {
        Vec2::from_angle(self.rotation).rotate(corner - self.position) + self.position
    }

    /// The four bounds corners after rotation, in winding order
    pub fn rotated_corners(&self) -> [Vec2; 4] {
        self.bounds.corners().map(|c| self.rotated_corner(c))
    }

    /// Advance rotation, keeping it within one turn
    pub fn rotate(&mut self, dt: f32) {
        if self.spin != 0.0 {
            self.rotation = (self.rotation + self.spin * dt).rem_euclid(TAU);
        }
    }
}

/// Debris pieces drawn together
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebrisField {
    pub pieces: Vec<RectangularDebris>,
}

impl DebrisField {
    /// Scatter `count` pieces over `area`. The same seed always yields the
    /// same field. An inverted or non-finite area yields an empty field.
    pub fn scatter(seed: u64, area: &Rect, count: usize) -> Self {
        let well_formed = area.min.is_finite()
            && area.max.is_finite()
            && area.min.x <= area.max.x
            && area.min.y <= area.max.y;
        if !well_formed {
            log::warn!("No debris scattered over degenerate area {:?}", area);
            return Self::default();
        }
        let mut rng = Pcg32::seed_from_u64(seed);
        let pieces = (0..count)
            .map(|_| {
                let position = Vec2::new(
                    rng.random_range(area.min.x..=area.max.x),
                    rng.random_range(area.min.y..=area.max.y),
                );
                let size = Vec2::new(rng.random_range(20.0..120.0), rng.random_range(10.0..60.0));
                let shade = rng.random_range(0.15..0.45);
                RectangularDebris {
                    color: [shade, shade, shade * 1.2, 1.0],
                    position,
                    rotation: rng.random_range(0.0..TAU),
                    bounds: Rect::from_center_size(position, size),
                    mass: size.x * size.y,
                    spin: rng.random_range(-0.5..0.5),
                }
            })
            .collect();
        Self { pieces }
    }

    pub fn update(&mut self, dt: f32) {
        for piece in &mut self.pieces {
            piece.rotate(dt);
        }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
