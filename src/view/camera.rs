//! Smoothing 2D camera

use glam::{Affine2, Vec2};

use crate::consts::CAMERA_DECAY;

/// Camera that eases toward a tracked point
#[derive(Debug, Clone)]
pub struct Camera {
    pos: Vec2,
    matrix: Affine2,
    /// Fraction of the remaining distance left after one second
    decay: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera at the origin with the identity transform
    pub fn new() -> Self {
        Self::with_decay(CAMERA_DECAY)
    }

    pub fn with_decay(decay: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            matrix: Affine2::IDENTITY,
            decay,
        }
    }

    /// Ease toward `target`. The blend factor `1 - decay^dt` makes the result
    /// independent of how a span of time is split into frames.
    pub fn follow(&mut self, target: Vec2, dt: f32) {
        let t = 1.0 - self.decay.powf(dt);
        self.pos += (target - self.pos) * t;
        self.matrix = Affine2::from_translation(-self.pos);
    }

    /// Smoothed tracked position
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// World-to-view transform (a pure translation by `-position`)
    pub fn transform(&self) -> Affine2 {
        self.matrix
    }

    /// Map a view-space point back into world space
    pub fn unproject(&self, point: Vec2) -> Vec2 {
        self.matrix.inverse().transform_point2(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_rest_is_unchanged() {
        let mut cam = Camera::new();
        cam.follow(Vec2::new(3.25, -7.5), 1000.0);
        let rest = cam.position();
        for dt in [0.0, 1.0 / 60.0, 0.5, 7.0] {
            cam.follow(rest, dt);
            assert_eq!(cam.position(), rest);
        }
    }

    #[test]
    fn test_one_second_leaves_decay_fraction() {
        let mut cam = Camera::new();
        cam.follow(Vec2::new(128.0, 0.0), 1.0);
        // 1/128 of the distance remains
        assert!((cam.position().x - 127.0).abs() < 1e-3);
    }

    #[test]
    fn test_frame_rate_independent() {
        let target = Vec2::new(500.0, 250.0);
        let mut coarse = Camera::new();
        coarse.follow(target, 0.5);

        let mut fine = Camera::new();
        for _ in 0..30 {
            fine.follow(target, 0.5 / 30.0);
        }
        assert!((coarse.position() - fine.position()).length() < 1e-2);
    }

    #[test]
    fn test_zero_and_huge_dt() {
        let mut cam = Camera::new();
        cam.follow(Vec2::new(10.0, 10.0), 0.0);
        assert_eq!(cam.position(), Vec2::ZERO);

        cam.follow(Vec2::new(10.0, 10.0), 1.0e6);
        assert_eq!(cam.position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_transform_and_unproject() {
        let mut cam = Camera::new();
        cam.follow(Vec2::new(100.0, 50.0), 1.0e6);
        let view = cam.transform().transform_point2(Vec2::new(100.0, 50.0));
        assert!(view.length() < 1e-4);
        let world = cam.unproject(Vec2::new(10.0, 0.0));
        assert!((world - Vec2::new(110.0, 50.0)).length() < 1e-4);
    }
}
