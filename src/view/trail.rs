//! Trail rendering
//!
//! Samples the entity into a [`History`] at a fixed wall-clock cadence and
//! turns the history into fading, shrinking circles.

use glam::Vec2;

use crate::consts::{HISTORY_CAPACITY, TRAIL_HIDDEN_AGES};
use crate::sim::{History, Rect};

/// A circle to draw, positioned relative to the entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawableCircle {
    /// Offset from the entity's current center
    pub offset: Vec2,
    /// Grayscale intensity (0 = black, 255 = white)
    pub intensity: u8,
    pub radius: f32,
}

impl DrawableCircle {
    /// The entity itself: full size, full white, no offset
    pub fn body(radius: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            intensity: u8::MAX,
            radius,
        }
    }

    /// RGBA color for the GPU
    pub fn color(&self) -> [f32; 4] {
        let v = self.intensity as f32 / 255.0;
        [v, v, v, 1.0]
    }
}

/// Position history plus the sampling timer
#[derive(Debug, Clone)]
pub struct Trail {
    history: History,
    sample_interval: f32,
    last_sample: f64,
    body_radius: f32,
}

impl Trail {
    pub fn new(position: Rect, now: f64, sample_interval: f32, body_radius: f32) -> Self {
        Self {
            history: History::new(position, now),
            sample_interval,
            last_sample: now,
            body_radius,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Seconds a sample takes to fade out completely
    pub fn visibility_window(&self) -> f64 {
        HISTORY_CAPACITY as f64 * self.sample_interval as f64
    }

    /// Record `position` if at least one interval passed since the last
    /// sample. Returns whether a sample was taken.
    pub fn sample(&mut self, position: Rect, now: f64) -> bool {
        if now - self.last_sample >= self.sample_interval as f64 {
            self.history.record(position, now);
            self.last_sample = now;
            true
        } else {
            false
        }
    }

    /// Fade progress in `[0, 1]` for a sample taken at `timestamp`
    pub fn fade(&self, timestamp: f64, now: f64) -> f32 {
        ((now - timestamp) / self.visibility_window()).clamp(0.0, 1.0) as f32
    }

    /// Sample if due, then build the draw list: oldest visible sample first,
    /// the entity itself last.
    pub fn render(&mut self, current: &Rect, now: f64) -> Vec<DrawableCircle> {
        self.sample(*current, now);

        let center = current.center();
        let mut circles = Vec::with_capacity(HISTORY_CAPACITY - TRAIL_HIDDEN_AGES + 1);
        for age in (TRAIL_HIDDEN_AGES..HISTORY_CAPACITY).rev() {
            let sample = self.history.sample_at_age(age);
            let t = self.fade(sample.timestamp, now);
            circles.push(DrawableCircle {
                offset: sample.position.center() - center,
                intensity: (255.0 - 255.0 * t).round() as u8,
                radius: self.body_radius - self.body_radius * t,
            });
        }
        circles.push(DrawableCircle::body(self.body_radius));
        circles
    }
}
