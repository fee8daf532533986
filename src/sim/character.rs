//! The player-controlled entity
//!
//! Owns position and velocity. Launches come from the left action, cancels
//! from the right action, and the play-area edges reflect it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Edge, boundary_violation};
use super::rect::Rect;
use super::tick::PlayerInput;
use crate::settings::LaunchPolicy;

/// What happened to the entity during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Candidate position committed
    Moved,
    /// Edge crossed: velocity flipped, position held
    Reflected(Edge),
}

/// A circle steered by click-drag launches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Collision box; its center is the logical position
    pub body: Rect,
    pub vel: Vec2,
    launch_speed: f32,
    policy: LaunchPolicy,
    /// Left action state on the previous update (for `OnPress`)
    #[serde(skip)]
    left_was_active: bool,
}

impl Character {
    pub fn new(center: Vec2, half_extent: f32, launch_speed: f32, policy: LaunchPolicy) -> Self {
        Self {
            body: Rect::square(center, half_extent),
            vel: Vec2::ZERO,
            launch_speed,
            policy,
            left_was_active: false,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    pub fn launch_speed(&self) -> f32 {
        self.launch_speed
    }

    pub fn policy(&self) -> LaunchPolicy {
        self.policy
    }

    /// Swap the launch strategy mid-session
    pub fn set_policy(&mut self, policy: LaunchPolicy) {
        self.policy = policy;
    }

    /// Velocity that heads from the current center toward `target`.
    /// A target on the center itself yields zero velocity.
    pub fn aim(&self, target: Vec2) -> Vec2 {
        (target - self.center()).normalize_or_zero() * self.launch_speed
    }

    /// Advance the entity by `dt` seconds
    pub fn update(&mut self, dt: f32, input: &PlayerInput, bounds: &Rect) -> Motion {
        let launch = match self.policy {
            LaunchPolicy::Continuous => input.left_active,
            LaunchPolicy::OnPress => input.left_active && !self.left_was_active,
        };
        self.left_was_active = input.left_active;

        if launch {
            self.vel = self.aim(input.click_position);
            log::debug!("Launch toward {:?} -> vel {:?}", input.click_position, self.vel);
        }
        // Evaluated after the launch so braking always wins
        if input.right_active {
            self.vel = Vec2::ZERO;
            log::debug!("Launch cancelled at {:?}", self.center());
        }

        let candidate = self.body.moved(self.vel * dt);
        match boundary_violation(&candidate, bounds) {
            Some(edge) => {
                self.vel = edge.reflect(self.vel);
                log::debug!("Reflected off {:?} edge, vel now {:?}", edge, self.vel);
                Motion::Reflected(edge)
            }
            None => {
                self.body = candidate;
                Motion::Moved
            }
        }
    }
}
