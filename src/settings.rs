//! Session settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rect;

/// How a held left action turns into velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LaunchPolicy {
    /// Re-aim at the click position every tick the action is held
    #[default]
    Continuous,
    /// Aim once, on the tick the action goes from released to held
    OnPress,
}

impl LaunchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchPolicy::Continuous => "continuous",
            LaunchPolicy::OnPress => "on_press",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "continuous" | "hold" => Some(LaunchPolicy::Continuous),
            "on_press" | "press" | "once" => Some(LaunchPolicy::OnPress),
            _ => None,
        }
    }
}

/// Errors raised while loading settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable session parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Motion ===
    /// Speed given to the entity by a launch
    pub launch_speed: f32,
    /// Launch aiming strategy
    pub launch_policy: LaunchPolicy,
    /// Half side of the square collision box
    pub body_half_extent: f32,
    /// Drawn radius of the entity
    pub body_radius: f32,
    /// Region the entity bounces inside
    pub play_area: Rect,

    // === View ===
    /// Output surface size in pixels
    pub window: Vec2,
    /// Camera decay base (remaining distance fraction per second)
    pub camera_decay: f32,

    // === Trail ===
    pub trails: bool,
    /// Minimum seconds between trail samples
    pub sample_interval: f32,

    // === Debris ===
    pub debris_count: usize,
    pub seed: u64,

    // === Driver ===
    /// Constant tick length; `None` measures wall-clock time
    pub fixed_step: Option<f32>,
    /// Stop after this many ticks (headless runs)
    pub max_ticks: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            launch_speed: LAUNCH_SPEED,
            launch_policy: LaunchPolicy::Continuous,
            body_half_extent: BODY_HALF_EXTENT,
            body_radius: BODY_RADIUS,
            play_area: Rect::new(Vec2::ZERO, Vec2::new(PLAY_AREA_WIDTH, PLAY_AREA_HEIGHT)),

            window: Vec2::new(PLAY_AREA_WIDTH, PLAY_AREA_HEIGHT),
            camera_decay: CAMERA_DECAY,

            trails: true,
            sample_interval: SAMPLE_INTERVAL,

            debris_count: DEBRIS_COUNT,
            seed: 0x1a_0c4,

            fixed_step: None,
            max_ticks: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });

        if !positive(self.launch_speed) {
            return invalid("launch_speed", "must be positive");
        }
        if !positive(self.sample_interval) {
            return invalid("sample_interval", "must be positive");
        }
        if !positive(self.camera_decay) || self.camera_decay >= 1.0 {
            return invalid("camera_decay", "must lie strictly between 0 and 1");
        }
        if !positive(self.play_area.width()) || !positive(self.play_area.height()) {
            return invalid("play_area", "must have a positive width and height");
        }
        if !positive(self.window.x) || !positive(self.window.y) {
            return invalid("window", "must have a positive width and height");
        }
        if !positive(self.body_half_extent) {
            return invalid("body_half_extent", "must be positive");
        }
        // A box wider or taller than the play area reflects on every tick
        let side = self.body_half_extent * 2.0;
        if side > self.play_area.width() || side > self.play_area.height() {
            return invalid("body_half_extent", "body must fit inside the play area");
        }
        if !non_negative(self.body_radius) {
            return invalid("body_radius", "must not be negative");
        }
        if let Some(step) = self.fixed_step
            && !non_negative(step)
        {
            return invalid("fixed_step", "must not be negative");
        }
        Ok(())
    }
}

/// False for NaN as well as for zero and negatives
fn positive(value: f32) -> bool {
    value > 0.0
}

fn non_negative(value: f32) -> bool {
    value >= 0.0
}
