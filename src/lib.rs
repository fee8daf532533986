//! Launch - a click-to-launch bouncing circle
//!
//! Core modules:
//! - `sim`: Motion, boundary reflection, trail history and debris
//! - `view`: Smoothing camera, letterbox viewport and trail rendering
//! - `renderer`: Drawable frames and CPU tessellation into vertex batches
//! - `platform`: Frame clock and input sources
//! - `game`: The frame driver tying everything together

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod view;

pub use game::Game;
pub use settings::{ConfigError, LaunchPolicy, Settings};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (logical units)
    pub const PLAY_AREA_WIDTH: f32 = 1920.0;
    pub const PLAY_AREA_HEIGHT: f32 = 1080.0;

    /// Magnitude of the velocity applied by a launch
    pub const LAUNCH_SPEED: f32 = 64.0;
    /// Half the side of the entity's collision box
    pub const BODY_HALF_EXTENT: f32 = 10.0;
    /// Drawn radius of the entity and of a fresh trail sample
    pub const BODY_RADIUS: f32 = 40.0;

    /// Number of retained trail samples
    pub const HISTORY_CAPACITY: usize = 10;
    /// Minimum time between two trail samples (seconds)
    pub const SAMPLE_INTERVAL: f32 = 0.07;
    /// Youngest ages are hidden under the entity itself
    pub const TRAIL_HIDDEN_AGES: usize = 2;

    /// Fraction of the camera-to-target distance left after one second
    pub const CAMERA_DECAY: f32 = 1.0 / 128.0;

    /// Pieces of debris scattered over the play area
    pub const DEBRIS_COUNT: usize = 10;

    /// Segments used when tessellating a circle
    pub const CIRCLE_SEGMENTS: u32 = 32;
}
