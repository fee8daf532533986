//! Frame driver
//!
//! Owns the world, camera, trail and clock, and runs them in a fixed order
//! every tick: poll input, advance the clock, move the entity, follow with
//! the camera, then sample and render the trail.

use glam::{Affine2, Vec2};

use crate::platform::{FrameClock, InputSource};
use crate::renderer::{DrawablePolygon, Frame, RenderSurface};
use crate::settings::{ConfigError, Settings};
use crate::sim::{Character, Motion, PlayerInput, Rect, World, tick};
use crate::view::{Camera, DrawableCircle, Trail, letterbox};

/// Counters collected over a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks: u64,
    pub reflections: u64,
    pub cancels: u64,
}

/// A running session
pub struct Game {
    settings: Settings,
    world: World,
    camera: Camera,
    trail: Trail,
    clock: FrameClock,
    /// View-to-output transform, fixed for the session
    output: Affine2,
    stats: SessionStats,
}

impl Game {
    /// Validate `settings` and build a session with the clock they ask for
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let clock = FrameClock::from_step(settings.fixed_step);
        Self::with_clock(settings, clock)
    }

    /// Validate `settings` and build a session around an explicit clock
    pub fn with_clock(settings: Settings, clock: FrameClock) -> Result<Self, ConfigError> {
        settings.validate()?;
        let world = World::new(&settings);
        let trail = Trail::new(
            world.character.body,
            clock.elapsed(),
            settings.sample_interval,
            settings.body_radius,
        );
        let canvas = Rect::from_center_size(Vec2::ZERO, settings.play_area.size());
        let window = Rect::new(Vec2::ZERO, settings.window);
        Ok(Self {
            camera: Camera::with_decay(settings.camera_decay),
            output: letterbox(&canvas, &window),
            world,
            trail,
            clock,
            settings,
            stats: SessionStats::default(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn character(&self) -> &Character {
        &self.world.character
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Run one tick with an already-polled input
    pub fn step(&mut self, input: &PlayerInput) -> Frame {
        let dt = self.clock.tick();
        let now = self.clock.elapsed();

        if let Motion::Reflected(_) = tick(&mut self.world, input, dt) {
            self.stats.reflections += 1;
        }
        if input.right_active {
            self.stats.cancels += 1;
        }
        self.stats.ticks += 1;

        let center = self.world.character.center();
        self.camera.follow(center, dt);

        let circles = if self.settings.trails {
            self.trail.render(&self.world.character.body, now)
        } else {
            vec![DrawableCircle::body(self.settings.body_radius)]
        };

        Frame {
            anchor: center,
            polygons: self
                .world
                .debris
                .pieces
                .iter()
                .map(DrawablePolygon::from)
                .collect(),
            circles,
            view: self.camera.transform(),
            output: self.output,
        }
    }

    /// Drive the session until the input source closes or the tick limit is
    /// reached. Returns the number of ticks run.
    pub fn run<I, S>(&mut self, input: &mut I, surface: &mut S) -> u64
    where
        I: InputSource,
        S: RenderSurface,
    {
        log::info!(
            "Session starting: play area {}x{}, launch speed {}, policy {}",
            self.world.bounds.width(),
            self.world.bounds.height(),
            self.world.character.launch_speed(),
            self.world.character.policy().as_str(),
        );

        let start = self.stats.ticks;
        while !input.closed() {
            if let Some(max) = self.settings.max_ticks
                && self.stats.ticks - start >= max
            {
                log::info!("Tick limit {} reached", max);
                break;
            }
            let player_input = input.poll(&self.camera);
            let frame = self.step(&player_input);
            surface.submit(&frame);
        }

        let ran = self.stats.ticks - start;
        log::info!(
            "Session ended after {} ticks ({:.2}s): {} reflections, {} cancels",
            ran,
            self.clock.elapsed(),
            self.stats.reflections,
            self.stats.cancels,
        );
        ran
    }
}
