//! Input sources
//!
//! A source hands the driver one [`PlayerInput`] per tick, already in world
//! space, and reports when the player asked to quit.

use glam::Vec2;

use crate::sim::PlayerInput;
use crate::view::Camera;

/// Supplies one input snapshot per tick
pub trait InputSource {
    /// Input for the coming tick. The camera is provided so view-space
    /// pointer positions can be unprojected into the world.
    fn poll(&mut self, camera: &Camera) -> PlayerInput;

    /// Whether the player asked to exit
    fn closed(&self) -> bool;
}

/// One scripted action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// No buttons
    Idle,
    /// Hold the left action on a world-space point
    Aim(Vec2),
    /// Hold the left action on a view-space point
    AimView(Vec2),
    /// Press the right action
    Cancel,
}

/// Replays a list of `(ticks, command)` steps, then closes
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    steps: Vec<(u32, Command)>,
    step: usize,
    /// Ticks already spent on the current step
    spent: u32,
}

impl ScriptedInput {
    pub fn new(steps: Vec<(u32, Command)>) -> Self {
        Self {
            steps,
            step: 0,
            spent: 0,
        }
    }

    /// Total ticks the script runs for
    pub fn len_ticks(&self) -> u64 {
        self.steps.iter().map(|(n, _)| *n as u64).sum()
    }

    /// Ticks left before the script closes
    pub fn remaining_ticks(&self) -> u64 {
        let rest: u64 = self.steps.iter().skip(self.step).map(|(n, _)| *n as u64).sum();
        rest.saturating_sub(self.spent as u64)
    }

    fn current(&mut self) -> Option<Command> {
        while let Some(&(ticks, command)) = self.steps.get(self.step) {
            if self.spent < ticks {
                self.spent += 1;
                return Some(command);
            }
            self.step += 1;
            self.spent = 0;
        }
        None
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, camera: &Camera) -> PlayerInput {
        match self.current() {
            Some(Command::Aim(target)) => PlayerInput {
                left_active: true,
                click_position: target,
                ..Default::default()
            },
            Some(Command::AimView(point)) => PlayerInput {
                left_active: true,
                click_position: camera.unproject(point),
                ..Default::default()
            },
            Some(Command::Cancel) => PlayerInput {
                right_active: true,
                ..Default::default()
            },
            Some(Command::Idle) | None => PlayerInput::default(),
        }
    }

    fn closed(&self) -> bool {
        self.remaining_ticks() == 0
    }
}
