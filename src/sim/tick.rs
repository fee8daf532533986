//! Per-tick simulation step
//!
//! Advances the entity and the debris by one variable timestep.

use glam::Vec2;

use super::character::{Character, Motion};
use super::debris::DebrisField;
use super::rect::Rect;
use crate::settings::Settings;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Left action is held (launch / re-aim)
    pub left_active: bool,
    /// Right action was pressed this tick (cancel launch)
    pub right_active: bool,
    /// World-space target of the action
    pub click_position: Vec2,
}

/// All simulated state for a session
#[derive(Debug, Clone)]
pub struct World {
    pub character: Character,
    /// Play-area bounds, fixed for the session
    pub bounds: Rect,
    pub debris: DebrisField,
    /// Number of ticks simulated
    pub time_ticks: u64,
}

impl World {
    /// Entity at rest in the center of the play area, debris scattered
    pub fn new(settings: &Settings) -> Self {
        let bounds = settings.play_area;
        Self {
            character: Character::new(
                bounds.center(),
                settings.body_half_extent,
                settings.launch_speed,
                settings.launch_policy,
            ),
            bounds,
            debris: DebrisField::scatter(settings.seed, &bounds, settings.debris_count),
            time_ticks: 0,
        }
    }
}

/// Advance the world by `dt` seconds
pub fn tick(world: &mut World, input: &PlayerInput, dt: f32) -> Motion {
    world.time_ticks += 1;
    let motion = world.character.update(dt, input, &world.bounds);
    world.debris.update(dt);
    motion
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_starts_centered_at_rest() {
        let world = World::new(&Settings::default());
        assert_eq!(world.character.center(), Vec2::new(960.0, 540.0));
        assert_eq!(world.character.vel, Vec2::ZERO);
        assert_eq!(world.debris.len(), crate::consts::DEBRIS_COUNT);
    }

    #[test]
    fn test_tick_counts_and_moves() {
        let mut world = World::new(&Settings::default());
        let launch = PlayerInput {
            left_active: true,
            click_position: Vec2::new(960.0, 1080.0),
            ..Default::default()
        };
        tick(&mut world, &launch, 0.5);
        tick(&mut world, &PlayerInput::default(), 0.5);
        assert_eq!(world.time_ticks, 2);
        assert!((world.character.center() - Vec2::new(960.0, 604.0)).length() < 1e-3);
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let mut w1 = World::new(&settings);
        let mut w2 = World::new(&settings);
        let inputs = [
            PlayerInput {
                left_active: true,
                click_position: Vec2::new(0.0, 0.0),
                ..Default::default()
            },
            PlayerInput::default(),
            PlayerInput {
                right_active: true,
                ..Default::default()
            },
            PlayerInput::default(),
        ];
        for input in &inputs {
            tick(&mut w1, input, 1.0 / 60.0);
            tick(&mut w2, input, 1.0 / 60.0);
        }
        assert_eq!(w1.character.center(), w2.character.center());
        assert_eq!(w1.character.vel, Vec2::ZERO);
        assert_eq!(w1.debris.pieces[0].rotation, w2.debris.pieces[0].rotation);
    }
}
