//! End-to-end scenarios for the launch simulation

use glam::Vec2;

use launch::consts::{HISTORY_CAPACITY, TRAIL_HIDDEN_AGES};
use launch::platform::{Command, FrameClock, ScriptedInput};
use launch::renderer::VertexSurface;
use launch::sim::{Character, Edge, Motion, PlayerInput, Rect, World, tick};
use launch::view::Trail;
use launch::{Game, LaunchPolicy, Settings};

fn bounds() -> Rect {
    Rect::new(Vec2::ZERO, Vec2::new(1920.0, 1080.0))
}

#[test]
fn launch_right_then_coast_one_second() {
    let mut world = World::new(&Settings::default());
    assert_eq!(world.character.center(), Vec2::new(960.0, 540.0));
    assert_eq!(world.character.vel, Vec2::ZERO);

    let launch = PlayerInput {
        left_active: true,
        click_position: Vec2::new(1920.0, 540.0),
        ..Default::default()
    };
    tick(&mut world, &launch, 0.0);
    let speed = world.character.launch_speed();
    assert!((world.character.vel - Vec2::new(speed, 0.0)).length() < 1e-4);

    tick(&mut world, &PlayerInput::default(), 1.0);
    let expected = Vec2::new(960.0 + speed, 540.0);
    assert!((world.character.center() - expected).length() < 1e-3);
}

#[test]
fn cancel_stops_entity_for_good() {
    let mut world = World::new(&Settings::default());
    let launch = PlayerInput {
        left_active: true,
        click_position: Vec2::new(0.0, 0.0),
        ..Default::default()
    };
    tick(&mut world, &launch, 0.5);
    assert_ne!(world.character.vel, Vec2::ZERO);

    let cancel = PlayerInput {
        right_active: true,
        ..Default::default()
    };
    tick(&mut world, &cancel, 0.5);
    assert_eq!(world.character.vel, Vec2::ZERO);

    let resting = world.character.center();
    for _ in 0..10 {
        tick(&mut world, &PlayerInput::default(), 0.5);
    }
    assert_eq!(world.character.center(), resting);
}

#[test]
fn reflection_at_right_edge() {
    let mut ch = Character::new(Vec2::new(1900.0, 540.0), 10.0, 64.0, LaunchPolicy::Continuous);
    ch.vel = Vec2::new(64.0, 0.0);

    let before = ch.center();
    let motion = ch.update(1.0, &PlayerInput::default(), &bounds());
    assert_eq!(motion, Motion::Reflected(Edge::Right));
    assert_eq!(ch.vel, Vec2::new(-64.0, 0.0));
    assert_eq!(ch.center(), before);

    ch.update(1.0, &PlayerInput::default(), &bounds());
    assert!(bounds().contains_rect(&ch.body));
    assert_eq!(ch.center(), Vec2::new(1836.0, 540.0));
}

#[test]
fn long_session_stays_in_bounds() {
    let settings = Settings {
        fixed_step: Some(1.0 / 30.0),
        launch_speed: 900.0,
        ..Default::default()
    };
    let mut game = Game::new(settings).unwrap();
    let mut input = ScriptedInput::new(vec![
        (1, Command::Aim(Vec2::new(1700.0, 1000.0))),
        (3000, Command::Idle),
    ]);
    let mut surface = VertexSurface::new();
    game.run(&mut input, &mut surface);

    assert!(game.stats().reflections > 0);
    assert!(game.world().bounds.contains_rect(&game.character().body));
    assert!((game.character().vel.length() - 900.0).abs() < 1e-2);
}

#[test]
fn trail_follows_wall_clock_not_frames() {
    // The same 1.6 seconds split into different frame counts yields the same trail
    let run = |step: f32, frames: u32| {
        let settings = Settings {
            fixed_step: Some(step),
            ..Default::default()
        };
        let mut game = Game::with_clock(settings, FrameClock::fixed(step)).unwrap();
        let aim = PlayerInput {
            left_active: true,
            click_position: Vec2::new(1920.0, 540.0),
            ..Default::default()
        };
        let mut frame = game.step(&aim);
        for _ in 1..frames {
            frame = game.step(&PlayerInput::default());
        }
        frame
    };

    // Both rates first reach the 0.07s interval at 0.08s, so samples line up
    let coarse = run(0.04, 40);
    let fine = run(0.02, 80);
    assert_eq!(coarse.circles.len(), HISTORY_CAPACITY - TRAIL_HIDDEN_AGES + 1);
    for (a, b) in coarse.circles.iter().zip(&fine.circles) {
        assert!((a.offset - b.offset).length() < 0.1);
        assert!((a.intensity as i32 - b.intensity as i32).abs() <= 1);
        assert!((a.radius - b.radius).abs() < 0.1);
    }
}

#[test]
fn trail_samples_are_evenly_spaced_in_time() {
    let mut trail = Trail::new(Rect::square(Vec2::ZERO, 10.0), 0.0, 0.07, 40.0);
    let mut now = 0.0;
    // Irregular frame lengths
    let steps = [0.016, 0.033, 0.008, 0.05, 0.016, 0.1, 0.02, 0.016, 0.04, 0.03];
    for (i, dt) in steps.iter().cycle().take(200).enumerate() {
        now += dt;
        trail.sample(Rect::square(Vec2::new(i as f32, 0.0), 10.0), now);
    }
    let history = trail.history();
    for age in 0..HISTORY_CAPACITY - 1 {
        let newer = history.sample_at_age(age).timestamp;
        let older = history.sample_at_age(age + 1).timestamp;
        assert!(newer - older >= 0.07 - 1e-9);
    }
}
