//! Launch entry point
//!
//! Windowing is not wired up natively; the binary runs a scripted headless
//! session through the full frame driver and logs what happened.

use glam::Vec2;

use launch::platform::{Command, ScriptedInput};
use launch::renderer::VertexSurface;
use launch::{Game, LaunchPolicy, Settings};

const USAGE: &str = "usage: launch [--policy continuous|on_press] [settings.json]";

/// Command line: an optional settings file and an optional policy override
#[derive(Debug, Default)]
struct Args {
    settings_path: Option<String>,
    policy: Option<LaunchPolicy>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--policy" | "-p" => {
                let value = args.next().ok_or("--policy needs a value")?;
                let policy = LaunchPolicy::from_str(&value)
                    .ok_or_else(|| format!("unknown launch policy `{value}`"))?;
                parsed.policy = Some(policy);
            }
            _ if arg.starts_with('-') => return Err(format!("unknown flag `{arg}`")),
            _ => parsed.settings_path = Some(arg),
        }
    }
    Ok(parsed)
}

fn main() {
    env_logger::init();
    log::info!("Launch (headless) starting...");

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let settings = match &args.settings_path {
        Some(path) => Settings::load(path).unwrap_or_else(|e| {
            log::warn!("Ignoring settings from {}: {}", path, e);
            Settings::default()
        }),
        None => Settings::default(),
    };
    // Headless runs are reproducible
    let settings = Settings {
        fixed_step: settings.fixed_step.or(Some(1.0 / 60.0)),
        launch_policy: args.policy.unwrap_or(settings.launch_policy),
        ..settings
    };

    let area = settings.play_area;
    let mut input = demo_script(area.max, area.min);
    let mut surface = VertexSurface::new();
    let layout = VertexSurface::layout();
    log::info!(
        "Vertex stride {} bytes, {} attributes",
        layout.array_stride,
        layout.attributes.len()
    );
    let mut game = match Game::new(settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Cannot start session: {e}");
            std::process::exit(1);
        }
    };
    let ticks = game.run(&mut input, &mut surface);

    let character = game.character();
    log::info!(
        "Ran {} ticks; entity at {:?} moving {:?}; camera at {:?}",
        ticks,
        character.center(),
        character.vel,
        game.camera().position(),
    );
    log::info!(
        "Last frame: {} vertices ({} bytes), {} circles drawn in total",
        surface.vertices().len(),
        surface.bytes().len(),
        surface.circles_drawn(),
    );
}

/// Aim right and hold, coast, brake, then launch toward a corner and let it
/// bounce around for a while
fn demo_script(max: Vec2, min: Vec2) -> ScriptedInput {
    let center = (max + min) / 2.0;
    ScriptedInput::new(vec![
        (30, Command::Aim(Vec2::new(max.x, center.y))),
        (120, Command::Idle),
        (1, Command::Cancel),
        (30, Command::Idle),
        (1, Command::Aim(max)),
        (20 * 60, Command::Idle),
    ])
}
