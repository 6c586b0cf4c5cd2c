//! Brickfall headless demo driver
//!
//! Runs the simulation at a fixed timestep with a simple ball-tracking
//! driver so the engine can be watched from its log output. Rendering and
//! real input belong to an external front end; this binary is only a
//! harness around the library.

use brickfall::{GameConfig, GameEngine, GamePhase};

/// Fixed simulation timestep (120 Hz)
const SIM_DT: f32 = 1.0 / 120.0;
/// Tick cap so a stuck rally cannot spin forever (10 minutes of play)
const MAX_TICKS: u64 = 120 * 600;

#[derive(serde::Serialize)]
struct RunSummary {
    phase: GamePhase,
    score: u32,
    lives: i32,
    ticks: u64,
    bricks_remaining: usize,
}

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match GameConfig::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {path}");
                    config
                }
                Err(err) => {
                    log::error!("Bad config in {path}: {err}");
                    std::process::exit(1);
                }
            },
            Err(err) => {
                log::error!("Cannot read {path}: {err}");
                std::process::exit(1);
            }
        },
        None => GameConfig::new(800.0, 600.0),
    };

    let mut engine = GameEngine::with_config(config);
    engine.start();

    let mut ticks: u64 = 0;
    while engine.phase() == GamePhase::Playing && ticks < MAX_TICKS {
        // Steer the paddle toward the ball; the core has no AI of its own
        let ball_x = engine.ball().pos.x;
        let paddle_center = engine.paddle().pos.x + engine.paddle().width() / 2.0;
        if ball_x < paddle_center - 2.0 {
            engine.move_paddle_left(SIM_DT);
        } else if ball_x > paddle_center + 2.0 {
            engine.move_paddle_right(SIM_DT);
        }

        engine.update(SIM_DT);
        ticks += 1;

        // A lost ball comes back inert at the serve point; serve again
        if engine.phase() == GamePhase::Playing && engine.ball().vel == glam::Vec2::ZERO {
            engine.start();
        }
    }

    if ticks >= MAX_TICKS {
        log::warn!("Tick cap reached before the run ended");
    }

    let summary = RunSummary {
        phase: engine.phase(),
        score: engine.score(),
        lives: engine.lives(),
        ticks,
        bricks_remaining: engine.brick_grid().remaining_bricks(),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Summary serialization failed: {err}"),
    }
}
