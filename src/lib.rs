//! Brickfall - a minimal brick-breaker simulation core
//!
//! Core modules:
//! - `sim`: entities, collision detection, physics and the game state machine
//! - `config`: data-driven game tuning
//!
//! Rendering and input live outside this crate. A driver calls
//! [`sim::GameEngine::update`] once per frame with the measured elapsed time
//! in seconds and reads everything back through the engine's accessors.

pub mod config;
pub mod sim;

pub use config::GameConfig;
pub use sim::{GameEngine, GamePhase};

/// Default tuning values (see [`config::GameConfig`])
pub mod consts {
    /// Paddle dimensions and movement speed (units/sec)
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 300.0;
    /// Gap between the paddle and the playfield floor
    pub const PADDLE_FLOOR_OFFSET: f32 = 50.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 300.0;
    /// Ball rest height above the paddle at serve
    pub const BALL_SERVE_OFFSET: f32 = 20.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 8;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const GRID_OFFSET_X: f32 = 50.0;
    pub const GRID_OFFSET_Y: f32 = 50.0;

    /// Scoring and lives
    pub const STARTING_LIVES: i32 = 3;
    pub const POINTS_PER_BRICK: u32 = 10;

    /// Serve launch angle in degrees (0 = +x, -90 = straight up in screen
    /// coordinates, where y grows downward)
    pub const SERVE_ANGLE_DEGREES: f32 = -90.0;
}
