//! Data-driven game tuning
//!
//! Everything the engine needs to lay out a playfield lives here, so tests
//! and drivers can build custom boards without touching the engine itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Playfield and entity tuning for one game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield dimensions
    pub field_width: f32,
    pub field_height: f32,

    /// Paddle size, speed, and height above the floor
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_floor_offset: f32,

    /// Ball size, launch speed, and rest height above the paddle
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_serve_offset: f32,

    /// Brick grid layout
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub grid_offset_x: f32,
    pub grid_offset_y: f32,

    /// Scoring and lives
    pub starting_lives: i32,
    pub points_per_brick: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 600.0,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_floor_offset: PADDLE_FLOOR_OFFSET,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_serve_offset: BALL_SERVE_OFFSET,
            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            grid_offset_x: GRID_OFFSET_X,
            grid_offset_y: GRID_OFFSET_Y,
            starting_lives: STARTING_LIVES,
            points_per_brick: POINTS_PER_BRICK,
        }
    }
}

impl GameConfig {
    /// Default tuning on a playfield of the given size
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self {
            field_width,
            field_height,
            ..Self::default()
        }
    }

    /// Parse a JSON override; absent fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Paddle top edge y in the serve layout
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_floor_offset
    }

    /// Paddle left edge x in the serve layout (centered)
    pub fn paddle_start_x(&self) -> f32 {
        self.field_width / 2.0 - self.paddle_width / 2.0
    }

    /// Where the ball rests before a serve
    pub fn serve_point(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.paddle_y() - self.ball_serve_offset)
    }
}
