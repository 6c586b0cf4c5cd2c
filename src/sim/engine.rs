//! Top-level game state machine
//!
//! The engine owns one ball, one paddle, one brick grid and one physics
//! engine outright; a driver steps it with [`GameEngine::update`] and reads
//! results back through the accessors. Misuse of the transition methods
//! (pausing while not playing, resuming from the menu) is a silent no-op.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::SERVE_ANGLE_DEGREES;

use super::ball::Ball;
use super::brick::BrickGrid;
use super::paddle::Paddle;
use super::physics::PhysicsEngine;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the home screen
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-run
    Paused,
    /// Run ended with no lives left
    GameOver,
    /// Every brick destroyed
    Won,
}

/// The complete game: state machine plus owned entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEngine {
    config: GameConfig,
    phase: GamePhase,
    score: u32,
    /// May go negative if lose_life is forced past zero; guarded callers
    /// never rely on a floor
    lives: i32,
    /// Reserved for progression, never advanced by the core
    level: u32,
    paddle: Paddle,
    ball: Ball,
    bricks: BrickGrid,
    physics: PhysicsEngine,
}

impl GameEngine {
    /// Default tuning on a playfield of the given size
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self::with_config(GameConfig::new(field_width, field_height))
    }

    /// Build the serve layout described by the config
    pub fn with_config(config: GameConfig) -> Self {
        let paddle = Paddle::new(
            config.paddle_start_x(),
            config.paddle_y(),
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
        );
        let serve = config.serve_point();
        let ball = Ball::new(serve.x, serve.y, config.ball_radius, config.ball_speed);
        let bricks = BrickGrid::new(
            config.brick_rows,
            config.brick_columns,
            config.brick_width,
            config.brick_height,
            config.grid_offset_x,
            config.grid_offset_y,
        );
        let physics = PhysicsEngine::new(config.field_width, config.field_height);

        Self {
            phase: GamePhase::Menu,
            score: 0,
            lives: config.starting_lives,
            level: 1,
            paddle,
            ball,
            bricks,
            physics,
            config,
        }
    }

    // --- accessors -------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn brick_grid(&self) -> &BrickGrid {
        &self.bricks
    }

    /// Raw phase override, bypassing the transition guards (tests/debug)
    pub fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    // --- transitions -----------------------------------------------------

    /// Serve: enter Playing and launch the ball straight up
    ///
    /// Permitted from any state; calling mid-run re-launches an inert ball.
    pub fn start(&mut self) {
        self.phase = GamePhase::Playing;
        self.ball.launch(SERVE_ANGLE_DEGREES);
        log::info!("Serve: ball launched");
    }

    /// Only effective while Playing
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            log::info!("Paused");
        }
    }

    /// Only effective while Paused
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            log::info!("Resumed");
        }
    }

    /// Back to the menu with a fresh board
    ///
    /// Entities are repositioned and restored in place, never recreated, so
    /// references held by a view layer stay valid.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Menu;
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.level = 1;

        self.paddle
            .set_position(self.config.paddle_start_x(), self.config.paddle_y());
        let serve = self.config.serve_point();
        self.ball.reset(serve.x, serve.y);
        self.bricks.reset();
        log::info!("Restarted");
    }

    /// Unconditional; callable in any state
    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Drop a life; no floor, so forcing it past zero goes negative
    pub fn lose_life(&mut self) {
        self.lives -= 1;
        if self.lives <= 0 {
            self.phase = GamePhase::GameOver;
            log::info!("Out of lives, game over at score {}", self.score);
        }
    }

    // --- per-tick driving ------------------------------------------------

    /// Advance one tick; a no-op unless Playing
    ///
    /// Order within the tick is fixed: walls, paddle, bricks, out-of-bounds,
    /// win check. The win check runs last in source order even when a life
    /// was just lost; that ordering is normative.
    pub fn update(&mut self, dt: f32) {
        if self.phase != GamePhase::Playing {
            return;
        }

        self.physics.update_ball(&mut self.ball, dt);
        self.physics.check_paddle_collision(&mut self.ball, &self.paddle);

        if self
            .physics
            .check_brick_collisions(&mut self.ball, &mut self.bricks)
        {
            self.add_score(self.config.points_per_brick);
            log::debug!(
                "Brick hit, score {} ({} bricks left)",
                self.score,
                self.bricks.remaining_bricks()
            );
        }

        if self.physics.is_ball_out_of_bounds(&self.ball) {
            self.lose_life();
            if self.lives > 0 {
                // Back to the serve point, inert until the next start()
                let serve = self.config.serve_point();
                self.ball.reset(serve.x, serve.y);
                log::info!("Ball lost, {} lives remain", self.lives);
            }
        }

        if self.bricks.all_bricks_destroyed() {
            self.phase = GamePhase::Won;
            log::info!("Board cleared at score {}", self.score);
        }
    }

    pub fn move_paddle_left(&mut self, dt: f32) {
        self.paddle.move_left(dt);
    }

    pub fn move_paddle_right(&mut self, dt: f32) {
        self.paddle.move_right(dt, self.config.field_width);
    }
}
