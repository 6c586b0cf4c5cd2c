//! One-tick physics orchestration
//!
//! Resolution order within a tick is fixed: integrate + walls, then paddle,
//! then bricks, then the out-of-bounds query. Each response snaps the ball
//! clear of the surface it hit, so the following check never re-triggers on
//! stale geometry.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::brick::BrickGrid;
use super::collision;
use super::paddle::Paddle;

/// Integrates the ball and resolves collisions against the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsEngine {
    field_width: f32,
    field_height: f32,
}

impl PhysicsEngine {
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self {
            field_width,
            field_height,
        }
    }

    /// Integrate ball motion, then bounce off the side and top walls
    ///
    /// Side and top contact are independent; a corner hit reverses both
    /// axes in the same tick.
    pub fn update_ball(&self, ball: &mut Ball, dt: f32) {
        ball.update(dt);

        let contact = collision::ball_wall_contact(ball, self.field_width);

        if contact.left || contact.right {
            ball.reverse_x();
            // Snap flush to the wall to prevent sticking on the next tick
            if contact.left {
                ball.pos.x = ball.radius();
            } else {
                ball.pos.x = self.field_width - ball.radius();
            }
        }

        if contact.top {
            ball.reverse_y();
            ball.pos.y = ball.radius();
        }
    }

    /// Bounce the ball off the paddle if they overlap
    ///
    /// The ball is always pushed above the paddle regardless of approach
    /// angle; a simplification, not true reflection physics.
    pub fn check_paddle_collision(&self, ball: &mut Ball, paddle: &Paddle) -> bool {
        let hit = collision::ball_paddle_collision(ball, paddle);
        if hit {
            ball.reverse_y();
            ball.pos.y = paddle.pos.y - ball.radius();
        }
        hit
    }

    /// Resolve at most one brick per tick
    ///
    /// Scans in grid order and stops at the first overlap, even when the
    /// ball geometrically covers several bricks. Returns whether a brick
    /// took a hit, so the caller can award points.
    pub fn check_brick_collisions(&self, ball: &mut Ball, grid: &mut BrickGrid) -> bool {
        for brick in grid.bricks_mut() {
            if collision::ball_brick_collision(ball, brick) {
                brick.hit();
                ball.reverse_y();
                return true;
            }
        }
        false
    }

    /// Query only; the caller decides what a lost ball costs
    pub fn is_ball_out_of_bounds(&self, ball: &Ball) -> bool {
        collision::ball_out_of_bounds(ball, self.field_height)
    }
}
