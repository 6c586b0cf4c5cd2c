//! Pure collision predicates
//!
//! Stateless AABB tests shared by the physics engine. These only detect;
//! response (velocity reversal, position correction) happens in
//! [`super::physics`].

use super::ball::Ball;
use super::brick::Brick;
use super::paddle::Paddle;

/// Wall contact flags for one tick
///
/// The bottom edge is deliberately absent: leaving past the floor is
/// out-of-bounds, not a bounce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top
    }
}

/// Ball vs paddle overlap
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bounds().overlaps(&paddle.bounds())
}

/// Ball vs brick overlap; destroyed bricks never collide
pub fn ball_brick_collision(ball: &Ball, brick: &Brick) -> bool {
    !brick.is_destroyed() && ball.bounds().overlaps(&brick.bounds())
}

/// Side and top wall contact; flags are independent and a corner can set two
/// at once
pub fn ball_wall_contact(ball: &Ball, field_width: f32) -> WallContact {
    let bounds = ball.bounds();
    WallContact {
        left: bounds.left <= 0.0,
        right: bounds.right >= field_width,
        top: bounds.top <= 0.0,
    }
}

/// True once the ball's center is more than its radius past the floor
pub fn ball_out_of_bounds(ball: &Ball, field_height: f32) -> bool {
    ball.pos.y + ball.radius() > field_height
}
