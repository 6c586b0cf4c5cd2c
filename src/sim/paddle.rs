//! The player's paddle
//!
//! Moves horizontally only; y is set once at layout time and again on
//! restart. Movement hard-clamps to the playfield, it never bounces.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    width: f32,
    height: f32,
    /// Movement speed (units/sec)
    speed: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height,
            speed,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Move left, clamped at the playfield's left edge
    pub fn move_left(&mut self, dt: f32) {
        self.pos.x = (self.pos.x - self.speed * dt).max(0.0);
    }

    /// Move right, clamped so the paddle stays fully inside the playfield
    pub fn move_right(&mut self, dt: f32, field_width: f32) {
        self.pos.x = (self.pos.x + self.speed * dt).min(field_width - self.width);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Teleport (restart layout only; play moves are horizontal)
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_move_left_clamps_at_zero() {
        let mut paddle = Paddle::new(10.0, 550.0, 100.0, 20.0, 300.0);
        paddle.move_left(1.0); // would be -290 unclamped
        assert_eq!(paddle.pos.x, 0.0);
        assert_eq!(paddle.pos.y, 550.0);
    }

    #[test]
    fn test_move_right_clamps_at_field_edge() {
        let mut paddle = Paddle::new(650.0, 550.0, 100.0, 20.0, 300.0);
        paddle.move_right(1.0, 800.0); // would be 950 unclamped
        assert_eq!(paddle.pos.x, 700.0);
    }

    #[test]
    fn test_moves_are_horizontal_only() {
        let mut paddle = Paddle::new(350.0, 550.0, 100.0, 20.0, 300.0);
        paddle.move_left(0.1);
        paddle.move_right(0.2, 800.0);
        assert_eq!(paddle.pos.y, 550.0);
    }

    #[test]
    fn test_bounds() {
        let paddle = Paddle::new(350.0, 550.0, 100.0, 20.0, 300.0);
        let b = paddle.bounds();
        assert_eq!(b.left, 350.0);
        assert_eq!(b.right, 450.0);
        assert_eq!(b.top, 550.0);
        assert_eq!(b.bottom, 570.0);
    }

    proptest! {
        /// Any sequence of moves keeps the paddle inside the playfield
        #[test]
        fn prop_paddle_stays_in_field(
            start in 0.0f32..700.0,
            moves in prop::collection::vec((prop::bool::ANY, 0.0f32..0.5), 0..50),
        ) {
            let field_width = 800.0;
            let mut paddle = Paddle::new(start, 550.0, 100.0, 20.0, 300.0);
            for (left, dt) in moves {
                if left {
                    paddle.move_left(dt);
                } else {
                    paddle.move_right(dt, field_width);
                }
                prop_assert!(paddle.pos.x >= 0.0);
                prop_assert!(paddle.pos.x <= field_width - paddle.width());
            }
        }
    }
}
