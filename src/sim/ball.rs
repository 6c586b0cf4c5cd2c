//! The ball entity
//!
//! Pure kinematics: the ball integrates its own motion each tick. Boundary
//! handling and bounce response belong to the physics engine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision radius, fixed for the ball's lifetime
    radius: f32,
    /// Velocity magnitude at launch; bounces reverse an axis and never
    /// rescale, so this bound only applies at serve time
    speed: f32,
}

impl Ball {
    pub fn new(x: f32, y: f32, radius: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius,
            speed,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Advance position by one integration step
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Set velocity from a launch angle in degrees (0 = +x, -90 = straight
    /// up in screen coordinates, where y grows downward)
    pub fn launch(&mut self, angle_degrees: f32) {
        let theta = angle_degrees.to_radians();
        self.vel = Vec2::new(theta.cos(), theta.sin()) * self.speed;
    }

    /// Mirror the horizontal velocity component (side wall bounce)
    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Mirror the vertical velocity component (top wall, paddle, brick)
    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.radius))
    }

    /// Teleport to a point and stop; the ball stays inert until relaunched
    pub fn reset(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
        self.vel = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_update_integrates_linearly() {
        let mut ball = Ball::new(100.0, 200.0, 10.0, 300.0);
        ball.vel = Vec2::new(60.0, -30.0);

        ball.update(0.5);
        assert_eq!(ball.pos, Vec2::new(130.0, 185.0));
    }

    #[test]
    fn test_launch_up() {
        let mut ball = Ball::new(0.0, 0.0, 10.0, 300.0);
        ball.launch(-90.0);
        assert!(ball.vel.x.abs() < 1e-3);
        assert!((ball.vel.y + 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_launch_right() {
        let mut ball = Ball::new(0.0, 0.0, 10.0, 300.0);
        ball.launch(0.0);
        assert!((ball.vel.x - 300.0).abs() < 1e-3);
        assert!(ball.vel.y.abs() < 1e-3);
    }

    #[test]
    fn test_reverse_is_involution() {
        let mut ball = Ball::new(0.0, 0.0, 10.0, 300.0);
        ball.vel = Vec2::new(120.0, -80.0);

        ball.reverse_x();
        ball.reverse_x();
        ball.reverse_y();
        ball.reverse_y();
        assert_eq!(ball.vel, Vec2::new(120.0, -80.0));
    }

    #[test]
    fn test_bounds_centered_on_position() {
        let ball = Ball::new(50.0, 60.0, 10.0, 300.0);
        let b = ball.bounds();
        assert_eq!(b.left, 40.0);
        assert_eq!(b.right, 60.0);
        assert_eq!(b.top, 50.0);
        assert_eq!(b.bottom, 70.0);
    }

    #[test]
    fn test_reset_zeroes_velocity() {
        let mut ball = Ball::new(0.0, 0.0, 10.0, 300.0);
        ball.launch(-45.0);
        ball.reset(400.0, 530.0);
        assert_eq!(ball.pos, Vec2::new(400.0, 530.0));
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_update_matches_closed_form(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            dt in 0.0f32..0.1,
        ) {
            let mut ball = Ball::new(x, y, 10.0, 300.0);
            ball.vel = Vec2::new(vx, vy);
            ball.update(dt);
            prop_assert_eq!(ball.pos.x, x + vx * dt);
            prop_assert_eq!(ball.pos.y, y + vy * dt);
        }

        #[test]
        fn prop_launch_preserves_speed(angle in -360.0f32..360.0) {
            let mut ball = Ball::new(0.0, 0.0, 10.0, 300.0);
            ball.launch(angle);
            prop_assert!((ball.vel.length() - 300.0).abs() < 1e-2);
        }
    }
}
