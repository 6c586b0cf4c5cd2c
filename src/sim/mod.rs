//! Simulation module
//!
//! All gameplay logic lives here. The module is synchronous and
//! driver-paced: nothing advances until the owner calls
//! [`GameEngine::update`] with the elapsed time for one tick.
//! No rendering or platform dependencies.

pub mod aabb;
pub mod ball;
pub mod brick;
pub mod collision;
pub mod engine;
pub mod paddle;
pub mod physics;

pub use aabb::Aabb;
pub use ball::Ball;
pub use brick::{Brick, BrickGrid};
pub use collision::WallContact;
pub use engine::{GameEngine, GamePhase};
pub use paddle::Paddle;
pub use physics::PhysicsEngine;
