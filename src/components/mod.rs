mod character;
mod physics;
mod render;

pub use character::*;
pub use physics::*;
pub use render::*;

use glam::Vec2;

/// World-space center of an entity's collider, written by the physics step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);
