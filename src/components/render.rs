use glam::{Vec2, Vec3};

/// Flat-colored rectangle drawn at the entity's [`RenderPosition`].
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub size: Vec2,
    pub color: Vec3,
}

/// Position to draw at this frame. Lerped between the last two physics
/// positions by the accumulator alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPosition(pub Vec2);
