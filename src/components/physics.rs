use glam::Vec2;
use hecs::Entity;

// ---------------------------------------------------------------------------
// Collision layers
// ---------------------------------------------------------------------------

/// Floors, ledges and tower walls. The ground sensor queries this layer.
pub const LAYER_GROUND: u32 = 0b01;

/// The controlled character.
pub const LAYER_PLAYER: u32 = 0b10;

/// Which layer bits an entity occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionLayer(pub u32);

impl CollisionLayer {
    pub fn matches(&self, mask: u32) -> bool {
        self.0 & mask != 0
    }
}

// ---------------------------------------------------------------------------
// Rigid body
// ---------------------------------------------------------------------------

/// Linear velocity in world units per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

/// Body mass. Impulses change velocity by `impulse / mass`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass(pub f32);

/// Multiplier on world gravity. Bodies without it ignore gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityScale(pub f32);

/// Axis-aligned box collider centered on the entity's [`Position`](super::Position).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    pub half_extents: Vec2,
}

/// Marker: entity is immovable (infinite mass for collision response).
pub struct Static;

/// Surface response of a collider.
///
/// Contact pairs combine friction by geometric mean and bounciness by
/// maximum, so a zero-friction surface slides on anything and a bouncy
/// surface bounces off anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsMaterial {
    pub friction: f32,
    pub bounciness: f32,
}

impl PhysicsMaterial {
    /// Worn while standing: no bounce, no friction against the floor.
    pub const SLIPPERY: Self = Self { friction: 0.0, bounciness: 0.0 };
    /// Worn in the air: keeps most of the speed when hitting a wall.
    pub const BOUNCY: Self = Self { friction: 0.0, bounciness: 0.8 };
    /// Level geometry.
    pub const STONE: Self = Self { friction: 0.4, bounciness: 0.0 };

    pub fn combine(&self, other: &Self) -> Self {
        Self {
            friction: (self.friction * other.friction).max(0.0).sqrt(),
            bounciness: self.bounciness.max(other.bounciness),
        }
    }
}

/// Collision contact produced by the detection phase.
/// `contact_normal` points from `entity_a` toward `entity_b`.
#[derive(Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub entity_a: Entity,
    pub entity_b: Entity,
    pub contact_normal: Vec2,
    pub penetration_depth: f32,
}

/// Position at the start of the last physics step, for render interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviousPosition(pub Vec2);
