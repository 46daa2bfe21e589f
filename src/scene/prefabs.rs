use glam::{Vec2, Vec3};
use hecs::{Entity, EntityBuilder, World};

use crate::components::*;
use crate::config::{ConfigError, GameConfig, JumpConfig};

// ---------------------------------------------------------------------------
// PlayerSpawn: validated per-character settings for spawn_player
// ---------------------------------------------------------------------------

/// Everything needed to spawn a controllable character, already validated.
#[derive(Debug, Clone, Copy)]
pub struct PlayerSpawn {
    pub jump: JumpConfig,
    pub ground_check: GroundCheck,
    pub half_extents: Vec2,
    pub mass: f32,
    pub gravity_scale: f32,
    pub color: Vec3,
}

impl PlayerSpawn {
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let (mass, gravity_scale) = config.body_params()?;
        Ok(Self {
            jump: config.jump_config()?,
            ground_check: config.ground_check()?,
            mass,
            gravity_scale,
            ..Self::default()
        })
    }
}

impl Default for PlayerSpawn {
    fn default() -> Self {
        Self {
            jump: JumpConfig::default(),
            ground_check: GroundCheck {
                offset: Vec2::new(0.0, -0.5),
                radius: 0.2,
                mask: LAYER_GROUND,
            },
            half_extents: Vec2::new(0.4, 0.5),
            mass: 1.0,
            gravity_scale: 1.0,
            color: Vec3::new(0.85, 0.25, 0.2),
        }
    }
}

// ---------------------------------------------------------------------------
// Spawners
// ---------------------------------------------------------------------------

/// Immovable level geometry on the ground layer.
pub fn spawn_static_box(world: &mut World, center: Vec2, half_extents: Vec2, color: Vec3) -> Entity {
    world.spawn((
        Position(center),
        RenderPosition(center),
        BoxCollider { half_extents },
        CollisionLayer(LAYER_GROUND),
        Static,
        PhysicsMaterial::STONE,
        Sprite {
            size: half_extents * 2.0,
            color,
        },
    ))
}

/// Spawn the controllable character at `pos` (collider center).
///
/// The collider starts with the bouncy material; the first physics step
/// swaps it if the character spawns standing.
pub fn spawn_player(world: &mut World, pos: Vec2, spawn: &PlayerSpawn) -> Entity {
    let mut builder = EntityBuilder::new();
    // Rigid body
    builder.add_bundle((
        Position(pos),
        PreviousPosition(pos),
        RenderPosition(pos),
        Velocity(Vec2::ZERO),
        Mass(spawn.mass),
        GravityScale(spawn.gravity_scale),
        BoxCollider {
            half_extents: spawn.half_extents,
        },
        CollisionLayer(LAYER_PLAYER),
        PhysicsMaterial::BOUNCY,
    ));
    // Controller
    builder.add_bundle((
        Player,
        AppliedSurface::default(),
        ControllerState::default(),
        JumpFsm::new(JumpPhase::Airborne),
        spawn.jump,
        spawn.ground_check,
    ));
    // Presentation
    builder.add_bundle((
        Facing::Right,
        AnimatorFlags::default(),
        Sprite {
            size: spawn.half_extents * 2.0,
            color: spawn.color,
        },
    ));
    world.spawn(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_from_default_config_matches_defaults() {
        let spawn = PlayerSpawn::from_config(&GameConfig::default()).unwrap();
        assert_eq!(spawn.jump, JumpConfig::default());
        assert_eq!(spawn.ground_check.radius, 0.2);
        assert_eq!(spawn.ground_check.mask, LAYER_GROUND);
    }

    #[test]
    fn player_has_full_controller_bundle() {
        let mut world = World::new();
        let e = spawn_player(&mut world, Vec2::ZERO, &PlayerSpawn::default());
        assert!(world.get::<&Player>(e).is_ok());
        assert!(world.get::<&ControllerState>(e).is_ok());
        assert!(world.get::<&JumpConfig>(e).is_ok());
        assert_eq!(*world.get::<&CollisionLayer>(e).unwrap(), CollisionLayer(LAYER_PLAYER));
    }
}
