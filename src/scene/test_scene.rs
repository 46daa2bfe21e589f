use glam::{Vec2, Vec3};
use hecs::{Entity, World};

use crate::scene::prefabs::{spawn_player, spawn_static_box, PlayerSpawn};

/// Inner half-width of the tower shaft.
pub const TOWER_HALF_WIDTH: f32 = 6.0;

/// Where the player stands at the start: feet exactly on the floor.
pub fn player_start(spawn: &PlayerSpawn) -> Vec2 {
    Vec2::new(0.0, spawn.half_extents.y)
}

/// Build the tower: a floor, two walls to bounce off, and a staircase of
/// ledges. Returns the player entity.
pub fn load_tower_scene(world: &mut World, spawn: &PlayerSpawn) -> Entity {
    let stone = Vec3::new(0.45, 0.45, 0.5);
    let ledge = Vec3::new(0.55, 0.5, 0.4);

    // Floor, top surface at y = 0.
    spawn_static_box(
        world,
        Vec2::new(0.0, -0.5),
        Vec2::new(TOWER_HALF_WIDTH + 1.0, 0.5),
        stone,
    );

    // Side walls.
    for side in [-1.0_f32, 1.0] {
        spawn_static_box(
            world,
            Vec2::new(side * (TOWER_HALF_WIDTH + 0.5), 15.0),
            Vec2::new(0.5, 16.0),
            stone,
        );
    }

    for &(x, y, half_w) in &[
        (-3.5_f32, 3.0_f32, 1.5_f32),
        (3.0, 6.0, 1.25),
        (-1.5, 9.5, 1.0),
        (3.5, 13.0, 1.5),
        (-3.0, 17.0, 1.25),
        (1.0, 21.0, 1.0),
    ] {
        spawn_static_box(world, Vec2::new(x, y), Vec2::new(half_w, 0.25), ledge);
    }

    spawn_player(world, player_start(spawn), spawn)
}
