use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{GravityScale, Position, PreviousPosition, Static, Velocity};

/// Fixed physics step. The logic phase runs at frame rate; bodies only move
/// in steps of exactly this length.
pub const PHYSICS_DT: f32 = 1.0 / 60.0;

pub const GRAVITY: Vec2 = Vec2::new(0.0, -9.81);

/// Integrate one fixed step for every dynamic body.
///
/// Semi-implicit Euler: gravity goes into velocity first, then velocity into
/// position. Collision response runs separately, after this.
pub fn physics_step(world: &mut World) {
    // Snapshot previous positions for render interpolation.
    // Collect first (drops the borrow), then insert/update.
    let prev_snapshots: Vec<(Entity, Vec2)> = world
        .query::<&Position>()
        .with::<&Velocity>()
        .without::<&Static>()
        .iter()
        .map(|(e, pos)| (e, pos.0))
        .collect();

    // insert_one replaces the component if it already exists.
    for (entity, pos) in prev_snapshots {
        let _ = world.insert_one(entity, PreviousPosition(pos));
    }

    for (_entity, (pos, vel, gravity)) in world
        .query_mut::<(&mut Position, &mut Velocity, Option<&GravityScale>)>()
        .without::<&Static>()
    {
        if let Some(scale) = gravity {
            vel.0 += GRAVITY * scale.0 * PHYSICS_DT;
        }
        pos.0 += vel.0 * PHYSICS_DT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_only_affects_scaled_bodies() {
        let mut world = World::new();
        let falling = world.spawn((Position(Vec2::ZERO), Velocity(Vec2::ZERO), GravityScale(1.0)));
        let floating = world.spawn((Position(Vec2::ZERO), Velocity(Vec2::ZERO)));

        physics_step(&mut world);

        let v = world.get::<&Velocity>(falling).unwrap().0;
        assert!((v.y - GRAVITY.y * PHYSICS_DT).abs() < 1e-6);
        assert_eq!(world.get::<&Velocity>(floating).unwrap().0, Vec2::ZERO);
    }

    #[test]
    fn records_previous_position() {
        let mut world = World::new();
        let e = world.spawn((Position(Vec2::new(1.0, 2.0)), Velocity(Vec2::new(60.0, 0.0))));

        physics_step(&mut world);

        assert_eq!(world.get::<&PreviousPosition>(e).unwrap().0, Vec2::new(1.0, 2.0));
        let pos = world.get::<&Position>(e).unwrap().0;
        assert!((pos.x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn static_bodies_do_not_move() {
        let mut world = World::new();
        let e = world.spawn((Position(Vec2::ZERO), Velocity(Vec2::ONE), Static));
        physics_step(&mut world);
        assert_eq!(world.get::<&Position>(e).unwrap().0, Vec2::ZERO);
    }
}
