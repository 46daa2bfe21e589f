use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{
    BoxCollider, CollisionEvent, PhysicsMaterial, Position, Static, Velocity,
};

struct ColliderEntry {
    entity: Entity,
    position: Vec2,
    half_extents: Vec2,
    is_static: bool,
}

/// Box vs box. The normal is along the axis of least overlap and points
/// from `a` toward `b`.
fn test_pair(a: &ColliderEntry, b: &ColliderEntry) -> Option<CollisionEvent> {
    let diff = b.position - a.position;
    let overlap = (a.half_extents + b.half_extents) - diff.abs();
    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return None;
    }

    let (contact_normal, penetration_depth) = if overlap.x < overlap.y {
        (Vec2::new(if diff.x >= 0.0 { 1.0 } else { -1.0 }, 0.0), overlap.x)
    } else {
        (Vec2::new(0.0, if diff.y >= 0.0 { 1.0 } else { -1.0 }), overlap.y)
    };

    Some(CollisionEvent {
        entity_a: a.entity,
        entity_b: b.entity,
        contact_normal,
        penetration_depth,
    })
}

/// Below this approach speed a contact is treated as resting: the normal
/// velocity is removed without bounce.
const REST_VELOCITY_THRESHOLD: f32 = 0.5;

/// Material for colliders that never got one.
const DEFAULT_MATERIAL: PhysicsMaterial = PhysicsMaterial::STONE;

/// Coulomb friction: reduce tangential velocity proportional to normal impulse.
/// Clamps so friction never reverses the sliding direction.
fn apply_friction(vel: &mut Vec2, normal: Vec2, mu: f32, normal_impulse: f32) {
    let tangent_vel = *vel - vel.dot(normal) * normal;
    let tangent_speed = tangent_vel.length();
    if tangent_speed < 1e-6 {
        return;
    }
    let tangent_dir = tangent_vel / tangent_speed;
    let friction_impulse = (mu * normal_impulse).min(tangent_speed);
    *vel -= tangent_dir * friction_impulse;
}

/// Remove the part of `vel` going into a surface whose outward normal is
/// `n`, reflecting it by `bounciness` unless the contact is resting.
/// Returns the normal impulse (velocity units) that was applied.
fn respond(vel: &mut Vec2, n: Vec2, mat: PhysicsMaterial) -> f32 {
    let vel_along_n = vel.dot(n);
    if vel_along_n >= 0.0 {
        return 0.0;
    }
    let normal_impulse = if -vel_along_n < REST_VELOCITY_THRESHOLD {
        -vel_along_n
    } else {
        -(1.0 + mat.bounciness) * vel_along_n
    };
    *vel += normal_impulse * n;
    apply_friction(vel, n, mat.friction, normal_impulse);
    normal_impulse
}

fn material_of(world: &World, entity: Entity) -> PhysicsMaterial {
    world
        .get::<&PhysicsMaterial>(entity)
        .map(|m| *m)
        .unwrap_or(DEFAULT_MATERIAL)
}

/// Detect box overlaps and apply impulse-based response.
///
/// Each dynamic body is pushed out along the contact normal and its
/// velocity into the surface is removed or reflected using the pair's
/// combined material. Returns every contact found this step.
pub fn collision_system(world: &mut World) -> Vec<CollisionEvent> {
    let entries: Vec<ColliderEntry> = world
        .query::<(&Position, &BoxCollider, Option<&Static>)>()
        .iter()
        .map(|(entity, (pos, collider, is_static))| ColliderEntry {
            entity,
            position: pos.0,
            half_extents: collider.half_extents,
            is_static: is_static.is_some(),
        })
        .collect();

    // Broadphase: brute force O(n²)
    let mut events = Vec::new();
    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            if entries[i].is_static && entries[j].is_static {
                continue;
            }
            if let Some(event) = test_pair(&entries[i], &entries[j]) {
                events.push(event);
            }
        }
    }

    // Response. Events are resolved in order; earlier pushes are not
    // re-tested within the same step.
    for event in &events {
        let a_static = world.get::<&Static>(event.entity_a).is_ok();
        let b_static = world.get::<&Static>(event.entity_b).is_ok();
        let mat = material_of(world, event.entity_a).combine(&material_of(world, event.entity_b));
        let n = event.contact_normal;
        let depth = event.penetration_depth;

        if a_static || b_static {
            // Outward normal of the static surface, pointing at the body.
            let (body, out) = if a_static {
                (event.entity_b, n)
            } else {
                (event.entity_a, -n)
            };
            if let Ok(mut pos) = world.get::<&mut Position>(body) {
                pos.0 += out * depth;
            }
            if let Ok(mut vel) = world.get::<&mut Velocity>(body) {
                respond(&mut vel.0, out, mat);
            }
        } else {
            // Both dynamic: split the push 50/50, equal and opposite impulse.
            // No friction between two dynamic bodies.
            if let Ok(mut pos) = world.get::<&mut Position>(event.entity_a) {
                pos.0 -= n * (depth * 0.5);
            }
            if let Ok(mut pos) = world.get::<&mut Position>(event.entity_b) {
                pos.0 += n * (depth * 0.5);
            }

            let vel_a = world.get::<&Velocity>(event.entity_a).map(|v| v.0).unwrap_or(Vec2::ZERO);
            let vel_b = world.get::<&Velocity>(event.entity_b).map(|v| v.0).unwrap_or(Vec2::ZERO);
            let mut relative = vel_a - vel_b;
            let impulse = respond(&mut relative, -n, mat) * 0.5;
            if impulse > 0.0 {
                if let Ok(mut vel) = world.get::<&mut Velocity>(event.entity_a) {
                    vel.0 -= impulse * n;
                }
                if let Ok(mut vel) = world.get::<&mut Velocity>(event.entity_b) {
                    vel.0 += impulse * n;
                }
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(world: &mut World, material: PhysicsMaterial) -> Entity {
        world.spawn((
            Position(Vec2::new(0.0, -0.5)),
            BoxCollider { half_extents: Vec2::new(10.0, 0.5) },
            Static,
            material,
        ))
    }

    fn body(world: &mut World, pos: Vec2, vel: Vec2, material: PhysicsMaterial) -> Entity {
        world.spawn((
            Position(pos),
            Velocity(vel),
            BoxCollider { half_extents: Vec2::splat(0.5) },
            material,
        ))
    }

    #[test]
    fn separated_boxes_do_not_collide() {
        let mut world = World::new();
        floor(&mut world, PhysicsMaterial::STONE);
        body(&mut world, Vec2::new(0.0, 2.0), Vec2::ZERO, PhysicsMaterial::STONE);
        assert!(collision_system(&mut world).is_empty());
    }

    #[test]
    fn resting_body_is_pushed_out_without_bounce() {
        let mut world = World::new();
        floor(&mut world, PhysicsMaterial::STONE);
        let b = body(&mut world, Vec2::new(0.0, 0.45), Vec2::new(0.0, -0.3), PhysicsMaterial::SLIPPERY);

        let events = collision_system(&mut world);
        assert_eq!(events.len(), 1);
        let pos = world.get::<&Position>(b).unwrap().0;
        assert!((pos.y - 0.5).abs() < 1e-5);
        assert_eq!(world.get::<&Velocity>(b).unwrap().0.y, 0.0);
    }

    #[test]
    fn slippery_body_keeps_sliding_speed() {
        let mut world = World::new();
        floor(&mut world, PhysicsMaterial::STONE);
        let b = body(&mut world, Vec2::new(0.0, 0.49), Vec2::new(3.0, -1.0), PhysicsMaterial::SLIPPERY);

        collision_system(&mut world);
        let v = world.get::<&Velocity>(b).unwrap().0;
        assert_eq!(v.x, 3.0);
    }

    #[test]
    fn bouncy_body_reflects_off_wall() {
        let mut world = World::new();
        world.spawn((
            Position(Vec2::new(1.0, 0.0)),
            BoxCollider { half_extents: Vec2::new(0.5, 10.0) },
            Static,
            PhysicsMaterial::STONE,
        ));
        let b = body(&mut world, Vec2::new(0.05, 0.0), Vec2::new(5.0, 0.0), PhysicsMaterial::BOUNCY);

        collision_system(&mut world);
        let v = world.get::<&Velocity>(b).unwrap().0;
        assert!((v.x + 4.0).abs() < 1e-5, "expected -4.0, got {}", v.x);
        assert!(world.get::<&Position>(b).unwrap().0.x <= 0.0 + 1e-6);
    }

    #[test]
    fn combine_uses_mean_friction_and_max_bounce() {
        let m = PhysicsMaterial::BOUNCY.combine(&PhysicsMaterial::STONE);
        assert_eq!(m.friction, 0.0);
        assert_eq!(m.bounciness, 0.8);
    }
}
