use glam::Vec2;
use hecs::World;

use crate::components::{BoxCollider, CollisionLayer, Position};

/// Does a circle at `center` overlap any collider on a layer in `layer_mask`?
///
/// Pure query. A zero, negative or non-finite radius never overlaps
/// anything. Touching counts as overlap.
pub fn is_grounded(world: &World, center: Vec2, radius: f32, layer_mask: u32) -> bool {
    if !(radius.is_finite() && radius > 0.0) || !center.is_finite() {
        return false;
    }
    let radius_sq = radius * radius;

    world
        .query::<(&Position, &BoxCollider, &CollisionLayer)>()
        .iter()
        .filter(|(_, (_, _, layer))| layer.matches(layer_mask))
        .any(|(_, (pos, collider, _))| {
            let min = pos.0 - collider.half_extents;
            let max = pos.0 + collider.half_extents;
            let closest = center.clamp(min, max);
            closest.distance_squared(center) <= radius_sq
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{LAYER_GROUND, LAYER_PLAYER};

    fn world_with_floor() -> World {
        let mut world = World::new();
        // Top surface at y = 0.
        world.spawn((
            Position(Vec2::new(0.0, -0.5)),
            BoxCollider { half_extents: Vec2::new(5.0, 0.5) },
            CollisionLayer(LAYER_GROUND),
        ));
        world
    }

    #[test]
    fn detects_floor_within_radius() {
        let world = world_with_floor();
        assert!(is_grounded(&world, Vec2::new(0.0, 0.1), 0.2, LAYER_GROUND));
        assert!(!is_grounded(&world, Vec2::new(0.0, 0.3), 0.2, LAYER_GROUND));
    }

    #[test]
    fn reaches_over_edges() {
        let world = world_with_floor();
        // Just past the right edge, still within the radius of the corner.
        assert!(is_grounded(&world, Vec2::new(5.1, 0.1), 0.2, LAYER_GROUND));
        assert!(!is_grounded(&world, Vec2::new(5.3, 0.0), 0.2, LAYER_GROUND));
    }

    #[test]
    fn ignores_other_layers() {
        let world = world_with_floor();
        assert!(!is_grounded(&world, Vec2::new(0.0, 0.1), 0.2, LAYER_PLAYER));
    }

    #[test]
    fn degenerate_radius_is_never_grounded() {
        let world = world_with_floor();
        let inside = Vec2::new(0.0, -0.5);
        assert!(!is_grounded(&world, inside, 0.0, LAYER_GROUND));
        assert!(!is_grounded(&world, inside, -1.0, LAYER_GROUND));
        assert!(!is_grounded(&world, inside, f32::NAN, LAYER_GROUND));
    }
}
