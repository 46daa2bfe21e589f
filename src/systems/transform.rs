use hecs::World;

use crate::components::{Position, PreviousPosition, RenderPosition};

/// Write the position each entity should be drawn at this frame.
///
/// `alpha` is the render interpolation factor (0..1): how far into the
/// current physics step this frame falls. Bodies with a `PreviousPosition`
/// are lerped between their last two physics positions, removing
/// fixed-timestep jitter. Everything else is drawn where it is.
pub fn interpolation_system(world: &mut World, alpha: f32) {
    let alpha = alpha.clamp(0.0, 1.0);
    for (_entity, (pos, prev, render)) in
        world.query_mut::<(&Position, Option<&PreviousPosition>, &mut RenderPosition)>()
    {
        render.0 = match prev {
            Some(prev) => prev.0.lerp(pos.0, alpha),
            None => pos.0,
        };
    }
}
