use crate::components::{AppliedSurface, MaterialSelection, PhysicsMaterial};

/// Slippery iff standing on the ground outside the post-launch window.
pub fn select(grounded: bool, jumping: bool) -> MaterialSelection {
    if grounded && !jumping {
        MaterialSelection::Slippery
    } else {
        MaterialSelection::Bouncy
    }
}

/// Put `selection` on the collider if it is not already there.
/// Returns whether the collider was written.
pub fn apply_surface(
    selection: MaterialSelection,
    collider: &mut PhysicsMaterial,
    applied: &mut AppliedSurface,
) -> bool {
    if applied.current == Some(selection) {
        return false;
    }
    *collider = selection.material();
    applied.current = Some(selection);
    applied.writes += 1;
    log::trace!("[surface] → {:?}", selection);
    true
}
