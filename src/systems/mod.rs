mod collision;
mod ground;
mod physics;
mod player;
mod surface;
mod transform;

pub use collision::collision_system;
pub use ground::is_grounded;
pub use physics::{physics_step, GRAVITY, PHYSICS_DT};
pub use player::{
    execute_jump, grounded_velocity, jump_direction, jump_force, player_logic_system,
    player_physics_system, scheduled_action_system, update_controller,
};
pub use surface::{apply_surface, select};
pub use transform::interpolation_system;
