use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{
    AnimatorFlags, AppliedSurface, ControllerState, Facing, GroundCheck, JumpFsm, JumpPhase, Mass,
    PhysicsMaterial, Player, Position, Velocity,
};
use crate::config::{JumpConfig, GROUND_STICK_VELOCITY, JUMP_FLAG_DURATION};
use crate::error::{CollaboratorLog, MissingCollaborator};
use crate::input::ControlInput;
use crate::scheduler::{ScheduledAction, Scheduler};
use crate::systems::ground::is_grounded;
use crate::systems::surface::{apply_surface, select};

// ---------------------------------------------------------------------------
// Jump math
// ---------------------------------------------------------------------------

/// Launch strength for a given charge. Linear in charge, floored at
/// `min_jump_force`, reaching `max_jump_force` exactly at full charge.
pub fn jump_force(charge_time: f32, config: &JumpConfig) -> f32 {
    let power = (charge_time / config.max_charge_time()).clamp(0.0, 1.0);
    (power * config.max_jump_force()).max(config.min_jump_force())
}

/// Straight up with no input, otherwise the configured angle mirrored to
/// the input's side. Only the sign of the input matters.
pub fn jump_direction(horizontal: f32, config: &JumpConfig) -> Vec2 {
    let angle = config.jump_angle();
    if horizontal > 0.0 {
        angle
    } else if horizontal < 0.0 {
        Vec2::new(-angle.x, angle.y)
    } else {
        Vec2::Y
    }
}

/// Spend the accumulated charge on a jump. Returns the impulse to apply to
/// the body, once.
pub fn execute_jump(state: &mut ControllerState, config: &JumpConfig) -> Vec2 {
    let force = jump_force(state.charge_time, config);
    let direction = jump_direction(state.horizontal_input, config);

    log::info!(
        "[jump] charge {:.2}s → force {:.2} toward ({:.2}, {:.2})",
        state.charge_time,
        force,
        direction.x,
        direction.y
    );

    state.jumping = true;
    state.charging = false;
    state.charge_time = 0.0;
    direction * force
}

// ---------------------------------------------------------------------------
// Per-tick controller update
// ---------------------------------------------------------------------------

/// One logic tick of the charge-jump controller, with every input passed in.
///
/// - Grounded: holding jump charges (clamped to `max_charge_time`);
///   releasing while charging launches.
/// - Airborne: any charge is dropped on the spot, so nothing carries over
///   to the next landing.
///
/// Returns the launch impulse when a jump fired this tick.
pub fn update_controller(
    state: &mut ControllerState,
    fsm: &mut JumpFsm,
    input: &ControlInput,
    grounded: bool,
    config: &JumpConfig,
    dt: f32,
) -> Option<Vec2> {
    fsm.tick(dt);

    state.grounded = grounded;
    state.horizontal_input = input.horizontal;

    let mut impulse = None;
    if grounded {
        if input.jump_held {
            state.charging = true;
            state.charge_time = (state.charge_time + dt).clamp(0.0, config.max_charge_time());
        }
        if input.jump_released && state.charging {
            impulse = Some(execute_jump(state, config));
        }
    } else {
        state.charging = false;
        state.charge_time = 0.0;
    }

    let next = JumpPhase::of(state);
    let from = fsm.state();
    let held_for = fsm.elapsed();
    if fsm.go(next) {
        log::debug!("[player_state] {:?} → {:?} after {:.2}s", from, next, held_for);
    }

    impulse
}

/// Velocity the physics phase should force onto the body, if any.
///
/// Grounded and not launching: walk (or stand still while charging) with a
/// small constant downward velocity that keeps the body on the floor.
/// Otherwise `None`: in the air the body is left to gravity and bounces.
pub fn grounded_velocity(state: &ControllerState, config: &JumpConfig) -> Option<Vec2> {
    if !state.grounded || state.jumping {
        return None;
    }
    let x = if state.charging {
        0.0
    } else {
        state.horizontal_input * config.walk_speed()
    };
    Some(Vec2::new(x, GROUND_STICK_VELOCITY))
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Logic phase: sense ground, advance the controller, launch jumps.
///
/// Runs once per frame, before any physics step of that frame. The jump
/// impulse goes straight into the body's velocity, and a jump-flag clear is
/// scheduled on game time.
pub fn player_logic_system(
    world: &mut World,
    input: &ControlInput,
    scheduler: &mut Scheduler,
    missing: &mut CollaboratorLog,
    dt: f32,
) {
    // Sensor queries borrow the whole world; run them before taking the
    // mutable per-player borrows.
    let probes: Vec<(Entity, Vec2, GroundCheck)> = world
        .query::<(&Position, &GroundCheck)>()
        .with::<&Player>()
        .iter()
        .map(|(e, (pos, check))| (e, pos.0 + check.offset, *check))
        .collect();
    let sensed: Vec<(Entity, bool)> = probes
        .into_iter()
        .map(|(e, center, check)| (e, is_grounded(world, center, check.radius, check.mask)))
        .collect();

    for (entity, grounded) in sensed {
        let Ok((state, fsm, config, body, mass, facing, flags)) = world.query_one_mut::<(
            &mut ControllerState,
            &mut JumpFsm,
            &JumpConfig,
            Option<&mut Velocity>,
            Option<&Mass>,
            Option<&mut Facing>,
            Option<&mut AnimatorFlags>,
        )>(entity) else {
            continue;
        };

        let Some(vel) = body else {
            missing.report(MissingCollaborator::Body, Some(entity));
            continue;
        };

        if let Some(impulse) = update_controller(state, fsm, input, grounded, config, dt) {
            let mass = mass.map_or(1.0, |m| m.0);
            vel.0 += impulse / mass;
            scheduler.reschedule(entity, JUMP_FLAG_DURATION, ScheduledAction::ClearJumpFlag);
        }

        if let Some(facing) = facing {
            *facing = facing.from_input(state.horizontal_input);
        }
        if let Some(flags) = flags {
            *flags = AnimatorFlags {
                is_jumping: state.jumping,
                is_charging: state.charging,
            };
        }
    }
}

/// Apply actions the scheduler reports as due. Actions for entities that
/// no longer exist (or lost their controller) are dropped.
pub fn scheduled_action_system(world: &mut World, fired: &[(Entity, ScheduledAction)]) {
    for &(entity, action) in fired {
        match action {
            ScheduledAction::ClearJumpFlag => {
                if let Ok(mut state) = world.get::<&mut ControllerState>(entity) {
                    state.jumping = false;
                } else {
                    log::trace!("[scheduler] {:?} gone, dropping {:?}", entity, action);
                }
            }
        }
    }
}

/// Physics phase, once per fixed step before integration: swap the
/// collider material if needed and force grounded velocity.
pub fn player_physics_system(world: &mut World) {
    for (_entity, (state, config, vel, material, applied)) in world.query_mut::<(
        &ControllerState,
        &JumpConfig,
        &mut Velocity,
        &mut PhysicsMaterial,
        &mut AppliedSurface,
    )>() {
        apply_surface(select(state.grounded, state.jumping), material, applied);

        if let Some(v) = grounded_velocity(state, config) {
            vel.0 = v;
        }
    }
}
