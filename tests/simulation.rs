mod common;

use chargejump::error::MissingCollaborator;
use chargejump::scheduler::ScheduledAction;
use chargejump::systems::PHYSICS_DT;
use chargejump::ControlInput;
use common::{charge_and_release, settle, sim, DT};

fn script(frame: usize) -> ControlInput {
    match frame % 90 {
        0..=14 => ControlInput::walk(-1.0),
        15..=44 => ControlInput::charge(1.0),
        45 => ControlInput::release(1.0),
        _ => ControlInput::walk(0.5),
    }
}

#[test]
fn same_inputs_give_identical_runs() {
    let mut a = sim();
    let mut b = sim();
    // Uneven frame times exercise the accumulator.
    let dts = [DT, 0.02, 0.011, 0.033, DT * 2.0];

    for frame in 0..600 {
        let dt = dts[frame % dts.len()];
        a.step(&script(frame), dt);
        b.step(&script(frame), dt);
        assert_eq!(a.player_position(), b.player_position(), "frame {frame}");
        assert_eq!(a.player_velocity(), b.player_velocity(), "frame {frame}");
        assert_eq!(a.camera().position(), b.camera().position(), "frame {frame}");
    }
}

#[test]
fn physics_runs_at_a_fixed_rate() {
    let mut sim = sim();
    assert_eq!(sim.step(&ControlInput::idle(), PHYSICS_DT * 0.5), 0);
    assert!(sim.alpha() > 0.4 && sim.alpha() < 0.6);
    assert_eq!(sim.step(&ControlInput::idle(), PHYSICS_DT * 0.5), 1);
    assert_eq!(sim.step(&ControlInput::idle(), PHYSICS_DT * 3.5), 3);
}

#[test]
fn bad_frame_times_are_ignored() {
    let mut sim = sim();
    settle(&mut sim);
    let before = sim.player_position();
    assert_eq!(sim.step(&ControlInput::walk(1.0), f32::NAN), 0);
    assert_eq!(sim.step(&ControlInput::walk(1.0), -1.0), 0);
    assert_eq!(sim.player_position(), before);
}

#[test]
fn despawn_cancels_the_pending_flag_clear() {
    let mut sim = sim();
    settle(&mut sim);
    charge_and_release(&mut sim, 10, 0.0);

    let player = sim.player();
    assert!(sim.scheduler().is_pending(player, ScheduledAction::ClearJumpFlag));

    assert!(sim.despawn_character(player));
    assert_eq!(sim.scheduler().pending_count(), 0);
    assert!(!sim.despawn_character(player));

    // Keeps running past the old deadline with nothing to follow.
    let camera = sim.camera().position();
    sim.run(&ControlInput::idle(), 30, DT);
    assert!(sim.player_state().is_none());
    assert_eq!(sim.camera().position(), camera);
    assert!(sim.collaborators().has_reported(MissingCollaborator::CameraTarget));
}

#[test]
fn character_without_a_body_is_skipped() {
    let mut sim = sim();
    settle(&mut sim);
    let player = sim.player();
    sim.world_mut()
        .remove_one::<chargejump::components::Velocity>(player)
        .unwrap();

    let before = sim.player_state();
    sim.run(&ControlInput::charge(0.0), 5, DT);
    assert_eq!(sim.player_state(), before);
    assert!(sim.collaborators().has_reported(MissingCollaborator::Body));
}

#[test]
fn a_second_jump_replaces_the_pending_clear() {
    let mut sim = sim();
    settle(&mut sim);
    charge_and_release(&mut sim, 1, 0.0);
    // Still touching the floor: charge and launch again right away.
    charge_and_release(&mut sim, 1, 0.0);
    assert_eq!(sim.scheduler().pending_count(), 1);
}

#[test]
fn clear_for_an_entity_removed_behind_the_scheduler_is_dropped() {
    let mut sim = sim();
    settle(&mut sim);
    charge_and_release(&mut sim, 10, 0.0);

    let player = sim.player();
    assert!(sim.scheduler().is_pending(player, ScheduledAction::ClearJumpFlag));
    sim.world_mut().despawn(player).unwrap();

    // Past the 0.1 s deadline: the action fires, finds nothing, and is gone.
    sim.run(&ControlInput::idle(), 12, DT);
    assert_eq!(sim.scheduler().pending_count(), 0);
    assert!(sim.player_state().is_none());

    // A new entity never picks up the stale action.
    let newcomer = sim
        .world_mut()
        .spawn((chargejump::components::ControllerState {
            jumping: true,
            ..Default::default()
        },));
    sim.run(&ControlInput::idle(), 12, DT);
    let state = *sim
        .world()
        .get::<&chargejump::components::ControllerState>(newcomer)
        .unwrap();
    assert!(state.jumping);
}
