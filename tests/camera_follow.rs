mod common;

use chargejump::{ControlInput, GameConfig};
use common::{approx, settle, sim, sim_with, DT};

#[test]
fn locked_camera_never_moves_sideways() {
    let mut sim = sim();
    let start_x = sim.camera().position().x;

    sim.run(&ControlInput::walk(1.0), 90, DT);
    sim.run(&ControlInput::walk(-1.0), 30, DT);
    assert!(sim.player_position().unwrap().x > 1.0);
    assert_eq!(sim.camera().position().x, start_x);
}

#[test]
fn camera_settles_above_the_player() {
    let mut sim = sim();
    sim.run(&ControlInput::idle(), 300, DT);
    let player = sim.player_position().unwrap();
    let offset = GameConfig::default().camera.offset;
    assert!(approx(sim.camera().position().y, player.y + offset[1], 1e-2));
}

#[test]
fn camera_lags_a_jump_then_catches_up() {
    let mut sim = sim();
    settle(&mut sim);
    sim.run(&ControlInput::charge(0.0), 60, DT);
    sim.step(&ControlInput::release(0.0), DT);
    sim.run(&ControlInput::idle(), 20, DT);

    let player_y = sim.player_position().unwrap().y;
    let goal_y = player_y + 2.0;
    assert!(sim.camera().position().y < goal_y - 0.1);
}

#[test]
fn unlocked_camera_follows_horizontally() {
    let mut config = GameConfig::default();
    config.camera.lock_x_axis = false;
    let mut sim = sim_with(&config);

    sim.run(&ControlInput::walk(1.0), 60, DT);
    let cam_x = sim.camera().position().x;
    let player_x = sim.player_position().unwrap().x;
    assert!(cam_x > 0.5);
    assert!(cam_x < player_x);
}

#[test]
fn zero_smooth_time_snaps_every_frame() {
    let mut config = GameConfig::default();
    config.camera.smooth_time = 0.0;
    config.camera.lock_x_axis = false;
    let mut sim = sim_with(&config);

    for frame in 0..120 {
        let input = if frame < 60 { ControlInput::walk(1.0) } else { ControlInput::idle() };
        sim.step(&input, DT);
        let render = *sim
            .world()
            .get::<&chargejump::components::RenderPosition>(sim.player())
            .unwrap();
        let cam = sim.camera().position();
        assert_eq!(cam.x, render.0.x);
        assert_eq!(cam.y, render.0.y + 2.0);
    }
}
