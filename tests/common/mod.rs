#![allow(dead_code)]

use chargejump::{ControlInput, GameConfig, Simulation};

pub const DT: f32 = 1.0 / 60.0;

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

pub fn sim() -> Simulation {
    sim_with(&GameConfig::default())
}

pub fn sim_with(config: &GameConfig) -> Simulation {
    Simulation::new(config).expect("valid config")
}

/// Let the player land and stand still for a few frames.
pub fn settle(sim: &mut Simulation) {
    sim.run(&ControlInput::idle(), 10, DT);
}

/// Hold jump for `frames` frames, then release on the next one.
pub fn charge_and_release(sim: &mut Simulation, frames: usize, horizontal: f32) {
    sim.run(&ControlInput::charge(horizontal), frames, DT);
    sim.step(&ControlInput::release(horizontal), DT);
}
