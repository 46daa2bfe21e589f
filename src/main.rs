mod app;
mod engine;
mod renderer;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use app::GameApp;
use chargejump::{ControlInput, GameConfig, Simulation};
use engine::window::GameWindow;

const HEADLESS_DT: f32 = 1.0 / 60.0;

#[derive(Parser)]
#[command(name = "chargejump", about = "Charge-jump platformer demo")]
struct Args {
    /// TOML config file. Built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Run this many 60 Hz frames of a scripted climb without a window,
    /// then log the final state.
    #[arg(long)]
    headless_frames: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let sim = Simulation::new(&config).context("invalid configuration")?;

    if let Some(frames) = args.headless_frames {
        run_headless(sim, frames);
        return Ok(());
    }

    let sdl = sdl2::init().map_err(|e| anyhow!("failed to init SDL2: {e}"))?;
    let window = GameWindow::new(&sdl, "Charge Jump", 1280, 720)?;
    let mut app = GameApp::new(sim, &window)?;
    app.run(&sdl, &window)
}

/// Walk right, charge, release, wait to land. Repeats every two seconds.
fn scripted_input(frame: u32) -> ControlInput {
    match frame % 120 {
        0..=19 => ControlInput::walk(1.0),
        20..=59 => ControlInput::charge(1.0),
        60 => ControlInput::release(1.0),
        _ => ControlInput::idle(),
    }
}

fn run_headless(mut sim: Simulation, frames: u32) {
    log::info!("[headless] running {frames} frames");
    for frame in 0..frames {
        sim.step(&scripted_input(frame), HEADLESS_DT);
    }
    log::info!(
        "[headless] t={:.3}s pos={:?} vel={:?} phase={:?} camera={:?}",
        sim.time(),
        sim.player_position(),
        sim.player_velocity(),
        sim.player_phase(),
        sim.camera().position(),
    );
}
