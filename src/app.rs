use anyhow::{anyhow, Result};
use sdl2::keyboard::Scancode;
use sdl2::Sdl;

use crate::engine::input::InputState;
use crate::engine::time::FrameTimer;
use crate::engine::window::GameWindow;
use crate::renderer::Renderer;
use chargejump::{ControlInput, Simulation};

pub struct GameApp {
    sim: Simulation,
    renderer: Renderer,
    paused: bool,
}

impl GameApp {
    pub fn new(sim: Simulation, window: &GameWindow) -> Result<Self> {
        let renderer = Renderer::init()?;
        let (w, h) = window.size();
        renderer.resize(w, h);
        Ok(Self {
            sim,
            renderer,
            paused: false,
        })
    }

    pub fn run(&mut self, sdl: &Sdl, window: &GameWindow) -> Result<()> {
        let mut event_pump = sdl
            .event_pump()
            .map_err(|e| anyhow!("failed to get event pump: {e}"))?;
        let mut input = InputState::new();
        let mut timer = FrameTimer::new();
        let mut pause_held = false;
        let mut size = window.size();

        loop {
            timer.tick();
            input.update(&mut event_pump);

            if input.quit {
                break;
            }

            // P toggles pause on the press edge.
            let pause_down = input.is_key_held(Scancode::P);
            if pause_down && !pause_held {
                self.paused = !self.paused;
                log::info!("[app] {}", if self.paused { "paused" } else { "resumed" });
            }
            pause_held = pause_down;

            if !self.paused {
                self.sim.step(&ControlInput::poll(&input), timer.dt);
            }

            let current = window.size();
            if current != size {
                size = current;
                self.renderer.resize(size.0, size.1);
            }

            self.render(window);
            window.swap();
        }

        log::info!("[app] exit after {} frames", self.sim.frames());
        Ok(())
    }

    fn render(&mut self, window: &GameWindow) {
        let camera = self.sim.camera();
        let view = camera.view_matrix();
        let proj = camera.projection_matrix(window.aspect_ratio());
        self.renderer.draw_scene(self.sim.world(), &view, &proj);
    }
}
