use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;
use std::collections::HashSet;

use chargejump::InputSource;

const LEFT: [Scancode; 2] = [Scancode::A, Scancode::Left];
const RIGHT: [Scancode; 2] = [Scancode::D, Scancode::Right];
const JUMP: [Scancode; 2] = [Scancode::Space, Scancode::W];

/// Keyboard state for one frame.
///
/// A key pressed and released within the same frame stays held for that
/// frame and reports its release on the next, so a quick tap still charges
/// for one tick and then launches.
pub struct InputState {
    pub keys: HashSet<Scancode>,
    pressed: HashSet<Scancode>,
    released: HashSet<Scancode>,
    tapped: HashSet<Scancode>,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            pressed: HashSet::new(),
            released: HashSet::new(),
            tapped: HashSet::new(),
            quit: false,
        }
    }

    pub fn update(&mut self, event_pump: &mut EventPump) {
        self.begin_frame();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => self.press(sc),
                Event::KeyUp {
                    scancode: Some(sc), ..
                } => self.release(sc),
                _ => {}
            }
        }
    }

    /// Settle last frame's taps: they go up now.
    fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released = std::mem::take(&mut self.tapped);
        for sc in &self.released {
            self.keys.remove(sc);
        }
    }

    fn press(&mut self, sc: Scancode) {
        if self.keys.insert(sc) {
            self.pressed.insert(sc);
        }
    }

    fn release(&mut self, sc: Scancode) {
        if self.pressed.contains(&sc) {
            self.tapped.insert(sc);
        } else if self.keys.remove(&sc) {
            self.released.insert(sc);
        }
    }

    pub fn is_key_held(&self, sc: Scancode) -> bool {
        self.keys.contains(&sc)
    }

    fn any_held(&self, keys: &[Scancode]) -> bool {
        keys.iter().any(|k| self.is_key_held(*k))
    }
}

impl InputSource for InputState {
    fn horizontal_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.any_held(&LEFT) {
            axis -= 1.0;
        }
        if self.any_held(&RIGHT) {
            axis += 1.0;
        }
        axis
    }

    fn jump_held(&self) -> bool {
        self.any_held(&JUMP)
    }

    fn jump_released_this_tick(&self) -> bool {
        // Another jump key still down means the button as a whole is held.
        !self.jump_held() && JUMP.iter().any(|k| self.released.contains(k))
    }
}
