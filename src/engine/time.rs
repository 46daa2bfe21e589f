use std::time::Instant;

/// Longest frame fed to the simulation. A stall (window drag, breakpoint)
/// would otherwise run dozens of physics steps in one go.
const MAX_FRAME_DT: f32 = 0.25;

pub struct FrameTimer {
    last: Instant,
    pub dt: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            dt: 0.0,
        }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        let raw = now.duration_since(self.last).as_secs_f32();
        if raw > MAX_FRAME_DT {
            log::debug!("[timer] long frame {raw:.3}s clamped");
        }
        self.dt = raw.min(MAX_FRAME_DT);
        self.last = now;
    }
}
