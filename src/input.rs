//! Raw control input, polled once per logic tick.

/// Anything that can answer the three questions the controller asks each
/// tick. The demo backs this with SDL2 keyboard state; tests use
/// [`ControlInput`] directly.
pub trait InputSource {
    /// Horizontal axis in `[-1, 1]`. Values outside are clamped by [`ControlInput::poll`].
    fn horizontal_axis(&self) -> f32;
    fn jump_held(&self) -> bool;
    /// True only on the tick the jump button went up.
    fn jump_released_this_tick(&self) -> bool;
}

/// Snapshot of one tick's input, passed explicitly into the systems.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    pub horizontal: f32,
    pub jump_held: bool,
    pub jump_released: bool,
}

impl ControlInput {
    pub fn poll(source: &impl InputSource) -> Self {
        let axis = source.horizontal_axis();
        Self {
            horizontal: if axis.is_finite() { axis.clamp(-1.0, 1.0) } else { 0.0 },
            jump_held: source.jump_held(),
            jump_released: source.jump_released_this_tick(),
        }
    }

    pub fn idle() -> Self {
        Self::default()
    }

    pub fn walk(horizontal: f32) -> Self {
        Self { horizontal, ..Self::default() }
    }

    /// Jump held, with an optional direction.
    pub fn charge(horizontal: f32) -> Self {
        Self { horizontal, jump_held: true, jump_released: false }
    }

    /// Jump released this tick, with an optional direction.
    pub fn release(horizontal: f32) -> Self {
        Self { horizontal, jump_held: false, jump_released: true }
    }
}

impl InputSource for ControlInput {
    fn horizontal_axis(&self) -> f32 {
        self.horizontal
    }

    fn jump_held(&self) -> bool {
        self.jump_held
    }

    fn jump_released_this_tick(&self) -> bool {
        self.jump_released
    }
}
