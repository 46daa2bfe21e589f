use glam::Vec2;

use crate::components::PhysicsMaterial;
use crate::fsm::StateMachine;

/// Marker: this entity is the controlled character.
pub struct Player;

/// Per-character controller state. Written once per logic tick by
/// `player_logic_system` (and by the scheduled jump-flag clear); nothing else
/// mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerState {
    pub grounded: bool,
    /// Jump held while grounded; movement is frozen while this is set.
    pub charging: bool,
    /// Set on launch, cleared by a scheduled event a short time later. Keeps
    /// the bouncy material on through the first frames of the jump.
    pub jumping: bool,
    /// Seconds of charge accumulated, in `[0, max_charge_time]`.
    pub charge_time: f32,
    /// Raw horizontal axis in `[-1, 1]`.
    pub horizontal_input: f32,
}

// ---------------------------------------------------------------------------
// Jump state machine
// ---------------------------------------------------------------------------

/// Coarse phase of the charge-jump controller.
///
/// Derived from [`ControllerState`] after each logic tick; transition rules
/// live in `systems/player.rs` next to the input and sensor context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    GroundedIdle,
    GroundedCharging,
    /// Off the ground, or inside the post-launch window.
    Airborne,
}

impl JumpPhase {
    pub fn of(state: &ControllerState) -> Self {
        if !state.grounded || state.jumping {
            Self::Airborne
        } else if state.charging {
            Self::GroundedCharging
        } else {
            Self::GroundedIdle
        }
    }
}

/// FSM component attached to the player entity.
pub type JumpFsm = StateMachine<JumpPhase>;

// ---------------------------------------------------------------------------
// Sensors and presentation
// ---------------------------------------------------------------------------

/// Circle probe used by the ground sensor, relative to the body center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundCheck {
    pub offset: Vec2,
    pub radius: f32,
    pub mask: u32,
}

/// Which way the sprite looks. Only the sign of the input matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Zero input keeps the current facing.
    pub fn from_input(self, horizontal: f32) -> Self {
        if horizontal > 0.0 {
            Facing::Right
        } else if horizontal < 0.0 {
            Facing::Left
        } else {
            self
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Flags published for the animator every logic tick. Produced here, never
/// read back by the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimatorFlags {
    pub is_jumping: bool,
    pub is_charging: bool,
}

// ---------------------------------------------------------------------------
// Surface material selection
// ---------------------------------------------------------------------------

/// Which of the two character materials should be on the collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialSelection {
    Slippery,
    Bouncy,
}

impl MaterialSelection {
    pub fn material(self) -> PhysicsMaterial {
        match self {
            MaterialSelection::Slippery => PhysicsMaterial::SLIPPERY,
            MaterialSelection::Bouncy => PhysicsMaterial::BOUNCY,
        }
    }
}

/// Last selection written to the collider, and how many writes happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedSurface {
    pub current: Option<MaterialSelection>,
    pub writes: u32,
}
