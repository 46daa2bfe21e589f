//! Charge-jump platformer controller.
//!
//! Hold jump while grounded to charge, release to launch. The jump's force
//! scales with how long it was charged, its direction follows the horizontal
//! input. While standing the collider uses a frictionless material; while
//! airborne or mid-jump it bounces off walls. A damped camera follows the
//! character up the tower.
//!
//! [`Simulation`] runs the whole thing without a window. The `chargejump`
//! binary wraps it in an SDL2/OpenGL demo.

pub mod camera;
pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod input;
pub mod scene;
pub mod scheduler;
pub mod simulation;
pub mod systems;

pub use config::{CameraConfig, ConfigError, GameConfig, JumpConfig};
pub use input::{ControlInput, InputSource};
pub use simulation::Simulation;
