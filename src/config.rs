//! Tunables for the player controller and the follow camera.
//!
//! [`GameConfig`] is the raw, serde-loaded form (every key optional, falling
//! back to the defaults below). It is validated once at startup into the
//! immutable [`JumpConfig`], [`GroundCheck`] and [`CameraConfig`] values the
//! simulation runs on. Nothing here is consulted or re-validated mid-tick.

use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3};
use serde::Deserialize;
use thiserror::Error;

use crate::components::{GroundCheck, LAYER_GROUND};

/// Floor applied to every jump, including a release with zero charge.
pub const MIN_JUMP_FORCE: f32 = 2.0;

/// Vertical velocity held while grounded so the body stays pressed to the floor.
pub const GROUND_STICK_VELOCITY: f32 = -1.0;

/// Game time after launch before the jumping flag is cleared again.
pub const JUMP_FLAG_DURATION: f32 = 0.1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("max_charge_time must be greater than zero (got {0})")]
    NonPositiveChargeTime(f32),
    #[error("max_jump_force must be at least {min} (got {value})")]
    JumpForceBelowFloor { value: f32, min: f32 },
    #[error("jump_angle must have non-zero length (got [{0}, {1}])")]
    ZeroJumpAngle(f32, f32),
    #[error("ground_check_radius must not be negative (got {0})")]
    NegativeRadius(f32),
    #[error("smooth_time must not be negative (got {0})")]
    NegativeSmoothTime(f32),
    #[error("mass must be greater than zero (got {0})")]
    NonPositiveMass(f32),
    #[error("{field} must be finite (got {value})")]
    NonFinite { field: &'static str, value: f32 },
}

fn finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

// ---------------------------------------------------------------------------
// Raw (file) form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub walk_speed: f32,
    pub max_jump_force: f32,
    /// Seconds of holding jump needed for a full-strength launch.
    pub max_charge_time: f32,
    /// Launch direction for a rightward jump; mirrored for leftward jumps.
    pub jump_angle: [f32; 2],
    pub ground_check_radius: f32,
    /// Sensor center relative to the body center (feet).
    pub ground_check_offset: [f32; 2],
    pub ground_layer_mask: u32,
    pub mass: f32,
    pub gravity_scale: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            walk_speed: 3.0,
            max_jump_force: 12.0,
            max_charge_time: 1.0,
            jump_angle: [0.5, 1.0],
            ground_check_radius: 0.2,
            ground_check_offset: [0.0, -0.5],
            ground_layer_mask: LAYER_GROUND,
            mass: 1.0,
            gravity_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Approximate seconds to reach the goal. 0 snaps instantly.
    pub smooth_time: f32,
    pub offset: [f32; 3],
    /// Tower framing: the camera only ever moves vertically.
    pub lock_x_axis: bool,
    /// World units visible from the bottom to the top of the screen.
    pub view_height: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            smooth_time: 0.2,
            offset: [0.0, 2.0, -10.0],
            lock_x_axis: true,
            view_height: 14.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerSettings,
    pub camera: CameraSettings,
}

impl GameConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse TOML text. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn jump_config(&self) -> Result<JumpConfig, ConfigError> {
        let p = &self.player;
        JumpConfig::new(
            p.walk_speed,
            p.max_jump_force,
            p.max_charge_time,
            Vec2::from_array(p.jump_angle),
        )
    }

    pub fn ground_check(&self) -> Result<GroundCheck, ConfigError> {
        let p = &self.player;
        let radius = finite("ground_check_radius", p.ground_check_radius)?;
        if radius < 0.0 {
            return Err(ConfigError::NegativeRadius(radius));
        }
        let offset = Vec2::from_array(p.ground_check_offset);
        finite("ground_check_offset.x", offset.x)?;
        finite("ground_check_offset.y", offset.y)?;
        Ok(GroundCheck {
            offset,
            radius,
            mask: p.ground_layer_mask,
        })
    }

    pub fn camera_config(&self) -> Result<CameraConfig, ConfigError> {
        let c = &self.camera;
        let smooth_time = finite("smooth_time", c.smooth_time)?;
        if smooth_time < 0.0 {
            return Err(ConfigError::NegativeSmoothTime(smooth_time));
        }
        let offset = Vec3::from_array(c.offset);
        for (field, v) in [("offset.x", offset.x), ("offset.y", offset.y), ("offset.z", offset.z)] {
            finite(field, v)?;
        }
        Ok(CameraConfig {
            smooth_time,
            offset,
            lock_x_axis: c.lock_x_axis,
            view_height: finite("view_height", c.view_height)?.max(1.0),
        })
    }

    /// Body mass and gravity scale, checked.
    pub fn body_params(&self) -> Result<(f32, f32), ConfigError> {
        let mass = finite("mass", self.player.mass)?;
        if mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(mass));
        }
        Ok((mass, finite("gravity_scale", self.player.gravity_scale)?))
    }

    /// Run every check without keeping the results.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jump_config()?;
        self.ground_check()?;
        self.camera_config()?;
        self.body_params()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Validated forms
// ---------------------------------------------------------------------------

/// Immutable jump tuning, attached to the player entity at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpConfig {
    walk_speed: f32,
    max_jump_force: f32,
    max_charge_time: f32,
    jump_angle: Vec2,
}

impl JumpConfig {
    /// `jump_angle` is normalized here; it only has to be non-zero.
    pub fn new(
        walk_speed: f32,
        max_jump_force: f32,
        max_charge_time: f32,
        jump_angle: Vec2,
    ) -> Result<Self, ConfigError> {
        let walk_speed = finite("walk_speed", walk_speed)?;
        let max_jump_force = finite("max_jump_force", max_jump_force)?;
        if max_jump_force < MIN_JUMP_FORCE {
            return Err(ConfigError::JumpForceBelowFloor {
                value: max_jump_force,
                min: MIN_JUMP_FORCE,
            });
        }
        let max_charge_time = finite("max_charge_time", max_charge_time)?;
        if max_charge_time <= 0.0 {
            return Err(ConfigError::NonPositiveChargeTime(max_charge_time));
        }
        let jump_angle = jump_angle
            .try_normalize()
            .ok_or(ConfigError::ZeroJumpAngle(jump_angle.x, jump_angle.y))?;
        Ok(Self {
            walk_speed,
            max_jump_force,
            max_charge_time,
            jump_angle,
        })
    }

    pub fn walk_speed(&self) -> f32 {
        self.walk_speed
    }

    pub fn max_jump_force(&self) -> f32 {
        self.max_jump_force
    }

    pub fn max_charge_time(&self) -> f32 {
        self.max_charge_time
    }

    /// Unit launch direction for a rightward jump.
    pub fn jump_angle(&self) -> Vec2 {
        self.jump_angle
    }

    pub fn min_jump_force(&self) -> f32 {
        MIN_JUMP_FORCE
    }
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            walk_speed: 3.0,
            max_jump_force: 12.0,
            max_charge_time: 1.0,
            jump_angle: Vec2::new(0.5, 1.0).normalize(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub smooth_time: f32,
    pub offset: Vec3,
    pub lock_x_axis: bool,
    pub view_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            smooth_time: 0.2,
            offset: Vec3::new(0.0, 2.0, -10.0),
            lock_x_axis: true,
            view_height: 14.0,
        }
    }
}
