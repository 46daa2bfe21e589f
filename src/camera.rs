use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Persistent filter memory. Never reset while the camera lives.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraFollowState {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Critically damped spring toward `target` (no overshoot).
///
/// `smooth_time` is roughly the time to reach the target; `velocity` is the
/// filter's memory and must be fed back on the next call. Returns the new
/// position and velocity.
///
/// - `smooth_time <= 0` snaps to the target and zeroes the velocity.
/// - `dt <= 0` changes nothing.
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: Vec3,
    smooth_time: f32,
    dt: f32,
) -> (Vec3, Vec3) {
    if !(dt > 0.0) {
        return (current, velocity);
    }
    if !(smooth_time > 0.0) {
        return (target, Vec3::ZERO);
    }

    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Padé-style approximation of exp(-x), accurate enough for any dt.
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (velocity + omega * change) * dt;
    let mut new_velocity = (velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Clamp if the step carried us past the target.
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        new_velocity = Vec3::ZERO;
    }

    (output, new_velocity)
}

/// One follow step with explicit filter state. `goal` is the target plus
/// offset; with `lock_x` its x is replaced by the camera's own. A missing
/// goal leaves position and velocity untouched.
pub fn follow_step(
    current: Vec3,
    velocity: Vec3,
    goal: Option<Vec3>,
    smooth_time: f32,
    dt: f32,
    lock_x: bool,
) -> (Vec3, Vec3) {
    let Some(mut goal) = goal else {
        return (current, velocity);
    };
    if lock_x {
        goal.x = current.x;
    }
    smooth_damp(current, goal, velocity, smooth_time, dt)
}

/// Follows a target with a fixed offset, smoothing on every frame.
///
/// With `lock_x_axis` the goal keeps the camera's own x, so the view only
/// ever travels vertically (tower framing).
pub struct CameraFollow {
    pub config: CameraConfig,
    pub state: CameraFollowState,
}

impl CameraFollow {
    pub fn new(config: CameraConfig, position: Vec3) -> Self {
        Self {
            config,
            state: CameraFollowState {
                position,
                velocity: Vec3::ZERO,
            },
        }
    }

    /// Start already framed on `target`.
    pub fn looking_at(config: CameraConfig, target: Vec3) -> Self {
        Self::new(config, target + config.offset)
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    /// Advance the filter by one frame. A missing target leaves the camera
    /// exactly where it is.
    pub fn update(&mut self, target: Option<Vec3>, dt: f32) -> Vec3 {
        let (position, velocity) = follow_step(
            self.state.position,
            self.state.velocity,
            target.map(|t| t + self.config.offset),
            self.config.smooth_time,
            dt,
            self.config.lock_x_axis,
        );
        self.state = CameraFollowState { position, velocity };
        position
    }

    /// 2D view: translate the world so the camera's xy is at the origin.
    /// Depth is left to the orthographic projection.
    pub fn view_matrix(&self) -> Mat4 {
        let p = self.state.position;
        Mat4::from_translation(Vec3::new(-p.x, -p.y, 0.0))
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let half_h = self.config.view_height * 0.5;
        let half_w = half_h * aspect;
        Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, -100.0, 100.0)
    }
}
