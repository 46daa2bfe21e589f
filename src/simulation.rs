//! Headless frame driver.
//!
//! Each call to [`Simulation::step`] is one rendered frame:
//!
//! 1. **Logic phase** (frame rate): due scheduled actions, ground sensing,
//!    jump-charge state machine, jump impulses.
//! 2. **Physics phase** (fixed [`PHYSICS_DT`], zero or more times): material
//!    swap and grounded velocity, integration, collision response.
//! 3. **Camera**: one smoothing step toward the settled, interpolated
//!    player position.
//!
//! Nothing here touches a window, so tests and the `--headless-frames` mode
//! drive the exact code path the demo uses.

use glam::Vec2;
use hecs::{Entity, World};

use crate::camera::CameraFollow;
use crate::components::{
    AnimatorFlags, ControllerState, JumpFsm, JumpPhase, PhysicsMaterial, Position, RenderPosition,
    Velocity,
};
use crate::config::{CameraConfig, ConfigError, GameConfig};
use crate::error::{CollaboratorLog, MissingCollaborator};
use crate::input::ControlInput;
use crate::scene::{load_tower_scene, PlayerSpawn};
use crate::scheduler::Scheduler;
use crate::systems::{
    collision_system, interpolation_system, physics_step, player_logic_system,
    player_physics_system, scheduled_action_system, PHYSICS_DT,
};

pub struct Simulation {
    world: World,
    player: Entity,
    camera: CameraFollow,
    scheduler: Scheduler,
    missing: CollaboratorLog,
    physics_accum: f32,
    alpha: f32,
    frames: u64,
}

impl Simulation {
    /// Validate `config` and build the tower scene around it.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let spawn = PlayerSpawn::from_config(config)?;
        let camera = config.camera_config()?;
        let mut world = World::new();
        let player = load_tower_scene(&mut world, &spawn);
        Ok(Self::from_world(world, player, camera))
    }

    /// Drive an existing world. `player` is the camera's follow target.
    pub fn from_world(world: World, player: Entity, camera: CameraConfig) -> Self {
        let start = world
            .get::<&Position>(player)
            .map(|p| p.0)
            .unwrap_or(Vec2::ZERO);
        Self {
            world,
            player,
            camera: CameraFollow::looking_at(camera, start.extend(0.0)),
            scheduler: Scheduler::new(),
            missing: CollaboratorLog::new(),
            physics_accum: 0.0,
            alpha: 0.0,
            frames: 0,
        }
    }

    /// Run one frame of `frame_dt` seconds. Returns how many fixed physics
    /// steps ran.
    pub fn step(&mut self, input: &ControlInput, frame_dt: f32) -> usize {
        let dt = if frame_dt.is_finite() { frame_dt.max(0.0) } else { 0.0 };
        self.frames += 1;

        // Logic phase
        let fired = self.scheduler.advance(dt);
        scheduled_action_system(&mut self.world, &fired);
        player_logic_system(&mut self.world, input, &mut self.scheduler, &mut self.missing, dt);

        // Physics phase
        let mut physics_ticks = 0usize;
        self.physics_accum += dt;
        while self.physics_accum >= PHYSICS_DT {
            player_physics_system(&mut self.world);
            physics_step(&mut self.world);
            collision_system(&mut self.world);
            self.physics_accum -= PHYSICS_DT;
            physics_ticks += 1;
        }
        self.alpha = self.physics_accum / PHYSICS_DT;
        interpolation_system(&mut self.world, self.alpha);

        // Camera, strictly after physics. Uses the interpolated position so
        // it follows smoothly between fixed steps.
        let target = self
            .world
            .get::<&RenderPosition>(self.player)
            .map(|p| p.0.extend(0.0))
            .ok();
        if target.is_none() {
            self.missing
                .report(MissingCollaborator::CameraTarget, Some(self.player));
        }
        self.camera.update(target, dt);

        physics_ticks
    }

    /// Step `frames` frames with the same input.
    pub fn run(&mut self, input: &ControlInput, frames: usize, frame_dt: f32) {
        for _ in 0..frames {
            self.step(input, frame_dt);
        }
    }

    /// Remove a character and everything scheduled for it.
    pub fn despawn_character(&mut self, entity: Entity) -> bool {
        let cancelled = self.scheduler.cancel_entity(entity);
        if cancelled > 0 {
            log::debug!("[simulation] cancelled {cancelled} pending action(s) for {entity:?}");
        }
        self.world.despawn(entity).is_ok()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn camera(&self) -> &CameraFollow {
        &self.camera
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn collaborators(&self) -> &CollaboratorLog {
        &self.missing
    }

    /// Fraction of a physics step left in the accumulator after the last frame.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Game time elapsed, as seen by the scheduler.
    pub fn time(&self) -> f64 {
        self.scheduler.now()
    }

    pub fn player_state(&self) -> Option<ControllerState> {
        self.world.get::<&ControllerState>(self.player).ok().map(|s| *s)
    }

    pub fn player_phase(&self) -> Option<JumpPhase> {
        self.world.get::<&JumpFsm>(self.player).ok().map(|f| f.state())
    }

    pub fn player_position(&self) -> Option<Vec2> {
        self.world.get::<&Position>(self.player).ok().map(|p| p.0)
    }

    pub fn player_velocity(&self) -> Option<Vec2> {
        self.world.get::<&Velocity>(self.player).ok().map(|v| v.0)
    }

    pub fn player_material(&self) -> Option<PhysicsMaterial> {
        self.world.get::<&PhysicsMaterial>(self.player).ok().map(|m| *m)
    }

    pub fn animator_flags(&self) -> Option<AnimatorFlags> {
        self.world.get::<&AnimatorFlags>(self.player).ok().map(|f| *f)
    }
}
