pub mod mesh;
pub mod shader;

use glam::{Mat4, Vec2, Vec3};
use hecs::World;
use mesh::Mesh;
use shader::{ShaderError, ShaderProgram};

use chargejump::components::{AnimatorFlags, ControllerState, Facing, RenderPosition, Sprite};
use chargejump::JumpConfig;

const VERT_SRC: &str = include_str!("../../shaders/quad.vert");
const FRAG_SRC: &str = include_str!("../../shaders/quad.frag");

const CLEAR_COLOR: Vec3 = Vec3::new(0.1, 0.1, 0.15);
const CHARGE_COLOR: Vec3 = Vec3::new(1.0, 0.9, 0.3);
const AIRBORNE_COLOR: Vec3 = Vec3::new(0.3, 0.6, 1.0);
const MARKER_COLOR: Vec3 = Vec3::new(0.95, 0.95, 0.95);

pub struct Renderer {
    shader: ShaderProgram,
    quad: Mesh,
}

impl Renderer {
    pub fn init() -> Result<Self, ShaderError> {
        unsafe {
            gl::Disable(gl::DEPTH_TEST);
            gl::ClearColor(CLEAR_COLOR.x, CLEAR_COLOR.y, CLEAR_COLOR.z, 1.0);
        }

        let shader = ShaderProgram::from_sources(VERT_SRC, FRAG_SRC)?;
        Ok(Self {
            shader,
            quad: mesh::create_quad(),
        })
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    /// Draw every sprite, then the character overlays (charge tint and a
    /// facing marker) on top.
    pub fn draw_scene(&mut self, world: &World, view: &Mat4, proj: &Mat4) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        self.shader.bind();
        self.shader.set_mat4("u_view", view);
        self.shader.set_mat4("u_projection", proj);

        for (_entity, (pos, sprite, state, cfg, flags)) in world
            .query::<(
                &RenderPosition,
                &Sprite,
                Option<&ControllerState>,
                Option<&JumpConfig>,
                Option<&AnimatorFlags>,
            )>()
            .iter()
        {
            let color = match (state, cfg, flags) {
                (Some(state), Some(cfg), Some(flags)) => character_color(sprite.color, state, cfg, flags),
                _ => sprite.color,
            };
            self.draw_rect(pos.0, sprite.size, color);
        }

        for (_entity, (pos, sprite, facing)) in
            world.query::<(&RenderPosition, &Sprite, &Facing)>().iter()
        {
            let marker = Vec2::new(sprite.size.x * 0.25, sprite.size.y * 0.2);
            let at = pos.0 + Vec2::new(facing.sign() * sprite.size.x * 0.3, sprite.size.y * 0.25);
            self.draw_rect(at, marker, MARKER_COLOR);
        }
    }

    fn draw_rect(&mut self, center: Vec2, size: Vec2, color: Vec3) {
        let model = Mat4::from_translation(center.extend(0.0)) * Mat4::from_scale(size.extend(1.0));
        self.shader.set_mat4("u_model", &model);
        self.shader.set_vec3("u_color", color);
        self.quad.draw();
    }
}

fn character_color(base: Vec3, state: &ControllerState, cfg: &JumpConfig, flags: &AnimatorFlags) -> Vec3 {
    if flags.is_charging {
        let ratio = (state.charge_time / cfg.max_charge_time()).clamp(0.0, 1.0);
        base.lerp(CHARGE_COLOR, ratio)
    } else if flags.is_jumping {
        base.lerp(AIRBORNE_COLOR, 0.5)
    } else {
        base
    }
}
