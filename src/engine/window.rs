use anyhow::{anyhow, Context, Result};
use sdl2::video::{GLContext, GLProfile, Window};
use sdl2::Sdl;

pub struct GameWindow {
    _gl_context: GLContext,
    window: Window,
}

impl GameWindow {
    pub fn new(sdl: &Sdl, title: &str, width: u32, height: u32) -> Result<Self> {
        let video = sdl
            .video()
            .map_err(|e| anyhow!("failed to init SDL2 video: {e}"))?;

        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = video
            .window(title, width, height)
            .opengl()
            .position_centered()
            .resizable()
            .build()
            .context("failed to create window")?;

        let gl_context = window
            .gl_create_context()
            .map_err(|e| anyhow!("failed to create GL context: {e}"))?;

        gl::load_with(|s| video.gl_get_proc_address(s) as *const _);
        log::info!("[window] {width}x{height} GL 3.3 core");

        Ok(Self {
            _gl_context: gl_context,
            window,
        })
    }

    pub fn swap(&self) {
        self.window.gl_swap_window();
    }

    pub fn size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    pub fn aspect_ratio(&self) -> f32 {
        let (w, h) = self.size();
        if h == 0 {
            return 1.0;
        }
        w as f32 / h as f32
    }
}
