use glow::HasContext;
use glutin::config::{ Config, ConfigTemplateBuilder };
use glutin::context::{ ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version };
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{ Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface };
use glutin_winit::{ DisplayBuilder, GlWindow };
use raw_window_handle::HasWindowHandle;
use std::num::NonZeroU32;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::engine::config::WindowConfig;
use crate::engine::error::{ EngineError, EngineResult };

/// Oldest context the renderer accepts (core profile).
pub const GL_VERSION: (u8, u8) = (3, 2);

/// Window, surface, current context and loaded GL functions.
// Fields drop in order; the window must outlive its surface.
pub struct GraphicsContext {
    pub gl: glow::Context,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    pub window: Window,
}

impl GraphicsContext {
    pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> EngineResult<Self> {
        let window_attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new().with_depth_size(24);
        let requested_samples = config.samples;

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes))
            .build(event_loop, template, |configs| pick_config(configs, requested_samples))
            .map_err(|e| EngineError::Init(e.to_string()))?;
        let window = window.ok_or_else(|| EngineError::Init("window was not created".into()))?;

        log::info!(
            "[INIT] GL config: {} samples, depth {}",
            gl_config.num_samples(),
            gl_config.depth_size()
        );

        let display = gl_config.display();
        let raw_handle = window.window_handle()?.as_raw();
        let (major, minor) = GL_VERSION;
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(raw_handle));

        let not_current = unsafe { display.create_context(&gl_config, &context_attributes)? };

        let surface_attributes = window.build_surface_attributes(SurfaceAttributesBuilder::default())?;
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attributes)? };
        let context = not_current.make_current(&surface)?;

        if config.vsync {
            if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
                log::warn!("[INIT] Could not enable vsync: {}", e);
            }
        }

        let gl = unsafe { glow::Context::from_loader_function_cstr(|s| display.get_proc_address(s)) };
        check_version(&gl)?;

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LESS);
            gl.enable(glow::MULTISAMPLE);
            let size = window.inner_size();
            gl.viewport(0, 0, size.width as i32, size.height as i32);
        }

        Ok(Self { gl, surface, context, window })
    }

    /// Resize the backing surface and the GL viewport.
    pub fn resize(&self, width: u32, height: u32) {
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(&self.context, w, h);
        }
        unsafe {
            self.gl.viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn present(&self) -> EngineResult<()> {
        self.surface.swap_buffers(&self.context)?;
        Ok(())
    }
}

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>, requested_samples: u8) -> Config {
    // The picker cannot return an error; glutin only calls it with a non-empty list.
    configs
        .max_by_key(|config| sample_rank(config.num_samples(), requested_samples))
        .expect("glutin offered no GL configs")
}

/// Exact sample match ranks first, then the most samples offered.
fn sample_rank(samples: u8, requested: u8) -> (bool, u8) {
    (samples == requested, samples)
}

fn check_version(gl: &glow::Context) -> EngineResult<()> {
    let version = gl.version();
    log::info!("[INIT] OpenGL {}.{} {}", version.major, version.minor, version.vendor_info);

    let (major, minor) = GL_VERSION;
    if (version.major, version.minor) < (u32::from(major), u32::from(minor)) {
        return Err(EngineError::Init(format!(
            "OpenGL {}.{} required, context reports {}.{}",
            major, minor, version.major, version.minor
        )));
    }
    Ok(())
}
