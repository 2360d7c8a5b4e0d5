//! Rotating cube demo.
//!
//! Opens a 640x480 OpenGL 3.2 core window, uploads a cube, compiles
//! `vert.glsl` / `frag.glsl` from the working directory and orbits the
//! camera around the cube at ~100 updates per second.
//!
//! Controls:
//! - Q: quit
//!
//! Exit status is 0 on close or quit and 1 on any startup failure.

use std::process::ExitCode;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ ActiveEventLoop, ControlFlow, EventLoop };
use winit::window::WindowId;

use orbit_cube::engine::config::{ DemoConfig, CONFIG_FILE };
use orbit_cube::engine::error::{ EngineError, EngineResult };
use orbit_cube::engine::rendering::GraphicsContext;
use orbit_cube::engine::systems::{ receive_key_event, FrameState, InputAction };
use orbit_cube::game::{ AppState, RenderSystem, Scene };

/// GPU-side objects; exist once the window is up.
struct Running {
    gfx: GraphicsContext,
    scene: Scene,
}

struct App {
    config: DemoConfig,
    state: AppState,
    running: Option<Running>,
    failure: Option<EngineError>,
}

impl App {
    fn new(config: DemoConfig) -> Self {
        let state = AppState::new(&config, Instant::now());
        Self {
            config,
            state,
            running: None,
            failure: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> EngineResult<Running> {
        let gfx = GraphicsContext::create(event_loop, &self.config.window)?;
        let scene = Scene::new(&gfx.gl, &self.config)?;

        // The window manager may not honour the requested size
        let size = gfx.window.inner_size();
        self.state.resize(size.width, size.height);

        Ok(Running { gfx, scene })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EngineError) {
        self.record_failure(err);
        event_loop.exit();
    }

    /// The first failure wins; later ones are usually fallout from it.
    fn record_failure(&mut self, err: EngineError) {
        match &self.failure {
            Some(_) => log::debug!("[INIT] Ignoring follow-up failure: {}", err),
            None => self.failure = Some(err),
        }
    }

    /// Result of a finished event loop.
    fn into_result(self) -> EngineResult<()> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// One pass of the busy loop: render only when the frame gate opens.
    fn tick(&mut self) -> EngineResult<()> {
        let Some(running) = self.running.as_mut() else {
            return Ok(());
        };
        if self.state.poll_frame(Instant::now()) == FrameState::Waiting {
            return Ok(());
        }

        log::trace!("[FRAME] angle {:.3}", self.state.camera.angle());
        running.scene.update();
        RenderSystem::update(&running.gfx.gl, &running.scene, &self.state, self.config.clear_color);
        running.gfx.present()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() || self.failure.is_some() {
            return;
        }

        match self.start(event_loop) {
            Ok(running) => {
                log::info!("[INIT] Window and GL resources ready");
                self.running = Some(running);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("[INPUT] Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.state.resize(size.width, size.height);
                if let Some(running) = &self.running {
                    running.gfx.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if receive_key_event(&event) == InputAction::Quit {
                    log::info!("[INPUT] Quit key pressed");
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.tick() {
            self.fail(event_loop, e);
        }
    }
}

fn run() -> EngineResult<()> {
    let config = DemoConfig::load_or_default(CONFIG_FILE)?;

    let event_loop = EventLoop::new()?;
    // Busy-poll: the frame gate decides when to draw
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    app.into_result()
}

/// Report a fatal error and pick the process status.
fn exit_status(result: &EngineResult<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            if log::log_enabled!(log::Level::Error) {
                log::error!("{}", e);
            } else {
                // RUST_LOG silenced the logger; the diagnostic still goes to stderr
                eprintln!("{}", e);
            }
            e.exit_status()
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    ExitCode::from(exit_status(&run()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn compile_failure() -> EngineError {
        EngineError::ShaderCompile {
            path: PathBuf::from("frag.glsl"),
            log: "0:1(1): error: syntax error".to_string(),
        }
    }

    #[test]
    fn clean_run_exits_zero() {
        let app = App::new(DemoConfig::default());
        assert_eq!(exit_status(&app.into_result()), 0);
    }

    #[test]
    fn startup_failure_reaches_the_exit_status() {
        let mut app = App::new(DemoConfig::default());
        app.record_failure(compile_failure());

        let result = app.into_result();
        let err = result.as_ref().unwrap_err();
        assert!(err.to_string().contains("frag.glsl"));
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn first_failure_is_kept() {
        let mut app = App::new(DemoConfig::default());
        app.record_failure(compile_failure());
        app.record_failure(EngineError::Gl("lost context".into()));

        assert!(matches!(app.into_result(), Err(EngineError::ShaderCompile { .. })));
    }
}
