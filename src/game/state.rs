use std::time::Instant;

use crate::engine::components::{ OrbitCamera, Projection };
use crate::engine::config::DemoConfig;
use crate::engine::systems::{ FrameGate, FrameState };
use crate::engine::utils::math::Mat4x4;

/// Everything the input handlers and the frame loop share. Owned by the
/// application handler and passed down by reference.
#[derive(Clone, Debug)]
pub struct AppState {
    window_width: u32,
    window_height: u32,
    aspect: f32,
    pub camera: OrbitCamera,
    pub projection: Projection,
    pub gate: FrameGate,
}

impl AppState {
    pub fn new(config: &DemoConfig, now: Instant) -> Self {
        let (width, height) = (config.window.width, config.window.height);
        Self {
            window_width: width,
            window_height: height,
            aspect: width as f32 / height as f32,
            camera: OrbitCamera::new(&config.camera),
            projection: Projection::new(&config.camera),
            gate: FrameGate::new(config.frame_interval(), now),
        }
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Record a new framebuffer size. A zero height (minimised window)
    /// keeps the previous aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
        log::debug!("[INPUT] Resized to {}x{} (aspect {:.4})", width, height, self.aspect);
    }

    /// Run the frame gate; an accepted frame advances the orbit.
    pub fn poll_frame(&mut self, now: Instant) -> FrameState {
        let state = self.gate.poll(now);
        if state == FrameState::Rendering {
            self.camera.advance();
        }
        state
    }

    pub fn view_matrix(&self) -> Mat4x4 {
        self.camera.view_matrix()
    }

    pub fn projection_matrix(&self) -> Mat4x4 {
        self.projection.matrix(self.aspect)
    }
}
