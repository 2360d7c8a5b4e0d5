use std::f32::consts::FRAC_PI_4;

use crate::engine::components::{ Mesh, TransformParams };
use crate::engine::config::DemoConfig;
use crate::engine::error::EngineResult;
use crate::engine::rendering::ShaderProgram;
use crate::game::cube;

pub const PLAYER_TEXTURE: &str = "tex/plyr.png";
pub const MARKER_TEXTURE: &str = "tex/point.png";

/// Marker spin per accepted frame (radians)
const MARKER_SPIN: f32 = 0.02;

#[derive(Clone, Copy, Debug)]
pub struct SceneModel {
    pub mesh: Mesh,
    pub transform: TransformParams,
    /// Added to the post-rotation about Y on every accepted frame
    pub spin: f32,
    pub visible: bool,
}

impl SceneModel {
    pub fn animate(&mut self) {
        if self.visible {
            self.transform = spun(self.transform, self.spin);
        }
    }
}

pub struct Scene {
    pub program: ShaderProgram,
    pub models: Vec<SceneModel>,
}

impl Scene {
    /// Upload both cubes, then build the shader program.
    pub fn new(gl: &glow::Context, config: &DemoConfig) -> EngineResult<Self> {
        let player = Mesh::upload(gl, &cube::mesh_data(), PLAYER_TEXTURE)?;
        let marker = Mesh::upload(gl, &cube::mesh_data(), MARKER_TEXTURE)?;
        let program = ShaderProgram::from_files(gl, &config.shaders.vertex, &config.shaders.fragment)?;

        let models = vec![
            SceneModel { mesh: player, transform: player_transform(), spin: 0.0, visible: true },
            SceneModel {
                mesh: marker,
                transform: marker_transform(),
                spin: MARKER_SPIN,
                visible: config.show_marker,
            },
        ];
        log::info!(
            "[INIT] Scene ready: {} models, {} visible",
            models.len(),
            models.iter().filter(|m| m.visible).count()
        );

        Ok(Self { program, models })
    }

    pub fn visible_models(&self) -> impl Iterator<Item = &SceneModel> {
        self.models.iter().filter(|m| m.visible)
    }

    /// Per-frame model animation.
    pub fn update(&mut self) {
        for model in &mut self.models {
            model.animate();
        }
    }
}

pub fn player_transform() -> TransformParams {
    TransformParams::new([0.0, 0.001, 0.0])
}

pub fn marker_transform() -> TransformParams {
    TransformParams::new([0.0, 2.0, 0.0])
        .with_rotate_before([FRAC_PI_4, 0.0, 0.0])
        .with_scale([0.25; 3])
}

fn spun(mut transform: TransformParams, spin: f32) -> TransformParams {
    transform.rotate_after[1] += spin;
    transform
}
