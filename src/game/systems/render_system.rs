use glow::HasContext;

use crate::game::scene::Scene;
use crate::game::state::AppState;

#[derive(Debug)]
pub struct RenderSystem;

impl RenderSystem {
    /// Draw one frame. View and projection are uploaded once, before any
    /// draw call; each model uploads its own matrix right before drawing.
    pub fn update(gl: &glow::Context, scene: &Scene, state: &AppState, clear_color: [f32; 4]) {
        let view = state.view_matrix();
        let proj = state.projection_matrix();

        unsafe {
            let [r, g, b, a] = clear_color;
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        scene.program.bind(gl);
        scene.program.set_matrix(gl, "view", &view);
        scene.program.set_matrix(gl, "proj", &proj);

        for model in scene.visible_models() {
            scene.program.set_matrix(gl, "model", &model.transform.model_matrix());
            model.mesh.draw(gl);
        }

        unsafe {
            gl.bind_vertex_array(None);
        }
    }
}
