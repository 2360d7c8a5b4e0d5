use glow::HasContext;
use std::path::Path;

use crate::engine::error::{ EngineError, EngineResult };

pub const POSITION_LOCATION: u32 = 0;
pub const NORMAL_LOCATION: u32 = 1;
pub const UV_LOCATION: u32 = 2;

const POSITION_COMPONENTS: i32 = 3;
const NORMAL_COMPONENTS: i32 = 3;
const UV_COMPONENTS: i32 = 2;

/// Parallel, non-indexed vertex streams.
#[derive(Clone, Copy, Debug)]
pub struct MeshData<'a> {
    pub positions: &'a [f32],
    pub normals: &'a [f32],
    pub uvs: &'a [f32],
}

impl MeshData<'_> {
    pub fn vertex_count(&self) -> usize {
        vertex_count(std::mem::size_of_val(self.positions))
    }
}

/// Vertices in a tightly packed `vec3` position buffer of `position_bytes`.
pub fn vertex_count(position_bytes: usize) -> usize {
    position_bytes / (POSITION_COMPONENTS as usize * std::mem::size_of::<f32>())
}

/// GPU-resident mesh. Lives until process exit; nothing deletes it.
#[derive(Clone, Copy, Debug)]
pub struct Mesh {
    pub vao: glow::VertexArray,
    pub position_vbo: glow::Buffer,
    pub normal_vbo: glow::Buffer,
    pub uv_vbo: glow::Buffer,
    pub vertex_count: usize,
}

impl Mesh {
    /// Copy the three streams into static buffers and describe them in one
    /// vertex array: 0 = position, 1 = normal, 2 = uv.
    ///
    /// `texture_path` is carried for a future sampler binding and is not
    /// loaded.
    pub fn upload(gl: &glow::Context, data: &MeshData, texture_path: impl AsRef<Path>) -> EngineResult<Self> {
        log::debug!(
            "[ASSETS] Texture {} accepted but not bound",
            texture_path.as_ref().display()
        );

        unsafe {
            let position_vbo = create_static_buffer(gl, data.positions)?;
            let normal_vbo = create_static_buffer(gl, data.normals)?;
            let uv_vbo = create_static_buffer(gl, data.uvs)?;

            let vao = gl.create_vertex_array().map_err(EngineError::Gl)?;
            gl.bind_vertex_array(Some(vao));

            let setup_attrib = |loc: u32, buf: glow::Buffer, size: i32| {
                gl.bind_buffer(glow::ARRAY_BUFFER, Some(buf));
                gl.vertex_attrib_pointer_f32(loc, size, glow::FLOAT, false, 0, 0);
                gl.enable_vertex_attrib_array(loc);
            };

            setup_attrib(POSITION_LOCATION, position_vbo, POSITION_COMPONENTS);
            setup_attrib(NORMAL_LOCATION, normal_vbo, NORMAL_COMPONENTS);
            setup_attrib(UV_LOCATION, uv_vbo, UV_COMPONENTS);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            let mesh = Mesh {
                vao,
                position_vbo,
                normal_vbo,
                uv_vbo,
                vertex_count: data.vertex_count(),
            };
            log::info!("[ASSETS] Uploaded mesh with {} vertices", mesh.vertex_count);
            Ok(mesh)
        }
    }

    /// Bind this mesh's vertex array and draw it as triangles.
    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::TRIANGLES, 0, self.vertex_count as i32);
        }
    }
}

unsafe fn create_static_buffer(gl: &glow::Context, data: &[f32]) -> EngineResult<glow::Buffer> {
    let buf = gl.create_buffer().map_err(EngineError::Gl)?;
    gl.bind_buffer(glow::ARRAY_BUFFER, Some(buf));
    gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytemuck::cast_slice(data), glow::STATIC_DRAW);
    Ok(buf)
}
