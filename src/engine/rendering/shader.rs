use glow::HasContext;
use std::path::Path;

use crate::engine::components::mesh::{ NORMAL_LOCATION, POSITION_LOCATION };
use crate::engine::error::{ EngineError, EngineResult };
use crate::engine::utils::file_loader::read_file;
use crate::engine::utils::math::Mat4x4;

/// Upper bound on the driver diagnostic kept in an error.
pub const INFO_LOG_LIMIT: usize = 4096;

pub const POSITION_ATTRIBUTE: &str = "in_pos";
pub const NORMAL_ATTRIBUTE: &str = "in_norm";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_kind(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

/// Linked program plus the two stages it was built from.
#[derive(Clone, Copy, Debug)]
pub struct ShaderProgram {
    pub program: glow::Program,
    pub vertex: glow::Shader,
    pub fragment: glow::Shader,
}

impl ShaderProgram {
    /// Compile both stages from disk and link them.
    pub fn from_files(
        gl: &glow::Context,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>
    ) -> EngineResult<Self> {
        let vertex = compile_shader(gl, vertex_path, ShaderStage::Vertex)?;
        let fragment = compile_shader(gl, fragment_path, ShaderStage::Fragment)?;
        link_program(gl, vertex, fragment)
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe {
            gl.use_program(Some(self.program));
        }
    }

    /// Missing uniforms (optimised out by the driver) are skipped.
    pub fn set_matrix(&self, gl: &glow::Context, name: &str, matrix: &Mat4x4) {
        unsafe {
            match gl.get_uniform_location(self.program, name) {
                Some(loc) => gl.uniform_matrix_4_f32_slice(Some(&loc), true, matrix),
                None => log::trace!("[GL] Uniform {} not active", name),
            }
        }
    }
}

/// Compile one stage from a source file.
pub fn compile_shader(gl: &glow::Context, path: impl AsRef<Path>, stage: ShaderStage) -> EngineResult<glow::Shader> {
    let path = path.as_ref();
    let buf = read_file(path)?;
    let source = String::from_utf8(buf).map_err(|e| EngineError::ShaderCompile {
        path: path.to_path_buf(),
        log: format!("source is not valid UTF-8: {}", e),
    })?;

    unsafe {
        let shader = gl.create_shader(stage.gl_kind()).map_err(EngineError::Gl)?;
        gl.shader_source(shader, &source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = bounded_log(gl.get_shader_info_log(shader));
            gl.delete_shader(shader);
            return Err(EngineError::ShaderCompile { path: path.to_path_buf(), log });
        }

        log::info!("[GL] Compiled {:?} shader {}", stage, path.display());
        Ok(shader)
    }
}

/// Link two compiled stages. Position and normal get fixed locations; the
/// uv attribute (location 2) is configured by the mesh but left unnamed here.
pub fn link_program(gl: &glow::Context, vertex: glow::Shader, fragment: glow::Shader) -> EngineResult<ShaderProgram> {
    unsafe {
        let program = gl.create_program().map_err(EngineError::Gl)?;
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);

        gl.bind_attrib_location(program, POSITION_LOCATION, POSITION_ATTRIBUTE);
        gl.bind_attrib_location(program, NORMAL_LOCATION, NORMAL_ATTRIBUTE);

        gl.link_program(program);

        if !gl.get_program_link_status(program) {
            let log = bounded_log(gl.get_program_info_log(program));
            gl.delete_program(program);
            return Err(EngineError::ProgramLink { log });
        }

        log::info!("[GL] Linked shader program");
        Ok(ShaderProgram { program, vertex, fragment })
    }
}

/// Cut a driver log to `INFO_LOG_LIMIT` bytes without splitting a character.
pub fn bounded_log(mut log: String) -> String {
    if log.len() > INFO_LOG_LIMIT {
        let mut end = INFO_LOG_LIMIT;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    log
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_logs_pass_through() {
        assert_eq!(bounded_log("0:1(1): error".to_string()), "0:1(1): error");
        assert_eq!(bounded_log(String::new()), "");
    }

    #[test]
    fn long_logs_are_cut_to_the_limit() {
        let log = "x".repeat(INFO_LOG_LIMIT * 2);
        assert_eq!(bounded_log(log).len(), INFO_LOG_LIMIT);
    }

    #[test]
    fn cut_respects_char_boundaries() {
        // 3-byte chars; 4096 is not a multiple of 3
        let log = "€".repeat(INFO_LOG_LIMIT);
        let cut = bounded_log(log);
        assert!(cut.len() <= INFO_LOG_LIMIT);
        assert_eq!(cut.len() % 3, 0);
        assert!(cut.chars().all(|c| c == '€'));
    }

    #[test]
    fn stage_kinds_map_to_gl_enums() {
        assert_eq!(ShaderStage::Vertex.gl_kind(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_kind(), glow::FRAGMENT_SHADER);
    }
}
