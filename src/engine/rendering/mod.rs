pub mod gl_context;
pub mod shader;

pub use gl_context::GraphicsContext;
pub use shader::{ ShaderProgram, ShaderStage };
