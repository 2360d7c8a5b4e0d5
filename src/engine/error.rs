//! Error type shared by the engine and the demo binary.
//!
//! Every variant is fatal: the binary logs it and exits with a failure
//! status. Nothing in the crate retries or degrades.

use std::path::PathBuf;
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A file the program depends on could not be read
    #[error("error: could not read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Driver rejected a shader stage; `log` is the bounded info log
    #[error("error: {} compilation failed\n\n{log}", .path.display())]
    ShaderCompile { path: PathBuf, log: String },

    /// Driver rejected the program at link time
    #[error("error: could not link shader program\n\n{log}")]
    ProgramLink { log: String },

    /// GL object allocation failed
    #[error("error: GL call failed: {0}")]
    Gl(String),

    /// Window, context, surface or function-loader setup failed
    #[error("error: initialisation failed: {0}")]
    Init(String),

    /// Config file present but unusable
    #[error("error: bad config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl EngineError {
    /// Process status for this error. Every failure maps to 1.
    pub fn exit_status(&self) -> u8 {
        1
    }
}

impl From<glutin::error::Error> for EngineError {
    fn from(e: glutin::error::Error) -> Self {
        EngineError::Init(e.to_string())
    }
}

impl From<winit::error::EventLoopError> for EngineError {
    fn from(e: winit::error::EventLoopError) -> Self {
        EngineError::Init(e.to_string())
    }
}

impl From<raw_window_handle::HandleError> for EngineError {
    fn from(e: raw_window_handle::HandleError) -> Self {
        EngineError::Init(e.to_string())
    }
}
