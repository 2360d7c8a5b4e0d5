pub mod components;
pub mod config;
pub mod error;
pub mod rendering;
pub mod systems;
pub mod utils;

// Re-export commonly used items
pub use components::*;
pub use config::DemoConfig;
pub use error::{ EngineError, EngineResult };
pub use systems::*;
