pub mod cube;
pub mod scene;
pub mod state;
pub mod systems;

// Re-export commonly used types
pub use scene::{ Scene, SceneModel };
pub use state::AppState;
pub use systems::RenderSystem;
