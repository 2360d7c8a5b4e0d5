pub mod file_loader;
pub mod math;

pub use file_loader::read_file;
pub use math::*;
