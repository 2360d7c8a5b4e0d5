pub mod camera;
pub mod mesh;
pub mod transform;

pub use camera::{ OrbitCamera, Projection };
pub use mesh::{ Mesh, MeshData };
pub use transform::TransformParams;
