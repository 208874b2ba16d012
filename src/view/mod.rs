// VIEW: Rendering and HUD
pub mod mesh;
pub mod render;
pub mod gpu_init;
pub mod hud;

pub use mesh::{build_corridor_mesh, Mesh, MeshBuffer, Vertex};
pub use render::{create_depth_texture, CorridorRenderer, DEPTH_FORMAT};
pub use gpu_init::GpuContext;
