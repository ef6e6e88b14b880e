//! WebGPU rendering module
//!
//! Filled circles tessellated on the CPU and drawn as one triangle list.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
