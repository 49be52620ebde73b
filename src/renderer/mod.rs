//! wgpu rendering module
//!
//! The scene is built on the CPU as a flat-colored triangle list in field
//! pixels, then mapped to NDC and drawn in a single pass.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;
pub mod viewport;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::{Vertex, colors};
pub use viewport::Viewport;
