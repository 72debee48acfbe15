//! # Field Renderer
//!
//! wgpu rendering of the backdrop particle field: camera, viewport and the
//! point and line pipelines.

pub mod camera;
pub mod lines;
pub mod renderer;
pub mod viewport;

pub use camera::*;
pub use lines::*;
pub use renderer::*;
pub use viewport::*;
