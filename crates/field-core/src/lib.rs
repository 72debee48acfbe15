//! # Field Core
//!
//! CPU-side model of the backdrop particle field: palette, particles,
//! proximity connections, rigid tumble and pointer state.

pub mod connections;
pub mod constants;
pub mod field;
pub mod motion;
pub mod params;
pub mod particle;
pub mod pointer;

pub use connections::*;
pub use constants::*;
pub use field::*;
pub use motion::*;
pub use params::*;
pub use particle::*;
pub use pointer::*;
