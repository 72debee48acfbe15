//! Tunable parameters for field generation and motion

use crate::constants::*;

/// Parameters consumed once, when the field is generated
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    pub particle_count: usize,
    /// Positions are sampled in `[-half_extent, half_extent]` on each axis
    pub half_extent: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub connection_distance: f32,
    pub max_connections: usize,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            half_extent: FIELD_HALF_EXTENT,
            min_size: MIN_PARTICLE_SIZE,
            max_size: MAX_PARTICLE_SIZE,
            connection_distance: CONNECTION_DISTANCE,
            max_connections: MAX_CONNECTIONS,
        }
    }
}

/// Parameters consumed every frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    // x: spin about X, y: spin about Y (radians per frame)
    pub spin: [f32; 2],
    pub pursuit_rate: f32,
    // x: horizontal, y: vertical parallax factor
    pub parallax: [f32; 2],
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            spin: [SPIN_X_PER_FRAME, SPIN_Y_PER_FRAME],
            pursuit_rate: CAMERA_PURSUIT_RATE,
            parallax: [PARALLAX_X, PARALLAX_Y],
        }
    }
}
