//! Rigid tumble of the whole field

use glam::Mat4;

use crate::params::MotionParams;

/// Accumulated rotation shared by points and lines
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tumble {
    pub x: f32,
    pub y: f32,
}

impl Tumble {
    /// One frame worth of rotation
    pub fn advance(&mut self, params: &MotionParams) {
        self.x += params.spin[0];
        self.y += params.spin[1];
    }

    /// X-then-Y Euler rotation
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.x) * Mat4::from_rotation_y(self.y)
    }
}
