//! Per-frame scene state
//!
//! Everything the frame update touches that does not live on the GPU. The
//! pointer is written by the cursor handler and read by `advance`.

use field_core::{MotionParams, PointerState, Tumble};
use field_renderer::{Camera, Viewport};
use glam::{Mat4, Vec3};

pub struct SceneState {
    pub tumble: Tumble,
    pub camera: Camera,
    pub pointer: PointerState,
    pub viewport: Viewport,
}

impl SceneState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            tumble: Tumble::default(),
            camera: Camera::new(width, height),
            pointer: PointerState::default(),
            viewport: Viewport::new(width, height),
        }
    }

    /// Tumble the field, chase the pointer target, re-aim at the origin
    pub fn advance(&mut self, motion: &MotionParams) {
        self.tumble.advance(motion);

        let goal = self.camera.parallax_target(&self.pointer, motion);
        self.camera.pursue(goal, motion.pursuit_rate);
        self.camera.look_at(Vec3::ZERO);
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer
            .update_from_cursor(x, y, self.viewport.width(), self.viewport.height());
    }

    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.viewport.resize(width, height, &mut self.camera)
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.tumble.model_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_rests_without_pointer_input() {
        let mut scene = SceneState::new(800, 600);
        let motion = MotionParams::default();

        for _ in 0..100 {
            scene.advance(&motion);
        }
        assert_eq!(scene.camera.position, Vec3::new(0.0, 0.0, 8.0));
        assert_eq!(scene.camera.target, Vec3::ZERO);
        assert!((scene.tumble.y - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_pointer_drives_parallax() {
        let mut scene = SceneState::new(800, 600);
        let motion = MotionParams::default();

        // Top-right corner
        scene.pointer_moved(800.0, 0.0);
        assert_eq!(scene.pointer, PointerState { x: 1.0, y: 1.0 });

        scene.advance(&motion);
        assert!((scene.camera.position.x - 0.01).abs() < 1e-6);
        assert!((scene.camera.position.y - 0.006).abs() < 1e-6);
        assert_eq!(scene.camera.position.z, 8.0);

        for _ in 0..1000 {
            scene.advance(&motion);
        }
        assert!((scene.camera.position.x - 0.5).abs() < 1e-3);
        assert!((scene.camera.position.y - 0.3).abs() < 1e-3);
    }

    #[test]
    fn test_resize_rescales_pointer_mapping() {
        let mut scene = SceneState::new(800, 600);
        assert!(scene.resize(1000, 500));
        assert_eq!(scene.camera.aspect, 1000.0 / 500.0);

        scene.pointer_moved(500.0, 250.0);
        assert_eq!(scene.pointer, PointerState { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_resize_to_zero_keeps_state() {
        let mut scene = SceneState::new(800, 600);
        assert!(!scene.resize(0, 0));
        assert_eq!(scene.viewport, Viewport::new(800, 600));
    }
}
