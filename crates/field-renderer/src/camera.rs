//! Camera system for the backdrop scene

use bytemuck::{Pod, Zeroable};
use field_core::{
    MotionParams, PaletteColor, PointerState, CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES,
    CAMERA_NEAR, LINE_OPACITY, POINT_OPACITY, POINT_SCALE,
};
use glam::{Mat4, Vec3};

/// Scene uniform for GPU, shared by the point and line shaders
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
    pub point_scale: f32,
    pub point_opacity: f32,
    pub line_opacity: f32,
    pub _padding: f32,
    pub line_color: [f32; 4],
}

/// Perspective camera that always looks at `target`
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            target: Vec3::ZERO,
            aspect: width.max(1) as f32 / height.max(1) as f32,
            fovy: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Where the pointer wants the camera: scaled pointer on x/y, current z
    pub fn parallax_target(&self, pointer: &PointerState, params: &MotionParams) -> Vec3 {
        Vec3::new(
            pointer.x * params.parallax[0],
            pointer.y * params.parallax[1],
            self.position.z,
        )
    }

    /// Moves `rate` of the remaining distance toward `goal`. For `rate` in
    /// `(0, 1]` this never overshoots.
    pub fn pursue(&mut self, goal: Vec3, rate: f32) {
        self.position += (goal - self.position) * rate;
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * self.view_matrix()
    }

    pub fn to_uniform(&self, model: Mat4) -> SceneUniform {
        let view = self.view_matrix();
        // Rows of the view rotation are the camera axes in world space
        let right = view.row(0).truncate();
        let up = view.row(1).truncate();
        let [r, g, b] = PaletteColor::Primary.linear();

        SceneUniform {
            view_proj: self.build_view_projection_matrix().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            camera_right: right.extend(0.0).to_array(),
            camera_up: up.extend(0.0).to_array(),
            point_scale: POINT_SCALE,
            point_opacity: POINT_OPACITY,
            line_opacity: LINE_OPACITY,
            _padding: 0.0,
            line_color: [r, g, b, 1.0],
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_uniform_layout() {
        assert_eq!(std::mem::size_of::<SceneUniform>(), 192);
    }

    #[test]
    fn test_initial_camera() {
        let camera = Camera::new(1600, 900);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 8.0));
        assert_eq!(camera.aspect, 1600.0 / 900.0);
        assert!((camera.fovy - 75.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_pursuit_converges_without_overshoot() {
        let mut camera = Camera::new(800, 600);
        let goal = Vec3::new(0.5, -0.3, camera.position.z);
        let mut last = camera.position.distance(goal);

        for step in 0..2000 {
            camera.pursue(goal, 0.02);
            let d = camera.position.distance(goal);
            if step < 200 {
                assert!(d < last, "step {step}: {d} >= {last}");
            } else {
                assert!(d <= last);
            }
            // Never crosses the goal on either axis
            assert!(camera.position.x <= goal.x);
            assert!(camera.position.y >= goal.y);
            last = d;
        }
        assert!(last < 1e-4);
    }

    #[test]
    fn test_pursuit_step_is_two_percent() {
        let mut camera = Camera::new(800, 600);
        camera.pursue(Vec3::new(1.0, 0.0, 8.0), 0.02);
        assert!((camera.position.x - 0.02).abs() < 1e-7);
        assert_eq!(camera.position.z, 8.0);
    }

    #[test]
    fn test_parallax_target_keeps_depth() {
        let camera = Camera::new(800, 600);
        let pointer = PointerState { x: 1.0, y: -1.0 };
        let target = camera.parallax_target(&pointer, &MotionParams::default());
        assert_eq!(target, Vec3::new(0.5, -0.3, 8.0));
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let mut camera = Camera::new(800, 600);
        camera.position = Vec3::new(0.4, 0.2, 8.0);
        camera.look_at(Vec3::ZERO);

        let clip = camera.build_view_projection_matrix() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
    }

    #[test]
    fn test_billboard_axes_are_orthonormal() {
        let mut camera = Camera::new(800, 600);
        camera.position = Vec3::new(0.5, 0.3, 8.0);
        let uniform = camera.to_uniform(Mat4::IDENTITY);

        let right = Vec3::from_slice(&uniform.camera_right[..3]);
        let up = Vec3::from_slice(&uniform.camera_up[..3]);
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
        assert!(right.dot(up).abs() < 1e-5);
    }
}
