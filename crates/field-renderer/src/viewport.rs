//! Output size tracking

use crate::camera::Camera;

/// Renderer output size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Applies a new viewport size to the output and the camera aspect.
    /// Returns `false` (and changes nothing) for zero-area sizes.
    pub fn resize(&mut self, width: u32, height: u32, camera: &mut Camera) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.width = width;
        self.height = height;
        camera.resize(width, height);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_updates_output_and_aspect() {
        let mut camera = Camera::new(800, 600);
        let mut viewport = Viewport::new(800, 600);
        let position = camera.position;

        assert!(viewport.resize(1280, 720, &mut camera));
        assert_eq!(viewport.width(), 1280);
        assert_eq!(viewport.height(), 720);
        assert_eq!(camera.aspect, 1280.0 / 720.0);
        assert_eq!(camera.position, position);
    }

    #[test]
    fn test_zero_size_is_ignored() {
        let mut camera = Camera::new(800, 600);
        let mut viewport = Viewport::new(800, 600);

        assert!(!viewport.resize(0, 600, &mut camera));
        assert!(!viewport.resize(800, 0, &mut camera));
        assert_eq!(viewport, Viewport::new(800, 600));
        assert_eq!(camera.aspect, 800.0 / 600.0);
    }
}
