//! Latest pointer sample, normalized to `[-1, 1]`
//!
//! Written by the cursor handler and read by the next frame update. Only the
//! most recent sample matters.

/// `x` grows to the right, `y` grows upward
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Records a cursor position given in viewport pixels (origin top-left).
    /// Zero-sized viewports are ignored.
    pub fn update_from_cursor(&mut self, cx: f64, cy: f64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.x = ((cx / width as f64) * 2.0 - 1.0) as f32;
        self.y = (-(cy / height as f64) * 2.0 + 1.0) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_center() {
        assert_eq!(PointerState::default(), PointerState { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_normalization() {
        let mut pointer = PointerState::default();

        pointer.update_from_cursor(0.0, 0.0, 800, 600);
        assert_eq!(pointer, PointerState { x: -1.0, y: 1.0 });

        pointer.update_from_cursor(800.0, 600.0, 800, 600);
        assert_eq!(pointer, PointerState { x: 1.0, y: -1.0 });

        pointer.update_from_cursor(400.0, 300.0, 800, 600);
        assert_eq!(pointer, PointerState { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_last_writer_wins() {
        let mut pointer = PointerState::default();
        pointer.update_from_cursor(100.0, 100.0, 800, 600);
        pointer.update_from_cursor(600.0, 150.0, 800, 600);
        assert_eq!(pointer, PointerState { x: 0.5, y: 0.5 });
    }

    #[test]
    fn test_zero_viewport_is_ignored() {
        let mut pointer = PointerState { x: 0.25, y: -0.25 };
        pointer.update_from_cursor(10.0, 10.0, 0, 600);
        assert_eq!(pointer, PointerState { x: 0.25, y: -0.25 });
    }
}
