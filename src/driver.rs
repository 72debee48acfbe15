//! Frame driver
//!
//! The host event loop calls `tick` once per display refresh. The driver runs
//! the frame and reports whether another frame should be scheduled; `stop`
//! ends the loop for good.

#[derive(Debug)]
pub struct FrameDriver {
    running: bool,
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            running: true,
            frames: 0,
        }
    }

    /// Runs `frame` if the driver is still running. Returns whether the next
    /// frame should be scheduled.
    pub fn tick(&mut self, frame: impl FnOnce()) -> bool {
        if !self.running {
            return false;
        }
        frame();
        self.frames += 1;
        self.running
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("frame driver stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
