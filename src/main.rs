//! AIMES particle backdrop
//!
//! A slowly tumbling field of colored points with faint proximity lines and
//! a mouse-parallax camera. Purely decorative: if the GPU path is
//! unavailable the backdrop logs why and quietly stays off.

mod backdrop;
mod config;
mod driver;
mod error;
mod scene;

use std::sync::Arc;

use backdrop::Backdrop;
use config::BackdropConfig;
use driver::FrameDriver;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::error::BackdropError;

struct App {
    window: Option<Arc<Window>>,
    backdrop: Option<Backdrop>,
    driver: FrameDriver,
    config: BackdropConfig,
}

impl App {
    fn new(config: BackdropConfig) -> Self {
        Self {
            window: None,
            backdrop: None,
            driver: FrameDriver::new(),
            config,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<(), BackdropError> {
        let window_attributes = Window::default_attributes()
            .with_title("AIMES")
            .with_inner_size(winit::dpi::LogicalSize::new(1600, 900));

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let backdrop = pollster::block_on(Backdrop::new(window.clone(), &self.config))?;

        window.request_redraw();
        self.backdrop = Some(backdrop);
        self.window = Some(window);
        Ok(())
    }

    /// Stops the frame loop and releases GPU state before the window
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.driver.stop();
        self.backdrop = None;
        self.window = None;
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || !self.driver.is_running() {
            return;
        }

        if let Err(e) = self.start(event_loop) {
            log::warn!("Particle backdrop disabled: {}", e);
            self.shutdown(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.shutdown(event_loop),

            WindowEvent::Resized(physical_size) => {
                if let Some(backdrop) = &mut self.backdrop {
                    backdrop.resize(physical_size);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(backdrop) = &mut self.backdrop {
                    backdrop.pointer_moved(position);
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(window), Some(backdrop)) = (self.window.clone(), &mut self.backdrop)
                else {
                    return;
                };

                let motion = self.config.motion;
                let mut out_of_memory = false;
                let schedule_next = self.driver.tick(|| {
                    backdrop.update(&motion);
                    match backdrop.render() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            backdrop.reconfigure()
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => out_of_memory = true,
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                });

                if out_of_memory {
                    log::error!("GPU out of memory, stopping backdrop");
                    self.shutdown(event_loop);
                } else if schedule_next {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), winit::error::EventLoopError> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting AIMES particle backdrop...");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(BackdropConfig::from_env());
    event_loop.run_app(&mut app)
}
