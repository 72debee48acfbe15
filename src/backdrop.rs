//! GPU bootstrap and per-frame orchestration of the particle backdrop

use std::sync::Arc;

use field_core::{MotionParams, ParticleField};
use field_renderer::FieldRenderer;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::window::Window;

use crate::config::BackdropConfig;
use crate::error::BackdropError;
use crate::scene::SceneState;

/// Finds an adapter able to present to `surface` (any adapter if `None`)
pub async fn request_adapter(
    instance: &wgpu::Instance,
    surface: Option<&wgpu::Surface<'_>>,
) -> Result<wgpu::Adapter, BackdropError> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: surface,
            force_fallback_adapter: false,
        })
        .await?;
    Ok(adapter)
}

pub struct Backdrop {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    renderer: FieldRenderer,
    scene: SceneState,
}

impl Backdrop {
    /// Creates the surface, device, particle field and GPU buffers. Nothing
    /// is kept if any step fails.
    pub async fn new(window: Arc<Window>, settings: &BackdropConfig) -> Result<Self, BackdropError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;
        let adapter = request_adapter(&instance, Some(&surface)).await?;
        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(BackdropError::UnsupportedSurface)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let scene = SceneState::new(size.width, size.height);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: scene.viewport.width(),
            height: scene.viewport.height(),
            // One frame per display refresh
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        // Validation failures from here on mean the backdrop cannot run
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        surface.configure(&device, &config);

        let field = ParticleField::generate(&settings.field, &mut settings.rng());
        log::info!(
            "✓ Generated {} particles, {} connections",
            field.particles().len(),
            field.connections().len()
        );

        let renderer = FieldRenderer::new(&device, config.format, &field);
        if let Some(e) = device.pop_error_scope().await {
            return Err(BackdropError::SceneSetup(e));
        }
        log::info!("✓ Renderer initialized");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
            scene,
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if self.scene.resize(new_size.width, new_size.height) {
            self.config.width = self.scene.viewport.width();
            self.config.height = self.scene.viewport.height();
            self.surface.configure(&self.device, &self.config);
            log::debug!("resized to {}x{}", self.config.width, self.config.height);
        }
    }

    /// Re-applies the current configuration after a lost or outdated surface
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn pointer_moved(&mut self, position: PhysicalPosition<f64>) {
        self.scene.pointer_moved(position.x, position.y);
    }

    pub fn update(&mut self, motion: &MotionParams) {
        self.scene.advance(motion);
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(
            &self.device,
            &self.queue,
            &view,
            &self.scene.camera,
            self.scene.model_matrix(),
        );

        output.present();
        Ok(())
    }
}
