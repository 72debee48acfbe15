//! Error types for backdrop initialization
//!
//! Every variant means the same thing to the application: the GPU path is
//! unavailable and the backdrop should not run.

use std::fmt;

#[derive(Debug)]
pub enum BackdropError {
    /// The host window could not be created.
    Window(winit::error::OsError),
    /// Failed to create a surface for the window.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter(wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// The surface reports no usable texture format.
    UnsupportedSurface,
    /// Building the field's buffers or pipelines was rejected by the device.
    SceneSetup(wgpu::Error),
}

impl fmt::Display for BackdropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackdropError::Window(e) => write!(f, "Failed to create window: {}", e),
            BackdropError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            BackdropError::NoAdapter(e) => write!(f, "No compatible GPU adapter found: {}", e),
            BackdropError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            BackdropError::UnsupportedSurface => {
                write!(f, "Surface has no supported texture format")
            }
            BackdropError::SceneSetup(e) => write!(f, "Failed to set up particle scene: {}", e),
        }
    }
}

impl std::error::Error for BackdropError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackdropError::Window(e) => Some(e),
            BackdropError::SurfaceCreation(e) => Some(e),
            BackdropError::NoAdapter(e) => Some(e),
            BackdropError::DeviceCreation(e) => Some(e),
            BackdropError::SceneSetup(e) => Some(e),
            BackdropError::UnsupportedSurface => None,
        }
    }
}

impl From<winit::error::OsError> for BackdropError {
    fn from(e: winit::error::OsError) -> Self {
        BackdropError::Window(e)
    }
}

impl From<wgpu::CreateSurfaceError> for BackdropError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        BackdropError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for BackdropError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        BackdropError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for BackdropError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        BackdropError::DeviceCreation(e)
    }
}
