//! Particle types and GPU layout

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rand::Rng;

use crate::params::FieldParams;

/// Fixed particle palette
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Primary = 0,
    Accent = 1,
    Success = 2,
    Companion = 3,
    Warning = 4,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::Primary,
        PaletteColor::Accent,
        PaletteColor::Success,
        PaletteColor::Companion,
        PaletteColor::Warning,
    ];

    /// sRGB hex value, `0xRRGGBB`
    pub const fn hex(self) -> u32 {
        match self {
            PaletteColor::Primary => 0x0ea5e9,
            PaletteColor::Accent => 0x8b5cf6,
            PaletteColor::Success => 0x10b981,
            PaletteColor::Companion => 0xf472b6,
            PaletteColor::Warning => 0xf59e0b,
        }
    }

    /// Linear RGB, for an sRGB render target
    pub fn linear(self) -> [f32; 3] {
        hex_to_linear(self.hex())
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Converts `0xRRGGBB` sRGB to linear RGB components
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [channel(16), channel(8), channel(0)]
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// A single point of the field. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub color: PaletteColor,
    pub size: f32,
}

impl Particle {
    /// Samples a particle uniformly: position in the cube, color from the
    /// palette, size in `[min_size, max_size]`
    pub fn random(params: &FieldParams, rng: &mut impl Rng) -> Self {
        let mut coord = || (rng.random::<f32>() - 0.5) * 2.0 * params.half_extent;
        let position = Vec3::new(coord(), coord(), coord());
        let color = PaletteColor::random(rng);
        let size = rng.random::<f32>() * (params.max_size - params.min_size) + params.min_size;

        Self {
            position,
            color,
            size,
        }
    }

    pub fn to_gpu(&self) -> GpuParticle {
        let [r, g, b] = self.color.linear();
        GpuParticle {
            position: self.position.to_array(),
            size: self.size,
            color: [r, g, b, 1.0],
        }
    }
}

/// Generates `params.particle_count` independent particles
pub fn generate_particles(params: &FieldParams, rng: &mut impl Rng) -> Vec<Particle> {
    (0..params.particle_count)
        .map(|_| Particle::random(params, rng))
        .collect()
}

/// GPU-compatible particle, matches `Particle` in `points.wgsl`
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GpuParticle {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// One endpoint of a connection line
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}
