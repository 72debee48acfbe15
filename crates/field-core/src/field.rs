//! The generated particle field

use glam::Vec3;
use rand::Rng;

use crate::connections::{find_connections, Connection};
use crate::params::FieldParams;
use crate::particle::{generate_particles, GpuParticle, LineVertex, Particle};

/// Particles and their connections, fixed for the lifetime of the process
pub struct ParticleField {
    particles: Vec<Particle>,
    connections: Vec<Connection>,
}

impl ParticleField {
    pub fn generate(params: &FieldParams, rng: &mut impl Rng) -> Self {
        let particles = generate_particles(params, rng);
        Self::from_particles(particles, params)
    }

    /// Builds a field over an existing particle set, computing connections
    pub fn from_particles(particles: Vec<Particle>, params: &FieldParams) -> Self {
        let positions: Vec<Vec3> = particles.iter().map(|p| p.position).collect();
        let connections = find_connections(
            &positions,
            params.connection_distance,
            params.max_connections,
        );

        Self {
            particles,
            connections,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn gpu_particles(&self) -> Vec<GpuParticle> {
        self.particles.iter().map(Particle::to_gpu).collect()
    }

    /// Two vertices per connection, in connection order
    pub fn line_vertices(&self) -> Vec<LineVertex> {
        self.connections
            .iter()
            .flat_map(|c| [c.a, c.b])
            .map(|i| LineVertex {
                position: self.particles[i as usize].position.to_array(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaletteColor;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_field() {
        let params = FieldParams::default();
        let mut rng = StdRng::seed_from_u64(1234);
        let field = ParticleField::generate(&params, &mut rng);

        assert_eq!(field.particles().len(), 800);
        assert!(field.connections().len() <= 200);

        for p in field.particles() {
            assert!(p.position.abs().max_element() <= 10.0);
            assert!(p.size >= 0.5 && p.size <= 2.5);
            assert!(PaletteColor::ALL.contains(&p.color));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let params = FieldParams::default();
        let a = ParticleField::generate(&params, &mut StdRng::seed_from_u64(9));
        let b = ParticleField::generate(&params, &mut StdRng::seed_from_u64(9));

        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.connections(), b.connections());
    }

    #[test]
    fn test_line_vertices_follow_connections() {
        let particles = vec![
            Particle {
                position: Vec3::ZERO,
                color: PaletteColor::Primary,
                size: 1.0,
            },
            Particle {
                position: Vec3::new(9.0, 0.0, 0.0),
                color: PaletteColor::Accent,
                size: 1.0,
            },
            Particle {
                position: Vec3::new(0.0, 1.0, 0.0),
                color: PaletteColor::Success,
                size: 1.0,
            },
        ];
        let field = ParticleField::from_particles(particles, &FieldParams::default());

        assert_eq!(field.connections().len(), 1);
        let vertices = field.line_vertices();
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(vertices[1].position, [0.0, 1.0, 0.0]);
        assert_eq!(field.gpu_particles().len(), 3);
    }
}
