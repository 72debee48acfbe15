//! Startup configuration

use field_core::{FieldParams, MotionParams};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeds the particle generator when set to an unsigned integer
pub const SEED_ENV: &str = "AIMES_SEED";

#[derive(Clone, Debug, Default)]
pub struct BackdropConfig {
    pub field: FieldParams,
    pub motion: MotionParams,
    pub seed: Option<u64>,
}

impl BackdropConfig {
    pub fn from_env() -> Self {
        Self {
            seed: parse_seed(std::env::var(SEED_ENV).ok().as_deref()),
            ..Self::default()
        }
    }

    /// Seeded generator when a seed is configured, OS entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

fn parse_seed(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim();
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("ignoring {}={:?}: {}", SEED_ENV, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_core::ParticleField;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(None), None);
        assert_eq!(parse_seed(Some("42")), Some(42));
        assert_eq!(parse_seed(Some(" 7 ")), Some(7));
        assert_eq!(parse_seed(Some("not-a-number")), None);
        assert_eq!(parse_seed(Some("-1")), None);
    }

    #[test]
    fn test_seeded_config_reproduces_field() {
        let config = BackdropConfig {
            seed: Some(2024),
            ..BackdropConfig::default()
        };
        let a = ParticleField::generate(&config.field, &mut config.rng());
        let b = ParticleField::generate(&config.field, &mut config.rng());
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_defaults() {
        let config = BackdropConfig::default();
        assert_eq!(config.field.particle_count, 800);
        assert_eq!(config.field.max_connections, 200);
        assert_eq!(config.motion.pursuit_rate, 0.02);
        assert_eq!(config.seed, None);
    }
}
