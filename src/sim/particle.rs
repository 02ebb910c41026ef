//! Hit bursts (visual only, never affect gameplay)

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::sprite::Advance;
use crate::consts::SPARK_GRAVITY;

/// Seconds a burst stays on screen
pub const BURST_LIFETIME: f32 = 1.1;

/// One spark of a burst
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spark {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

/// Burst of sparks spawned where a duck was hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleEffect {
    pub origin: Vec2,
    /// Seconds left before the effect is pruned
    pub lifetime: f32,
    pub sparks: Vec<Spark>,
}

impl ParticleEffect {
    /// Spray `count` sparks upward and outward from `origin`
    pub fn burst<R: Rng + ?Sized>(origin: Vec2, count: u32, rng: &mut R) -> Self {
        let sparks = (0..count)
            .map(|_| Spark {
                pos: origin,
                vel: Vec2::new(
                    rng.random_range(-220.0..=220.0),
                    rng.random_range(-160.0..=-40.0),
                ),
                size: rng.random_range(2.0..=6.0),
            })
            .collect();

        Self {
            origin,
            lifetime: BURST_LIFETIME,
            sparks,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0.0
    }

    /// Remaining life in [0, 1] (1 = just spawned)
    pub fn life_fraction(&self) -> f32 {
        (self.lifetime / BURST_LIFETIME).clamp(0.0, 1.0)
    }
}

impl Advance for ParticleEffect {
    fn advance(&mut self, dt: f32) {
        self.lifetime -= dt;
        for spark in &mut self.sparks {
            spark.vel.y += SPARK_GRAVITY * dt;
            spark.pos += spark.vel * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_expires() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut effect = ParticleEffect::burst(Vec2::new(200.0, 200.0), 16, &mut rng);
        assert_eq!(effect.sparks.len(), 16);
        assert!(!effect.is_expired());
        assert_eq!(effect.life_fraction(), 1.0);

        for _ in 0..30 {
            effect.advance(1.0 / 60.0);
        }
        assert!(!effect.is_expired());
        assert!(effect.life_fraction() < 1.0);

        for _ in 0..40 {
            effect.advance(1.0 / 60.0);
        }
        assert!(effect.is_expired());
        assert_eq!(effect.life_fraction(), 0.0);
    }

    #[test]
    fn test_sparks_fall() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut effect = ParticleEffect::burst(Vec2::ZERO, 4, &mut rng);
        let before: Vec<f32> = effect.sparks.iter().map(|s| s.vel.y).collect();
        effect.advance(0.1);
        for (spark, vy) in effect.sparks.iter().zip(before) {
            assert!(spark.vel.y > vy);
        }
        assert_eq!(effect.origin, Vec2::ZERO);
    }
}
