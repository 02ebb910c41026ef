//! Duck motion, animation and hit region

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::hitbox::Aabb;
use super::sprite::Advance;
use crate::config::GameConfig;
use crate::consts::*;

/// Per-duck speed multiplier range (applied on top of the level curve)
pub const SPEED_JITTER: std::ops::Range<f32> = 0.95..1.30;

/// Vertical speed as a fraction of horizontal speed
const MAX_CLIMB_RATIO: f32 = 0.35;

/// Closed interval a duck's centre may occupy on one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// A single flying duck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Duck {
    /// Spawn-order id (higher = spawned later = drawn in front)
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Horizontal range the duck bounces inside
    pub bounds: Span,
    /// Vertical flight band (between HUD and horizon)
    pub band: Span,
    /// Wing flap phase in [0, TAU)
    pub flap: f32,
    pub alive: bool,
    /// Remaining wall bounces; at zero the duck flies off screen
    pub bounces_left: u32,
    /// Half size of the hit region
    pub half_extents: Vec2,
}

impl Duck {
    /// Create a duck with explicit motion; bounds and size come from the config
    pub fn new(id: u32, pos: Vec2, vel: Vec2, config: &GameConfig) -> Self {
        let (half_w, half_h) = config.duck_half_extents();
        Self {
            id,
            pos,
            vel,
            bounds: Span::new(half_w, config.screen_width - half_w),
            band: Span::new(
                HUD_HEIGHT + half_h,
                config.screen_height - GROUND_HEIGHT - half_h,
            ),
            flap: 0.0,
            alive: true,
            bounces_left: config.bounces_before_escape,
            half_extents: Vec2::new(half_w, half_h),
        }
    }

    /// Spawn a duck at a random screen edge, flying inward at the level's speed
    pub fn spawn<R: Rng + ?Sized>(id: u32, level: u32, config: &GameConfig, rng: &mut R) -> Self {
        let mut duck = Self::new(id, Vec2::ZERO, Vec2::ZERO, config);

        let from_left = rng.random_bool(0.5);
        let x = if from_left {
            duck.bounds.min
        } else {
            duck.bounds.max
        };
        let y = rng.random_range(duck.band.min..=duck.band.max);

        let speed = config.duck_speed(level) * rng.random_range(SPEED_JITTER);
        let dir = if from_left { 1.0 } else { -1.0 };
        let climb = rng.random_range(-MAX_CLIMB_RATIO..=MAX_CLIMB_RATIO);

        duck.pos = Vec2::new(x, y);
        duck.vel = Vec2::new(dir * speed, climb * speed);
        duck.flap = rng.random_range(0.0..TAU);
        duck
    }

    /// Hit region scaled by the configured duck scale
    pub fn hit_region(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half_extents)
    }

    /// Whether a click at `point` hits this duck
    pub fn hit_test(&self, point: Vec2) -> bool {
        self.alive && self.hit_region().contains(point)
    }

    pub fn facing_right(&self) -> bool {
        self.vel.x >= 0.0
    }

    /// True once the duck has used its bounces and left the screen
    pub fn has_escaped(&self, screen_width: f32) -> bool {
        self.bounces_left == 0
            && (self.pos.x < -ESCAPE_MARGIN || self.pos.x > screen_width + ESCAPE_MARGIN)
    }
}

impl Advance for Duck {
    fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;

        // Horizontal bounce while it still wants to stay
        if self.bounces_left > 0 {
            if self.pos.x < self.bounds.min && self.vel.x < 0.0 {
                self.pos.x = (2.0 * self.bounds.min - self.pos.x).min(self.bounds.max);
                self.vel.x = -self.vel.x;
                self.bounces_left -= 1;
            } else if self.pos.x > self.bounds.max && self.vel.x > 0.0 {
                self.pos.x = (2.0 * self.bounds.max - self.pos.x).max(self.bounds.min);
                self.vel.x = -self.vel.x;
                self.bounces_left -= 1;
            }
        }

        // Stay in the sky
        if self.pos.y < self.band.min && self.vel.y < 0.0 {
            self.pos.y = (2.0 * self.band.min - self.pos.y).min(self.band.max);
            self.vel.y = -self.vel.y;
        } else if self.pos.y > self.band.max && self.vel.y > 0.0 {
            self.pos.y = (2.0 * self.band.max - self.pos.y).max(self.band.min);
            self.vel.y = -self.vel.y;
        }

        self.flap = (self.flap + FLAP_RATE * dt).rem_euclid(TAU);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn duck_at(x: f32, vx: f32) -> Duck {
        Duck::new(1, Vec2::new(x, 300.0), Vec2::new(vx, 0.0), &GameConfig::default())
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let mut duck = duck_at(500.0, 120.0);
        duck.vel.y = -30.0;
        duck.advance(0.5);
        assert!((duck.pos.x - 560.0).abs() < 1e-4);
        assert!((duck.pos.y - 285.0).abs() < 1e-4);
    }

    #[test]
    fn test_bounces_at_right_bound() {
        let mut duck = duck_at(950.0, 200.0);
        let max = duck.bounds.max;
        duck.advance(0.1);
        assert!(duck.vel.x < 0.0);
        assert!(duck.pos.x <= max);
        assert_eq!(duck.bounces_left, 2);
    }

    #[test]
    fn test_bounces_at_left_bound() {
        let mut duck = duck_at(40.0, -200.0);
        duck.advance(0.1);
        assert!(duck.vel.x > 0.0);
        assert!(duck.pos.x >= duck.bounds.min);
    }

    #[test]
    fn test_flies_off_after_last_bounce() {
        let mut duck = duck_at(950.0, 200.0);
        duck.bounces_left = 0;
        for _ in 0..120 {
            duck.advance(1.0 / 60.0);
        }
        assert!(duck.vel.x > 0.0);
        assert!(duck.has_escaped(1000.0));
    }

    #[test]
    fn test_stays_in_flight_band() {
        let mut duck = duck_at(500.0, 0.0);
        duck.vel.y = -400.0;
        for _ in 0..600 {
            duck.advance(1.0 / 60.0);
            assert!(duck.pos.y >= duck.band.min - 1e-3);
            assert!(duck.pos.y <= duck.band.max + 1e-3);
        }
    }

    #[test]
    fn test_flap_wraps() {
        let mut duck = duck_at(500.0, 0.0);
        for _ in 0..1000 {
            duck.advance(1.0 / 60.0);
            assert!((0.0..TAU).contains(&duck.flap));
        }
    }

    #[test]
    fn test_hit_region_scales() {
        let config = GameConfig {
            duck_scale: 2.0,
            ..Default::default()
        };
        let duck = Duck::new(1, Vec2::new(500.0, 300.0), Vec2::ZERO, &config);
        assert!(duck.hit_test(Vec2::new(500.0 + 67.0, 300.0)));
        assert!(!duck.hit_test(Vec2::new(500.0 + 69.0, 300.0)));

        let small = duck_at(500.0, 0.0);
        assert!(!small.hit_test(Vec2::new(500.0 + 35.0, 300.0)));
    }

    #[test]
    fn test_dead_duck_cannot_be_hit() {
        let mut duck = duck_at(500.0, 0.0);
        duck.alive = false;
        assert!(!duck.hit_test(duck.pos));
    }

    #[test]
    fn test_spawn_is_on_screen_and_inward() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..50 {
            let duck = Duck::spawn(id, 3, &config, &mut rng);
            assert!(duck.pos.x == duck.bounds.min || duck.pos.x == duck.bounds.max);
            assert!(duck.pos.y >= duck.band.min && duck.pos.y <= duck.band.max);
            if duck.pos.x == duck.bounds.min {
                assert!(duck.vel.x > 0.0);
            } else {
                assert!(duck.vel.x < 0.0);
            }
            let speed = duck.vel.x.abs();
            assert!(speed >= config.duck_speed(3) * SPEED_JITTER.start - 1e-3);
            assert!(speed < config.duck_speed(3) * SPEED_JITTER.end);
        }
    }
}
