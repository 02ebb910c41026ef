//! Drifting background clouds
//!
//! Purely cosmetic. Clouds keep drifting on every screen except Paused and
//! wrap around once they are well past an edge.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::sprite::Advance;

/// Cloud size at scale 1.0
pub const CLOUD_SIZE: Vec2 = Vec2::new(260.0, 80.0);
/// Overlapping ellipses per cloud
pub const PUFFS_PER_CLOUD: usize = 6;

/// How far past the right edge a cloud travels before wrapping
const EXIT_RIGHT: f32 = 100.0;
/// How far past the left edge a cloud travels before wrapping
const EXIT_LEFT: f32 = 200.0;
/// Largest random re-entry gap off screen
const MAX_REENTRY_GAP: f32 = 200.0;

/// One soft ellipse inside a cloud, relative to the cloud's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Puff {
    pub center: Vec2,
    pub radii: Vec2,
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal drift (pixels/s, negative = leftward)
    pub speed: f32,
    pub puffs: Vec<Puff>,
    /// Off-screen distance used when the cloud wraps
    pub reentry_gap: f32,
    screen_width: f32,
}

impl Cloud {
    /// Random cloud in the upper sky; every other cloud drifts at half speed
    pub fn random<R: Rng + ?Sized>(index: usize, screen_width: f32, rng: &mut R) -> Self {
        let x: f32 = rng.random_range(-400.0..=screen_width + 400.0);
        let y: f32 = rng.random_range(30.0..=180.0);
        let scale: f32 = rng.random_range(0.6..1.4);
        let depth: f32 = if index % 2 == 0 { 0.5 } else { 1.0 };
        let mut speed = rng.random_range(8.0f32..30.0) * depth;
        if rng.random_bool(0.4) {
            speed = -speed;
        }

        let size = CLOUD_SIZE * scale;
        let puffs = (0..PUFFS_PER_CLOUD)
            .map(|i| {
                let extent = Vec2::new(
                    size.x * rng.random_range(0.2f32..0.8),
                    size.y * rng.random_range(0.5f32..0.9),
                );
                let corner = Vec2::new(
                    rng.random_range(0.0f32..1.0) * (size.x - extent.x),
                    rng.random_range(0.0f32..1.0) * (size.y - extent.y),
                );
                Puff {
                    center: corner + extent / 2.0,
                    radii: extent / 2.0,
                    alpha: (200.0 - i as f32 * 20.0) / 255.0,
                }
            })
            .collect();

        Self {
            pos: Vec2::new(x, y),
            size,
            speed,
            puffs,
            reentry_gap: rng.random_range(0.0..=MAX_REENTRY_GAP),
            screen_width,
        }
    }

    /// A fixed cloud (tests and hand-built scenes)
    pub fn new(pos: Vec2, size: Vec2, speed: f32, screen_width: f32) -> Self {
        Self {
            pos,
            size,
            speed,
            puffs: vec![Puff {
                center: size / 2.0,
                radii: size / 2.0,
                alpha: 200.0 / 255.0,
            }],
            reentry_gap: 0.0,
            screen_width,
        }
    }
}

impl Advance for Cloud {
    fn advance(&mut self, dt: f32) {
        self.pos.x += self.speed * dt;

        if self.speed > 0.0 && self.pos.x - self.size.x > self.screen_width + EXIT_RIGHT {
            self.pos.x = -self.size.x - self.reentry_gap;
        } else if self.speed < 0.0 && self.pos.x + self.size.x < -EXIT_LEFT {
            self.pos.x = self.screen_width + self.reentry_gap;
        }
    }
}
