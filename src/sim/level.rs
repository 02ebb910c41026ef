//! Per-level counters and the active duck roster

use serde::Serialize;

use super::duck::Duck;
use crate::config::GameConfig;

/// Everything that resets when a level (re)starts
#[derive(Debug, Clone, Serialize)]
pub struct LevelState {
    /// 1-based level index
    pub level: u32,
    pub health: u32,
    /// Hits landed this level (never above `ducks_to_clear`)
    pub hits: u32,
    /// `None` while ammo is unlimited
    pub bullets: Option<u32>,
    /// Live ducks in spawn order (last = front-most)
    pub ducks: Vec<Duck>,
    /// Seconds since the last spawn
    pub spawn_timer: f32,
}

impl LevelState {
    /// Fresh counters for `level`
    pub fn start(level: u32, config: &GameConfig) -> Self {
        Self {
            level,
            health: config.health_per_level,
            hits: 0,
            bullets: config.starting_bullets(level),
            ducks: Vec::new(),
            spawn_timer: 0.0,
        }
    }

    pub fn hits_remaining(&self, config: &GameConfig) -> u32 {
        config.ducks_to_clear.saturating_sub(self.hits)
    }

    pub fn is_cleared(&self, config: &GameConfig) -> bool {
        self.hits >= config.ducks_to_clear
    }

    pub fn is_out_of_health(&self) -> bool {
        self.health == 0
    }

    /// Consume a bullet if ammo is tracked. Returns false on a dry fire.
    pub fn take_shot(&mut self) -> bool {
        match &mut self.bullets {
            Some(0) => false,
            Some(n) => {
                *n -= 1;
                true
            }
            None => true,
        }
    }

    pub fn record_hit(&mut self, config: &GameConfig) {
        self.hits = (self.hits + 1).min(config.ducks_to_clear);
    }

    /// Remove health, flooring at zero. Returns true if health ran out.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.is_out_of_health()
    }

    /// Mark the duck at `idx` dead and take it out of the roster
    pub fn take_hit_duck(&mut self, idx: usize) -> Duck {
        let mut duck = self.ducks.remove(idx);
        duck.alive = false;
        duck
    }

    /// Below the concurrency cap with hits still to land
    pub fn wants_duck(&self, config: &GameConfig) -> bool {
        self.ducks.len() < config.ducks_on_screen(self.level) && self.hits_remaining(config) > 0
    }
}
