//! Session configuration
//!
//! Loaded once at startup (JSON, every field optional) and then frozen inside
//! the `GameState` for the lifetime of the session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables for a play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Progression ===
    /// Number of levels before Victory
    pub total_levels: u32,
    /// Starting health on every level (re)start
    pub health_per_level: u32,
    /// Hits needed to clear a level
    pub ducks_to_clear: u32,
    /// Bullets granted per level once ammo is limited
    pub bullets_after_level_5: u32,
    /// First level with a limited bullet budget
    pub ammo_from_level: u32,

    // === Penalties ===
    /// Health lost per missed shot (including dry fire)
    pub miss_penalty: u32,
    /// Health lost when a duck flies off screen
    pub escape_penalty: u32,

    // === Ducks ===
    /// Seed speed for the difficulty curve (pixels/s)
    pub duck_base_speed: f32,
    /// Fractional speed increase per level above the first
    pub speed_growth_per_level: f32,
    /// Visual and hit-region scale factor
    pub duck_scale: f32,
    /// Wall bounces before a duck gives up and flies away
    pub bounces_before_escape: u32,
    /// Concurrent ducks on level 1
    pub ducks_on_screen_base: u32,
    /// Upper bound on concurrent ducks
    pub ducks_on_screen_max: u32,
    /// Levels per extra concurrent duck
    pub ducks_on_screen_every: u32,
    /// Extra chance per level above the first that a spawn brings a second duck
    pub bonus_duck_chance_per_level: f64,
    /// Upper bound on the second-duck chance
    pub bonus_duck_chance_max: f64,
    /// Seconds between spawns on level 1
    pub spawn_interval: f32,
    /// Spawn interval reduction per level
    pub spawn_interval_step: f32,
    /// Floor for the spawn interval
    pub spawn_interval_min: f32,

    // === Scoring ===
    pub score_per_hit: u64,
    pub score_level_bonus: u64,

    // === Cosmetics ===
    /// Sparks per hit burst
    pub sparks_per_hit: u32,
    /// Drifting clouds behind the ducks
    pub cloud_count: u32,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_levels: 10,
            health_per_level: 5,
            ducks_to_clear: 10,
            bullets_after_level_5: 15,
            ammo_from_level: 6,

            miss_penalty: 1,
            escape_penalty: 1,

            duck_base_speed: 120.0,
            speed_growth_per_level: 0.12,
            duck_scale: 1.0,
            bounces_before_escape: 3,
            ducks_on_screen_base: 2,
            ducks_on_screen_max: 5,
            ducks_on_screen_every: 3,
            bonus_duck_chance_per_level: 0.06,
            bonus_duck_chance_max: 0.45,
            spawn_interval: 1.2,
            spawn_interval_step: 0.08,
            spawn_interval_min: 0.35,

            score_per_hit: 100,
            score_level_bonus: 20,

            sparks_per_hit: 16,
            cloud_count: 7,
            screen_width: 1000.0,
            screen_height: 640.0,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject limits the game loop has no defined behavior for
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("total_levels", self.total_levels),
            ("health_per_level", self.health_per_level),
            ("ducks_to_clear", self.ducks_to_clear),
            ("ammo_from_level", self.ammo_from_level),
            ("ducks_on_screen_base", self.ducks_on_screen_base),
            ("ducks_on_screen_every", self.ducks_on_screen_every),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::invalid(field, "must be at least 1"));
            }
        }

        if self.ducks_on_screen_max < self.ducks_on_screen_base {
            return Err(ConfigError::invalid(
                "ducks_on_screen_max",
                format!(
                    "{} is below ducks_on_screen_base ({})",
                    self.ducks_on_screen_max, self.ducks_on_screen_base
                ),
            ));
        }

        let strictly_positive = [
            ("duck_base_speed", self.duck_base_speed),
            ("duck_scale", self.duck_scale),
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
        ];
        for (field, value) in strictly_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("{value} is not a positive number"),
                ));
            }
        }

        let non_negative = [
            ("speed_growth_per_level", self.speed_growth_per_level),
            ("spawn_interval", self.spawn_interval),
            ("spawn_interval_step", self.spawn_interval_step),
            ("spawn_interval_min", self.spawn_interval_min),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("{value} must be zero or greater"),
                ));
            }
        }

        let chances = [
            ("bonus_duck_chance_per_level", self.bonus_duck_chance_per_level),
            ("bonus_duck_chance_max", self.bonus_duck_chance_max),
        ];
        for (field, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(
                    field,
                    format!("{value} is not a probability"),
                ));
            }
        }

        if crate::consts::DUCK_WIDTH * self.duck_scale >= self.screen_width {
            return Err(ConfigError::invalid(
                "screen_width",
                format!(
                    "{} is too narrow for a duck at scale {}",
                    self.screen_width, self.duck_scale
                ),
            ));
        }

        // Ducks spawn inside the flight band; it has to exist
        let band = self.screen_height - crate::consts::HUD_HEIGHT - crate::consts::GROUND_HEIGHT;
        if band <= self.duck_half_extents().1 * 2.0 {
            return Err(ConfigError::invalid(
                "screen_height",
                format!("{} leaves no room for ducks to fly", self.screen_height),
            ));
        }

        Ok(())
    }

    /// Whether bullets are tracked on this level
    pub fn has_limited_ammo(&self, level: u32) -> bool {
        level >= self.ammo_from_level
    }

    /// Bullets granted at the start of a level (`None` = unlimited)
    pub fn starting_bullets(&self, level: u32) -> Option<u32> {
        self.has_limited_ammo(level).then_some(self.bullets_after_level_5)
    }

    /// Mean duck speed on a level (before per-duck jitter)
    pub fn duck_speed(&self, level: u32) -> f32 {
        let steps = level.saturating_sub(1) as f32;
        self.duck_base_speed * (1.0 + steps * self.speed_growth_per_level)
    }

    /// Seconds between spawns on a level
    pub fn spawn_interval_for(&self, level: u32) -> f32 {
        let steps = level.saturating_sub(1) as f32;
        (self.spawn_interval - steps * self.spawn_interval_step).max(self.spawn_interval_min)
    }

    /// Chance that a spawn on `level` brings a second duck
    pub fn bonus_duck_chance(&self, level: u32) -> f64 {
        let steps = f64::from(level.saturating_sub(1));
        (steps * self.bonus_duck_chance_per_level).clamp(0.0, self.bonus_duck_chance_max)
    }

    /// Concurrent duck cap on a level
    pub fn ducks_on_screen(&self, level: u32) -> usize {
        let extra = level.saturating_sub(1) / self.ducks_on_screen_every;
        (self.ducks_on_screen_base + extra).min(self.ducks_on_screen_max) as usize
    }

    /// Score awarded per hit on a level
    pub fn points_for_hit(&self, level: u32) -> u64 {
        self.score_per_hit + u64::from(level) * self.score_level_bonus
    }

    /// Half width and half height of a duck's hit region
    pub fn duck_half_extents(&self) -> (f32, f32) {
        (
            crate::consts::DUCK_WIDTH * self.duck_scale / 2.0,
            crate::consts::DUCK_HEIGHT * self.duck_scale / 2.0,
        )
    }
}
