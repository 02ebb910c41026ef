//! Read-only view of the game for renderers and HUDs

use glam::Vec2;
use serde::Serialize;

use super::cloud::Cloud;
use super::duck::Duck;
use super::particle::ParticleEffect;
use super::state::{GameState, ScreenMode};

/// Everything a renderer needs to paint one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub mode: ScreenMode,
    pub level: u32,
    pub total_levels: u32,
    pub health: u32,
    pub health_per_level: u32,
    pub score: u64,
    /// `None` while ammo is unlimited
    pub bullets: Option<u32>,
    pub hits: u32,
    pub ducks_to_clear: u32,
    /// Behind the ground and ducks
    pub clouds: &'a [Cloud],
    /// Back to front
    pub ducks: &'a [Duck],
    pub particles: &'a [ParticleEffect],
    pub crosshair: Vec2,
    pub banner: Option<&'a str>,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot<'_> {
        let config = self.config();
        Snapshot {
            mode: self.mode,
            level: self.level.level,
            total_levels: config.total_levels,
            health: self.level.health,
            health_per_level: config.health_per_level,
            score: self.score,
            bullets: self.level.bullets,
            hits: self.level.hits,
            ducks_to_clear: config.ducks_to_clear,
            clouds: &self.clouds,
            ducks: &self.level.ducks,
            particles: &self.particles,
            crosshair: self.crosshair,
            banner: self.banner.as_ref().map(|b| b.text.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(GameConfig::default(), 3).unwrap();
        state.insert_duck(Vec2::new(300.0, 200.0), Vec2::new(50.0, 0.0));
        state.set_crosshair(Vec2::new(2000.0, -5.0));

        let snap = state.snapshot();
        assert_eq!(snap.mode, ScreenMode::Playing);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.total_levels, 10);
        assert_eq!(snap.health, 5);
        assert_eq!(snap.bullets, None);
        assert_eq!(snap.ducks.len(), 1);
        assert_eq!(snap.clouds.len(), 7);
        assert_eq!(snap.crosshair, Vec2::new(1000.0, 0.0));
        assert_eq!(snap.banner, Some("Level 1 - Get 10 hits!"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(GameConfig::default(), 3).unwrap();
        state.insert_duck(Vec2::new(300.0, 200.0), Vec2::ZERO);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["mode"], "Playing");
        assert_eq!(json["bullets"], serde_json::Value::Null);
        assert_eq!(json["ducks"].as_array().map(Vec::len), Some(1));
    }
}
