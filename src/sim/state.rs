//! Game state and core simulation types
//!
//! Everything the controller mutates lives here. The config is frozen at
//! construction; the RNG is seeded so a run can be replayed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cloud::Cloud;
use super::duck::Duck;
use super::level::LevelState;
use super::particle::ParticleEffect;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Which screen the game is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenMode {
    /// Active gameplay
    Playing,
    /// Frozen until resumed
    Paused,
    /// Level target met, waiting to continue
    LevelCleared,
    /// Final level cleared (terminal)
    Victory,
    /// Health ran out (terminal)
    Failed,
}

impl ScreenMode {
    /// Victory and Failed only exit through a restart
    pub fn is_terminal(self) -> bool {
        matches!(self, ScreenMode::Victory | ScreenMode::Failed)
    }
}

/// Notable things that happened since the last drain (sound/flash hooks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bullet was fired (hit or miss)
    Shot,
    Hit { points: u64 },
    Miss,
    /// Trigger pulled with an empty magazine
    DryFire,
    DuckEscaped,
    LevelStarted { level: u32 },
    LevelCleared { level: u32 },
    LevelFailed { level: u32 },
    Victory,
}

/// Transient HUD message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub text: String,
    /// Seconds left on screen
    pub remaining: f32,
}

/// Seed offset for the cloud layer's own RNG stream
const CLOUD_SEED_SALT: u64 = 0x636c_6f75_6473;

/// Banner display times (seconds)
pub const BANNER_LEVEL_START: f32 = 2.2;
pub const BANNER_LEVEL_END: f32 = 2.5;
pub const BANNER_HIT: f32 = 1.2;
pub const BANNER_MISS: f32 = 0.9;
pub const BANNER_WARNING: f32 = 1.6;

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Current screen
    pub mode: ScreenMode,
    /// Counters and roster for the active level
    pub level: LevelState,
    /// Score (carried across levels)
    pub score: u64,
    /// Visual bursts (not gameplay-affecting)
    pub particles: Vec<ParticleEffect>,
    /// Background clouds (not gameplay-affecting, survive restarts)
    pub clouds: Vec<Cloud>,
    /// Crosshair position (screen space)
    pub crosshair: Vec2,
    pub banner: Option<Banner>,
    /// Frames simulated while Playing
    pub time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
    /// Next duck id
    next_id: u32,
}

impl GameState {
    /// Validate the config and start level 1
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let level = LevelState::start(1, &config);
        let crosshair = Vec2::new(config.screen_width / 2.0, config.screen_height / 2.0);
        let mut cloud_rng = Pcg32::seed_from_u64(seed ^ CLOUD_SEED_SALT);
        let clouds = (0..config.cloud_count as usize)
            .map(|i| Cloud::random(i, config.screen_width, &mut cloud_rng))
            .collect();
        let mut state = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: ScreenMode::Playing,
            level,
            score: 0,
            particles: Vec::new(),
            clouds,
            crosshair,
            banner: None,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };
        state.announce_level();
        Ok(state)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Allocate a new duck id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a randomly placed duck for the current level to the front of the roster
    pub fn spawn_duck(&mut self) {
        let id = self.next_entity_id();
        let duck = Duck::spawn(id, self.level.level, &self.config, &mut self.rng);
        self.level.ducks.push(duck);
    }

    /// Place a specific duck at the front of the roster
    pub fn insert_duck(&mut self, pos: Vec2, vel: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.level.ducks.push(Duck::new(id, pos, vel, &self.config));
        id
    }

    /// Reset counters for `level` and resume play
    pub(crate) fn start_level(&mut self, level: u32) {
        self.level = LevelState::start(level, &self.config);
        self.particles.clear();
        self.mode = ScreenMode::Playing;
        self.announce_level();
    }

    fn announce_level(&mut self) {
        let level = self.level.level;
        log::info!(
            "Level {}/{} started (health {}, bullets {:?})",
            level,
            self.config.total_levels,
            self.level.health,
            self.level.bullets
        );
        self.push_event(GameEvent::LevelStarted { level });
        self.set_banner(
            format!("Level {} - Get {} hits!", level, self.config.ducks_to_clear),
            BANNER_LEVEL_START,
        );
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn set_banner(&mut self, text: impl Into<String>, seconds: f32) {
        self.banner = Some(Banner {
            text: text.into(),
            remaining: seconds,
        });
    }

    /// Move the crosshair (clamped to the screen)
    pub fn set_crosshair(&mut self, pos: Vec2) {
        let max = Vec2::new(self.config.screen_width, self.config.screen_height);
        self.crosshair = pos.clamp(Vec2::ZERO, max);
    }
}
