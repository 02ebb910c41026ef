//! Per-frame update and input handling
//!
//! Events and ticks are applied strictly in the order received. Nothing here
//! blocks or touches rendering.

use glam::Vec2;
use rand::Rng;

use super::particle::ParticleEffect;
use super::sprite::advance_all;
use super::state::{
    BANNER_HIT, BANNER_LEVEL_END, BANNER_MISS, BANNER_WARNING, GameEvent, GameState, ScreenMode,
};

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Quit
    Escape,
    /// Pause/resume
    P,
    /// Skip level (debug)
    N,
}

/// What a click turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Not playing; nothing happened
    Ignored,
    Hit { duck_id: u32 },
    Miss,
    /// Empty magazine; counted as a miss
    DryFire,
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Crosshair position (mouse)
    pub crosshair: Option<Vec2>,
    /// Shot fired at this point
    pub click: Option<Vec2>,
    /// Pause toggle
    pub pause: bool,
    /// Skip to the end of the level (debug)
    pub skip_level: bool,
    /// Continue from the level-cleared screen
    pub advance: bool,
    /// Restart from a terminal screen
    pub restart: bool,
}

/// Apply one frame of input, then advance the simulation by `dt`
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if let Some(pos) = input.crosshair {
        state.set_crosshair(pos);
    }
    if input.pause {
        state.toggle_pause();
    }
    if input.skip_level {
        state.skip_level();
    }
    if input.advance {
        state.advance_level();
    }
    if input.restart {
        state.restart();
    }
    if let Some(point) = input.click {
        state.on_click(point);
    }
    state.on_frame_tick(dt);
}

impl GameState {
    /// Advance clouds, ducks, bursts, escapes and spawning by one frame
    pub fn on_frame_tick(&mut self, dt: f32) {
        if self.mode == ScreenMode::Paused {
            return;
        }

        advance_all(&mut self.clouds, dt);

        if let Some(banner) = &mut self.banner {
            banner.remaining -= dt;
            if banner.remaining <= 0.0 {
                self.banner = None;
            }
        }

        if self.mode != ScreenMode::Playing {
            return;
        }

        self.time_ticks += 1;

        advance_all(&mut self.level.ducks, dt);
        advance_all(&mut self.particles, dt);
        self.particles.retain(|p| !p.is_expired());

        // Ducks that flew off screen
        let screen_width = self.config().screen_width;
        let before = self.level.ducks.len();
        self.level.ducks.retain(|d| !d.has_escaped(screen_width));
        let escaped = before - self.level.ducks.len();
        for _ in 0..escaped {
            log::debug!("Duck escaped on level {}", self.level.level);
            self.push_event(GameEvent::DuckEscaped);
            let penalty = self.config().escape_penalty;
            self.level.apply_damage(penalty);
        }
        if escaped > 0 {
            let text = match self.config().escape_penalty {
                0 => "Duck escaped!".to_string(),
                penalty => format!("Duck escaped! -{penalty} health"),
            };
            self.set_banner(text, BANNER_WARNING);
        }

        self.spawn_due_ducks(dt);
        self.on_level_tick();
    }

    fn spawn_due_ducks(&mut self, dt: f32) {
        let interval = self.config().spawn_interval_for(self.level.level);
        self.level.spawn_timer += dt;
        if self.level.spawn_timer < interval {
            return;
        }

        let mut spawned = 0;
        while self.level.wants_duck(self.config()) {
            self.spawn_duck();
            spawned += 1;
            // A zero interval fills the roster at once
            if interval > 0.0 {
                break;
            }
        }
        if spawned == 0 {
            return;
        }
        self.level.spawn_timer = 0.0;

        // Later levels sometimes send a pair
        let chance = self.config().bonus_duck_chance(self.level.level);
        if chance > 0.0 && self.level.wants_duck(self.config()) && self.rng.random_bool(chance) {
            log::debug!("Bonus duck on level {}", self.level.level);
            self.spawn_duck();
        }
    }

    /// Fire at `point`; at most one duck (the front-most under the point) is hit
    pub fn on_click(&mut self, point: Vec2) -> ShotOutcome {
        if self.mode != ScreenMode::Playing {
            return ShotOutcome::Ignored;
        }

        if !self.level.take_shot() {
            log::debug!("Dry fire on level {}", self.level.level);
            self.push_event(GameEvent::DryFire);
            self.set_banner("No bullets!", BANNER_WARNING);
            self.register_miss();
            self.on_level_tick();
            return ShotOutcome::DryFire;
        }
        self.push_event(GameEvent::Shot);

        // Front-to-back: most recently spawned first
        let target = self.level.ducks.iter().rposition(|d| d.hit_test(point));
        let outcome = match target {
            Some(idx) => {
                let duck = self.level.take_hit_duck(idx);
                let sparks = self.config().sparks_per_hit;
                let burst = ParticleEffect::burst(point, sparks, &mut self.rng);
                self.particles.push(burst);

                let points = self.config().points_for_hit(self.level.level);
                self.level.record_hit(&self.config);
                self.score += points;
                log::debug!(
                    "Hit duck {} (+{}), {}/{}",
                    duck.id,
                    points,
                    self.level.hits,
                    self.config().ducks_to_clear
                );
                self.push_event(GameEvent::Hit { points });
                self.set_banner("Hit!", BANNER_HIT);
                ShotOutcome::Hit { duck_id: duck.id }
            }
            None => {
                log::debug!("Miss at ({:.0}, {:.0})", point.x, point.y);
                self.push_event(GameEvent::Miss);
                self.set_banner("Miss!", BANNER_MISS);
                self.register_miss();
                ShotOutcome::Miss
            }
        };

        self.on_level_tick();
        outcome
    }

    fn register_miss(&mut self) {
        let penalty = self.config().miss_penalty;
        self.level.apply_damage(penalty);
    }

    /// Check for failure or level completion
    pub fn on_level_tick(&mut self) {
        if self.mode != ScreenMode::Playing {
            return;
        }
        if self.level.is_out_of_health() {
            self.fail_level();
        } else if self.level.is_cleared(self.config()) {
            self.complete_level();
        }
    }

    fn fail_level(&mut self) {
        let level = self.level.level;
        log::info!("Level {} failed (score {})", level, self.score);
        self.mode = ScreenMode::Failed;
        self.push_event(GameEvent::LevelFailed { level });
        self.set_banner(format!("Level {level} failed."), BANNER_LEVEL_END);
    }

    fn complete_level(&mut self) {
        let level = self.level.level;
        self.push_event(GameEvent::LevelCleared { level });
        self.set_banner(format!("Level {level} complete!"), BANNER_LEVEL_END);

        if level >= self.config().total_levels {
            log::info!("All {} levels cleared, final score {}", level, self.score);
            self.mode = ScreenMode::Victory;
            self.push_event(GameEvent::Victory);
        } else {
            log::info!("Level {} cleared (score {})", level, self.score);
            self.mode = ScreenMode::LevelCleared;
        }
    }

    /// Move on from LevelCleared. Returns false if not on that screen.
    pub fn advance_level(&mut self) -> bool {
        if self.mode != ScreenMode::LevelCleared {
            return false;
        }
        let next = self.level.level + 1;
        self.start_level(next);
        true
    }

    /// Playing <-> Paused; ignored on every other screen
    pub fn toggle_pause(&mut self) {
        self.mode = match self.mode {
            ScreenMode::Playing => {
                log::debug!("Paused");
                ScreenMode::Paused
            }
            ScreenMode::Paused => {
                log::debug!("Resumed");
                ScreenMode::Playing
            }
            other => other,
        };
    }

    /// Debug: finish the level without meeting the hit target
    pub fn skip_level(&mut self) {
        if self.mode != ScreenMode::Playing {
            return;
        }
        log::info!("Skipping level {}", self.level.level);
        self.complete_level();
    }

    /// Leave a terminal screen: retry after Failed, new game after Victory.
    /// Returns false on any other screen.
    pub fn restart(&mut self) -> bool {
        match self.mode {
            ScreenMode::Failed => {
                let level = self.level.level;
                self.start_level(level);
                true
            }
            ScreenMode::Victory => {
                self.score = 0;
                self.start_level(1);
                true
            }
            _ => false,
        }
    }

    /// Handle a key press. Returns true when the front end should quit.
    pub fn on_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape => return true,
            Key::P => self.toggle_pause(),
            Key::N => self.skip_level(),
        }
        false
    }
}
