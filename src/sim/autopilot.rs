//! Demo mode - the computer plays the game
//!
//! Drives the crosshair toward the nearest duck at a bounded speed and only
//! pulls the trigger when the shot is certain, so it never wastes bullets.

use super::state::{GameState, ScreenMode};
use super::tick::TickInput;

/// Aiming parameters for demo play
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Crosshair speed (pixels/s)
    pub aim_speed: f32,
    /// How far ahead to lead a moving duck (seconds)
    pub lead_secs: f32,
    /// Minimum time between shots (seconds)
    pub fire_cooldown: f32,
    /// Continue automatically from the level-cleared screen
    pub auto_advance: bool,
    cooldown: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            aim_speed: 900.0,
            lead_secs: 0.05,
            fire_cooldown: 0.25,
            auto_advance: true,
            cooldown: 0.0,
        }
    }
}

impl Autopilot {
    /// Decide this frame's input
    pub fn plan(&mut self, state: &GameState, dt: f32) -> TickInput {
        self.cooldown = (self.cooldown - dt).max(0.0);

        match state.mode {
            ScreenMode::Playing => {}
            ScreenMode::LevelCleared if self.auto_advance => {
                return TickInput {
                    advance: true,
                    ..Default::default()
                };
            }
            _ => return TickInput::default(),
        }

        let crosshair = state.crosshair;
        let Some(target) = state.level.ducks.iter().filter(|d| d.alive).min_by(|a, b| {
            a.pos
                .distance_squared(crosshair)
                .total_cmp(&b.pos.distance_squared(crosshair))
        }) else {
            return TickInput::default();
        };

        // Lead the target slightly, then step toward it
        let aim = target.pos + target.vel * self.lead_secs;
        let max_step = self.aim_speed * dt;
        let to_aim = aim - crosshair;
        let step = if to_aim.length() <= max_step {
            to_aim
        } else {
            to_aim.normalize_or_zero() * max_step
        };
        let next = crosshair + step;

        // Clicks resolve before ducks move, so current positions are exact
        let on_target = state.level.ducks.iter().any(|d| d.hit_test(next));
        let click = if on_target && self.cooldown <= 0.0 {
            self.cooldown = self.fire_cooldown;
            Some(next)
        } else {
            None
        };

        TickInput {
            crosshair: Some(next),
            click,
            ..Default::default()
        }
    }
}
