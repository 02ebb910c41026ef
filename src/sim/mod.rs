//! Headless simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Stable iteration order (ducks in spawn order)
//! - No rendering, windowing or audio dependencies

pub mod autopilot;
pub mod cloud;
pub mod duck;
pub mod hitbox;
pub mod level;
pub mod particle;
pub mod snapshot;
pub mod sprite;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use cloud::{Cloud, Puff};
pub use duck::{Duck, Span};
pub use hitbox::Aabb;
pub use level::LevelState;
pub use particle::{ParticleEffect, Spark};
pub use snapshot::Snapshot;
pub use sprite::{Advance, advance_all};
pub use state::{Banner, GameEvent, GameState, ScreenMode};
pub use tick::{Key, ShotOutcome, TickInput, tick};
