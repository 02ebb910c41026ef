//! Duck Hunt - A click-to-shoot arcade game
//!
//! Core modules:
//! - `sim`: Headless simulation (ducks, hits, level bookkeeping, screens)
//! - `config`: Session configuration and validation
//! - `hud`: HUD and overlay text derived from snapshots
//! - `renderer`: CPU-side scene tessellation into POD vertices

pub mod config;
pub mod error;
pub mod hud;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Unscaled duck sprite size
    pub const DUCK_WIDTH: f32 = 68.0;
    pub const DUCK_HEIGHT: f32 = 56.0;

    /// Wing flap rate (radians per second)
    pub const FLAP_RATE: f32 = 20.0;

    /// Height of the HUD strip at the top of the screen
    pub const HUD_HEIGHT: f32 = 54.0;
    /// Height of the grass strip at the bottom of the screen
    pub const GROUND_HEIGHT: f32 = 120.0;

    /// How far past the screen edge a duck must fly to count as escaped
    pub const ESCAPE_MARGIN: f32 = 140.0;

    /// Downward acceleration applied to hit sparks (pixels/s²)
    pub const SPARK_GRAVITY: f32 = 600.0;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
