//! HUD and overlay text
//!
//! Pure string formatting from a snapshot; fonts and layout belong to the
//! renderer.

use crate::sim::{ScreenMode, Snapshot};

/// Status line items, left to right
pub fn hud_lines(snap: &Snapshot<'_>) -> Vec<String> {
    let bullets = match snap.bullets {
        Some(n) => n.to_string(),
        None => "∞".to_string(),
    };
    vec![
        format!("Level: {}/{}", snap.level, snap.total_levels),
        format!("Score: {}", snap.score),
        format!("Health: {}/{}", snap.health, snap.health_per_level),
        format!("Bullets: {bullets}"),
        format!("Hits: {}/{}", snap.hits, snap.ducks_to_clear),
    ]
}

/// Full-screen title and subtitle for non-playing screens
pub fn overlay(snap: &Snapshot<'_>) -> Option<(String, &'static str)> {
    match snap.mode {
        ScreenMode::Playing => None,
        ScreenMode::Paused => Some(("Paused".to_string(), "Press P to resume")),
        ScreenMode::LevelCleared => Some((
            format!("Level {} Cleared!", snap.level),
            "Click to continue",
        )),
        ScreenMode::Failed => Some(("Level Failed".to_string(), "Click to retry level")),
        ScreenMode::Victory => Some((
            "Victory!".to_string(),
            "You cleared all levels. Click to restart.",
        )),
    }
}
