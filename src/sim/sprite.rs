//! Shared per-frame update for everything that moves on screen
//!
//! Ducks, hit bursts and clouds are all stepped through this trait with
//! static dispatch.

/// Something advanced once per frame by `dt` seconds
pub trait Advance {
    fn advance(&mut self, dt: f32);
}

/// Advance every item in a slice
pub fn advance_all<T: Advance>(items: &mut [T], dt: f32) {
    for item in items {
        item.advance(dt);
    }
}
