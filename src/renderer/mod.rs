//! CPU-side scene tessellation
//!
//! Turns a simulation snapshot into a flat list of POD vertices. Uploading and
//! presenting them is left to whatever GPU backend hosts the game.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::build_scene;
pub use vertex::{Vertex, as_bytes};
