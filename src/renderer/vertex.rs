//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (screen pixels, y down) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes for a GPU upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Scale a color's alpha
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * alpha]
}

/// Darken a color by `amount` (0-1) on every channel
pub fn shade(color: [f32; 4], amount: f32) -> [f32; 4] {
    [
        (color[0] - amount).max(0.0),
        (color[1] - amount).max(0.0),
        (color[2] - amount).max(0.0),
        color[3],
    ]
}

/// Colors for game elements
pub mod colors {
    pub const SKY_TOP: [f32; 4] = [0.557, 0.776, 1.0, 1.0];
    pub const SKY_BOTTOM: [f32; 4] = [0.345, 0.592, 0.843, 1.0];
    pub const GRASS: [f32; 4] = [0.235, 0.569, 0.275, 1.0];
    pub const GROUND_DARK: [f32; 4] = [0.137, 0.392, 0.157, 1.0];
    pub const DUCK_HEAD: [f32; 4] = [0.235, 0.275, 0.373, 1.0];
    pub const BEAK: [f32; 4] = [0.941, 0.784, 0.235, 1.0];
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.35];
    pub const SPARK: [f32; 4] = [1.0, 0.863, 0.431, 1.0];
    pub const HUD_PANEL: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
    pub const HEART_FULL: [f32; 4] = [1.0, 0.314, 0.353, 1.0];
    pub const HEART_EMPTY: [f32; 4] = [0.863, 0.863, 0.863, 1.0];
    pub const CROSSHAIR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const OVERLAY_DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.35];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let verts = [Vertex::new(1.0, 2.0, colors::SPARK); 3];
        assert_eq!(as_bytes(&verts).len(), 72);
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(with_alpha([1.0, 1.0, 1.0, 0.5], 0.5)[3], 0.25);
        assert_eq!(shade([0.125, 0.5, 1.0, 1.0], 0.25), [0.0, 0.25, 0.75, 1.0]);
    }
}
