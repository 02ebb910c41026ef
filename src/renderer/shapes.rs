//! Shape generation for 2D primitives
//!
//! Every function returns a flat triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::lerp;

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), color, segments)
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.extend(quad(inner1, outer1, outer2, inner2, color));
    }

    vertices
}

/// Two triangles covering the quad `a b c d` (in winding order)
pub fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(a.x, a.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Axis-aligned filled rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    quad(
        min,
        Vec2::new(max.x, min.y),
        max,
        Vec2::new(min.x, max.y),
        color,
    )
}

/// Line segment with thickness
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> [Vertex; 6] {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    quad(from + perp, to + perp, to - perp, from - perp, color)
}

/// Triangle from three points
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> [Vertex; 3] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Vertical gradient made of `bands` horizontal strips
pub fn vertical_gradient(
    min: Vec2,
    size: Vec2,
    top: [f32; 4],
    bottom: [f32; 4],
    bands: u32,
) -> Vec<Vertex> {
    let bands = bands.max(1);
    let band_h = size.y / bands as f32;
    let mut vertices = Vec::with_capacity((bands * 6) as usize);

    for i in 0..bands {
        let t = (i as f32 + 0.5) / bands as f32;
        let color = [
            lerp(top[0], bottom[0], t),
            lerp(top[1], bottom[1], t),
            lerp(top[2], bottom[2], t),
            lerp(top[3], bottom[3], t),
        ];
        let y = min.y + i as f32 * band_h;
        vertices.extend(rect(Vec2::new(min.x, y), Vec2::new(size.x, band_h), color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::ZERO, 10.0, WHITE, 16);
        assert_eq!(verts.len(), 48);
        for v in verts.iter().skip(1).step_by(3) {
            let r = Vec2::from(v.position).length();
            assert!((r - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_ellipse_respects_radii() {
        let verts = ellipse(Vec2::new(5.0, 5.0), Vec2::new(20.0, 10.0), WHITE, 4);
        // First edge vertex sits on the +x axis
        assert_eq!(verts[1].position, [25.0, 5.0]);
    }

    #[test]
    fn test_ring_and_rect() {
        assert_eq!(ring(Vec2::ZERO, 5.0, 8.0, WHITE, 12).len(), 72);
        let r = rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), WHITE);
        assert_eq!(r[2].position, [4.0, 6.0]);
    }

    #[test]
    fn test_line_width() {
        let l = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, WHITE);
        assert_eq!(l[0].position, [0.0, 1.0]);
        assert_eq!(l[2].position, [10.0, -1.0]);
    }

    #[test]
    fn test_gradient_blends() {
        let verts = vertical_gradient(Vec2::ZERO, Vec2::new(100.0, 100.0), WHITE, [0.0; 4], 4);
        assert_eq!(verts.len(), 24);
        assert!(verts[0].color[0] > verts[23].color[0]);
    }
}
