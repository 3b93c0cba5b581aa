//! Shape generation for 2D primitives
//!
//! Every helper appends a triangle list to `out`.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Segments used for small round shapes (stars, particles, bullets)
pub const ROUND_SEGMENTS: u32 = 12;

/// Filled axis-aligned rectangle from its top-left corner
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    let max = min + size;
    out.extend_from_slice(&[
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]);
}

/// Filled triangle
pub fn triangle(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.extend_from_slice(&[
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]);
}

/// Filled axis-aligned ellipse
pub fn ellipse(out: &mut Vec<Vertex>, center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) {
    let segments = segments.max(3);
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }
}

/// Filled circle
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    ellipse(out, center, Vec2::splat(radius), color, segments);
}
