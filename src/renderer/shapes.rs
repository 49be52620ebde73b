//! Shape generation for 2D primitives

use std::f32::consts::PI;

use glam::Vec2;

use super::font::{self, GLYPH_ADVANCE, GLYPH_HEIGHT};
use super::vertex::Vertex;
use crate::sim::Rect;

/// Generate vertices for a filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_quad(&mut vertices, r.left(), r.top(), r.right(), r.bottom(), color);
    vertices
}

/// Generate vertices for a filled ellipse inscribed in `bounds`
pub fn ellipse(bounds: &Rect, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let center = bounds.center();
    let radii = bounds.size / 2.0;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        let p1 = center + radii * Vec2::new(theta1.cos(), theta1.sin());
        let p2 = center + radii * Vec2::new(theta2.cos(), theta2.sin());
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Width in pixels of `s` drawn at `scale` (no trailing spacing)
pub fn text_width(s: &str, scale: f32) -> f32 {
    let chars = s.chars().count();
    if chars == 0 {
        return 0.0;
    }
    ((chars * GLYPH_ADVANCE - 1) as f32) * scale
}

/// Height in pixels of a line drawn at `scale`
pub fn text_height(scale: f32) -> f32 {
    GLYPH_HEIGHT as f32 * scale
}

/// Generate vertices for a line of bitmap text with its top-left at `origin`
///
/// Every lit font cell becomes a `scale`-sized square.
pub fn text(s: &str, origin: Vec2, scale: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for (i, c) in s.chars().enumerate() {
        let glyph_x = origin.x + (i * GLYPH_ADVANCE) as f32 * scale;
        for (col, row) in font::lit_cells(c) {
            let x0 = glyph_x + col as f32 * scale;
            let y0 = origin.y + row as f32 * scale;
            push_quad(&mut vertices, x0, y0, x0 + scale, y0 + scale, color);
        }
    }

    vertices
}

/// Two triangles covering an axis-aligned quad
fn push_quad(vertices: &mut Vec<Vertex>, x0: f32, y0: f32, x1: f32, y1: f32, color: [f32; 4]) {
    vertices.push(Vertex::new(x0, y0, color));
    vertices.push(Vertex::new(x1, y0, color));
    vertices.push(Vertex::new(x0, y1, color));

    vertices.push(Vertex::new(x0, y1, color));
    vertices.push(Vertex::new(x1, y0, color));
    vertices.push(Vertex::new(x1, y1, color));
}
