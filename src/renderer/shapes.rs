//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect`
pub fn filled_rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Outline of `rect`, `border` units thick, drawn on the inside of the edge.
/// A border at least half the short side fills the rectangle.
pub fn rect_outline(rect: &Rect, border: f32, color: [f32; 4]) -> Vec<Vertex> {
    if rect.is_empty() {
        return Vec::new();
    }
    if border <= 0.0 || border * 2.0 >= rect.w.min(rect.h) {
        return filled_rect(rect, color).to_vec();
    }

    let strips = [
        // Top and bottom span the full width
        Rect::new(rect.x, rect.y, rect.w, border),
        Rect::new(rect.x, rect.bottom() - border, rect.w, border),
        // Left and right fill the gap between them
        Rect::new(rect.x, rect.y + border, border, rect.h - border * 2.0),
        Rect::new(rect.right() - border, rect.y + border, border, rect.h - border * 2.0),
    ];

    let mut vertices = Vec::with_capacity(strips.len() * 6);
    for strip in &strips {
        vertices.extend_from_slice(&filled_rect(strip, color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_rect_corners() {
        let verts = filled_rect(&Rect::new(10.0, 20.0, 30.0, 40.0), [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_outline_is_four_strips() {
        let verts = rect_outline(&Rect::new(0.0, 0.0, 200.0, 150.0), 10.0, [1.0; 4]);
        assert_eq!(verts.len(), 24);
        // Nothing leaves the rectangle
        assert!(verts.iter().all(|v| {
            (0.0..=200.0).contains(&v.position[0]) && (0.0..=150.0).contains(&v.position[1])
        }));
    }

    #[test]
    fn test_thick_outline_fills() {
        let verts = rect_outline(&Rect::new(0.0, 0.0, 15.0, 100.0), 10.0, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert!(rect_outline(&Rect::new(0.0, 0.0, 0.0, 10.0), 2.0, [1.0; 4]).is_empty());
    }
}
