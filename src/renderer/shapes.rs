//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Segment count that keeps a circle of `radius` pixels looking round
pub fn segments_for_radius(radius: f32) -> u32 {
    ((radius * 1.5) as u32).clamp(12, 64)
}

/// Append a filled circle to an existing vertex list
pub fn push_circle(
    vertices: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    color: [f32; 4],
    segments: u32,
) {
    vertices.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + radius * Vec2::from_angle(theta1), color));
        vertices.push(Vertex::at(center + radius * Vec2::from_angle(theta2), color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertices_on_rim() {
        let center = Vec2::new(100.0, 50.0);
        let mut vertices = vec![Vertex::new(0.0, 0.0, [0.0; 4])];
        push_circle(&mut vertices, center, 25.0, [1.0; 4], 16);
        assert_eq!(vertices.len(), 49);
        assert_eq!(vertices[0].position, [0.0, 0.0]);
        let vertices = &vertices[1..];

        for tri in vertices.chunks(3) {
            assert_eq!(tri[0].position, [100.0, 50.0]);
            for v in &tri[1..] {
                let d = Vec2::from(v.position).distance(center);
                assert!((d - 25.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_segments_clamped() {
        assert_eq!(segments_for_radius(1.0), 12);
        assert_eq!(segments_for_radius(25.0), 37);
        assert_eq!(segments_for_radius(500.0), 64);
    }
}
