//! The cube the demo draws.

use std::mem::offset_of;

use crate::abs::{Attribute, Vertex};

/// A vertex with a position and an RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex for ColorVertex {
    const ATTRIBUTES: &'static [Attribute] = &[
        Attribute {
            components: 3,
            offset: offset_of!(ColorVertex, position) as i32,
        },
        Attribute {
            components: 3,
            offset: offset_of!(ColorVertex, color) as i32,
        },
    ];
}

/// Corner of the unit cube colored by its own coordinates, so (-1,-1,-1) is black and
/// (1,1,1) is white.
const fn corner(x: f32, y: f32, z: f32) -> ColorVertex {
    ColorVertex {
        position: [x, y, z],
        color: [(x + 1.0) / 2.0, (y + 1.0) / 2.0, (z + 1.0) / 2.0],
    }
}

/// Twelve triangles spanning [-1, 1] on every axis. No index buffer, so shared corners repeat.
pub const CUBE: [ColorVertex; 36] = [
    corner(-1.0, -1.0, -1.0),
    corner(-1.0, -1.0, 1.0),
    corner(-1.0, 1.0, 1.0),

    corner(1.0, 1.0, -1.0),
    corner(-1.0, -1.0, -1.0),
    corner(-1.0, 1.0, -1.0),

    corner(1.0, -1.0, 1.0),
    corner(-1.0, -1.0, -1.0),
    corner(1.0, -1.0, -1.0),

    corner(1.0, 1.0, -1.0),
    corner(1.0, -1.0, -1.0),
    corner(-1.0, -1.0, -1.0),

    corner(-1.0, -1.0, -1.0),
    corner(-1.0, 1.0, 1.0),
    corner(-1.0, 1.0, -1.0),

    corner(1.0, -1.0, 1.0),
    corner(-1.0, -1.0, 1.0),
    corner(-1.0, -1.0, -1.0),

    corner(-1.0, 1.0, 1.0),
    corner(-1.0, -1.0, 1.0),
    corner(1.0, -1.0, 1.0),

    corner(1.0, 1.0, 1.0),
    corner(1.0, -1.0, -1.0),
    corner(1.0, 1.0, -1.0),

    corner(1.0, -1.0, -1.0),
    corner(1.0, 1.0, 1.0),
    corner(1.0, -1.0, 1.0),

    corner(1.0, 1.0, 1.0),
    corner(1.0, 1.0, -1.0),
    corner(-1.0, 1.0, -1.0),

    corner(1.0, 1.0, 1.0),
    corner(-1.0, 1.0, -1.0),
    corner(-1.0, 1.0, 1.0),

    corner(1.0, 1.0, 1.0),
    corner(-1.0, 1.0, 1.0),
    corner(1.0, -1.0, 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<ColorVertex>(), 24);
        assert_eq!(ColorVertex::stride(), 24);
        assert_eq!(
            ColorVertex::ATTRIBUTES,
            &[
                Attribute { components: 3, offset: 0 },
                Attribute { components: 3, offset: 12 },
            ]
        );
    }

    #[test]
    fn test_cube_corners() {
        assert_eq!(CUBE.len(), 36);
        for vertex in CUBE {
            for (p, c) in vertex.position.iter().zip(vertex.color) {
                assert!(*p == 1.0 || *p == -1.0);
                assert_eq!(c, (p + 1.0) / 2.0);
            }
        }
    }

    #[test]
    fn test_cube_triangles_lie_on_faces() {
        // Every triangle shares one coordinate across its three corners.
        for triangle in CUBE.chunks(3) {
            let on_face = (0..3).any(|axis| {
                triangle
                    .iter()
                    .all(|v| v.position[axis] == triangle[0].position[axis])
            });
            assert!(on_face, "{triangle:?}");
        }
    }

    #[test]
    fn test_cube_covers_all_faces_twice() {
        let mut faces = std::collections::HashMap::new();
        for triangle in CUBE.chunks(3) {
            for axis in 0..3 {
                let value = triangle[0].position[axis];
                if triangle.iter().all(|v| v.position[axis] == value) {
                    *faces.entry((axis, value > 0.0)).or_insert(0) += 1;
                }
            }
        }
        assert_eq!(faces.len(), 6);
        assert!(faces.values().all(|&n| n == 2));
    }
}
