//! CPU-side geometry builders for the two shapes the scene uses.

use glam::Vec3;

use crate::scene::{Material, SceneObject, Shape};
use crate::types::{LineVertex, Vertex};

/// Triangle list for a unit cube centered on the origin (scaled per-instance
/// in the vertex shader). 6 faces, 2 triangles each, counter-clockwise
/// winding viewed from outside.
pub fn unit_cube_vertices() -> Vec<Vertex> {
    let normals = [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];

    let mut vertices = Vec::with_capacity(36);
    for n in normals {
        // Cyclic permutation gives a tangent orthogonal to any axis normal;
        // v completes a right-handed frame so winding stays CCW from +n.
        let u = Vec3::new(n.y, n.z, n.x) * 0.5;
        let v = n.cross(Vec3::new(n.y, n.z, n.x)).normalize() * 0.5;
        let c = n * 0.5;

        let corners = [c - u - v, c + u - v, c + u + v, c - u + v];
        for &i in &[0usize, 1, 2, 0, 2, 3] {
            vertices.push(Vertex {
                position: corners[i].to_array(),
                normal: n.to_array(),
            });
        }
    }
    vertices
}

/// Line list for a square grid of `divisions`×`divisions` cells spanning
/// `size` world units, offset to the object's position.
pub fn grid_line_vertices(object: &SceneObject) -> Vec<LineVertex> {
    let Shape::Grid { size, divisions } = object.shape else {
        return Vec::new();
    };
    let SceneObject {
        position, material, ..
    } = *object;
    let Material { color, .. } = material;

    let half = size * 0.5;
    let step = size / divisions as f32;
    let mut vertices = Vec::with_capacity(((divisions + 1) * 4) as usize);

    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        // line along x
        for x in [-half, half] {
            vertices.push(LineVertex {
                position: (position + Vec3::new(x, 0.0, offset)).to_array(),
                color: color.to_array(),
            });
        }
        // line along z
        for z in [-half, half] {
            vertices.push(LineVertex {
                position: (position + Vec3::new(offset, 0.0, z)).to_array(),
                color: color.to_array(),
            });
        }
    }
    vertices
}
