//! Procedural mesh generators for the demo shapes.
//!
//! Every generator emits [`ShapeVertex`] data centered on the origin together
//! with `u32` triangle indices; placement in the world happens through the
//! per-object model matrix. The parametric surfaces (torus, cylinder wall,
//! sphere) share the same quad-grid indexing scheme.

use glam::{Vec2, Vec3};

use crate::abs::Vertex;

/// Vertex layout shared by all demo meshes.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct ShapeVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl Vertex for ShapeVertex {
    fn vertex_attribs(gl: &glow::Context) {
        use glow::HasContext;
        unsafe {
            let stride = std::mem::size_of::<ShapeVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Normal attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);

            // Texture coordinate attribute
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(
                2,
                2,
                glow::FLOAT,
                false,
                stride,
                (2 * size_of::<Vec3>()) as i32,
            );
        }
    }
}

/// Vertex and index data ready for upload.
pub type ShapeData = (Vec<ShapeVertex>, Vec<u32>);

/// Appends one quad as two triangles. `corners` wind counter-clockwise when
/// viewed from the side the `normal` points to.
fn push_quad(
    vertices: &mut Vec<ShapeVertex>,
    indices: &mut Vec<u32>,
    corners: [Vec3; 4],
    normal: Vec3,
) {
    let base = vertices.len() as u32;
    let uvs = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    for (position, uv) in corners.into_iter().zip(uvs) {
        vertices.push(ShapeVertex {
            position,
            normal,
            uv,
        });
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
}

/// An axis-aligned cuboid with the given half extents, 4 vertices per face so
/// each face carries its own normal and a full [0,1] texture tile.
pub fn box_mesh(half_extents: Vec3) -> ShapeData {
    let Vec3 { x, y, z } = half_extents;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    let quads = [
        (
            [
                Vec3::new(x, -y, z),
                Vec3::new(x, -y, -z),
                Vec3::new(x, y, -z),
                Vec3::new(x, y, z),
            ],
            Vec3::X,
        ),
        (
            [
                Vec3::new(-x, -y, -z),
                Vec3::new(-x, -y, z),
                Vec3::new(-x, y, z),
                Vec3::new(-x, y, -z),
            ],
            Vec3::NEG_X,
        ),
        (
            [
                Vec3::new(-x, y, z),
                Vec3::new(x, y, z),
                Vec3::new(x, y, -z),
                Vec3::new(-x, y, -z),
            ],
            Vec3::Y,
        ),
        (
            [
                Vec3::new(-x, -y, -z),
                Vec3::new(x, -y, -z),
                Vec3::new(x, -y, z),
                Vec3::new(-x, -y, z),
            ],
            Vec3::NEG_Y,
        ),
        (
            [
                Vec3::new(-x, -y, z),
                Vec3::new(x, -y, z),
                Vec3::new(x, y, z),
                Vec3::new(-x, y, z),
            ],
            Vec3::Z,
        ),
        (
            [
                Vec3::new(x, -y, -z),
                Vec3::new(-x, -y, -z),
                Vec3::new(-x, y, -z),
                Vec3::new(x, y, -z),
            ],
            Vec3::NEG_Z,
        ),
    ];
    for (corners, normal) in quads {
        push_quad(&mut vertices, &mut indices, corners, normal);
    }

    (vertices, indices)
}

/// A single quad in the XZ plane at y = 0 facing +Y.
pub fn plane(half_size: f32) -> ShapeData {
    let mut vertices = Vec::with_capacity(4);
    let mut indices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        &mut indices,
        [
            Vec3::new(-half_size, 0.0, half_size),
            Vec3::new(half_size, 0.0, half_size),
            Vec3::new(half_size, 0.0, -half_size),
            Vec3::new(-half_size, 0.0, -half_size),
        ],
        Vec3::Y,
    );
    (vertices, indices)
}

/// Stitches a (segments x rings) quad grid whose vertices were emitted in
/// `j`-major order with `rings + 1` vertices per segment column.
fn grid_indices(segments: u32, rings: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
    for i in 0..segments {
        for j in 0..rings {
            let p0 = i * (rings + 1) + j;
            let p1 = (i + 1) * (rings + 1) + j;
            let p2 = (i + 1) * (rings + 1) + (j + 1);
            let p3 = i * (rings + 1) + (j + 1);
            indices.extend_from_slice(&[p0, p1, p2, p2, p3, p0]);
        }
    }
    indices
}

/// A torus around the Y axis. `ring_radius` is the distance from the center to
/// the middle of the tube, `tube_radius` the thickness of the tube itself.
pub fn torus(ring_radius: f32, tube_radius: f32, segments: u32, rings: u32) -> ShapeData {
    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    for i in 0..=segments {
        for j in 0..=rings {
            let u = i as f32 / segments as f32;
            let v = j as f32 / rings as f32;
            let theta = std::f32::consts::TAU * u;
            let phi = std::f32::consts::TAU * v;

            vertices.push(ShapeVertex {
                position: Vec3::new(
                    (ring_radius + tube_radius * phi.cos()) * theta.cos(),
                    tube_radius * phi.sin(),
                    (ring_radius + tube_radius * phi.cos()) * theta.sin(),
                ),
                normal: Vec3::new(phi.cos() * theta.cos(), phi.sin(), phi.cos() * theta.sin()),
                uv: Vec2::new(1.0 - u, 1.0 - v),
            });
        }
    }
    (vertices, grid_indices(segments, rings))
}

/// The open side wall of a cylinder around the Y axis. The shape has no caps;
/// its inside stays visible, which is why the renderer leaves backface culling
/// off.
pub fn cylinder(radius: f32, height: f32, segments: u32) -> ShapeData {
    let mut vertices = Vec::with_capacity(((segments + 1) * 2) as usize);
    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let theta = std::f32::consts::TAU * u;
        let normal = Vec3::new(theta.cos(), 0.0, theta.sin());
        let rim = Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin());

        vertices.push(ShapeVertex {
            position: rim + Vec3::new(0.0, height / 2.0, 0.0),
            normal,
            uv: Vec2::new(1.0 - u, 0.0),
        });
        vertices.push(ShapeVertex {
            position: rim - Vec3::new(0.0, height / 2.0, 0.0),
            normal,
            uv: Vec2::new(1.0 - u, 1.0),
        });
    }
    // The wall is a 1-ring grid with two vertices per column.
    (vertices, grid_indices(segments, 1))
}

/// A latitude/longitude sphere. The pole rows collapse to points, which keeps
/// the quad-grid indexing uniform at the cost of a few degenerate triangles.
pub fn sphere(radius: f32, segments: u32, rings: u32) -> ShapeData {
    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    for i in 0..=segments {
        for j in 0..=rings {
            let u = i as f32 / segments as f32;
            let v = j as f32 / rings as f32;
            let theta = std::f32::consts::TAU * u;
            let phi = std::f32::consts::PI * v;

            let normal = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            vertices.push(ShapeVertex {
                position: normal * radius,
                normal,
                uv: Vec2::new(1.0 - u, 1.0 - v),
            });
        }
    }
    (vertices, grid_indices(segments, rings))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_in_range((vertices, indices): &ShapeData) {
        assert!(!indices.is_empty());
        assert_eq!(indices.len() % 3, 0);
        for &index in indices {
            assert!((index as usize) < vertices.len());
        }
    }

    fn assert_unit_normals((vertices, _): &ShapeData) {
        for vertex in vertices {
            assert!((vertex.normal.length() - 1.0).abs() < 1e-4);
        }
    }

    fn triangle_normal(vertices: &[ShapeVertex], indices: &[u32], triangle: usize) -> Vec3 {
        let a = vertices[indices[triangle * 3] as usize].position;
        let b = vertices[indices[triangle * 3 + 1] as usize].position;
        let c = vertices[indices[triangle * 3 + 2] as usize].position;
        (b - a).cross(c - a)
    }

    #[test]
    fn box_mesh_has_four_vertices_per_face() {
        let data = box_mesh(Vec3::new(0.1, 0.3, 0.3));
        assert_eq!(data.0.len(), 24);
        assert_eq!(data.1.len(), 36);
        assert_indices_in_range(&data);
        assert_unit_normals(&data);
    }

    #[test]
    fn box_faces_wind_outward() {
        let data = box_mesh(Vec3::splat(0.5));
        for triangle in 0..data.1.len() / 3 {
            let normal = triangle_normal(&data.0, &data.1, triangle);
            let centroid: Vec3 = (0..3)
                .map(|k| data.0[data.1[triangle * 3 + k] as usize].position)
                .sum::<Vec3>()
                / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn box_face_normals_match_their_geometry() {
        let data = box_mesh(Vec3::new(0.2, 0.4, 0.6));
        for triangle in 0..data.1.len() / 3 {
            let geometric = triangle_normal(&data.0, &data.1, triangle).normalize();
            let declared = data.0[data.1[triangle * 3] as usize].normal;
            assert!((geometric - declared).length() < 1e-4);
        }
    }

    #[test]
    fn plane_is_one_quad_facing_up() {
        let data = plane(2.0);
        assert_eq!(data.0.len(), 4);
        assert_eq!(data.1.len(), 6);
        assert_indices_in_range(&data);
        for triangle in 0..2 {
            let normal = triangle_normal(&data.0, &data.1, triangle).normalize();
            assert!((normal - Vec3::Y).length() < 1e-5);
        }
        for vertex in &data.0 {
            assert_eq!(vertex.position.y, 0.0);
            assert!(vertex.uv.x >= 0.0 && vertex.uv.x <= 1.0);
            assert!(vertex.uv.y >= 0.0 && vertex.uv.y <= 1.0);
        }
    }

    #[test]
    fn torus_counts_match_the_grid() {
        let data = torus(0.25, 0.1, 20, 10);
        assert_eq!(data.0.len(), 21 * 11);
        assert_eq!(data.1.len(), 20 * 10 * 6);
        assert_indices_in_range(&data);
        assert_unit_normals(&data);
    }

    #[test]
    fn torus_vertices_lie_on_the_tube() {
        let (vertices, _) = torus(0.25, 0.1, 20, 10);
        for vertex in &vertices {
            let ring_distance = Vec2::new(vertex.position.x, vertex.position.z).length();
            let tube_distance =
                Vec2::new(ring_distance - 0.25, vertex.position.y).length();
            assert!((tube_distance - 0.1).abs() < 1e-4);
        }
    }

    #[test]
    fn cylinder_wall_spans_the_full_height() {
        let data = cylinder(0.2, 0.5, 20);
        assert_eq!(data.0.len(), 21 * 2);
        assert_eq!(data.1.len(), 20 * 6);
        assert_indices_in_range(&data);
        assert_unit_normals(&data);
        for vertex in &data.0 {
            assert!((vertex.position.y.abs() - 0.25).abs() < 1e-6);
            let radial = Vec2::new(vertex.position.x, vertex.position.z).length();
            assert!((radial - 0.2).abs() < 1e-4);
            // Wall normals are horizontal.
            assert_eq!(vertex.normal.y, 0.0);
        }
    }

    #[test]
    fn sphere_vertices_sit_on_the_radius() {
        let data = sphere(0.3, 20, 20);
        assert_eq!(data.0.len(), 21 * 21);
        assert_eq!(data.1.len(), 20 * 20 * 6);
        assert_indices_in_range(&data);
        assert_unit_normals(&data);
        for vertex in &data.0 {
            assert!((vertex.position.length() - 0.3).abs() < 1e-4);
            assert!((vertex.position.normalize() - vertex.normal).length() < 1e-4);
        }
    }

    #[test]
    fn sphere_poles_collapse_to_points() {
        let (vertices, _) = sphere(1.0, 8, 8);
        for column in 0..=8u32 {
            let top = vertices[(column * 9) as usize].position;
            let bottom = vertices[(column * 9 + 8) as usize].position;
            assert!((top - Vec3::Y).length() < 1e-4);
            assert!((bottom - Vec3::NEG_Y).length() < 1e-4);
        }
    }
}
