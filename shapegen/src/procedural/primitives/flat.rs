//! Fixed-topology primitives (square, tetrahedron)

use glam::Vec3;
use tracing::debug;

use crate::error::{ShapeError, positive};
use crate::procedural::types::{NormalLayout, UnpackedMesh, Winding};

/// Generate a square on the XY plane (Z=0), centered at the origin
///
/// # Arguments
/// * `size` - Edge length (> 0)
/// * `winding` - Face winding; counter-clockwise faces point along +Z
///
/// # Returns
/// 4 vertices with +Z normals, UVs covering the unit square, 2 triangles
pub fn generate_square(size: f32, winding: Winding) -> Result<UnpackedMesh, ShapeError> {
    check_square(size)?;
    Ok(build_square(size, winding))
}

pub(crate) fn check_square(size: f32) -> Result<f32, ShapeError> {
    positive("square", "size", size)
}

fn build_square(size: f32, winding: Winding) -> UnpackedMesh {
    let half = size * 0.5;
    let mut mesh = UnpackedMesh::with_capacity(4, 2);

    let corners = [
        (Vec3::new(-half, -half, 0.0), (0.0, 0.0)),
        (Vec3::new(half, -half, 0.0), (1.0, 0.0)),
        (Vec3::new(half, half, 0.0), (1.0, 1.0)),
        (Vec3::new(-half, half, 0.0), (0.0, 1.0)),
    ];
    for (position, uv) in corners {
        mesh.add_vertex_uv(position, uv, Vec3::Z);
    }

    for face in [[0, 1, 2], [0, 2, 3]] {
        let [a, b, c] = winding.orient(face);
        mesh.add_triangle(a, b, c);
    }

    mesh
}

/// Alternating cube corners, all pairwise 2√2 apart
const TETRAHEDRON_CORNERS: [[f32; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
];

/// Faces in counter-clockwise order (outward right-hand normals)
const TETRAHEDRON_FACES: [[u32; 3]; 4] = [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];

/// Generate a flat-shaded regular tetrahedron
///
/// Normals are per face corner (`NormalLayout::PerCorner`): each face gets its
/// own normal repeated three times, so the mesh carries 12 normals against
/// 4 positions. Texture coordinates are zero placeholders.
pub fn generate_tetrahedron(winding: Winding) -> Result<UnpackedMesh, ShapeError> {
    Ok(build_tetrahedron(winding))
}

fn build_tetrahedron(winding: Winding) -> UnpackedMesh {
    let mut mesh = UnpackedMesh::with_capacity(4, 4);
    mesh.normal_layout = NormalLayout::PerCorner;
    mesh.positions.extend_from_slice(&TETRAHEDRON_CORNERS);
    mesh.uvs.resize(TETRAHEDRON_CORNERS.len(), [0.0, 0.0]);
    mesh.normals.reserve(TETRAHEDRON_FACES.len() * 3);

    for face in TETRAHEDRON_FACES {
        let [a, b, c] = winding.orient(face);
        mesh.add_triangle(a, b, c);

        let normal = mesh.face_normal([a, b, c]).to_array();
        mesh.normals.extend_from_slice(&[normal; 3]);
    }

    debug!(
        "tetrahedron: {} vertices, {} normals, {} triangles",
        mesh.vertex_count(),
        mesh.normals.len(),
        mesh.triangle_count()
    );

    mesh
}
