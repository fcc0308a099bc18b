//! Smooth parametric primitives (sphere, torus)

use glam::Vec3;
use std::f32::consts::{PI, TAU};
use tracing::debug;

use crate::error::{ShapeError, at_least, positive, vertex_budget};
use crate::procedural::types::{UnpackedMesh, Winding};

/// Generate a UV sphere mesh with smooth normals and equirectangular UV mapping
///
/// # Arguments
/// * `radius` - Sphere radius (> 0)
/// * `subdivisions` - Latitude and longitude band count (min 1)
/// * `winding` - Face winding
///
/// # Returns
/// Mesh with `(subdivisions + 1)²` vertices and `2 × subdivisions²` triangles
///
/// # UV Mapping
/// - U: longitude, 0→1 around +Z
/// - V: latitude flipped, 1 at the north pole (+Z), 0 at the south pole
///
/// Note: pole and seam vertices are duplicated, not welded, so each longitude
/// band keeps its own texture coordinate.
pub fn generate_sphere(
    radius: f32,
    subdivisions: u32,
    winding: Winding,
) -> Result<UnpackedMesh, ShapeError> {
    let vertices = check_sphere("sphere", radius, subdivisions)?;

    let mut mesh =
        UnpackedMesh::with_capacity(vertices as usize, sphere_triangle_count(subdivisions));
    append_uv_sphere(&mut mesh, Vec3::ZERO, radius, subdivisions, winding);

    debug!(
        "sphere: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Validate sphere parameters and return the vertex count of one sphere
pub(crate) fn check_sphere(
    shape: &'static str,
    radius: f32,
    subdivisions: u32,
) -> Result<u32, ShapeError> {
    positive(shape, "radius", radius)?;
    let subdivisions = at_least(shape, "subdivisions", 1, subdivisions)?;
    vertex_budget(shape, sphere_vertex_count(subdivisions))
}

pub(crate) fn sphere_vertex_count(subdivisions: u32) -> u64 {
    let side = u64::from(subdivisions) + 1;
    side.saturating_mul(side)
}

pub(crate) fn sphere_triangle_count(subdivisions: u32) -> usize {
    2 * subdivisions as usize * subdivisions as usize
}

/// Append a UV sphere centered at `center`, rebasing its faces onto the
/// vertices already in `mesh`
pub(crate) fn append_uv_sphere(
    mesh: &mut UnpackedMesh,
    center: Vec3,
    radius: f32,
    subdivisions: u32,
    winding: Winding,
) {
    let vertex_offset = mesh.vertex_count() as u32;
    let steps = subdivisions as f32;

    for i in 0..=subdivisions {
        let v = i as f32 / steps;
        let lat = v * PI;
        let (sin_lat, cos_lat) = lat.sin_cos();

        for j in 0..=subdivisions {
            let u = j as f32 / steps;
            let lon = u * TAU;
            let (sin_lon, cos_lon) = lon.sin_cos();

            let direction = Vec3::new(sin_lat * cos_lon, sin_lat * sin_lon, cos_lat);
            mesh.add_vertex_uv(center + direction * radius, (u, 1.0 - v), direction);
        }
    }

    let verts_per_ring = subdivisions + 1;
    for i in 0..subdivisions {
        for j in 0..subdivisions {
            let v1 = vertex_offset + i * verts_per_ring + j;
            let v2 = v1 + 1;
            let v3 = vertex_offset + (i + 1) * verts_per_ring + j;
            let v4 = v3 + 1;

            for face in [[v1, v2, v3], [v2, v4, v3]] {
                let [a, b, c] = winding.orient(face);
                mesh.add_triangle(a, b, c);
            }
        }
    }
}

/// Generate a torus around the Z axis
///
/// # Arguments
/// * `outer_radius` - Distance from torus center to tube center (> 0)
/// * `inner_radius` - Tube radius (> 0)
/// * `radial_subdivisions` - Steps around the major circle (min 3)
/// * `tubular_subdivisions` - Steps around the tube (min 3)
/// * `winding` - Face winding
///
/// # Returns
/// Mesh with exactly `radial × tubular` vertices. Neighbor indices wrap
/// modulo the subdivision counts on both axes, so the surface closes without
/// seam vertices.
pub fn generate_torus(
    outer_radius: f32,
    inner_radius: f32,
    radial_subdivisions: u32,
    tubular_subdivisions: u32,
    winding: Winding,
) -> Result<UnpackedMesh, ShapeError> {
    let vertices = check_torus(
        outer_radius,
        inner_radius,
        radial_subdivisions,
        tubular_subdivisions,
    )?;
    let (radial, tubular) = (radial_subdivisions, tubular_subdivisions);

    let mut mesh = UnpackedMesh::with_capacity(vertices as usize, 2 * vertices as usize);

    for i in 0..radial {
        let u = i as f32 / radial as f32;
        let (sin_theta, cos_theta) = (u * TAU).sin_cos();

        for j in 0..tubular {
            let v = j as f32 / tubular as f32;
            let (sin_phi, cos_phi) = (v * TAU).sin_cos();

            let ring = outer_radius + inner_radius * cos_phi;
            let position = Vec3::new(ring * cos_theta, ring * sin_theta, inner_radius * sin_phi);
            let normal = Vec3::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi);

            mesh.add_vertex_uv(position, (u, v), normal);
        }
    }

    for i in 0..radial {
        let next_i = (i + 1) % radial;
        for j in 0..tubular {
            let next_j = (j + 1) % tubular;

            let v1 = i * tubular + j;
            let v2 = i * tubular + next_j;
            let v3 = next_i * tubular + j;
            let v4 = next_i * tubular + next_j;

            for face in [[v1, v2, v3], [v2, v4, v3]] {
                let [a, b, c] = winding.orient(face);
                mesh.add_triangle(a, b, c);
            }
        }
    }

    debug!(
        "torus: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Validate torus parameters and return the vertex count
pub(crate) fn check_torus(
    outer_radius: f32,
    inner_radius: f32,
    radial_subdivisions: u32,
    tubular_subdivisions: u32,
) -> Result<u32, ShapeError> {
    positive("torus", "outer_radius", outer_radius)?;
    positive("torus", "inner_radius", inner_radius)?;
    let radial = at_least("torus", "radial_subdivisions", 3, radial_subdivisions)?;
    let tubular = at_least("torus", "tubular_subdivisions", 3, tubular_subdivisions)?;
    vertex_budget("torus", u64::from(radial) * u64::from(tubular))
}
