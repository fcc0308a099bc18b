//! Shell grid of spheres
//!
//! Places spheres on the outer shell of a 3×3×3 lattice and merges them into
//! one mesh.

use glam::Vec3;
use tracing::debug;

use crate::error::{ShapeError, positive, vertex_budget};
use crate::procedural::primitives::{append_uv_sphere, check_sphere, sphere_triangle_count};
use crate::procedural::types::{UnpackedMesh, Winding};

/// Cells per lattice axis
pub const GRID_SIZE: u32 = 3;

/// Winding used for every sphere in the grid: the opposite of the
/// standalone sphere's default
pub const SPHERE_GRID_WINDING: Winding = Winding::CounterClockwise.reversed();

/// Offsets of the lattice shell cells, centered on the origin
///
/// Walks x, then y, then z (z fastest) and keeps every cell with at least one
/// index on the lattice boundary: 26 of the 27 cells, only the center is
/// dropped.
pub fn grid_positions(spacing: f32) -> Result<Vec<Vec3>, ShapeError> {
    let spacing = positive("sphere_grid", "spacing", spacing)?;
    Ok(shell_offsets(spacing))
}

fn shell_offsets(spacing: f32) -> Vec<Vec3> {
    let last = GRID_SIZE - 1;
    let half_extent = last as f32 * spacing * 0.5;
    let on_shell = |i: u32| i == 0 || i == last;

    let shell_cells = GRID_SIZE.pow(3) - (GRID_SIZE - 2).pow(3);

    let mut positions = Vec::with_capacity(shell_cells as usize);
    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            for z in 0..GRID_SIZE {
                if on_shell(x) || on_shell(y) || on_shell(z) {
                    let cell = Vec3::new(x as f32, y as f32, z as f32);
                    positions.push(cell * spacing - Vec3::splat(half_extent));
                }
            }
        }
    }
    positions
}

/// Generate one mesh holding a UV sphere at every shell offset
///
/// Each sphere uses the `generate_sphere` parameterization and is translated by
/// its offset. Spheres are appended in offset order and are not welded; face
/// indices of the n-th sphere start at `n × (subdivisions + 1)²`.
pub fn generate_sphere_grid(
    radius: f32,
    subdivisions: u32,
    spacing: f32,
) -> Result<UnpackedMesh, ShapeError> {
    let (offsets, total) = check_sphere_grid(radius, subdivisions, spacing)?;
    let spheres = offsets.len();

    let mut mesh =
        UnpackedMesh::with_capacity(total as usize, sphere_triangle_count(subdivisions) * spheres);
    for offset in offsets {
        append_uv_sphere(&mut mesh, offset, radius, subdivisions, SPHERE_GRID_WINDING);
    }

    debug!(
        "sphere_grid: {} spheres, {} vertices, {} triangles",
        spheres,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Validate grid parameters, returning the offsets and the total vertex count
pub(crate) fn check_sphere_grid(
    radius: f32,
    subdivisions: u32,
    spacing: f32,
) -> Result<(Vec<Vec3>, u32), ShapeError> {
    let per_sphere = check_sphere("sphere_grid", radius, subdivisions)?;
    let offsets = grid_positions(spacing)?;
    let total = vertex_budget("sphere_grid", u64::from(per_sphere) * offsets.len() as u64)?;
    Ok((offsets, total))
}
