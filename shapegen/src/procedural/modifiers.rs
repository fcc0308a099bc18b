//! Mesh modifiers
//!
//! Post-processing steps that operate on a finished `UnpackedMesh`. None of the
//! generators apply these on their own.
//!
//! # Fluent API
//! ```no_run
//! use shapegen::procedural::*;
//!
//! let mut mesh = generate_sphere(1.0, 16, Winding::CounterClockwise)?;
//! mesh.apply(Weld::default());
//! # Ok::<(), shapegen::ShapeError>(())
//! ```

use std::collections::HashMap;

use glam::Vec3;
use tracing::{debug, warn};

use crate::procedural::types::{NormalLayout, UnpackedMesh};

/// Trait for mesh modifiers
pub trait MeshModifier {
    /// Apply this modifier to a mesh, modifying it in place
    fn apply(&self, mesh: &mut UnpackedMesh);
}

/// Extension trait for fluent modifier application
pub trait MeshApply {
    /// Apply a modifier and return `&mut Self` for chaining
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self;
}

impl MeshApply for UnpackedMesh {
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self {
        modifier.apply(self);
        self
    }
}

/// Merge vertices that lie within `epsilon` of each other
///
/// Vertices are bucketed into cubic cells of side `epsilon`; each vertex is
/// compared against the kept vertices in its own and the 26 neighbouring
/// cells, and merges onto the lowest-indexed one within `epsilon` distance.
/// The kept vertex keeps its normal and texture coordinate. Faces are
/// remapped and triangles that collapse to a line or point are removed.
/// Vertices with non-finite coordinates are never merged.
///
/// Welding a sphere closes its poles and longitude seam, at the cost of the
/// texture seam: the merged vertex can carry only one UV.
///
/// Meshes with `NormalLayout::PerCorner` normals are left untouched, since
/// removing faces would shift every normal after them. So are meshes that
/// fail `UnpackedMesh::validate`.
pub struct Weld {
    /// Merge distance
    pub epsilon: f32,
}

impl Default for Weld {
    fn default() -> Self {
        Self { epsilon: 1e-5 }
    }
}

/// Cell holding `position`, `None` for non-finite coordinates
fn cell_of(position: Vec3, inv_epsilon: f32) -> Option<[i64; 3]> {
    if !position.is_finite() {
        return None;
    }
    let cell = (position * inv_epsilon).floor();
    Some([cell.x as i64, cell.y as i64, cell.z as i64])
}

impl MeshModifier for Weld {
    fn apply(&self, mesh: &mut UnpackedMesh) {
        if let Err(defect) = mesh.validate() {
            warn!("Weld: skipping malformed mesh: {:?}", defect);
            return;
        }
        if mesh.normal_layout == NormalLayout::PerCorner {
            warn!("Weld: skipping mesh with per-corner normals");
            return;
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            warn!("Weld: epsilon must be > 0.0, got {}", self.epsilon);
            return;
        }

        let inv_epsilon = 1.0 / self.epsilon;

        let mut cells: HashMap<[i64; 3], Vec<u32>> = HashMap::new();
        let mut remap = Vec::with_capacity(mesh.positions.len());
        let mut new_positions: Vec<[f32; 3]> = Vec::new();
        let mut new_normals = Vec::new();
        let mut new_uvs = Vec::new();

        for (i, &position) in mesh.positions.iter().enumerate() {
            let point = Vec3::from(position);
            let cell = cell_of(point, inv_epsilon);

            let mut target: Option<u32> = None;
            if let Some([x, y, z]) = cell {
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        for dz in -1..=1 {
                            let Some(kept) = cells.get(&[x + dx, y + dy, z + dz]) else {
                                continue;
                            };
                            for &k in kept {
                                let other = Vec3::from(new_positions[k as usize]);
                                if other.distance(point) <= self.epsilon
                                    && target.is_none_or(|t| k < t)
                                {
                                    target = Some(k);
                                }
                            }
                        }
                    }
                }
            }

            let index = match target {
                Some(index) => index,
                None => {
                    let index = new_positions.len() as u32;
                    new_positions.push(position);
                    new_normals.push(mesh.normals[i]);
                    new_uvs.push(mesh.uvs[i]);
                    if let Some(cell) = cell {
                        cells.entry(cell).or_default().push(index);
                    }
                    index
                }
            };
            remap.push(index);
        }

        let mut new_indices = Vec::with_capacity(mesh.indices.len());
        for face in mesh.faces() {
            let [a, b, c] = face.map(|i| remap[i as usize]);
            if a != b && b != c && a != c {
                new_indices.extend_from_slice(&[a, b, c]);
            }
        }

        debug!(
            "Weld: {} -> {} vertices, {} -> {} triangles",
            mesh.positions.len(),
            new_positions.len(),
            mesh.indices.len() / 3,
            new_indices.len() / 3
        );

        mesh.positions = new_positions;
        mesh.normals = new_normals;
        mesh.uvs = new_uvs;
        mesh.indices = new_indices;
    }
}
