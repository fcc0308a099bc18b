//! Procedural mesh types
//!
//! Shared types for procedural mesh generation.

use glam::Vec3;
use serde::Deserialize;

/// Triangle winding order
///
/// Generators author their faces in the counter-clockwise table;
/// `Clockwise` reverses every face by swapping its last two corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// Map the boolean `clockwise` flag onto a winding
    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    /// The opposite winding
    pub const fn reversed(self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
        }
    }

    /// Order a counter-clockwise authored triangle for this winding
    #[inline]
    pub fn orient(self, [a, b, c]: [u32; 3]) -> [u32; 3] {
        match self {
            Self::CounterClockwise => [a, b, c],
            Self::Clockwise => [a, c, b],
        }
    }
}

/// How `UnpackedMesh::normals` is indexed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NormalLayout {
    /// One normal per vertex, `normals[i]` belongs to `positions[i]` (smooth shading)
    #[default]
    PerVertex,
    /// One normal per face corner, `normals[3 * face + corner]` (flat shading)
    PerCorner,
}

/// Unpacked mesh data (f32 format) for export and modifiers
///
/// Positions, texture coordinates and (for `NormalLayout::PerVertex`) normals
/// are parallel arrays indexed by vertex. Faces are stored flat in `indices`,
/// three per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnpackedMesh {
    /// Vertex positions as [x, y, z]
    pub positions: Vec<[f32; 3]>,
    /// Normals as [x, y, z], indexed per `normal_layout`
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates as [u, v], one per vertex
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices, 0-based
    pub indices: Vec<u32>,
    /// Indexing scheme of `normals`
    pub normal_layout: NormalLayout,
}

/// Structural defect found by `UnpackedMesh::validate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshDefect {
    /// Index buffer length is not a multiple of 3
    PartialTriangle { indices: usize },
    /// Texture coordinate count differs from vertex count
    UvCount { vertices: usize, uvs: usize },
    /// Normal count does not match what the layout requires
    NormalCount { expected: usize, actual: usize },
    /// A face refers to a vertex that does not exist
    IndexOutOfRange { face: usize, index: u32 },
}

impl UnpackedMesh {
    /// Create empty unpacked mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with room for `vertices` vertices and `triangles` faces
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(triangles * 3),
            normal_layout: NormalLayout::PerVertex,
        }
    }

    /// Add a smooth-shaded vertex and return its index
    pub fn add_vertex_uv(&mut self, position: Vec3, uv: (f32, f32), normal: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.uvs.push([uv.0, uv.1]);
        index
    }

    /// Add a triangle using three vertex indices
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate faces as index triples
    pub fn faces(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|f| [f[0], f[1], f[2]])
    }

    /// Axis-aligned bounds as (min, max), `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.positions.iter().map(|&p| Vec3::from(p));
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    /// Unit normal of a triangle from the cross product of its two edges out
    /// of the first corner; zero for a degenerate triangle
    ///
    /// # Panics
    /// If any index of `face` is not below `vertex_count()`. Faces that pass
    /// `validate` are always in range.
    pub fn face_normal(&self, [a, b, c]: [u32; 3]) -> Vec3 {
        let p0 = Vec3::from(self.positions[a as usize]);
        let p1 = Vec3::from(self.positions[b as usize]);
        let p2 = Vec3::from(self.positions[c as usize]);
        (p1 - p0).cross(p2 - p0).normalize_or_zero()
    }

    /// Normal for one corner of a face, honoring the layout
    pub fn corner_normal(&self, face: usize, corner: usize) -> Option<[f32; 3]> {
        match self.normal_layout {
            NormalLayout::PerVertex => {
                let index = *self.indices.get(face * 3 + corner)?;
                self.normals.get(index as usize).copied()
            }
            NormalLayout::PerCorner => self.normals.get(face * 3 + corner).copied(),
        }
    }

    /// Check the parallel-array and index invariants
    pub fn validate(&self) -> Result<(), MeshDefect> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshDefect::PartialTriangle {
                indices: self.indices.len(),
            });
        }

        if self.uvs.len() != self.positions.len() {
            return Err(MeshDefect::UvCount {
                vertices: self.positions.len(),
                uvs: self.uvs.len(),
            });
        }

        let expected = match self.normal_layout {
            NormalLayout::PerVertex => self.positions.len(),
            NormalLayout::PerCorner => self.indices.len(),
        };
        if self.normals.len() != expected {
            return Err(MeshDefect::NormalCount {
                expected,
                actual: self.normals.len(),
            });
        }

        let vertex_count = self.positions.len();
        for (face, tri) in self.faces().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshDefect::IndexOutOfRange { face, index });
            }
        }

        Ok(())
    }
}
