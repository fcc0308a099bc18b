//! Procedural mesh generation
//!
//! Functions for generating canonical shapes with normals and texture
//! coordinates, a composite grid of spheres, an opt-in vertex weld and an
//! OBJ writer.
//!
//! All generators produce UNPACKED f32 data (`UnpackedMesh`) with `u32`
//! triangle indices. Every generator except the tetrahedron stores one normal
//! per vertex; the tetrahedron stores one per face corner for flat shading,
//! recorded in `UnpackedMesh::normal_layout`.

mod export;
mod grid;
mod modifiers;
mod primitives;
mod shape;
mod types;

#[cfg(test)]
mod tests;

// Re-export types
pub use types::{MeshDefect, NormalLayout, UnpackedMesh, Winding};

// Re-export OBJ export
pub use export::{write_obj, write_obj_to};

// Re-export primitives
pub use primitives::{
    MobiusNormals, generate_mobius_strip, generate_sphere, generate_square, generate_tetrahedron,
    generate_torus,
};

// Re-export the composite grid
pub use grid::{GRID_SIZE, SPHERE_GRID_WINDING, generate_sphere_grid, grid_positions};

// Re-export modifiers
pub use modifiers::{MeshApply, MeshModifier, Weld};

pub use shape::Shape;
