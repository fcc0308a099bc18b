//! Procedural mesh primitives
//!
//! One generator per shape. Every public generator validates its parameters
//! and returns an `UnpackedMesh` with positions, normals, UVs and triangles.

mod flat;
mod mobius;
mod sphere_torus;

pub use flat::{generate_square, generate_tetrahedron};
pub use mobius::{MobiusNormals, generate_mobius_strip};
pub use sphere_torus::{generate_sphere, generate_torus};

pub(crate) use flat::check_square;
pub(crate) use mobius::check_mobius_strip;
pub(crate) use sphere_torus::{append_uv_sphere, check_sphere, check_torus, sphere_triangle_count};
