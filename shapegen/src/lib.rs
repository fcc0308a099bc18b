//! shapegen - procedural meshes for canonical shapes
//!
//! Builds vertex/normal/texture-coordinate/face data for a square, a Möbius
//! strip, a UV sphere, a torus, a tetrahedron and a shell grid of spheres,
//! and writes the result as Wavefront OBJ.
//!
//! # Example
//! ```no_run
//! use shapegen::procedural::*;
//!
//! let sphere = generate_sphere(1.0, 20, Winding::CounterClockwise)?;
//! write_obj(&sphere, "sphere.obj".as_ref())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod procedural;

pub use error::ShapeError;
