//! Shape descriptions
//!
//! `Shape` names a generator together with its parameters. It is the entry
//! point used by manifests: deserialize, `validate`, then `generate`.

use serde::Deserialize;

use crate::error::ShapeError;
use crate::procedural::grid::{check_sphere_grid, generate_sphere_grid};
use crate::procedural::primitives::{
    MobiusNormals, check_mobius_strip, check_sphere, check_square, check_torus,
    generate_mobius_strip, generate_sphere, generate_square, generate_tetrahedron, generate_torus,
};
use crate::procedural::types::{UnpackedMesh, Winding};

/// A shape and its generation parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum Shape {
    Square {
        size: f32,
        #[serde(default)]
        winding: Winding,
    },
    Mobius {
        radius: f32,
        width: f32,
        segments: u32,
        twists: i32,
        #[serde(default)]
        winding: Winding,
        #[serde(default)]
        normals: MobiusNormals,
    },
    Sphere {
        radius: f32,
        subdivisions: u32,
        #[serde(default)]
        winding: Winding,
    },
    Torus {
        outer_radius: f32,
        inner_radius: f32,
        radial_subdivisions: u32,
        tubular_subdivisions: u32,
        #[serde(default)]
        winding: Winding,
    },
    Tetrahedron {
        #[serde(default)]
        winding: Winding,
    },
    SphereGrid {
        radius: f32,
        subdivisions: u32,
        spacing: f32,
    },
}

impl Shape {
    /// Short lowercase name of the shape kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Square { .. } => "square",
            Self::Mobius { .. } => "mobius",
            Self::Sphere { .. } => "sphere",
            Self::Torus { .. } => "torus",
            Self::Tetrahedron { .. } => "tetrahedron",
            Self::SphereGrid { .. } => "sphere_grid",
        }
    }

    /// Build the mesh
    pub fn generate(&self) -> Result<UnpackedMesh, ShapeError> {
        match *self {
            Self::Square { size, winding } => generate_square(size, winding),
            Self::Mobius {
                radius,
                width,
                segments,
                twists,
                winding,
                normals,
            } => generate_mobius_strip(radius, width, segments, twists, winding, normals),
            Self::Sphere {
                radius,
                subdivisions,
                winding,
            } => generate_sphere(radius, subdivisions, winding),
            Self::Torus {
                outer_radius,
                inner_radius,
                radial_subdivisions,
                tubular_subdivisions,
                winding,
            } => generate_torus(
                outer_radius,
                inner_radius,
                radial_subdivisions,
                tubular_subdivisions,
                winding,
            ),
            Self::Tetrahedron { winding } => generate_tetrahedron(winding),
            Self::SphereGrid {
                radius,
                subdivisions,
                spacing,
            } => generate_sphere_grid(radius, subdivisions, spacing),
        }
    }

    /// Check the parameters without building the mesh
    pub fn validate(&self) -> Result<(), ShapeError> {
        match *self {
            Self::Square { size, .. } => check_square(size).map(drop),
            Self::Mobius {
                radius,
                width,
                segments,
                ..
            } => check_mobius_strip(radius, width, segments).map(drop),
            Self::Sphere {
                radius,
                subdivisions,
                ..
            } => check_sphere("sphere", radius, subdivisions).map(drop),
            Self::Torus {
                outer_radius,
                inner_radius,
                radial_subdivisions,
                tubular_subdivisions,
                ..
            } => check_torus(
                outer_radius,
                inner_radius,
                radial_subdivisions,
                tubular_subdivisions,
            )
            .map(drop),
            Self::Tetrahedron { .. } => Ok(()),
            Self::SphereGrid {
                radius,
                subdivisions,
                spacing,
            } => check_sphere_grid(radius, subdivisions, spacing).map(drop),
        }
    }
}
