//! Möbius strip

use glam::Vec3;
use serde::Deserialize;
use std::f32::consts::TAU;
use tracing::debug;

use crate::error::{ShapeError, at_least, positive, vertex_budget};
use crate::procedural::types::{UnpackedMesh, Winding};

/// Normal policy for the Möbius strip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobiusNormals {
    /// Horizontal direction away from the strip's axis, ignoring the twist
    #[default]
    Radial,
    /// True surface normal from the cross product of the parametric tangents
    Analytic,
}

/// Generate a twisted strip around the Z axis
///
/// # Arguments
/// * `radius` - Radius of the strip's centerline (> 0)
/// * `width` - Distance between the two edges (> 0)
/// * `segments` - Steps around the centerline (min 1)
/// * `twists` - Twist rate; the cross-section turns `twists` times per loop
/// * `winding` - Face winding
/// * `normals` - Normal policy
///
/// # Returns
/// Mesh with `2 × (segments + 1)` vertices (one per edge per step) and
/// `2 × segments` triangles. The closing step duplicates the first one and is
/// not welded.
pub fn generate_mobius_strip(
    radius: f32,
    width: f32,
    segments: u32,
    twists: i32,
    winding: Winding,
    normals: MobiusNormals,
) -> Result<UnpackedMesh, ShapeError> {
    let vertices = check_mobius_strip(radius, width, segments)?;

    let mut mesh = UnpackedMesh::with_capacity(vertices as usize, 2 * segments as usize);
    let half_width = width * 0.5;
    let twist_rate = twists as f32;

    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let theta = u * TAU;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_twist, cos_twist) = (twist_rate * theta).sin_cos();

        for side in [-1.0_f32, 1.0] {
            let offset = side * half_width;
            let reach = radius + offset * sin_twist;
            let position = Vec3::new(reach * cos_theta, reach * sin_theta, offset * cos_twist);

            let radial = Vec3::new(cos_theta, sin_theta, 0.0);
            let normal = match normals {
                MobiusNormals::Radial => radial,
                MobiusNormals::Analytic => {
                    // dP/dtheta x dP/doffset
                    let along = Vec3::new(
                        -reach * sin_theta + offset * twist_rate * cos_twist * cos_theta,
                        reach * cos_theta + offset * twist_rate * cos_twist * sin_theta,
                        -offset * twist_rate * sin_twist,
                    );
                    let across = Vec3::new(sin_twist * cos_theta, sin_twist * sin_theta, cos_twist);
                    along.cross(across).try_normalize().unwrap_or(radial)
                }
            };

            mesh.add_vertex_uv(position, (u, (side + 1.0) * 0.5), normal);
        }
    }

    for i in 0..segments {
        let v1 = i * 2;
        let v2 = v1 + 1;
        let v3 = v1 + 2;
        let v4 = v1 + 3;

        for face in [[v1, v3, v4], [v1, v4, v2]] {
            let [a, b, c] = winding.orient(face);
            mesh.add_triangle(a, b, c);
        }
    }

    debug!(
        "mobius: {} vertices, {} triangles, {} twists",
        mesh.vertex_count(),
        mesh.triangle_count(),
        twists
    );
    Ok(mesh)
}

/// Validate strip parameters and return the vertex count
pub(crate) fn check_mobius_strip(radius: f32, width: f32, segments: u32) -> Result<u32, ShapeError> {
    positive("mobius", "radius", radius)?;
    positive("mobius", "width", width)?;
    let segments = at_least("mobius", "segments", 1, segments)?;
    vertex_budget("mobius", 2 * (u64::from(segments) + 1))
}
