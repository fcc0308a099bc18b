//! Cross-generator property tests

use glam::Vec3;

use super::*;

const EPSILON: f32 = 1e-5;

/// Every generator with a winding parameter, built once per winding
fn all_windable(winding: Winding) -> Vec<(&'static str, UnpackedMesh)> {
    vec![
        ("square", generate_square(1.5, winding).unwrap()),
        (
            "mobius",
            generate_mobius_strip(1.0, 0.4, 24, 1, winding, MobiusNormals::Radial).unwrap(),
        ),
        ("sphere", generate_sphere(1.0, 8, winding).unwrap()),
        ("torus", generate_torus(1.0, 0.3, 12, 8, winding).unwrap()),
        ("tetrahedron", generate_tetrahedron(winding).unwrap()),
    ]
}

/// Unnormalized face normal; its length is twice the triangle area
fn area_vector(mesh: &UnpackedMesh, [a, b, c]: [u32; 3]) -> Vec3 {
    let p0 = Vec3::from(mesh.positions[a as usize]);
    let p1 = Vec3::from(mesh.positions[b as usize]);
    let p2 = Vec3::from(mesh.positions[c as usize]);
    (p1 - p0).cross(p2 - p0)
}

fn assert_unit_normals(mesh: &UnpackedMesh) {
    for (i, n) in mesh.normals.iter().enumerate() {
        let length = Vec3::from(*n).length();
        assert!((length - 1.0).abs() < EPSILON, "normal {i} has length {length}");
    }
}

// ============================================================================
// Structural properties
// ============================================================================

#[test]
fn test_every_shape_has_faces_in_range() {
    let mut meshes = all_windable(Winding::CounterClockwise);
    meshes.push(("sphere_grid", generate_sphere_grid(0.5, 4, 2.0).unwrap()));

    for (name, mesh) in &meshes {
        assert!(mesh.triangle_count() > 0, "{name} has no faces");
        assert_eq!(mesh.validate(), Ok(()), "{name}");
    }
}

#[test]
fn test_every_corner_has_a_normal() {
    for (name, mesh) in all_windable(Winding::CounterClockwise) {
        for k in 0..mesh.triangle_count() {
            for c in 0..3 {
                assert!(mesh.corner_normal(k, c).is_some(), "{name}: face {k} corner {c}");
            }
        }
        assert_eq!(mesh.corner_normal(mesh.triangle_count(), 0), None);
    }
}

#[test]
fn test_tetrahedron_corner_normals_match_faces() {
    let mesh = generate_tetrahedron(Winding::Clockwise).unwrap();
    for (k, face) in mesh.faces().enumerate() {
        let expected = mesh.face_normal(face);
        for c in 0..3 {
            let normal = Vec3::from(mesh.corner_normal(k, c).unwrap());
            assert!(normal.distance(expected) < EPSILON);
        }
    }
}

#[test]
fn test_sphere_and_torus_normals_are_unit_length() {
    assert_unit_normals(&generate_sphere(2.5, 20, Winding::CounterClockwise).unwrap());
    assert_unit_normals(&generate_torus(1.0, 0.3, 30, 20, Winding::CounterClockwise).unwrap());
}

#[test]
fn test_sphere_counts() {
    for subdivisions in [1, 2, 7, 20] {
        let mesh = generate_sphere(1.0, subdivisions, Winding::CounterClockwise).unwrap();
        let expected = ((subdivisions + 1) * (subdivisions + 1)) as usize;

        assert_eq!(mesh.positions.len(), expected);
        assert_eq!(mesh.normals.len(), expected);
        assert_eq!(mesh.uvs.len(), expected);
        assert_eq!(mesh.triangle_count(), (2 * subdivisions * subdivisions) as usize);
    }
}

#[test]
fn test_torus_wraps_without_seam_vertices() {
    let (radial, tubular) = (30, 20);
    let mesh = generate_torus(1.0, 0.3, radial, tubular, Winding::CounterClockwise).unwrap();
    let vertices = (radial * tubular) as usize;

    assert_eq!(mesh.vertex_count(), vertices);
    assert_eq!(mesh.triangle_count(), 2 * vertices);
    assert_eq!(mesh.indices.iter().max(), Some(&(vertices as u32 - 1)));
}

#[test]
fn test_tetrahedron_is_regular() {
    let mesh = generate_tetrahedron(Winding::CounterClockwise).unwrap();
    assert_eq!(mesh.triangle_count(), 4);
    assert_eq!(mesh.normals.len(), 12);

    let edge = 8.0_f32.sqrt();
    for i in 0..4 {
        for j in (i + 1)..4 {
            let d = Vec3::from(mesh.positions[i]).distance(Vec3::from(mesh.positions[j]));
            assert!((d - edge).abs() < EPSILON, "edge {i}-{j} is {d}");
        }
    }
    assert_unit_normals(&mesh);
}

// ============================================================================
// Winding
// ============================================================================

#[test]
fn test_winding_flips_every_face() {
    let ccw = all_windable(Winding::CounterClockwise);
    let cw = all_windable(Winding::Clockwise);

    for ((name, a), (_, b)) in ccw.iter().zip(&cw) {
        assert_eq!(a.positions, b.positions, "{name}: winding moved vertices");
        assert_eq!(a.triangle_count(), b.triangle_count());

        for (k, (fa, fb)) in a.faces().zip(b.faces()).enumerate() {
            let na = area_vector(a, fa);
            let nb = area_vector(b, fb);
            // Triangles collapsed onto a pole have no orientation
            if na.length() < 1e-6 {
                continue;
            }
            assert!(na.dot(nb) < 0.0, "{name}: face {k} kept its orientation");
        }
    }
}

#[test]
fn test_tetrahedron_normals_follow_winding() {
    let ccw = generate_tetrahedron(Winding::CounterClockwise).unwrap();
    let cw = generate_tetrahedron(Winding::Clockwise).unwrap();

    for (a, b) in ccw.normals.iter().zip(&cw.normals) {
        assert!(Vec3::from(*a).dot(Vec3::from(*b)) < -0.99);
    }
}

#[test]
fn test_sphere_grid_uses_fixed_winding() {
    let grid = generate_sphere_grid(1.0, 4, 4.0).unwrap();
    let sphere = generate_sphere(1.0, 4, SPHERE_GRID_WINDING).unwrap();

    // First sphere sits at (-4, -4, -4); its faces match a standalone sphere's
    let first: Vec<u32> = grid.indices[..sphere.indices.len()].to_vec();
    assert_eq!(first, sphere.indices);
}

// ============================================================================
// Grid
// ============================================================================

#[test]
fn test_grid_positions_are_symmetric() {
    for spacing in [0.5, 1.0, 4.0] {
        let positions = grid_positions(spacing).unwrap();
        assert_eq!(positions.len(), 26);

        let sum: Vec3 = positions.iter().sum();
        assert!(sum.length() < 1e-4, "spacing {spacing}: sum {sum}");

        for p in &positions {
            assert!(positions.iter().any(|q| q.distance(-*p) < EPSILON));
        }
    }
}

#[test]
fn test_sphere_grid_counts() {
    let subdivisions = 4;
    let mesh = generate_sphere_grid(1.0, subdivisions, 4.0).unwrap();
    let per_sphere = ((subdivisions + 1) * (subdivisions + 1)) as usize;

    assert_eq!(mesh.vertex_count(), 26 * per_sphere);
    assert_eq!(mesh.triangle_count(), 26 * 2 * (subdivisions * subdivisions) as usize);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));

    // Outermost spheres touch ±(spacing + radius) on every axis
    let (min, max) = mesh.bounds().unwrap();
    assert!(min.distance(Vec3::splat(-5.0)) < EPSILON);
    assert!(max.distance(Vec3::splat(5.0)) < EPSILON);
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_small_sphere_end_to_end() {
    let mesh = generate_sphere(1.0, 4, Winding::CounterClockwise).unwrap();

    assert_eq!(mesh.positions.len(), 25);
    assert_eq!(mesh.normals.len(), 25);
    assert_eq!(mesh.uvs.len(), 25);
    assert_eq!(mesh.triangle_count(), 32);

    assert_eq!(mesh.positions[0], [0.0, 0.0, 1.0]);
    let last = Vec3::from(mesh.positions[24]);
    assert!(last.distance(Vec3::new(0.0, 0.0, -1.0)) < EPSILON);

    let mut obj = Vec::new();
    write_obj_to(&mesh, &mut obj).unwrap();
    let text = String::from_utf8(obj).unwrap();
    assert_eq!(text.lines().count(), 25 * 3 + 32);
    assert!(text.starts_with("v 0 0 1\n"));
}

#[test]
fn test_shape_builds_analytic_mobius() {
    let shape = Shape::Mobius {
        radius: 1.0,
        width: 0.2,
        segments: 10,
        twists: 3,
        winding: Winding::Clockwise,
        normals: MobiusNormals::Analytic,
    };
    let mesh = shape.generate().unwrap();
    assert_eq!(mesh.vertex_count(), 22);
    assert_eq!(shape.validate(), Ok(()));
}
