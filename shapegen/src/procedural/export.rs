//! Wavefront OBJ export
//!
//! Records are grouped rather than interleaved: every `v` line, then every
//! `vn`, then every `vt`, then the faces. Floats use Rust's default `Display`
//! formatting, which prints the shortest text that reads back to the same
//! `f32`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::procedural::types::{NormalLayout, UnpackedMesh};

/// Write `mesh` as OBJ text to `path`, replacing any existing file
pub fn write_obj(mesh: &UnpackedMesh, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj_to(mesh, &mut out)?;
    out.flush()
}

/// Write `mesh` as OBJ text to any writer
///
/// Face corners are 1-based. Smooth meshes share one index across position,
/// texture coordinate and normal (`f i/i/i`); per-corner meshes point each
/// corner at its own normal (`f v/v/n`, `n = 3 × face + corner + 1`).
pub fn write_obj_to<W: Write>(mesh: &UnpackedMesh, out: &mut W) -> io::Result<()> {
    for [x, y, z] in &mesh.positions {
        writeln!(out, "v {x} {y} {z}")?;
    }
    for [x, y, z] in &mesh.normals {
        writeln!(out, "vn {x} {y} {z}")?;
    }
    for [u, v] in &mesh.uvs {
        writeln!(out, "vt {u} {v}")?;
    }

    for (k, face) in mesh.faces().enumerate() {
        let [a, b, c] = face.map(|i| i + 1);
        match mesh.normal_layout {
            NormalLayout::PerVertex => {
                writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
            }
            NormalLayout::PerCorner => {
                let n = 3 * k + 1;
                writeln!(out, "f {a}/{a}/{} {b}/{b}/{} {c}/{c}/{}", n, n + 1, n + 2)?;
            }
        }
    }

    Ok(())
}
