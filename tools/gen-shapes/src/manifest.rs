//! shapes.toml manifest parsing
//!
//! A manifest lists the OBJ files to produce and the shape behind each one:
//!
//! ```toml
//! output = "assets/models"
//!
//! [[shapes]]
//! file = "sphere.obj"
//! shape = { kind = "sphere", radius = 1.0, subdivisions = 20 }
//! ```

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use shapegen::procedural::{Shape, Winding};
use tracing::{info, warn};

/// Manifest looked up in the current directory when none is named
pub const DEFAULT_MANIFEST: &str = "shapes.toml";

/// shapes.toml manifest structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeManifest {
    /// Directory the OBJ files are written to, relative to the working directory
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub shapes: Vec<ShapeEntry>,
}

fn default_output() -> PathBuf {
    PathBuf::from("assets/models")
}

/// One output file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeEntry {
    /// File name inside the output directory
    pub file: String,
    pub shape: Shape,
}

impl ShapeEntry {
    pub fn new(file: impl Into<String>, shape: Shape) -> Self {
        Self {
            file: file.into(),
            shape,
        }
    }
}

impl ShapeManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid manifest: {}", path.display()))
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse shapes manifest")
    }

    /// Load the named manifest, else `shapes.toml` if present, else the
    /// built-in reference set
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default = Path::new(DEFAULT_MANIFEST);
        if default.exists() {
            info!("Using {}", default.display());
            Self::load(default)
        } else {
            info!("No manifest given, using the reference shapes");
            Ok(Self::reference())
        }
    }

    /// The reference shape set
    pub fn reference() -> Self {
        let ccw = Winding::CounterClockwise;
        Self {
            output: default_output(),
            shapes: vec![
                ShapeEntry::new(
                    "sphere.obj",
                    Shape::Sphere {
                        radius: 1.0,
                        subdivisions: 20,
                        winding: ccw,
                    },
                ),
                ShapeEntry::new(
                    "torus.obj",
                    Shape::Torus {
                        outer_radius: 1.0,
                        inner_radius: 0.3,
                        radial_subdivisions: 30,
                        tubular_subdivisions: 20,
                        winding: ccw,
                    },
                ),
                ShapeEntry::new("tetrahedron.obj", Shape::Tetrahedron { winding: ccw }),
                ShapeEntry::new(
                    "sphere_grid.obj",
                    Shape::SphereGrid {
                        radius: 1.0,
                        subdivisions: 30,
                        spacing: 4.0,
                    },
                ),
            ],
        }
    }

    /// Validate file names and every shape's parameters
    pub fn validate(&self) -> Result<()> {
        if self.shapes.is_empty() {
            warn!("Manifest lists no shapes");
        }

        let mut seen = HashSet::new();
        for entry in &self.shapes {
            check_file_name(&entry.file)?;

            if !seen.insert(entry.file.as_str()) {
                anyhow::bail!("Duplicate output file '{}' in manifest", entry.file);
            }

            if !entry.file.ends_with(".obj") {
                warn!("'{}' does not end in .obj, writing OBJ text anyway", entry.file);
            }

            let kind = entry.shape.kind();
            entry
                .shape
                .validate()
                .with_context(|| format!("Invalid {kind} shape for '{}'", entry.file))?;
        }

        Ok(())
    }
}

/// Output files must stay inside the output directory
fn check_file_name(file: &str) -> Result<()> {
    let path = Path::new(file);
    let escapes = path.components().any(|c| !matches!(c, Component::Normal(_)));

    if file.is_empty() || escapes {
        anyhow::bail!(
            "Invalid output file '{}' (must be a relative path inside the output directory)",
            file
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapegen::procedural::MobiusNormals;

    #[test]
    fn test_manifest_minimal() {
        let manifest = ShapeManifest::parse(
            r#"
[[shapes]]
file = "sphere.obj"
shape = { kind = "sphere", radius = 1.0, subdivisions = 20 }
"#,
        )
        .unwrap();

        assert_eq!(manifest.output, PathBuf::from("assets/models"));
        assert_eq!(manifest.shapes.len(), 1);
        assert_eq!(
            manifest.shapes[0].shape,
            Shape::Sphere {
                radius: 1.0,
                subdivisions: 20,
                winding: Winding::CounterClockwise,
            }
        );
        manifest.validate().unwrap();
    }

    #[test]
    fn test_manifest_all_kinds() {
        let manifest = ShapeManifest::parse(
            r#"
output = "out/meshes"

[[shapes]]
file = "square.obj"
shape = { kind = "square", size = 2.0, winding = "clockwise" }

[[shapes]]
file = "mobius.obj"
shape = { kind = "mobius", radius = 1.0, width = 0.4, segments = 64, twists = 1, normals = "analytic" }

[[shapes]]
file = "torus.obj"
shape = { kind = "torus", outer_radius = 1.0, inner_radius = 0.3, radial_subdivisions = 30, tubular_subdivisions = 20 }

[[shapes]]
file = "tetrahedron.obj"
shape = { kind = "tetrahedron" }

[[shapes]]
file = "grid/sphere_grid.obj"
shape = { kind = "sphere_grid", radius = 1.0, subdivisions = 8, spacing = 4.0 }
"#,
        )
        .unwrap();

        assert_eq!(manifest.output, PathBuf::from("out/meshes"));
        let kinds: Vec<&str> = manifest.shapes.iter().map(|e| e.shape.kind()).collect();
        assert_eq!(kinds, ["square", "mobius", "torus", "tetrahedron", "sphere_grid"]);
        assert_eq!(
            manifest.shapes[0].shape,
            Shape::Square {
                size: 2.0,
                winding: Winding::Clockwise,
            }
        );
        assert!(matches!(
            manifest.shapes[1].shape,
            Shape::Mobius {
                normals: MobiusNormals::Analytic,
                ..
            }
        ));
        manifest.validate().unwrap();
    }

    #[test]
    fn test_manifest_rejects_unknown_kind_and_fields() {
        let unknown_kind = r#"
[[shapes]]
file = "cube.obj"
shape = { kind = "cube", size = 1.0 }
"#;
        assert!(ShapeManifest::parse(unknown_kind).is_err());

        let unknown_field = r#"
[[shapes]]
file = "sphere.obj"
shape = { kind = "sphere", radius = 1.0, subdivisions = 4, segments = 3 }
"#;
        assert!(ShapeManifest::parse(unknown_field).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_files() {
        let manifest = ShapeManifest::parse(
            r#"
[[shapes]]
file = "a.obj"
shape = { kind = "tetrahedron" }

[[shapes]]
file = "a.obj"
shape = { kind = "square", size = 1.0 }
"#,
        )
        .unwrap();

        let err = manifest.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate output file 'a.obj'"));
    }

    #[test]
    fn test_validate_reports_bad_parameters() {
        let manifest = ShapeManifest::parse(
            r#"
[[shapes]]
file = "flat.obj"
shape = { kind = "sphere", radius = 0.0, subdivisions = 4 }
"#,
        )
        .unwrap();

        let err = manifest.validate().unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("'flat.obj'"), "{message}");
        assert!(message.contains("radius"), "{message}");
    }

    #[test]
    fn test_validate_rejects_escaping_paths() {
        for file in ["", "../up.obj", "/abs/path.obj", "./here.obj"] {
            let shape = Shape::Tetrahedron {
                winding: Winding::CounterClockwise,
            };
            let manifest = ShapeManifest {
                output: default_output(),
                shapes: vec![ShapeEntry::new(file, shape)],
            };
            assert!(manifest.validate().is_err(), "{file:?} accepted");
        }
    }

    #[test]
    fn test_reference_shapes() {
        let manifest = ShapeManifest::reference();
        let files: Vec<&str> = manifest.shapes.iter().map(|e| e.file.as_str()).collect();

        assert_eq!(
            files,
            ["sphere.obj", "torus.obj", "tetrahedron.obj", "sphere_grid.obj"]
        );
        manifest.validate().unwrap();
    }
}
