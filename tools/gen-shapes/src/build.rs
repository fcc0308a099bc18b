//! Manifest build and clean

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use shapegen::procedural::write_obj;
use tracing::{debug, info};

use crate::manifest::{ShapeEntry, ShapeManifest};

/// What happened to one manifest entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    /// The file was already there and `force` was off
    Skipped,
}

/// Totals for one build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub generated: usize,
    pub skipped: usize,
}

/// Generate every entry of `manifest` into `output`
///
/// The output directory is created first. Entries are independent and are
/// generated in parallel, each writing only its own file. The first failure
/// aborts the build.
pub fn build_all(manifest: &ShapeManifest, output: &Path, force: bool) -> Result<BuildReport> {
    manifest.validate()?;

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let outcomes: Result<Vec<Outcome>> = manifest
        .shapes
        .par_iter()
        .map(|entry| build_entry(entry, output, force))
        .collect();

    let mut report = BuildReport::default();
    for outcome in outcomes? {
        match outcome {
            Outcome::Generated => report.generated += 1,
            Outcome::Skipped => report.skipped += 1,
        }
    }

    info!("{} generated, {} skipped", report.generated, report.skipped);
    Ok(report)
}

/// Generate a single entry unless its file already exists
pub fn build_entry(entry: &ShapeEntry, output: &Path, force: bool) -> Result<Outcome> {
    let path = output.join(&entry.file);

    if path.exists() && !force {
        info!("{} already exists, skipping", path.display());
        return Ok(Outcome::Skipped);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mesh = entry
        .shape
        .generate()
        .with_context(|| format!("Failed to generate {}", entry.file))?;

    write_obj(&mesh, &path).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        "Generated {} ({} vertices, {} triangles)",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    if let Some((min, max)) = mesh.bounds() {
        debug!("{}: bounds {} .. {}", entry.file, min, max);
    }

    Ok(Outcome::Generated)
}

/// Remove the files `manifest` would produce, returning how many were removed
pub fn clean(manifest: &ShapeManifest, output: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in &manifest.shapes {
        let path = output.join(&entry.file);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            info!("Removed {}", path.display());
            removed += 1;
        }
    }
    Ok(removed)
}
