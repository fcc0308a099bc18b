//! gen-shapes - writes OBJ models of canonical shapes
//!
//! Reads a shapes.toml manifest (or falls back to the reference set) and
//! generates one OBJ file per entry.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gen_shapes::build;
use gen_shapes::manifest::ShapeManifest;

#[derive(Parser)]
#[command(name = "gen-shapes")]
#[command(about = "Generate OBJ models of canonical shapes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every shape in the manifest
    Build {
        /// Path to shapes.toml manifest (default: ./shapes.toml, else the reference set)
        manifest: Option<PathBuf>,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,
    },

    /// Validate manifest without building
    Check {
        /// Path to shapes.toml manifest
        manifest: Option<PathBuf>,
    },

    /// Remove the files the manifest would generate
    Clean {
        /// Path to shapes.toml manifest
        manifest: Option<PathBuf>,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match cli.command {
        Commands::Build {
            manifest,
            output,
            force,
        } => {
            let config = ShapeManifest::resolve(manifest.as_deref())?;
            let output = output.unwrap_or_else(|| config.output.clone());
            tracing::info!("Building {} shapes into {}", config.shapes.len(), output.display());
            build::build_all(&config, &output, force)?;
            tracing::info!("Build complete!");
        }

        Commands::Check { manifest } => {
            let config = ShapeManifest::resolve(manifest.as_deref())?;
            config.validate()?;
            tracing::info!("Manifest is valid! ({} shapes)", config.shapes.len());
        }

        Commands::Clean { manifest, output } => {
            let config = ShapeManifest::resolve(manifest.as_deref())?;
            let output = output.unwrap_or_else(|| config.output.clone());
            let removed = build::clean(&config, &output)?;
            tracing::info!("Removed {} files", removed);
        }
    }

    Ok(())
}
