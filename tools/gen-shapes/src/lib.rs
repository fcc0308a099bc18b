//! gen-shapes library
//!
//! Manifest parsing and build logic behind the `gen-shapes` binary.

pub mod build;
pub mod manifest;
