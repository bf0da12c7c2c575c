//! Build Result
//!
//! Result types for build operations.

use std::path::PathBuf;

use crate::domain::entities::BuildManifest;

/// A chunk above the configured size limit
#[derive(Debug, Clone, PartialEq)]
pub struct SizeWarning {
    /// Routed path of the chunk
    pub file: String,
    /// Size in kB (1 kB = 1000 bytes)
    pub size_kb: f64,
    pub limit_kb: u64,
}

/// Result of a build pass
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Resolved output directory
    pub out_dir: PathBuf,
    /// Record of every emitted file
    pub manifest: BuildManifest,
    /// Absolute paths written, in emission order
    pub written: Vec<PathBuf>,
    /// Advisory chunk size warnings
    pub warnings: Vec<SizeWarning>,
    /// Rewritten `index.html`, when the project has one
    pub html: Option<PathBuf>,
    /// Number of scanned sources
    pub source_count: usize,
}

impl BuildResult {
    pub fn new(out_dir: PathBuf, manifest: BuildManifest) -> Self {
        Self {
            out_dir,
            manifest,
            written: Vec::new(),
            warnings: Vec::new(),
            html: None,
            source_count: 0,
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Routed path of the entry chunk
    pub fn entry(&self) -> &str {
        &self.manifest.entry
    }
}
