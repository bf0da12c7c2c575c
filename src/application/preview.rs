//! Preview Use Case
//!
//! Reads the manifest of the last build and reports what a static server
//! would serve. No HTTP server is started.

use std::path::{Path, PathBuf};

use crate::domain::entities::{BuildManifest, MANIFEST_FILE};
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::value_objects::ArtifactRole;
use crate::error::{FirecatError, FirecatResult};

/// Options for the preview use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Output directory of a previous build
    pub out_dir: PathBuf,
    /// Address reported to the user (`http://host:port`)
    pub url: String,
}

/// What the preview would serve
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewReport {
    pub url: String,
    pub out_dir: PathBuf,
    pub manifest: BuildManifest,
    /// Manifest entries whose file is no longer on disk
    pub missing: Vec<String>,
}

impl PreviewReport {
    /// Public URL of the entry chunk
    pub fn entry_url(&self) -> String {
        self.manifest.url(&self.manifest.entry)
    }

    pub fn count(&self, role: ArtifactRole) -> usize {
        self.manifest.files.iter().filter(|f| f.role == role).count()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Preview use case
pub struct PreviewUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
}

impl<FS> PreviewUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn load(&self, options: &PreviewOptions) -> FirecatResult<PreviewReport> {
        let manifest_path = options.out_dir.join(MANIFEST_FILE);
        let content = match self.file_system.read_to_string(&manifest_path) {
            Ok(content) => content,
            Err(FsError::NotFound(_)) => {
                return Err(FirecatError::ManifestNotFound {
                    path: manifest_path,
                })
            }
            Err(e) => return Err(e.into()),
        };
        let manifest = BuildManifest::from_json(&content)?;

        let missing = manifest
            .files
            .iter()
            .filter(|f| !self.file_system.exists(&file_path(&options.out_dir, &f.file)))
            .map(|f| f.file.clone())
            .collect();

        Ok(PreviewReport {
            url: options.url.clone(),
            out_dir: options.out_dir.clone(),
            manifest,
            missing,
        })
    }
}

fn file_path(out_dir: &Path, file: &str) -> PathBuf {
    file.split('/').fold(out_dir.to_path_buf(), |p, part| p.join(part))
}
