//! BuildManifest entity - the record of one build pass
//!
//! Serialized as `manifest.json` at the top of the output directory so the
//! preview command (and any deploy tooling) can find hashed file names.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ArtifactRole, EsTarget};

/// Manifest format version
pub const MANIFEST_VERSION: u32 = 1;

/// File name of the manifest inside the output directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// One emitted file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Routed path relative to the output directory
    pub file: String,
    pub role: ArtifactRole,
    /// Manual bundling group, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Source ids that went into the file
    pub sources: Vec<String>,
    /// Full content hash (`sha256:` + 64 hex chars)
    pub hash: String,
    pub size: usize,
}

/// Record of a complete build pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildManifest {
    pub version: u32,
    /// Routed path of the entry chunk
    pub entry: String,
    /// Public path prefix
    pub base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<EsTarget>,
    pub files: Vec<ManifestEntry>,
}

impl BuildManifest {
    pub fn new(base: impl Into<String>, target: Option<EsTarget>) -> Self {
        Self {
            version: MANIFEST_VERSION,
            entry: String::new(),
            base: base.into(),
            target,
            files: Vec::new(),
        }
    }

    /// Add a file; the entry role also sets `entry`.
    ///
    /// Identical assets from different directories route to the same file;
    /// their sources are merged into the existing record.
    pub fn push(&mut self, entry: ManifestEntry) {
        if entry.role == ArtifactRole::Entry {
            self.entry = entry.file.clone();
        }
        if let Some(existing) = self.files.iter_mut().find(|f| f.file == entry.file) {
            for source in entry.sources {
                if !existing.sources.contains(&source) {
                    existing.sources.push(source);
                }
            }
            return;
        }
        self.files.push(entry);
    }

    /// Sort files by path so the manifest is independent of emission order
    pub fn finalize(&mut self) {
        self.files.sort_by(|a, b| a.file.cmp(&b.file));
        for file in &mut self.files {
            file.sources.sort();
        }
    }

    /// Public URL of a routed file
    pub fn url(&self, file: &str) -> String {
        format!("{}{}", self.base, file)
    }

    pub fn find_by_source(&self, source: &str) -> Option<&ManifestEntry> {
        self.files
            .iter()
            .find(|f| f.sources.iter().any(|s| s == source))
    }

    pub fn total_size(&self) -> usize {
        self.files.iter().map(|f| f.size).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
