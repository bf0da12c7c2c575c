//! Build output routing service
//!
//! Pure domain logic mapping an artifact to its destination and a module id
//! to its bundling group. Both mappings are total: every artifact has a
//! destination and every module id has an answer.

use crate::domain::entities::{DestinationPath, OutputArtifact, HASH_PLACEHOLDER};
use crate::domain::value_objects::{ArtifactRole, AssetCategory, ContentHash};

/// Path fragment identifying dependency code
pub const THIRD_PARTY_MARKER: &str = "node_modules";

/// Name of the shared third-party bundling group
pub const VENDOR_GROUP: &str = "vendor";

/// Directory for entry and chunk files
pub const SCRIPT_DIR: &str = "js";

/// File stem of the entry chunk
pub const ENTRY_NAME: &str = "app";

/// Does this module id come from a dependency directory?
pub fn is_third_party(id: &str) -> bool {
    id.contains(THIRD_PARTY_MARKER)
}

/// Manual chunk assignment: dependency code goes to `vendor`, first-party
/// code is left to the default chunking.
pub fn manual_chunk(id: &str) -> Option<&'static str> {
    is_third_party(id).then_some(VENDOR_GROUP)
}

/// Destination for an artifact, with the hash left as a placeholder
pub fn destination_for(artifact: &OutputArtifact) -> DestinationPath {
    match artifact.role() {
        ArtifactRole::Entry => DestinationPath::new(
            SCRIPT_DIR,
            format!("{ENTRY_NAME}-{HASH_PLACEHOLDER}.js"),
        ),
        ArtifactRole::Chunk => DestinationPath::new(
            SCRIPT_DIR,
            format!("{}-{HASH_PLACEHOLDER}.js", artifact.logical_name()),
        ),
        ArtifactRole::Asset => {
            let category = AssetCategory::from_file_name(artifact.logical_name());
            DestinationPath::new(
                category.directory_name(),
                format!(
                    "{}-{HASH_PLACEHOLDER}{}",
                    artifact.stem(),
                    artifact.extension()
                ),
            )
        }
    }
}

/// Routes artifacts to concrete, hashed output paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputRouter {
    hash_length: usize,
}

impl OutputRouter {
    pub fn new(hash_length: usize) -> Self {
        Self { hash_length }
    }

    /// Directory and file template for `artifact`
    pub fn destination(&self, artifact: &OutputArtifact) -> DestinationPath {
        destination_for(artifact)
    }

    /// Final `/`-separated path relative to the output directory
    pub fn route(&self, artifact: &OutputArtifact) -> String {
        self.route_hash(artifact, artifact.hash())
    }

    /// Route with an explicit hash (used when the hash is known before the
    /// artifact exists, e.g. for import specifiers)
    pub fn route_hash(&self, artifact: &OutputArtifact, hash: &ContentHash) -> String {
        self.destination(artifact).render(hash.short(self.hash_length))
    }
}

impl Default for OutputRouter {
    fn default() -> Self {
        Self::new(ContentHash::DEFAULT_SHORT_LEN)
    }
}
