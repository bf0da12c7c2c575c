//! Domain Entities
//!
//! Objects that flow through a build pass: the files read, the artifacts
//! produced from them, where those artifacts go, and the manifest recording
//! the result.

mod artifact;
mod destination;
mod manifest;
mod source;

pub use artifact::OutputArtifact;
pub use destination::{DestinationPath, HASH_PLACEHOLDER};
pub use manifest::{BuildManifest, ManifestEntry, MANIFEST_FILE, MANIFEST_VERSION};
pub use source::{SourceFile, SourceKind, MODULE_EXTENSIONS};
