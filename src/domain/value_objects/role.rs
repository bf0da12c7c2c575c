//! Artifact role value object

use serde::{Deserialize, Serialize};

/// What an emitted file is, from the bundler's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactRole {
    /// The designated program entry point
    Entry,
    /// An intermediate code-split chunk (including manual groups)
    Chunk,
    /// A static, non-code file
    Asset,
}

impl ArtifactRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactRole::Entry => "entry",
            ArtifactRole::Chunk => "chunk",
            ArtifactRole::Asset => "asset",
        }
    }

    /// Entries and chunks are JavaScript
    pub fn is_code(&self) -> bool {
        !matches!(self, ArtifactRole::Asset)
    }
}

impl std::fmt::Display for ArtifactRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ArtifactRole::Entry).unwrap();
        assert_eq!(json, "\"entry\"");
    }

    #[test]
    fn only_assets_are_not_code() {
        assert!(ArtifactRole::Entry.is_code());
        assert!(ArtifactRole::Chunk.is_code());
        assert!(!ArtifactRole::Asset.is_code());
    }
}
