//! OutputArtifact entity - a file the build is about to emit
//!
//! Artifacts are immutable once created. The content hash is computed at
//! construction so routing never has to touch the bytes again.

use crate::domain::services::router::is_third_party;
use crate::domain::value_objects::{ArtifactRole, ContentHash};

/// An emitted file before it has a destination
#[derive(Debug, Clone, PartialEq)]
pub struct OutputArtifact {
    /// Asset file name, chunk name, or entry module id
    logical_name: String,
    /// Source ids that went into this artifact
    origins: Vec<String>,
    role: ArtifactRole,
    third_party: bool,
    content: Vec<u8>,
    hash: ContentHash,
}

impl OutputArtifact {
    fn new(
        logical_name: String,
        origins: Vec<String>,
        role: ArtifactRole,
        content: Vec<u8>,
    ) -> Self {
        let third_party = !origins.is_empty() && origins.iter().all(|o| is_third_party(o));
        let hash = ContentHash::from_bytes(&content);
        Self {
            logical_name,
            origins,
            role,
            third_party,
            content,
            hash,
        }
    }

    /// The program entry point
    pub fn entry(entry_id: impl Into<String>, origins: Vec<String>, content: Vec<u8>) -> Self {
        Self::new(entry_id.into(), origins, ArtifactRole::Entry, content)
    }

    /// A code-split chunk
    pub fn chunk(name: impl Into<String>, origins: Vec<String>, content: Vec<u8>) -> Self {
        Self::new(name.into(), origins, ArtifactRole::Chunk, content)
    }

    /// A static asset. The logical name is the last path segment of `origin`.
    pub fn asset(origin: impl Into<String>, content: Vec<u8>) -> Self {
        let origin = origin.into();
        let name = origin.rsplit('/').next().unwrap_or(&origin).to_string();
        Self::new(name, vec![origin], ArtifactRole::Asset, content)
    }

    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    pub fn origins(&self) -> &[String] {
        &self.origins
    }

    pub fn role(&self) -> ArtifactRole {
        self.role
    }

    /// True when every origin lives in a dependency directory
    pub fn is_third_party(&self) -> bool {
        self.third_party
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    /// Name without its final extension (`logo` for `logo.png`)
    pub fn stem(&self) -> &str {
        match self.logical_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.logical_name,
        }
    }

    /// Final extension including the dot (`.png`), empty when there is none
    pub fn extension(&self) -> &str {
        match self.logical_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => {
                &self.logical_name[stem.len()..]
            }
            _ => "",
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_takes_file_name_from_origin() {
        let asset = OutputArtifact::asset("src/img/logo.png", vec![0x89, 0x50]);
        assert_eq!(asset.logical_name(), "logo.png");
        assert_eq!(asset.stem(), "logo");
        assert_eq!(asset.extension(), ".png");
        assert_eq!(asset.role(), ArtifactRole::Asset);
        assert!(!asset.is_third_party());
    }

    #[test]
    fn extension_edge_cases() {
        let dotfile = OutputArtifact::asset("src/.env", vec![]);
        assert_eq!(dotfile.stem(), ".env");
        assert_eq!(dotfile.extension(), "");

        let bare = OutputArtifact::asset("src/LICENSE", vec![]);
        assert_eq!(bare.stem(), "LICENSE");
        assert_eq!(bare.extension(), "");

        let double = OutputArtifact::asset("src/data.tar.gz", vec![]);
        assert_eq!(double.stem(), "data.tar");
        assert_eq!(double.extension(), ".gz");
    }

    #[test]
    fn hash_is_content_only() {
        let a = OutputArtifact::asset("src/a.png", b"same".to_vec());
        let b = OutputArtifact::asset("src/b.png", b"same".to_vec());
        assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn third_party_needs_every_origin_in_dependencies() {
        let vendor = OutputArtifact::chunk(
            "vendor",
            vec![
                "node_modules/a/index.js".into(),
                "node_modules/b/index.js".into(),
            ],
            vec![],
        );
        assert!(vendor.is_third_party());

        let mixed = OutputArtifact::chunk(
            "mixed",
            vec!["node_modules/a/index.js".into(), "src/x.js".into()],
            vec![],
        );
        assert!(!mixed.is_third_party());

        let empty = OutputArtifact::chunk("empty", vec![], vec![]);
        assert!(!empty.is_third_party());
    }

    #[test]
    fn len_and_is_empty() {
        let asset = OutputArtifact::asset("src/a.txt", b"hello".to_vec());
        assert_eq!(asset.len(), 5);
        assert!(!asset.is_empty());
        assert!(OutputArtifact::asset("src/b.txt", vec![]).is_empty());
    }
}
