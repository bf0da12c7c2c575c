//! DestinationPath entity - where an artifact lands inside the output directory

use std::fmt;

/// Placeholder for the truncated content hash inside a file template
pub const HASH_PLACEHOLDER: &str = "[hash]";

/// A category directory plus a file name template containing `[hash]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DestinationPath {
    directory: String,
    file_template: String,
}

impl DestinationPath {
    pub fn new(directory: impl Into<String>, file_template: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_template: file_template.into(),
        }
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn file_template(&self) -> &str {
        &self.file_template
    }

    /// Substitute the hash and return the `/`-separated relative path
    pub fn render(&self, hash: &str) -> String {
        format!(
            "{}/{}",
            self.directory,
            self.file_template.replace(HASH_PLACEHOLDER, hash)
        )
    }
}

impl fmt::Display for DestinationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.directory, self.file_template)
    }
}
