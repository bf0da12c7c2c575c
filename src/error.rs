//! Error types for firecat
//!
//! Routing and key filtering are total and never fail; everything here
//! belongs to the build pipeline and the CLI around it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for firecat operations
pub type FirecatResult<T> = Result<T, FirecatError>;

/// Main error type for firecat operations
#[derive(Error, Debug)]
pub enum FirecatError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The configured entry module does not exist
    #[error("entry module not found: {path}")]
    EntryNotFound { path: PathBuf },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Output directory escapes the project root and cannot be emptied
    #[error("path '{path}' escapes project boundary '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Output directory shares files with the sources it is built from
    #[error("output directory '{path}' overlaps source directory '{sources}'")]
    OutDirOverlap { path: PathBuf, sources: PathBuf },

    /// No build manifest to preview
    #[error("no build found at {path} - run `firecat build` first")]
    ManifestNotFound { path: PathBuf },

    /// File watcher could not be started
    #[error("file watcher failed: {message}")]
    Watch { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<crate::domain::ports::FsError> for FirecatError {
    fn from(err: crate::domain::ports::FsError) -> Self {
        FirecatError::Io(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_entry_not_found() {
        let err = FirecatError::EntryNotFound {
            path: PathBuf::from("src/main.js"),
        };
        assert_eq!(err.to_string(), "entry module not found: src/main.js");
    }

    #[test]
    fn test_error_display_path_escape() {
        let err = FirecatError::PathEscape {
            path: PathBuf::from("/tmp/dist"),
            root: PathBuf::from("/home/game"),
        };
        assert_eq!(
            err.to_string(),
            "path '/tmp/dist' escapes project boundary '/home/game'"
        );
    }

    #[test]
    fn test_error_display_manifest_not_found() {
        let err = FirecatError::ManifestNotFound {
            path: PathBuf::from("dist/manifest.json"),
        };
        assert!(err.to_string().contains("firecat build"));
    }
}
