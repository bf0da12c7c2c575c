//! Build Options
//!
//! Configuration types for build operations.

use std::path::PathBuf;

use crate::config::{BuildConfig, Config};
use crate::domain::value_objects::EsTarget;

/// Options for the build use case
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    /// Project root (where `index.html`, `firecat.toml` and the lock live)
    pub project_root: PathBuf,
    /// Build section of the configuration
    pub build: BuildConfig,
    /// Public path prefix, profile fallback already applied
    pub base: String,
    /// Language level, profile fallback already applied
    pub target: Option<EsTarget>,
}

impl BuildOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self::from_config(project_root, &Config::default())
    }

    /// Options for `project_root` using the resolved values of `config`
    pub fn from_config(project_root: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            project_root: project_root.into(),
            build: config.build.clone(),
            base: config.base().to_string(),
            target: config.target(),
        }
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.build.out_dir = out_dir.into();
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.build.entry = entry.into();
        self
    }
}
