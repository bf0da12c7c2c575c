//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ContentHash, EsTarget};
use crate::error::FirecatResult;

use super::loader::{self, ConfigWarning};

/// Which build flavour the defaults come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// The game client itself
    #[default]
    Client,
    /// The bundled example apps
    Example,
}

impl Profile {
    /// Public path prefix used when `build.base` is unset
    pub fn default_base(&self) -> &'static str {
        match self {
            Profile::Client => "/",
            Profile::Example => "",
        }
    }

    /// Language level pinned when `build.target` is unset
    pub fn default_target(&self) -> Option<EsTarget> {
        match self {
            Profile::Client => None,
            Profile::Example => Some(EsTarget::Es2022),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "client" => Some(Profile::Client),
            "example" | "examples" => Some(Profile::Example),
            _ => None,
        }
    }
}

/// Build configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Entry module, relative to the project root
    #[serde(default = "default_entry")]
    pub entry: String,

    /// First-party source directory
    #[serde(default = "default_src_dir")]
    pub src_dir: PathBuf,

    /// Directories scanned for third-party JavaScript modules
    #[serde(default = "default_dependency_dirs")]
    pub dependency_dirs: Vec<PathBuf>,

    /// Output directory, relative to the project root
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Public path prefix; falls back to the profile default
    #[serde(default)]
    pub base: Option<String>,

    /// Minimum language level; falls back to the profile default
    #[serde(default)]
    pub target: Option<EsTarget>,

    /// Warn when a chunk is larger than this many kB
    #[serde(default = "default_chunk_size_warning_limit")]
    pub chunk_size_warning_limit: u64,

    /// Hex characters of the content hash placed in file names
    #[serde(default = "default_hash_length")]
    pub hash_length: usize,

    /// Empty the output directory before writing
    #[serde(default = "default_true")]
    pub empty_out_dir: bool,

    /// Write `manifest.json`
    #[serde(default = "default_true")]
    pub manifest: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            src_dir: default_src_dir(),
            dependency_dirs: default_dependency_dirs(),
            out_dir: default_out_dir(),
            base: None,
            target: None,
            chunk_size_warning_limit: default_chunk_size_warning_limit(),
            hash_length: default_hash_length(),
            empty_out_dir: true,
            manifest: true,
        }
    }
}

fn default_entry() -> String {
    "src/main.js".to_string()
}

fn default_src_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_dependency_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("node_modules")]
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_chunk_size_warning_limit() -> u64 {
    1000
}

fn default_hash_length() -> usize {
    ContentHash::DEFAULT_SHORT_LEN
}

fn default_true() -> bool {
    true
}

/// Dev or preview server address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the level by the number of `-v` flags given
    pub fn raised_by(self, count: u8) -> Self {
        match (self as u8).saturating_add(count) {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub preview: ServerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Defaults for the game client
    pub fn client() -> Self {
        Self::default()
    }

    /// Defaults for the example apps
    pub fn example_app() -> Self {
        Self {
            profile: Profile::Example,
            ..Self::default()
        }
    }

    /// Public path prefix after profile fallback
    pub fn base(&self) -> &str {
        self.build
            .base
            .as_deref()
            .unwrap_or_else(|| self.profile.default_base())
    }

    /// Language level after profile fallback
    pub fn target(&self) -> Option<EsTarget> {
        self.build.target.or_else(|| self.profile.default_target())
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FirecatResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FirecatResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (FIRECAT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
