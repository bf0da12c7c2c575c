//! Configuration module for firecat
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FIRECAT_*)
//! 3. Project config (firecat.toml)
//! 4. User config (~/.config/firecat/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    config_layers, load_layered_with_warnings, project_config_path, user_config_path,
    ConfigWarning, CONFIG_FILE,
};
pub use types::{
    BuildConfig, ColorMode, Config, OutputConfig, Profile, ServerConfig, Verbosity,
};
