use std::path::{Path, PathBuf};

use anyhow::Result;
use firecat::config::{config_layers, load_layered_with_warnings, CONFIG_FILE};
use firecat::Config;

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `firecat.toml`
/// - `package.json` (the JavaScript project the client lives in)
/// - `.git/` or `.git` file
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(CONFIG_FILE).is_file() {
            return dir.to_path_buf();
        }
        if dir.join("package.json").is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// Resolve `--root` or discover it from the working directory
pub(crate) fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => discover_project_root(&std::env::current_dir()?),
    };
    Ok(root.canonicalize().unwrap_or(root))
}

/// Load user and project config, reporting unknown keys unless in JSON mode.
///
/// A broken config file is an error here rather than a silent fallback
/// to defaults.
pub(crate) fn load_config(root: &Path, json: bool) -> Result<Config> {
    let (config, warnings) = load_layered_with_warnings(&config_layers(Some(root)))?;
    if !json {
        crate::ui::output::print_config_warnings(&warnings);
    }
    Ok(config.with_env_overrides())
}
