//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FirecatError, FirecatResult};

use super::types::{Config, Profile, Verbosity};

/// Project config file name
pub const CONFIG_FILE: &str = "firecat.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FirecatResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FirecatError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Path of the project config under `root`
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// User config under the XDG config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("firecat").join("config.toml"))
}

/// Config files that exist for `project_root`, lowest priority first
pub fn config_layers(project_root: Option<&Path>) -> Vec<PathBuf> {
    user_config_path()
        .into_iter()
        .chain(project_root.map(project_config_path))
        .filter(|path| path.is_file())
        .collect()
}

/// Load and merge config files, later files overriding earlier ones.
///
/// Each file is checked on its own first so errors and unknown-key
/// warnings point at the file they came from.
pub fn load_layered_with_warnings(
    paths: &[PathBuf],
) -> FirecatResult<(Config, Vec<ConfigWarning>)> {
    let mut merged = toml::Table::new();
    let mut warnings = Vec::new();

    for path in paths {
        let (_, file_warnings) = load_with_warnings(path)?;
        warnings.extend(file_warnings);

        let table: toml::Table = toml::from_str(&fs::read_to_string(path)?).map_err(|e| {
            FirecatError::InvalidConfig {
                file: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        merge_tables(&mut merged, table);
    }

    let config: Config = toml::Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| FirecatError::InvalidConfig {
            file: paths.last().cloned().unwrap_or_default(),
            message: e.to_string(),
        })?;
    Ok((config, warnings))
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(table)) => {
                merge_tables(existing, table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Load user config overlaid by project config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let config = load_layered_with_warnings(&config_layers(project_root))
        .map(|(config, _)| config)
        .unwrap_or_default();
    with_env_overrides(config)
}

/// Apply environment variable overrides (FIRECAT_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // FIRECAT_PROFILE
    if let Ok(profile) = std::env::var("FIRECAT_PROFILE") {
        if let Some(profile) = Profile::parse(&profile) {
            config.profile = profile;
        }
    }

    // FIRECAT_OUT_DIR
    if let Ok(out_dir) = std::env::var("FIRECAT_OUT_DIR") {
        if !out_dir.trim().is_empty() {
            config.build.out_dir = PathBuf::from(out_dir);
        }
    }

    // FIRECAT_BASE (empty is a valid base)
    if let Ok(base) = std::env::var("FIRECAT_BASE") {
        config.build.base = Some(base);
    }

    // FIRECAT_PORT applies to both dev and preview
    if let Ok(port) = std::env::var("FIRECAT_PORT") {
        if let Ok(port) = port.trim().parse::<u16>() {
            config.server.port = port;
            config.preview.port = port;
        }
    }

    // FIRECAT_HOST applies to both dev and preview
    if let Ok(host) = std::env::var("FIRECAT_HOST") {
        if !host.trim().is_empty() {
            config.server.host = host.trim().to_string();
            config.preview.host = host.trim().to_string();
        }
    }

    // FIRECAT_VERBOSITY
    if let Ok(verbosity) = std::env::var("FIRECAT_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "profile",
        "build",
        "entry",
        "src_dir",
        "dependency_dirs",
        "out_dir",
        "base",
        "target",
        "chunk_size_warning_limit",
        "hash_length",
        "empty_out_dir",
        "manifest",
        "server",
        "preview",
        "port",
        "host",
        "output",
        "verbosity",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
