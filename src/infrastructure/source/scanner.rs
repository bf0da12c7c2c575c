//! Source scanner
//!
//! Collects the inputs of a build pass: every non-hidden file under the
//! source directory, plus the JavaScript modules found under the dependency
//! directories. Ids are root-relative and `/`-separated.

use std::path::Path;

use ignore::WalkBuilder;

use crate::config::BuildConfig;
use crate::domain::entities::{SourceFile, SourceKind};
use crate::domain::ports::FileSystem;
use crate::error::{FirecatError, FirecatResult};

/// Root-relative id of `path`, or `None` when `path` is outside `root`
pub fn source_id(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

fn walk_files(dir: &Path) -> Vec<std::path::PathBuf> {
    WalkBuilder::new(dir)
        .hidden(true)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .build()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .collect()
}

/// Scan `root` for the sources of one build pass, sorted by id
pub fn scan_sources<F: FileSystem + ?Sized>(
    fs: &F,
    root: &Path,
    config: &BuildConfig,
) -> FirecatResult<Vec<SourceFile>> {
    let src_dir = root.join(&config.src_dir);
    if !src_dir.is_dir() {
        return Err(FirecatError::DirectoryNotFound { path: src_dir });
    }

    let mut sources = Vec::new();
    for path in walk_files(&src_dir) {
        if let Some(id) = source_id(root, &path) {
            sources.push(SourceFile::new(id, fs.read(&path)?));
        }
    }

    for dep_dir in &config.dependency_dirs {
        let dep_dir = root.join(dep_dir);
        if !dep_dir.is_dir() {
            continue;
        }
        for path in walk_files(&dep_dir) {
            let Some(id) = source_id(root, &path) else {
                continue;
            };
            if SourceKind::from_id(&id) == SourceKind::Module {
                sources.push(SourceFile::new(id, fs.read(&path)?));
            }
        }
    }

    sources.sort_by(|a, b| a.id().cmp(b.id()));
    sources.dedup_by(|a, b| a.id() == b.id());
    Ok(sources)
}
