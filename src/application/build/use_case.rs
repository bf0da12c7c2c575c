//! Build Use Case
//!
//! Orchestrates one build pass:
//! 1. Lock the project and prepare the output directory
//! 2. Scan sources
//! 3. Plan chunks and render artifacts
//! 4. Route and write every artifact
//! 5. Rewrite `index.html` and write the manifest
//!
//! Routing, chunk planning and HTML rewriting are domain services; this file
//! only sequences them and performs the I/O.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::config::BuildConfig;
use crate::domain::entities::{
    BuildManifest, ManifestEntry, OutputArtifact, SourceFile, MANIFEST_FILE,
};
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem, NoopEventSink};
use crate::domain::value_objects::ArtifactRole;
use crate::domain::services::{
    import_statement, plan_chunks, render_chunk, rewrite_references, OutputRouter,
};
use crate::error::{FirecatError, FirecatResult};
use crate::infrastructure::{scan_sources, BuildLock};

use super::options::BuildOptions;
use super::result::{BuildResult, SizeWarning};

/// HTML shell rewritten into the output directory
pub const INDEX_HTML: &str = "index.html";

/// Lexically normalize a path: drop `.` and fold `..` into its parent
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve `out_dir` against `root`.
///
/// An output directory that will be emptied must sit strictly inside the
/// project root; anything else is a `PathEscape`.
pub fn resolve_out_dir(root: &Path, out_dir: &Path, will_empty: bool) -> FirecatResult<PathBuf> {
    let root = normalize_path(root);
    let resolved = normalize_path(&root.join(out_dir));
    let leaves_cwd = root.as_os_str().is_empty()
        && matches!(resolved.components().next(), Some(Component::ParentDir));
    let escapes = resolved == root
        || leaves_cwd
        || resolved.is_absolute() != root.is_absolute()
        || !resolved.starts_with(&root);
    if will_empty && escapes {
        return Err(FirecatError::PathEscape {
            path: resolved,
            root,
        });
    }
    Ok(resolved)
}

fn overlaps(a: &Path, b: &Path) -> bool {
    a.starts_with(b) || b.starts_with(a)
}

/// Refuse an output directory that equals, contains or sits inside the
/// source or dependency directories, or that contains the entry module.
pub fn check_out_dir_overlap(
    root: &Path,
    out_dir: &Path,
    build: &BuildConfig,
) -> FirecatResult<()> {
    let root = normalize_path(root);
    let out_dir = normalize_path(out_dir);
    let refuse = |sources: PathBuf| {
        Err(FirecatError::OutDirOverlap {
            path: out_dir.clone(),
            sources,
        })
    };

    for dir in std::iter::once(&build.src_dir).chain(&build.dependency_dirs) {
        let dir = normalize_path(&root.join(dir));
        if overlaps(&out_dir, &dir) {
            return refuse(dir);
        }
    }

    let entry = normalize_path(&root.join(entry_id(&build.entry)));
    if let Some(entry_dir) = entry.parent() {
        if entry_dir.starts_with(&out_dir) {
            return refuse(entry_dir.to_path_buf());
        }
    }
    Ok(())
}

fn entry_id(entry: &str) -> String {
    let entry = entry.replace('\\', "/");
    let entry = entry.strip_prefix("./").unwrap_or(&entry);
    entry.trim_start_matches('/').to_string()
}

fn members<'a>(by_id: &HashMap<&str, &'a SourceFile>, ids: &[String]) -> Vec<&'a SourceFile> {
    ids.iter()
        .filter_map(|id| by_id.get(id.as_str()).copied())
        .collect()
}

/// An artifact queued for writing, with its manual group
struct Planned {
    artifact: OutputArtifact,
    group: Option<String>,
}

/// Build use case - orchestrates a production build
///
/// Parameterized by the file system port so tests can observe writes.
pub struct BuildUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
}

impl<FS> BuildUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Execute a build pass silently
    pub fn execute(&self, options: &BuildOptions) -> FirecatResult<BuildResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute a build pass, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        options: &BuildOptions,
        event_sink: Arc<dyn BuildEventSink>,
    ) -> FirecatResult<BuildResult> {
        let root = options.project_root.as_path();
        let _lock = BuildLock::acquire(root)?;

        let out_dir = resolve_out_dir(root, &options.build.out_dir, options.build.empty_out_dir)?;
        check_out_dir_overlap(root, &out_dir, &options.build)?;
        if options.build.empty_out_dir {
            self.file_system.clear_dir(&out_dir)?;
        }
        self.file_system.create_dir_all(&out_dir)?;

        let sources = scan_sources(&self.file_system, root, &options.build)?;
        event_sink.on_event(BuildEvent::Started {
            root: root.to_path_buf(),
            out_dir: out_dir.clone(),
            source_count: sources.len(),
        });

        let planned = self.plan(options, &sources)?;
        let router = OutputRouter::new(options.build.hash_length);

        let mut result = BuildResult::new(
            out_dir.clone(),
            BuildManifest::new(options.base.clone(), options.target),
        );
        result.source_count = sources.len();

        let mut urls: HashMap<String, String> = HashMap::new();
        for Planned { artifact, group } in planned {
            let file = router.route(&artifact);
            let path = out_dir.join(&file);
            self.file_system.write(&path, artifact.content())?;
            result.written.push(path);

            if event_sink.wants_detailed_events() {
                event_sink.on_event(BuildEvent::Emitted {
                    file: file.clone(),
                    role: artifact.role(),
                    group: group.clone(),
                    size: artifact.len(),
                });
            }

            if artifact.role().is_code() {
                let size_kb = artifact.len() as f64 / 1000.0;
                let limit_kb = options.build.chunk_size_warning_limit;
                if size_kb > limit_kb as f64 {
                    event_sink.on_event(BuildEvent::ChunkSizeWarning {
                        file: file.clone(),
                        size_kb,
                        limit_kb,
                    });
                    result.warnings.push(SizeWarning {
                        file: file.clone(),
                        size_kb,
                        limit_kb,
                    });
                }
            }

            // Only the entry and assets are addressable from the HTML shell
            match artifact.role() {
                ArtifactRole::Entry | ArtifactRole::Asset => {
                    if let Some(origin) = artifact.origins().first() {
                        urls.insert(origin.clone(), result.manifest.url(&file));
                    }
                }
                ArtifactRole::Chunk => {}
            }

            result.manifest.push(ManifestEntry {
                file,
                role: artifact.role(),
                group,
                sources: artifact.origins().to_vec(),
                hash: artifact.hash().to_string(),
                size: artifact.len(),
            });
        }
        result.manifest.finalize();

        let index = root.join(INDEX_HTML);
        if self.file_system.exists(&index) {
            let html = self.file_system.read_to_string(&index)?;
            let (rewritten, replaced) = rewrite_references(&html, &urls);
            let target = out_dir.join(INDEX_HTML);
            self.file_system.write(&target, rewritten.as_bytes())?;
            event_sink.on_event(BuildEvent::HtmlRewritten {
                file: INDEX_HTML.to_string(),
                replaced,
            });
            result.html = Some(target);
        }

        if options.build.manifest {
            let json = result.manifest.to_json()?;
            self.file_system
                .write(&out_dir.join(MANIFEST_FILE), json.as_bytes())?;
        }

        event_sink.on_event(BuildEvent::Completed {
            entry: result.manifest.entry.clone(),
            file_count: result.manifest.files.len(),
            total_size: result.manifest.total_size(),
            warning_count: result.warnings.len(),
        });

        Ok(result)
    }

    /// Render every artifact of the pass, vendor groups first so the entry
    /// can import them by hashed name.
    fn plan(&self, options: &BuildOptions, sources: &[SourceFile]) -> FirecatResult<Vec<Planned>> {
        let entry_id = entry_id(&options.build.entry);
        let by_id: HashMap<&str, &SourceFile> = sources.iter().map(|s| (s.id(), s)).collect();
        if !by_id.contains_key(entry_id.as_str()) {
            return Err(FirecatError::EntryNotFound {
                path: options.project_root.join(&options.build.entry),
            });
        }

        let plan = plan_chunks(
            &entry_id,
            sources.iter().filter(|s| s.is_module()).map(|s| s.id()),
        );
        let router = OutputRouter::new(options.build.hash_length);
        let mut planned = Vec::new();
        let mut prelude = Vec::new();

        for (name, ids) in &plan.groups {
            let content = render_chunk(&[], &members(&by_id, ids));
            let chunk = OutputArtifact::chunk(name, ids.clone(), content);
            let routed = router.route(&chunk);
            let file_name = routed.rsplit('/').next().unwrap_or(&routed);
            prelude.push(import_statement(file_name));
            planned.push(Planned {
                artifact: chunk,
                group: Some(name.clone()),
            });
        }

        let entry = OutputArtifact::entry(
            entry_id.clone(),
            plan.entry.clone(),
            render_chunk(&prelude, &members(&by_id, &plan.entry)),
        );
        planned.push(Planned {
            artifact: entry,
            group: None,
        });

        for source in sources
            .iter()
            .filter(|s| !s.is_module() && s.id() != entry_id)
        {
            planned.push(Planned {
                artifact: OutputArtifact::asset(source.id(), source.content().to_vec()),
                group: None,
            });
        }

        Ok(planned)
    }
}
