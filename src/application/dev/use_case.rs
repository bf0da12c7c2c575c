//! Dev Use Case implementation

use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::build::{BuildOptions, BuildUseCase, INDEX_HTML};
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem};
use crate::error::{FirecatError, FirecatResult};
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::{scan_sources, LOCK_FILE};

use super::state::{ChangeTracker, WatcherState};

/// Options for a dev session
#[derive(Debug, Clone)]
pub struct DevOptions {
    pub build: BuildOptions,
    /// Address reported to the user (`http://host:port`)
    pub url: String,
}

impl DevOptions {
    pub fn new(build: BuildOptions, url: impl Into<String>) -> Self {
        Self {
            build,
            url: url.into(),
        }
    }
}

/// Dev Use Case
///
/// Builds once, then rebuilds whenever a watched source changes.
/// This is the main entry point for the `firecat dev` command.
pub struct DevUseCase {
    options: DevOptions,
}

impl DevUseCase {
    pub fn new(options: DevOptions) -> Self {
        Self { options }
    }

    /// Directories and files the session watches, in this order: the
    /// source directory, existing dependency directories, `index.html`
    pub fn watched_paths(&self) -> Vec<(PathBuf, RecursiveMode)> {
        let root = &self.options.build.project_root;
        let build = &self.options.build.build;

        let mut paths = vec![(root.join(&build.src_dir), RecursiveMode::Recursive)];
        for dir in &build.dependency_dirs {
            let dir = root.join(dir);
            if dir.is_dir() {
                paths.push((dir, RecursiveMode::Recursive));
            }
        }
        let index = root.join(INDEX_HTML);
        if index.is_file() {
            paths.push((index, RecursiveMode::NonRecursive));
        }
        paths
    }

    /// Start watching (blocking)
    ///
    /// Blocks until `running` is set to false. A failed build is reported
    /// as `RebuildFailed` and the session keeps going.
    pub fn start(
        &self,
        running: Arc<AtomicBool>,
        event_sink: Arc<dyn BuildEventSink>,
    ) -> FirecatResult<()> {
        let root = self
            .options
            .build
            .project_root
            .canonicalize()
            .unwrap_or_else(|_| self.options.build.project_root.clone());
        let out_dir = root.join(&self.options.build.build.out_dir);

        self.rebuild(&event_sink);

        let mut tracker = ChangeTracker::new();
        self.prime(&root, &mut tracker);

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )
        .map_err(|e| FirecatError::Watch {
            message: e.to_string(),
        })?;

        let watched = self.watched_paths();
        for (path, mode) in &watched {
            watcher.watch(path, *mode).map_err(|e| FirecatError::Watch {
                message: format!("{}: {}", path.display(), e),
            })?;
        }

        event_sink.on_event(BuildEvent::WatchStarted {
            url: self.options.url.clone(),
            watched: watched.into_iter().map(|(p, _)| p).collect(),
        });

        // notify may replay events for existing files right after
        // registration; drain them
        let cooldown_end = Instant::now() + Duration::from_millis(500);
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(Duration::from_millis(50));
        }

        let mut state = WatcherState::new();
        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
                let path = path.canonicalize().unwrap_or(path);
                if is_ignored(&path, &root, &out_dir) || path.is_dir() {
                    continue;
                }
                let content = std::fs::read(&path).ok();
                if tracker.observe(&path, content.as_deref()) {
                    state.add_change(path);
                }
            }

            if state.should_rebuild() {
                let changed = state.take_changes();
                event_sink.on_event(BuildEvent::Rebuilding { changed });
                self.rebuild(&event_sink);
            }
        }

        event_sink.on_event(BuildEvent::Shutdown);
        Ok(())
    }

    fn rebuild(&self, event_sink: &Arc<dyn BuildEventSink>) {
        let use_case = BuildUseCase::new(LocalFs::new());
        if let Err(e) = use_case.execute_with_events(&self.options.build, event_sink.clone()) {
            event_sink.on_event(BuildEvent::RebuildFailed {
                error: e.to_string(),
            });
        }
    }

    /// Seed the tracker with current contents so the first save of an
    /// untouched file is not reported
    fn prime(&self, root: &Path, tracker: &mut ChangeTracker) {
        let fs = LocalFs::new();
        if let Ok(sources) = scan_sources(&fs, root, &self.options.build.build) {
            for source in sources {
                tracker.remember(root.join(source.id()), source.content());
            }
        }
        let index = root.join(INDEX_HTML);
        if let Ok(content) = fs.read(&index) {
            tracker.remember(index, &content);
        }
    }
}

/// Paths the watcher never rebuilds for: build output, the lock file, and
/// anything hidden below `root`
pub fn is_ignored(path: &Path, root: &Path, out_dir: &Path) -> bool {
    if path.starts_with(out_dir) {
        return true;
    }
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) if name != LOCK_FILE => {}
        _ => return true,
    }
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|c| matches!(c, Component::Normal(name) if name.to_string_lossy().starts_with('.')))
}
