//! Build Event Port
//!
//! Provides an observable interface for build, dev and preview operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::ArtifactRole;

/// Event emitted during a build pass or a dev session
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// Build pass started
    Started {
        root: PathBuf,
        out_dir: PathBuf,
        source_count: usize,
    },

    /// An artifact was written
    Emitted {
        file: String,
        role: ArtifactRole,
        group: Option<String>,
        size: usize,
    },

    /// A chunk is larger than the configured limit (advisory only)
    ChunkSizeWarning {
        file: String,
        size_kb: f64,
        limit_kb: u64,
    },

    /// `index.html` was rewritten to hashed paths
    HtmlRewritten { file: String, replaced: usize },

    /// Build pass finished
    Completed {
        entry: String,
        file_count: usize,
        total_size: usize,
        warning_count: usize,
    },

    /// Dev watcher is up
    WatchStarted { url: String, watched: Vec<PathBuf> },

    /// Sources changed, a rebuild follows
    Rebuilding { changed: Vec<PathBuf> },

    /// A rebuild failed; the watcher keeps running
    RebuildFailed { error: String },

    /// Dev session ended
    Shutdown,
}

/// Trait for receiving build events
///
/// Implementations can be:
/// - ConsoleEventSink: Human-readable output in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

impl<S: BuildEventSink + ?Sized> BuildEventSink for std::sync::Arc<S> {
    fn on_event(&self, event: BuildEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}
