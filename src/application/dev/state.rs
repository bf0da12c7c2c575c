//! Dev watcher state: debouncing and no-op save filtering

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::domain::value_objects::ContentHash;

/// Quiet period after the last change before a rebuild starts
pub const DEBOUNCE_MS: u64 = 100;

/// Pending changes waiting out the debounce window
#[derive(Debug, Default)]
pub struct WatcherState {
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
}

impl WatcherState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    /// Debounce window passed and something is pending
    pub fn should_rebuild(&self) -> bool {
        match self.last_change {
            Some(last) => {
                !self.pending_changes.is_empty()
                    && last.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
            }
            None => false,
        }
    }

    /// Take all pending changes in path order, resetting state
    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        let mut changes: Vec<_> = self.pending_changes.drain().collect();
        changes.sort();
        self.last_change = None;
        changes
    }
}

/// Remembers file content hashes so editor saves that change nothing do not
/// trigger a rebuild
#[derive(Debug, Default)]
pub struct ChangeTracker {
    hashes: HashMap<PathBuf, ContentHash>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a known file without reporting it as changed
    pub fn remember(&mut self, path: PathBuf, content: &[u8]) {
        self.hashes.insert(path, ContentHash::from_bytes(content));
    }

    /// Record the current state of `path`; true when it differs from what
    /// was seen last. `None` content means the file is gone.
    pub fn observe(&mut self, path: &Path, content: Option<&[u8]>) -> bool {
        match content {
            Some(bytes) => {
                let hash = ContentHash::from_bytes(bytes);
                match self.hashes.get(path) {
                    Some(old) if *old == hash => false,
                    _ => {
                        self.hashes.insert(path.to_path_buf(), hash);
                        true
                    }
                }
            }
            None => self.hashes.remove(path).is_some(),
        }
    }
}
