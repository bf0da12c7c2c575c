//! Build lock
//!
//! One build pass per project at a time. `dev` rebuilds and a manual
//! `firecat build` in another terminal would otherwise race on the output
//! directory.

use std::fs::{self, File};
use std::path::Path;

use fs2::FileExt;

use crate::error::FirecatResult;

/// Lock file name, placed at the project root
pub const LOCK_FILE: &str = ".firecat.lock";

/// Exclusive advisory lock held for the duration of a build pass
#[derive(Debug)]
pub struct BuildLock {
    file: File,
}

impl BuildLock {
    /// Block until the project lock is ours
    pub fn acquire(root: &Path) -> FirecatResult<Self> {
        fs::create_dir_all(root)?;
        let path = root.join(LOCK_FILE);
        let file = File::create(&path)?;
        file.lock_exclusive()?;
        Ok(Self { file })
    }
}

impl Drop for BuildLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn is_held(root: &Path) -> bool {
        let file = File::open(root.join(LOCK_FILE)).unwrap();
        let held = file.try_lock_exclusive().is_err();
        if !held {
            file.unlock().unwrap();
        }
        held
    }

    #[test]
    fn lock_file_is_created_at_root() {
        let dir = tempdir().unwrap();
        let _lock = BuildLock::acquire(dir.path()).unwrap();
        assert!(dir.path().join(LOCK_FILE).is_file());
    }

    #[test]
    fn lock_is_exclusive_while_held() {
        let dir = tempdir().unwrap();
        let _held = BuildLock::acquire(dir.path()).unwrap();
        assert!(is_held(dir.path()));
    }

    #[test]
    fn lock_is_released_on_drop() {
        let dir = tempdir().unwrap();
        drop(BuildLock::acquire(dir.path()).unwrap());
        assert!(!is_held(dir.path()));
    }
}
