//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `events/` - Console and NDJSON event sinks
//! - `source/` - Source directory scanning
//! - `lock` - Per-project build lock

pub mod events;
pub mod fs;
pub mod lock;
pub mod source;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use lock::{BuildLock, LOCK_FILE};
pub use source::scan_sources;
