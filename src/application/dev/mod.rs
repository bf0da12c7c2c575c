//! Dev Module
//!
//! Watch sources and rebuild on change.
//!
//! ## Structure
//!
//! - `state` - Debounce window and content-hash change tracking
//! - `use_case` - The watch loop (`DevUseCase`)

mod state;
mod use_case;

pub use state::{ChangeTracker, WatcherState, DEBOUNCE_MS};
pub use use_case::{is_ignored, DevOptions, DevUseCase};
