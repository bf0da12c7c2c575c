//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - One production build pass (scan, chunk, route, write)
//! - `DevUseCase` - Initial build plus rebuild on change
//! - `PreviewUseCase` - Inspect the output of the last build

pub mod build;
pub mod dev;
pub mod preview;

pub use build::{BuildOptions, BuildResult, BuildUseCase, SizeWarning};
pub use dev::{DevOptions, DevUseCase, WatcherState, DEBOUNCE_MS};
pub use preview::{PreviewOptions, PreviewReport, PreviewUseCase};
