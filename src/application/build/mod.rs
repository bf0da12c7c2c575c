//! Build Module
//!
//! One production build pass: scan, chunk, route, write.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`BuildOptions`)
//! - `result` - Result types (`BuildResult`, `SizeWarning`)
//! - `use_case` - Core use case logic (`BuildUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use firecat::application::build::{BuildOptions, BuildUseCase};
//! use firecat::infrastructure::LocalFs;
//!
//! let use_case = BuildUseCase::new(LocalFs::new());
//! let result = use_case.execute(&BuildOptions::new("."))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::BuildOptions;
pub use result::{BuildResult, SizeWarning};
pub use use_case::{
    check_out_dir_overlap, normalize_path, resolve_out_dir, BuildUseCase, INDEX_HTML,
};
