//! firecat - build tooling and input capture for a browser game client
//!
//! Two small pieces make up the crate:
//!
//! - `input` keeps privileged keyboard shortcuts (Ctrl, Alt, Meta, F-keys)
//!   from reaching the page before the game engine loads
//! - the build pipeline routes emitted files into `js/`, `css/`, `img/`,
//!   `sounds/`, `fonts/` and `assets/` with content-hashed names and splits
//!   dependency code into a `vendor` chunk
//!
//! On `wasm32` only the input filter and the pure domain layer are built.

pub mod config;
pub mod domain;
pub mod error;
pub mod input;

#[cfg(not(target_arch = "wasm32"))]
pub mod application;
#[cfg(not(target_arch = "wasm32"))]
pub mod infrastructure;

// Re-exports for convenience
pub use config::{Config, Profile};
pub use domain::entities::{BuildManifest, OutputArtifact};
pub use domain::services::{manual_chunk, OutputRouter};
pub use domain::value_objects::{ArtifactRole, AssetCategory, ContentHash};
pub use error::{FirecatError, FirecatResult};
pub use input::{is_privileged, Bootstrap, KeyEvent, KeyEventKind};

#[cfg(not(target_arch = "wasm32"))]
pub use application::{BuildOptions, BuildResult, BuildUseCase};
