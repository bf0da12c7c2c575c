//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod category;
mod es_target;
mod hash;
mod role;

pub use category::AssetCategory;
pub use es_target::EsTarget;
pub use hash::ContentHash;
pub use role::ArtifactRole;
