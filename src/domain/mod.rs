//! Domain Layer
//!
//! Pure build logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Source files, output artifacts, destinations, the manifest
//! - `value_objects/` - Immutable value types (ContentHash, AssetCategory, ArtifactRole)
//! - `services/` - Output routing and chunk planning
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Routing and chunking are stateless and total
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
