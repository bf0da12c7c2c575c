//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod chunker;
pub mod html;
pub mod router;

pub use chunker::{import_statement, plan_chunks, render_chunk, ChunkPlan};
pub use html::{reference_id, rewrite_references};
pub use router::{
    destination_for, is_third_party, manual_chunk, OutputRouter, ENTRY_NAME, SCRIPT_DIR,
    THIRD_PARTY_MARKER, VENDOR_GROUP,
};
