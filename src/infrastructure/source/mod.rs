//! Source discovery

mod scanner;

pub use scanner::{scan_sources, source_id};
