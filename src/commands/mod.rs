//! Subcommand entry points

pub mod build;
pub mod dev;
pub mod keys;
pub mod preview;
mod project;
