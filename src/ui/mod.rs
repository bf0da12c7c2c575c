//! Terminal presentation for the CLI

pub mod context;
pub mod output;
pub mod terminal;
pub mod theme;
