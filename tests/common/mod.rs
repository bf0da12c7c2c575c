//! Common test utilities for firecat CLI and contract tests.
//!
//! - `TestEnv`: isolated project directory and config home
//! - Fixtures: a small game project

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
