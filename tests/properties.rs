//! Property tests for firecat.
//!
//! Properties use randomized input generation to protect invariants of the
//! key predicate and the output router.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/key_filter.rs"]
mod key_filter;

#[path = "properties/router.rs"]
mod router;
