//! Content Hash Value Object
//!
//! A SHA-256 fingerprint of an artifact's final bytes. The full digest goes
//! into the build manifest; a truncated prefix goes into file names for
//! cache-busting.

use std::fmt;

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Stores the lowercase hex digest without any prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix used when the hash is displayed or serialized
    pub const PREFIX: &'static str = "sha256:";

    /// Default number of hex characters placed into file names
    pub const DEFAULT_SHORT_LEN: usize = 8;

    /// Compute the hash of raw bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(content)))
    }

    /// Truncated digest used in file names.
    ///
    /// Lengths outside `1..=64` are clamped.
    pub fn short(&self, len: usize) -> &str {
        let len = len.clamp(1, self.0.len());
        &self.0[..len]
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}
