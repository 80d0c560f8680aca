//! Content digest (SHA-256)
//!
//! Digests are 64-character lowercase hexadecimal strings. Two files with the
//! same digest are treated as byte-identical.

use sha2::{Digest, Sha256};
use std::io;

pub const DIGEST_HEX_LENGTH: usize = 64;

/// SHA-256 digest of a file's content, hex encoded
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Stream a reader through SHA-256 without holding the content in memory
    pub fn from_reader<R: io::Read + ?Sized>(reader: &mut R) -> io::Result<Self> {
        let mut hasher = Sha256::new();
        io::copy(reader, &mut hasher)?;

        Ok(Self(hex::encode(hasher.finalize())))
    }

    /// First 7 characters, enough to tell digests apart in log lines
    pub fn to_short(&self) -> &str {
        &self.0[..7]
    }
}

impl AsRef<str> for ContentDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
