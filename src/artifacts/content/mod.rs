//! File classification and content comparison
//!
//! - `digest`: SHA-256 content digests
//! - `probe`: byte equality, binary sniffing and best-effort text decoding

pub mod digest;
pub mod probe;

pub use digest::ContentDigest;
pub use probe::{ProbeError, bytes_equal, looks_binary, read_text_best_effort};
