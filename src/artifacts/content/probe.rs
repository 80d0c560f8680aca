use crate::artifacts::content::digest::ContentDigest;
use anyhow::Context;
use encoding_rs::WINDOWS_1252;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Bytes inspected by the binary sniffing heuristic
pub const SNIFF_LEN: usize = 4096;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("unable to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn open(path: &Path) -> Result<File, ProbeError> {
    File::open(path).map_err(|source| ProbeError::Open {
        path: path.to_path_buf(),
        source,
    })
}

pub fn digest_file(path: &Path) -> Result<ContentDigest, ProbeError> {
    let mut file = open(path)?;

    ContentDigest::from_reader(&mut file).map_err(|source| ProbeError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Compare two files by content digest
///
/// Errors are reported, not swallowed: the reconciler decides to treat an
/// unreadable pair as modified.
pub fn bytes_equal(a: &Path, b: &Path) -> Result<bool, ProbeError> {
    let (a_digest, b_digest) = (digest_file(a)?, digest_file(b)?);
    log::trace!(
        "{} {} / {} {}",
        a_digest.to_short(),
        a.display(),
        b_digest.to_short(),
        b.display()
    );

    Ok(a_digest == b_digest)
}

fn sniff(path: &Path) -> Result<Vec<u8>, ProbeError> {
    let mut prefix = Vec::with_capacity(SNIFF_LEN);

    open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut prefix)
        .map_err(|source| ProbeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(prefix)
}

/// Heuristic binary detection over the first [`SNIFF_LEN`] bytes
///
/// Unreadable files count as binary so they are never line-diffed.
pub fn looks_binary(path: &Path) -> bool {
    match sniff(path) {
        Ok(prefix) => is_binary_prefix(&prefix, prefix.len() == SNIFF_LEN),
        Err(err) => {
            log::warn!("{err}, treating it as binary");
            true
        }
    }
}

/// A prefix is binary when it holds a NUL byte or is not UTF-8.
///
/// When the prefix was cut at the sniff boundary, a multi-byte sequence left
/// incomplete at its very end is tolerated.
pub fn is_binary_prefix(prefix: &[u8], truncated: bool) -> bool {
    if prefix.contains(&0) {
        return true;
    }

    match std::str::from_utf8(prefix) {
        Ok(_) => false,
        Err(err) => !(truncated && err.error_len().is_none()),
    }
}

/// Read a file as text: UTF-8 first, Windows-1252 when that fails
pub fn read_text_best_effort(path: &Path, normalize_eol: bool) -> anyhow::Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            log::debug!("{} is not UTF-8, decoding as Windows-1252", path.display());
            let (decoded, _) = WINDOWS_1252.decode_without_bom_handling(err.as_bytes());
            decoded.into_owned()
        }
    };

    if normalize_eol {
        Ok(normalize_line_endings(&text))
    } else {
        Ok(text)
    }
}

pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
