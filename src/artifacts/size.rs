//! Human-friendly byte sizes (`5MB`, `512k`, `1.5 GiB`)

use thiserror::Error;

const SIZE_REGEX: &str = r"^(\d+(?:\.\d*)?|\.\d+)\s*([a-z]*)$";

const UNITS: phf::Map<&'static str, u64> = phf::phf_map! {
    "" => 1,
    "b" => 1,
    "k" => 1_000,
    "kb" => 1_000,
    "m" => 1_000_000,
    "mb" => 1_000_000,
    "g" => 1_000_000_000,
    "gb" => 1_000_000_000,
    "kib" => 1 << 10,
    "mib" => 1 << 20,
    "gib" => 1 << 30,
};

#[derive(Debug, Error)]
pub enum SizeError {
    #[error("invalid size {0:?}, expected a number with an optional unit (b, kb, mb, gb, kib, mib, gib)")]
    Invalid(String),
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

/// Parse a byte count; decimal units are powers of 1000, binary ones of 1024
///
/// Fractions are allowed and the result is truncated.
pub fn parse_size(raw: &str) -> Result<u64, SizeError> {
    let grammar = regex::Regex::new(SIZE_REGEX)?;
    let normalized = raw.trim().to_ascii_lowercase();
    let invalid = || SizeError::Invalid(raw.to_string());

    let captures = grammar.captures(&normalized).ok_or_else(invalid)?;
    let multiplier = UNITS.get(&captures[2]).ok_or_else(invalid)?;
    let amount = captures[1].parse::<f64>().map_err(|_| invalid())?;

    Ok((amount * *multiplier as f64) as u64)
}
