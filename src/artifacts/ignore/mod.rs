//! Ignore rules applied while snapshotting a tree
//!
//! An entry is skipped when either layer matches:
//!
//! - built-in names (VCS metadata, OS cache files), checked against the basename
//! - user glob patterns, checked against the `/`-separated relative path and the basename
//!
//! A single raw pattern may carry several comma-separated sub-patterns.

use glob::Pattern;
use std::path::Path;

pub const DEFAULT_IGNORES: [&str; 4] = [".git", "__pycache__", ".DS_Store", "Thumbs.db"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Matcher {
    Glob(Pattern),
    // not a valid glob, compared verbatim
    Literal(String),
}

impl Matcher {
    fn compile(pattern: &str) -> Self {
        match Pattern::new(pattern) {
            Ok(glob) => Matcher::Glob(glob),
            Err(err) => {
                log::warn!("ignore pattern {pattern:?} is not a valid glob ({err}), matching it literally");
                Matcher::Literal(pattern.to_string())
            }
        }
    }

    fn matches(&self, candidate: &str) -> bool {
        match self {
            Matcher::Glob(glob) => glob.matches(candidate),
            Matcher::Literal(literal) => literal == candidate,
        }
    }
}

/// Compiled ignore predicate shared by both tree snapshots of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreRules {
    matchers: Vec<Matcher>,
}

impl IgnoreRules {
    pub fn new<S: AsRef<str>>(raw_patterns: &[S]) -> Self {
        let matchers = raw_patterns
            .iter()
            .flat_map(|raw| raw.as_ref().split(','))
            .map(str::trim)
            .filter(|pattern| !pattern.is_empty())
            .map(Matcher::compile)
            .collect();

        IgnoreRules { matchers }
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn is_ignored(&self, rel: &Path) -> bool {
        let name = rel
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        if DEFAULT_IGNORES.contains(&name.as_ref()) {
            return true;
        }

        let slashed = to_slash(rel);
        self.matchers
            .iter()
            .any(|matcher| matcher.matches(&slashed) || matcher.matches(&name))
    }
}

/// Relative path rendered with `/` separators regardless of platform
pub fn to_slash(rel: &Path) -> String {
    rel.to_string_lossy().replace('\\', "/")
}
