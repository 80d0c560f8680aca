//! Run configuration and the outcome tally

use derive_new::new;

/// Files larger than this (in bytes) are copied instead of line-diffed
pub const DEFAULT_MAX_TEXT_SIZE: u64 = 5_000_000;

/// Immutable settings for one comparison run
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Options {
    pub normalize_eol: bool,
    pub max_text_size: u64,
    pub ignore_patterns: Vec<String>,
    pub dry_run: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            normalize_eol: false,
            max_text_size: DEFAULT_MAX_TEXT_SIZE,
            ignore_patterns: Vec::new(),
            dry_run: false,
        }
    }
}

/// How every file of both trees was classified
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub same: usize,
    pub new_files: usize,
    pub del_files: usize,
    pub mod_text: usize,
    pub mod_binary: usize,
    pub del_dirs: usize,
}

impl Counters {
    /// Number of distinct file paths across both trees
    pub fn files_accounted(&self) -> usize {
        self.same + self.new_files + self.del_files + self.mod_text + self.mod_binary
    }
}
