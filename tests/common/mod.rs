#![allow(dead_code)]

pub mod command;

use std::path::Path;

/// File contents of a tree, keyed by `/`-separated relative path
pub fn read_tree(root: &Path) -> std::collections::BTreeMap<String, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let rel = entry
                .path()
                .strip_prefix(root)
                .expect("entry outside of root")
                .to_string_lossy()
                .replace('\\', "/");
            let content = std::fs::read(entry.path())
                .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", entry.path(), e));
            (rel, content)
        })
        .collect()
}
