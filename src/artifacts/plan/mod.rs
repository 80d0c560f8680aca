//! Set arithmetic between two snapshots
//!
//! The plan decides *what* happens to every path without touching the disk,
//! so the real run and the dry-run preview share it.

use crate::areas::snapshot::Snapshot;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    deleted_heads: Vec<PathBuf>,
    deleted_files: Vec<PathBuf>,
    new_files: Vec<PathBuf>,
    common_files: Vec<PathBuf>,
}

impl ReconcilePlan {
    pub fn build(base: &Snapshot, target: &Snapshot) -> Self {
        let deleted_heads = Self::select_heads(base.dirs().difference(target.dirs()));

        // files of A inside a deleted head are mirrored with it
        let deleted_subtree_files = deleted_heads
            .iter()
            .flat_map(|head| base.files_under(head).map(|(rel, _)| rel.clone()))
            .collect::<BTreeSet<_>>();

        let deleted_files = base
            .files()
            .keys()
            .filter(|rel| target.file(rel).is_none() && !deleted_subtree_files.contains(*rel))
            .cloned()
            .collect();

        let new_files = target
            .files()
            .keys()
            .filter(|rel| base.file(rel).is_none())
            .cloned()
            .collect();

        let common_files = base
            .files()
            .keys()
            .filter(|rel| target.file(rel).is_some())
            .cloned()
            .collect();

        ReconcilePlan {
            deleted_heads,
            deleted_files,
            new_files,
            common_files,
        }
    }

    /// Keep only the shallowest missing directories
    ///
    /// Candidates are visited by depth, then lexicographically; a candidate
    /// nested under an already selected head is covered by it.
    fn select_heads<'p>(missing: impl Iterator<Item = &'p PathBuf>) -> Vec<PathBuf> {
        let mut candidates = missing.collect::<Vec<_>>();
        candidates.sort_by_key(|dir| dir.components().count());

        candidates.into_iter().fold(Vec::new(), |mut heads, dir| {
            if !heads.iter().any(|head: &PathBuf| dir.starts_with(head)) {
                heads.push(dir.clone());
            }
            heads
        })
    }

    pub fn deleted_heads(&self) -> &[PathBuf] {
        &self.deleted_heads
    }

    /// Files of A missing from B that are not inside a deleted head
    pub fn deleted_files(&self) -> &[PathBuf] {
        &self.deleted_files
    }

    pub fn new_files(&self) -> &[PathBuf] {
        &self.new_files
    }

    pub fn common_files(&self) -> &[PathBuf] {
        &self.common_files
    }
}
