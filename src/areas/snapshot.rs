use crate::artifacts::ignore::IgnoreRules;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Every file and directory found under a root, keyed by relative path
///
/// Built once per tree per run and read-only afterwards. Ordered containers
/// keep iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    root: PathBuf,
    files: BTreeMap<PathBuf, PathBuf>,
    dirs: BTreeSet<PathBuf>,
}

impl Snapshot {
    pub fn from_parts(
        root: PathBuf,
        files: BTreeMap<PathBuf, PathBuf>,
        dirs: BTreeSet<PathBuf>,
    ) -> Self {
        Snapshot { root, files, dirs }
    }

    /// Walk `root` without following symbolic links
    ///
    /// Ignored directories are pruned before descent. Entries that cannot be
    /// read are skipped with a warning.
    pub fn scan(root: &Path, rules: &IgnoreRules) -> anyhow::Result<Self> {
        if !root.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", root);
        }

        let mut snapshot = Snapshot {
            root: root.to_path_buf(),
            ..Default::default()
        };

        let walker = WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored_entry(root, entry, rules));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("skipping unreadable entry under {}: {err}", root.display());
                    continue;
                }
            };

            let Ok(rel) = entry.path().strip_prefix(root) else {
                continue;
            };
            snapshot.record(rel.to_path_buf(), &entry);
        }

        log::debug!(
            "scanned {}: {} files, {} directories",
            root.display(),
            snapshot.files.len(),
            snapshot.dirs.len()
        );

        Ok(snapshot)
    }

    fn is_ignored_entry(root: &Path, entry: &DirEntry, rules: &IgnoreRules) -> bool {
        entry
            .path()
            .strip_prefix(root)
            .is_ok_and(|rel| rules.is_ignored(rel))
    }

    fn record(&mut self, rel: PathBuf, entry: &DirEntry) {
        let file_type = entry.file_type();

        if file_type.is_dir() {
            self.dirs.insert(rel);
        } else if file_type.is_file() {
            self.files.insert(rel, entry.path().to_path_buf());
        } else if file_type.is_symlink() {
            // a linked directory is recorded but never entered
            match fs::metadata(entry.path()) {
                Ok(target) if target.is_dir() => {
                    self.dirs.insert(rel);
                }
                Ok(target) if target.is_file() => {
                    self.files.insert(rel, entry.path().to_path_buf());
                }
                Ok(_) => log::debug!("skipping special file {}", entry.path().display()),
                Err(err) => {
                    log::warn!("skipping broken link {}: {err}", entry.path().display())
                }
            }
        } else {
            log::debug!("skipping special file {}", entry.path().display());
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &BTreeMap<PathBuf, PathBuf> {
        &self.files
    }

    pub fn dirs(&self) -> &BTreeSet<PathBuf> {
        &self.dirs
    }

    /// Absolute path of the file recorded at `rel`
    pub fn file(&self, rel: &Path) -> Option<&Path> {
        self.files.get(rel).map(PathBuf::as_path)
    }

    /// Files at or below `head`, in path order
    pub fn files_under<'s>(
        &'s self,
        head: &'s Path,
    ) -> impl Iterator<Item = (&'s PathBuf, &'s PathBuf)> + 's {
        self.files
            .range(head.to_path_buf()..)
            .take_while(move |(rel, _)| rel.starts_with(head))
    }

    /// `head` itself and every directory below it, parents first
    pub fn dirs_under<'s>(&'s self, head: &'s Path) -> impl Iterator<Item = &'s PathBuf> + 's {
        self.dirs
            .range(head.to_path_buf()..)
            .take_while(move |rel| rel.starts_with(head))
    }
}
