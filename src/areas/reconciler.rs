use crate::areas::output::{
    DELETED_SUFFIX, MODIFIED_SUFFIX, NEW_SUFFIX, NOTE_SUFFIX, OutputTree, append_to_file_name,
    suffix_components,
};
use crate::areas::snapshot::Snapshot;
use crate::artifacts::comment::comment_style_for;
use crate::artifacts::content::{bytes_equal, looks_binary};
use crate::artifacts::diff::annotate_files;
use crate::artifacts::options::{Counters, Options};
use crate::artifacts::plan::ReconcilePlan;
use anyhow::Context;
use derive_new::new;
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a modified file was copied instead of annotated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Binary,
    Oversized { limit: u64 },
    Uncompared,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Binary => write!(f, "content looks binary"),
            SkipReason::Oversized { limit } => {
                write!(f, "larger than the {limit} bytes text diff limit")
            }
            SkipReason::Uncompared => write!(f, "content could not be compared"),
        }
    }
}

/// Writes the differences between two snapshots into the output tree
///
/// Phases run in a fixed order: deleted directories, loose deleted files,
/// new files, then common files in path order.
#[derive(new)]
pub struct Reconciler<'r> {
    base: &'r Snapshot,
    target: &'r Snapshot,
    output: &'r OutputTree,
    options: &'r Options,
}

impl Reconciler<'_> {
    pub fn reconcile(&self) -> anyhow::Result<Counters> {
        let plan = ReconcilePlan::build(self.base, self.target);
        self.apply(&plan)
    }

    pub fn apply(&self, plan: &ReconcilePlan) -> anyhow::Result<Counters> {
        let mut counters = Counters::default();

        log::info!("copying {} deleted directories", plan.deleted_heads().len());
        for head in plan.deleted_heads() {
            self.copy_deleted_tree(head, &mut counters)?;
        }

        log::info!("copying {} deleted files", plan.deleted_files().len());
        for rel in plan.deleted_files() {
            self.copy_deleted_file(rel, &mut counters)?;
        }

        log::info!("copying {} new files", plan.new_files().len());
        for rel in plan.new_files() {
            self.copy_new_file(rel, &mut counters)?;
        }

        log::info!("comparing {} common files", plan.common_files().len());
        for rel in plan.common_files() {
            self.compare_common_file(rel, &mut counters)?;
        }

        Ok(counters)
    }

    fn copy_deleted_tree(&self, head: &Path, counters: &mut Counters) -> anyhow::Result<()> {
        for dir in self.base.dirs_under(head) {
            self.output
                .create_dir(&suffix_components(dir, DELETED_SUFFIX))?;
        }

        for (rel, source) in self.base.files_under(head) {
            self.output
                .copy_file(source, &suffix_components(rel, DELETED_SUFFIX))?;
            log::debug!("deleted {}", rel.display());
            counters.del_files += 1;
        }

        log::debug!("deleted directory {}", head.display());
        counters.del_dirs += 1;

        Ok(())
    }

    fn copy_deleted_file(&self, rel: &Path, counters: &mut Counters) -> anyhow::Result<()> {
        let source = Self::lookup(self.base, rel)?;

        self.output
            .copy_file(source, &append_to_file_name(rel, DELETED_SUFFIX))?;
        log::debug!("deleted {}", rel.display());
        counters.del_files += 1;

        Ok(())
    }

    fn copy_new_file(&self, rel: &Path, counters: &mut Counters) -> anyhow::Result<()> {
        let source = Self::lookup(self.target, rel)?;

        self.output
            .copy_file(source, &append_to_file_name(rel, NEW_SUFFIX))?;
        log::debug!("new {}", rel.display());
        counters.new_files += 1;

        Ok(())
    }

    fn compare_common_file(&self, rel: &Path, counters: &mut Counters) -> anyhow::Result<()> {
        let base_file = Self::lookup(self.base, rel)?;
        let target_file = Self::lookup(self.target, rel)?;

        let same = match bytes_equal(base_file, target_file) {
            Ok(same) => same,
            Err(err) => {
                log::warn!("{err}, treating {} as modified", rel.display());
                self.copy_uncompared(rel, base_file, target_file);
                counters.mod_binary += 1;
                return Ok(());
            }
        };

        if same {
            log::debug!("same {}", rel.display());
            counters.same += 1;
            return Ok(());
        }

        let destination = append_to_file_name(rel, MODIFIED_SUFFIX);

        match self.skip_reason(target_file)? {
            Some(reason) => {
                let copied = self.output.copy_file(target_file, &destination)?;
                self.write_note(&copied, base_file, target_file, reason)?;
                log::debug!("modified {} ({reason}), copied", rel.display());
                counters.mod_binary += 1;
            }
            None => {
                let style = comment_style_for(rel);
                let merged =
                    annotate_files(base_file, target_file, style, self.options.normalize_eol)
                        .with_context(|| format!("Failed to annotate {:?}", rel))?;
                self.output.write_text(&destination, &merged)?;
                log::debug!("modified {}, annotated", rel.display());
                counters.mod_text += 1;
            }
        }

        Ok(())
    }

    /// Best-effort copy of a pair that could not be compared
    ///
    /// Failures here are logged and never end the run.
    fn copy_uncompared(&self, rel: &Path, base_file: &Path, target_file: &Path) {
        let destination = append_to_file_name(rel, MODIFIED_SUFFIX);

        let copied = match self.output.copy_file(target_file, &destination) {
            Ok(copied) => copied,
            Err(err) => {
                log::warn!("{err:#}, leaving {} out of the output", rel.display());
                return;
            }
        };

        match self.write_note(&copied, base_file, target_file, SkipReason::Uncompared) {
            Ok(_) => log::debug!("modified {} (uncompared), copied", rel.display()),
            Err(err) => log::warn!("{err:#}, no note written for {}", rel.display()),
        }
    }

    fn skip_reason(&self, path: &Path) -> anyhow::Result<Option<SkipReason>> {
        if looks_binary(path) {
            return Ok(Some(SkipReason::Binary));
        }

        let size = file_size(path)?;
        if size > self.options.max_text_size {
            return Ok(Some(SkipReason::Oversized {
                limit: self.options.max_text_size,
            }));
        }

        Ok(None)
    }

    fn write_note(
        &self,
        copied: &Path,
        base_file: &Path,
        target_file: &Path,
        reason: SkipReason,
    ) -> anyhow::Result<PathBuf> {
        let copied_rel = copied
            .strip_prefix(self.output.root())
            .with_context(|| format!("{:?} is outside the output tree", copied))?;

        let note = format!(
            "File copied without a line diff.\n\
             Base origin (A): {}\n\
             Target origin (B): {}\n\
             Size: {} bytes\n\
             Reason: {reason}\n\
             Strategy: direct copy of the target to '{MODIFIED_SUFFIX}'.\n",
            base_file.display(),
            target_file.display(),
            file_size(target_file)?,
        );

        self.output
            .write_text(&append_to_file_name(copied_rel, NOTE_SUFFIX), &note)
    }

    fn lookup<'s>(snapshot: &'s Snapshot, rel: &Path) -> anyhow::Result<&'s Path> {
        snapshot
            .file(rel)
            .with_context(|| format!("{:?} is not part of {:?}", rel, snapshot.root()))
    }
}

fn file_size(path: &Path) -> anyhow::Result<u64> {
    Ok(std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata of file: {:?}", path))?
        .len())
}
