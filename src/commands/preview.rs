use crate::areas::output::{DELETED_SUFFIX, NEW_SUFFIX, suffix_components};
use crate::areas::session::Session;
use crate::artifacts::plan::ReconcilePlan;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Entries listed per category before the rest is elided
pub const PREVIEW_LIMIT: usize = 20;

impl Session {
    /// Scan both trees and print the plan; contents are not compared
    pub fn preview(&self) -> anyhow::Result<ReconcilePlan> {
        let (base, target) = self.scan()?;
        let plan = ReconcilePlan::build(&base, &target);

        writeln!(self.writer(), "{}", "== DRY RUN ==".bold())?;

        self.print_section(
            "Deleted directories (top-level)",
            plan.deleted_heads(),
            "[DIR-DEL]",
            |rel| suffix_components(rel, DELETED_SUFFIX),
        )?;
        self.print_section(
            "Deleted files (outside deleted directories)",
            plan.deleted_files(),
            "[DEL]",
            |rel| renamed(rel, DELETED_SUFFIX),
        )?;
        self.print_section("New files", plan.new_files(), "[NEW]", |rel| {
            renamed(rel, NEW_SUFFIX)
        })?;

        writeln!(
            self.writer(),
            "Common files to verify: {}",
            plan.common_files().len()
        )?;

        Ok(plan)
    }

    fn print_section(
        &self,
        title: &str,
        paths: &[PathBuf],
        tag: &str,
        destination: impl Fn(&Path) -> PathBuf,
    ) -> anyhow::Result<()> {
        writeln!(self.writer(), "{title}: {}", paths.len())?;

        for rel in paths.iter().take(PREVIEW_LIMIT) {
            writeln!(
                self.writer(),
                "  {} {} -> {}",
                tag.yellow(),
                rel.display(),
                destination(rel.as_path()).display()
            )?;
        }

        if paths.len() > PREVIEW_LIMIT {
            writeln!(
                self.writer(),
                "  ... and {} more",
                paths.len() - PREVIEW_LIMIT
            )?;
        }

        Ok(())
    }
}

// only the file name is shown, as it appears next to its siblings
fn renamed(rel: &Path, suffix: &str) -> PathBuf {
    let mut name = rel
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(suffix);

    PathBuf::from(name)
}
