use crate::areas::reconciler::Reconciler;
use crate::areas::session::Session;
use crate::artifacts::options::Counters;
use anyhow::Context;
use colored::Colorize;
use std::fs;

impl Session {
    pub fn run(&self) -> anyhow::Result<Counters> {
        let (base, target) = self.scan()?;

        fs::create_dir_all(self.output().root()).with_context(|| {
            format!("Failed to create output directory: {:?}", self.output().root())
        })?;

        let counters = Reconciler::new(&base, &target, self.output(), self.options()).reconcile()?;
        self.print_summary(&counters)?;

        Ok(counters)
    }

    fn print_summary(&self, counters: &Counters) -> anyhow::Result<()> {
        let rows = [
            ("Identical (skipped):", counters.same),
            ("New (.new):", counters.new_files),
            ("Deleted (.deleted):", counters.del_files),
            ("Modified, text:", counters.mod_text),
            ("Modified, binary:", counters.mod_binary),
            ("Deleted directories:", counters.del_dirs),
        ];

        writeln!(self.writer(), "{}", "== BigDiff summary ==".bold())?;
        for (label, count) in rows {
            let count = count.to_string();
            let count = if count == "0" {
                count.normal()
            } else {
                count.yellow()
            };
            writeln!(self.writer(), "{label:<22}{count}")?;
        }
        writeln!(
            self.writer(),
            "{:<22}{}",
            "Output:",
            self.output().root().display().to_string().cyan()
        )?;

        Ok(())
    }
}
