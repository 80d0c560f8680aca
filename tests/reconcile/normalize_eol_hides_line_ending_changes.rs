use crate::common::command::reconcile;
use crate::common::file::write_text;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use bigdiff::Options;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(true, "a\nb\n")]
#[case(false, "# DELETED: a\r\na # NEW\nb\n")]
fn normalize_eol_hides_line_ending_changes(
    #[from(crate::common::command::trees_dir)] trees_dir: TempDir,
    #[case] normalize_eol: bool,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_text(trees_dir.path(), "a/eol.txt", "a\r\nb\n");
    write_text(trees_dir.path(), "b/eol.txt", "a\nb\n");

    let options = Options {
        normalize_eol,
        ..Default::default()
    };
    let counters = reconcile(trees_dir.path(), options)?;

    // the bytes differ either way, so the file is still reported as modified
    assert_eq!(counters.mod_text, 1);
    trees_dir.child("out/eol.txt.modified").assert(expected);

    Ok(())
}
