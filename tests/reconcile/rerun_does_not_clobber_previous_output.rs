use crate::common::command::reconcile;
use crate::common::file::write_text;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use bigdiff::Options;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn rerun_does_not_clobber_previous_output(
    #[from(crate::common::command::trees_dir)] trees_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_text(trees_dir.path(), "a/doc.txt", "v1\n");
    write_text(trees_dir.path(), "b/doc.txt", "v2\n");
    write_text(trees_dir.path(), "b/added.txt", "new\n");
    write_text(trees_dir.path(), "a/old/f.txt", "f\n");

    let first = reconcile(trees_dir.path(), Options::default())?;
    let second = reconcile(trees_dir.path(), Options::default())?;

    assert_eq!(first, second);
    trees_dir.child("out/doc.txt.modified").assert("# DELETED: v1\nv2 # NEW\n");
    trees_dir
        .child("out/doc.txt.modified (1)")
        .assert("# DELETED: v1\nv2 # NEW\n");
    trees_dir.child("out/added.txt.new (1)").assert("new\n");
    trees_dir
        .child("out/old.deleted/f.txt.deleted (1)")
        .assert("f\n");
    trees_dir
        .child("out/doc.txt.modified (2)")
        .assert(predicates::path::missing());

    Ok(())
}
