use crate::common::command::reconcile;
use crate::common::file::write_text;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use bigdiff::{Counters, Options};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn ignored_paths_are_left_out(
    #[from(crate::common::command::trees_dir)] trees_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_text(trees_dir.path(), "a/.git/HEAD", "ref: a\n");
    write_text(trees_dir.path(), "b/.git/HEAD", "ref: b\n");
    write_text(trees_dir.path(), "a/build/out.o", "old");
    write_text(trees_dir.path(), "b/debug.log", "noise\n");
    write_text(trees_dir.path(), "b/notes.txt", "kept\n");

    let options = Options {
        ignore_patterns: vec!["build, *.log".to_string()],
        ..Default::default()
    };
    let counters = reconcile(trees_dir.path(), options)?;

    assert_eq!(
        counters,
        Counters {
            new_files: 1,
            ..Default::default()
        }
    );
    trees_dir.child("out/notes.txt.new").assert("kept\n");
    trees_dir
        .child("out/build.deleted")
        .assert(predicates::path::missing());
    trees_dir
        .child("out/.git")
        .assert(predicates::path::missing());

    Ok(())
}
