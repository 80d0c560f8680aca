use crate::common::command::reconcile;
use crate::common::file::write_text;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use bigdiff::{Counters, Options};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn deleted_file_outside_deleted_directory(
    #[from(crate::common::command::trees_dir)] trees_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_text(trees_dir.path(), "a/kept/gone.txt", "bye\n");
    write_text(trees_dir.path(), "a/kept/stay.txt", "stay\n");
    write_text(trees_dir.path(), "b/kept/stay.txt", "stay\n");

    let counters = reconcile(trees_dir.path(), Options::default())?;

    assert_eq!(
        counters,
        Counters {
            same: 1,
            del_files: 1,
            ..Default::default()
        }
    );
    trees_dir
        .child("out/kept/gone.txt.deleted")
        .assert("bye\n");
    trees_dir
        .child("out/kept.deleted")
        .assert(predicates::path::missing());

    Ok(())
}
