use crate::common::command::reconcile;
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use bigdiff::{Counters, Options};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn modified_binary_file_gets_a_note(
    #[from(crate::common::command::trees_dir)] trees_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        trees_dir.path().join("a/img/logo.png"),
        b"\x89PNG\x00\x01".to_vec(),
    ));
    write_file(FileSpec::new(
        trees_dir.path().join("b/img/logo.png"),
        b"\x89PNG\x00\x02\x03".to_vec(),
    ));

    let counters = reconcile(trees_dir.path(), Options::default())?;

    assert_eq!(
        counters,
        Counters {
            mod_binary: 1,
            ..Default::default()
        }
    );
    assert_eq!(
        std::fs::read(trees_dir.path().join("out/img/logo.png.modified"))?,
        b"\x89PNG\x00\x02\x03"
    );
    trees_dir
        .child("out/img/logo.png.modified.NOTE.txt")
        .assert(predicates::str::contains("Size: 7 bytes"))
        .assert(predicates::str::contains("Reason: content looks binary"))
        .assert(predicates::str::contains("a/img/logo.png"))
        .assert(predicates::str::contains("b/img/logo.png"));

    Ok(())
}
