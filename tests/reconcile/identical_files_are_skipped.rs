use crate::common::command::reconcile;
use crate::common::read_tree;
use crate::common::file::{generated_text, write_text};
use assert_fs::TempDir;
use bigdiff::{Counters, Options};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn identical_files_are_skipped(
    #[from(crate::common::command::trees_dir)] trees_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    for rel in ["one.txt", "src/two.rs", "src/deep/three.md"] {
        let content = generated_text(4);
        write_text(trees_dir.path(), &format!("a/{rel}"), &content);
        write_text(trees_dir.path(), &format!("b/{rel}"), &content);
    }

    let counters = reconcile(trees_dir.path(), Options::default())?;

    assert_eq!(
        counters,
        Counters {
            same: 3,
            ..Default::default()
        }
    );
    assert!(read_tree(&trees_dir.path().join("out")).is_empty());

    Ok(())
}
