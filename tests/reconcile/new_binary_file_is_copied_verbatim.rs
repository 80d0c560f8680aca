use crate::common::command::reconcile;
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use bigdiff::{Counters, Options};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn new_binary_file_is_copied_verbatim(
    #[from(crate::common::command::trees_dir)] trees_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = vec![0u8, 159, 146, 150, 0, 255, 10, 13];
    write_file(FileSpec::new(trees_dir.path().join("b/n.bin"), data.clone()));

    let counters = reconcile(trees_dir.path(), Options::default())?;

    assert_eq!(
        counters,
        Counters {
            new_files: 1,
            ..Default::default()
        }
    );
    assert_eq!(std::fs::read(trees_dir.path().join("out/n.bin.new"))?, data);

    Ok(())
}
