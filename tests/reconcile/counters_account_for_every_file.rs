use crate::common::command::reconcile;
use crate::common::file::{generated_file_name, generated_text, write_text};
use assert_fs::TempDir;
use bigdiff::Options;
use fake::Fake;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn counters_account_for_every_file(
    #[from(crate::common::command::trees_dir)] trees_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let files_count = 40;

    for index in 0..files_count {
        let name = generated_file_name(index);
        let dir = ["", "nested/", "nested/deeper/"][index % 3];
        let rel = format!("{dir}{name}");
        let content = generated_text(3);

        // 0: base only, 1: target only, 2: identical, 3: modified
        match (0..4).fake::<u8>() {
            0 => write_text(trees_dir.path(), &format!("a/{rel}"), &content),
            1 => write_text(trees_dir.path(), &format!("b/{rel}"), &content),
            2 => {
                write_text(trees_dir.path(), &format!("a/{rel}"), &content);
                write_text(trees_dir.path(), &format!("b/{rel}"), &content);
            }
            _ => {
                write_text(trees_dir.path(), &format!("a/{rel}"), &content);
                write_text(trees_dir.path(), &format!("b/{rel}"), &format!("{content}tail\n"));
            }
        }
    }

    let counters = reconcile(trees_dir.path(), Options::default())?;

    assert_eq!(counters.files_accounted(), files_count);
    assert_eq!(counters.mod_binary, 0);

    Ok(())
}
