use crate::common::command::reconcile;
use crate::common::file::write_text;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use bigdiff::{Counters, Options};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn modified_text_file_is_annotated(
    #[from(crate::common::command::trees_dir)] trees_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_text(trees_dir.path(), "a/foo/bar.txt", "hello\n");
    write_text(trees_dir.path(), "b/foo/bar.txt", "hello\nworld\n");

    let counters = reconcile(trees_dir.path(), Options::default())?;

    assert_eq!(
        counters,
        Counters {
            mod_text: 1,
            ..Default::default()
        }
    );
    trees_dir
        .child("out/foo/bar.txt.modified")
        .assert("hello\nworld # NEW\n");

    Ok(())
}

#[rstest]
fn comment_style_follows_the_extension(
    #[from(crate::common::command::trees_dir)] trees_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_text(trees_dir.path(), "a/main.rs", "fn main() {\n    old();\n}\n");
    write_text(trees_dir.path(), "b/main.rs", "fn main() {\n    new();\n}\n");
    write_text(trees_dir.path(), "a/page.html", "<p>a</p>\n");
    write_text(trees_dir.path(), "b/page.html", "<p>b</p>\n");
    write_text(trees_dir.path(), "a/style.css", "a { }\n");
    write_text(trees_dir.path(), "b/style.css", "b { }\n");
    write_text(trees_dir.path(), "a/README", "one\n");
    write_text(trees_dir.path(), "b/README", "two\n");

    let counters = reconcile(trees_dir.path(), Options::default())?;

    assert_eq!(counters.mod_text, 4);
    trees_dir
        .child("out/main.rs.modified")
        .assert("fn main() {\n// DELETED:     old();\n    new(); // NEW\n}\n");
    trees_dir
        .child("out/page.html.modified")
        .assert("<!-- DELETED: <p>a</p> -->\n<p>b</p> <!-- NEW -->\n");
    trees_dir
        .child("out/style.css.modified")
        .assert("/* DELETED: a { } */\nb { } /* NEW */\n");
    trees_dir
        .child("out/README.modified")
        .assert("# DELETED: one\ntwo # NEW\n");

    Ok(())
}
