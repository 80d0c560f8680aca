use assert_cmd::Command;
use assert_fs::TempDir;
use bigdiff::{Counters, Options, Session};
use rstest::fixture;
use std::path::Path;

/// A temp dir holding empty `a` (base) and `b` (target) trees
#[fixture]
pub fn trees_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    super::file::create_directory(&dir.path().join("a"));
    super::file::create_directory(&dir.path().join("b"));
    dir
}

pub fn run_bigdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bigdiff").expect("Failed to find bigdiff binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Reconcile `a` and `b` into `out` through the library
pub fn reconcile(dir: &Path, options: Options) -> anyhow::Result<Counters> {
    Session::new(
        &dir.join("a"),
        &dir.join("b"),
        &dir.join("out"),
        options,
        Box::new(std::io::sink()),
    )?
    .run()
}
