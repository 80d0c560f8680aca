use crate::areas::output::OutputTree;
use crate::areas::snapshot::Snapshot;
use crate::artifacts::ignore::IgnoreRules;
use crate::artifacts::options::Options;
use std::cell::{RefCell, RefMut};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Input problems detected before anything is read or written
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("base directory is missing or not a directory: {}", .0.display())]
    InvalidBase(PathBuf),
    #[error("target directory is missing or not a directory: {}", .0.display())]
    InvalidTarget(PathBuf),
    #[error("base and target are the same directory: {}", .0.display())]
    SameRoots(PathBuf),
    #[error("output {} must not equal, contain or be inside input {}", .output.display(), .input.display())]
    OverlappingOutput { output: PathBuf, input: PathBuf },
}

/// One validated comparison: two input roots, an output root and the options
pub struct Session {
    base: Box<Path>,
    target: Box<Path>,
    output: OutputTree,
    options: Options,
    rules: IgnoreRules,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Session {
    pub fn new(
        base: &Path,
        target: &Path,
        output: &Path,
        options: Options,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let base = Self::resolve_input(base, SessionError::InvalidBase)?;
        let target = Self::resolve_input(target, SessionError::InvalidTarget)?;

        if base == target {
            return Err(SessionError::SameRoots(base).into());
        }

        let output = absolutize(output)?;
        for input in [&base, &target] {
            if output.starts_with(input) || input.starts_with(&output) {
                return Err(SessionError::OverlappingOutput {
                    output,
                    input: input.clone(),
                }
                .into());
            }
        }

        let rules = IgnoreRules::new(&options.ignore_patterns);
        log::debug!(
            "comparing {} with {} into {} ({} ignore patterns)",
            base.display(),
            target.display(),
            output.display(),
            rules.len()
        );

        Ok(Session {
            base: base.into_boxed_path(),
            target: target.into_boxed_path(),
            output: OutputTree::new(output.into_boxed_path()),
            options,
            rules,
            writer: RefCell::new(writer),
        })
    }

    fn resolve_input(
        path: &Path,
        invalid: fn(PathBuf) -> SessionError,
    ) -> Result<PathBuf, SessionError> {
        if !path.is_dir() {
            return Err(invalid(path.to_path_buf()));
        }

        path.canonicalize().map_err(|_| invalid(path.to_path_buf()))
    }

    pub fn output(&self) -> &OutputTree {
        &self.output
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Snapshot both inputs with the session's ignore rules
    pub fn scan(&self) -> anyhow::Result<(Snapshot, Snapshot)> {
        log::info!("scanning {}", self.base.display());
        let base = Snapshot::scan(&self.base, &self.rules)?;

        log::info!("scanning {}", self.target.display());
        let target = Snapshot::scan(&self.target, &self.rules)?;

        Ok((base, target))
    }
}

/// Absolute form of a path that may not exist yet
///
/// `..` is folded lexically, then the deepest existing ancestor is
/// canonicalized so links in it resolve like they do for the inputs.
fn absolutize(path: &Path) -> anyhow::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }

    let mut missing = Vec::new();
    let mut existing = normalized.as_path();
    loop {
        if let Ok(resolved) = existing.canonicalize() {
            return Ok(missing
                .into_iter()
                .rev()
                .fold(resolved, |resolved, name| resolved.join(name)));
        }

        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(normalized),
        }
    }
}
