use anyhow::Context;
use derive_new::new;
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const DELETED_SUFFIX: &str = ".deleted";
pub const NEW_SUFFIX: &str = ".new";
pub const MODIFIED_SUFFIX: &str = ".modified";
pub const NOTE_SUFFIX: &str = ".NOTE.txt";

/// The output root and every write into it
///
/// Nothing already present under the root is ever overwritten: a taken name
/// is resolved to the first free `"<name> (n)"` variant.
#[derive(Debug, new)]
pub struct OutputTree {
    root: Box<Path>,
}

impl OutputTree {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create all missing ancestors of `path`
    pub fn ensure_parent(path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        Ok(())
    }

    /// `path` when unused, else the first unused `"<path> (n)"`
    pub fn avoid_collision(path: &Path) -> PathBuf {
        if !Self::is_taken(path) {
            return path.to_path_buf();
        }

        (1..)
            .map(|n| append_to_file_name(path, &format!(" ({n})")))
            .find(|candidate| !Self::is_taken(candidate))
            .unwrap_or_else(|| path.to_path_buf())
    }

    // dangling links still occupy their name
    fn is_taken(path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    /// Resolve a free destination for `rel` and make sure its parent exists
    pub fn reserve(&self, rel: &Path) -> anyhow::Result<PathBuf> {
        let path = self.root.join(rel);
        Self::ensure_parent(&path)?;

        Ok(Self::avoid_collision(&path))
    }

    /// Directories are shared across runs rather than suffixed
    pub fn create_dir(&self, rel: &Path) -> anyhow::Result<PathBuf> {
        let path = self.root.join(rel);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;

        Ok(path)
    }

    /// Copy `source` to a free name for `rel`, keeping its timestamps
    pub fn copy_file(&self, source: &Path, rel: &Path) -> anyhow::Result<PathBuf> {
        let destination = self.reserve(rel)?;

        fs::copy(source, &destination).with_context(|| {
            format!("Failed to copy {:?} to {:?}", source, destination)
        })?;

        let metadata = fs::metadata(source)
            .with_context(|| format!("Failed to read metadata of file: {:?}", source))?;
        filetime::set_file_times(
            &destination,
            filetime::FileTime::from_last_access_time(&metadata),
            filetime::FileTime::from_last_modification_time(&metadata),
        )
        .with_context(|| format!("Failed to preserve timestamps on {:?}", destination))?;

        Ok(destination)
    }

    /// Write `content` to a free name for `rel`
    pub fn write_text(&self, rel: &Path, content: &str) -> anyhow::Result<PathBuf> {
        let destination = self.reserve(rel)?;

        fs::write(&destination, content)
            .with_context(|| format!("Failed to write file: {:?}", destination))?;

        Ok(destination)
    }
}

/// `dir/name` becomes `dir/name<suffix>`
pub fn append_to_file_name(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(suffix);

    path.with_file_name(name)
}

/// Append `suffix` to every normal component of `rel`
pub fn suffix_components(rel: &Path, suffix: &str) -> PathBuf {
    rel.components()
        .map(|component| match component {
            Component::Normal(name) => {
                let mut name = name.to_os_string();
                name.push(suffix);
                name
            }
            other => other.as_os_str().to_os_string(),
        })
        .collect()
}
