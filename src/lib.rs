pub mod core;
pub mod error;
pub mod fs;
pub mod ignore;
pub mod models;

use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use tracing::debug;

pub use crate::core::render::render_tree;
pub use crate::error::{Result, TreeError};
pub use crate::fs::{FileSystem, RealFileSystem};
pub use crate::ignore::IgnorePatterns;
pub use crate::models::{EntryKind, FsEntry};

pub const DEFAULT_IGNORE_FILE: &str = ".ignorelist";

/// Everything one invocation needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeOptions {
    /// Directory to render. Walked as given, so ignore patterns see relative
    /// paths like `./src` when the root is relative.
    pub root: PathBuf,
    /// Pattern file; a missing file means nothing is ignored.
    pub ignore_file: PathBuf,
    /// Skip filtering entirely. The ignore file is not even read.
    pub show_all: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore_file: PathBuf::from(DEFAULT_IGNORE_FILE),
            show_all: false,
        }
    }
}

/// Validate the root, load patterns, then write the header line followed by
/// the tree. Nothing is written if the root or the ignore file is unusable.
pub async fn run<F, W>(fs: &F, options: &TreeOptions, writer: &mut W) -> Result<()>
where
    F: FileSystem,
    W: Write,
{
    let root = options.root.as_path();
    let invalid = |source: io::Error| TreeError::InvalidPath {
        path: root.to_path_buf(),
        source,
    };

    match fs.kind_of(root).await {
        Ok(EntryKind::Directory) => {}
        Ok(_) => {
            return Err(invalid(io::Error::new(
                io::ErrorKind::NotADirectory,
                "not a directory",
            )));
        }
        Err(source) => return Err(invalid(source)),
    }
    let header = absolute_root(root).map_err(invalid)?;

    let patterns = if options.show_all {
        debug!("show-all set, ignore file not consulted");
        None
    } else {
        Some(IgnorePatterns::load(&options.ignore_file).await?)
    };

    writeln!(writer, "{}:", header.display())?;
    render_tree(fs, root, patterns.as_ref(), writer).await
}

/// Make `path` absolute against the working directory and fold away `.` and
/// `..` components. Symlinks are left unresolved.
pub fn absolute_root(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
