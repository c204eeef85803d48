//! Errors raised while rendering a tree.
//!
//! Messages describe the failing step only; the underlying `io::Error` is
//! exposed as the source so callers can print the whole chain.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

#[derive(Error, Debug)]
pub enum TreeError {
    /// The root does not exist or is not a directory. Raised before any
    /// output is written.
    #[error("invalid root '{}'", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory could not be listed mid-walk. Lines already written stay
    /// written; the rest of the tree is abandoned.
    #[error("cannot list '{}'", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The ignore file exists but could not be read.
    #[error("cannot read ignore file '{}'", path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output")]
    Output(#[from] io::Error),
}

impl TreeError {
    pub fn traversal(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Traversal {
            path: path.into(),
            source,
        }
    }
}
