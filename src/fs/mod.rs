mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Immediate children of `dir`, in the order the platform lists them.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;

    /// Kind of `path` with symlinks followed. Errors if it does not exist.
    async fn kind_of(&self, path: &Path) -> io::Result<EntryKind>;
}
