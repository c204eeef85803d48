use async_trait::async_trait;
use std::fs::Metadata;
use std::io;
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || -> io::Result<Vec<FsEntry>> {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                let path = entry.path();
                // Follows symlinks; anything that cannot be stat'ed is a leaf.
                let kind = std::fs::metadata(&path)
                    .map(|metadata| kind_from_metadata(&metadata))
                    .unwrap_or(EntryKind::Other);

                entries.push(FsEntry {
                    path,
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind,
                });
            }
            Ok(entries)
        })
        .await
        .map_err(io::Error::other)?
    }

    async fn kind_of(&self, path: &Path) -> io::Result<EntryKind> {
        let metadata = tokio::fs::metadata(path).await?;
        Ok(kind_from_metadata(&metadata))
    }
}

fn kind_from_metadata(metadata: &Metadata) -> EntryKind {
    if metadata.is_dir() {
        EntryKind::Directory
    } else if metadata.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
