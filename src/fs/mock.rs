use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(io::ErrorKind, String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    kinds: HashMap<PathBuf, EntryKind>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(
            dir.into(),
            Response::Err(io::ErrorKind::PermissionDenied, message.into()),
        );
    }

    pub fn set_kind(&self, path: impl Into<PathBuf>, kind: EntryKind) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.kinds.insert(path.into(), kind);
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock response for {}", dir.display()),
            )),
        }
    }

    async fn kind_of(&self, path: &Path) -> io::Result<EntryKind> {
        let inner = self.inner.lock().expect("mock fs lock");
        if let Some(kind) = inner.kinds.get(path) {
            return Ok(*kind);
        }
        if inner.responses.contains_key(path) {
            return Ok(EntryKind::Directory);
        }
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no mock entry for {}", path.display()),
        ))
    }
}
