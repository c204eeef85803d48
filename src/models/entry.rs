use std::path::PathBuf;

/// What a directory entry resolves to once symlinks are followed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    /// Dangling symlinks, sockets, fifos and anything else that is neither.
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

impl FsEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Name as it appears in the tree; directories carry a trailing `/`.
    pub fn rendered_name(&self) -> String {
        match self.kind {
            EntryKind::Directory => format!("{}/", self.name),
            EntryKind::File | EntryKind::Other => self.name.clone(),
        }
    }
}
