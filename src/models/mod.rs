mod entry;

pub use entry::{EntryKind, FsEntry};
