use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::fs::FileSystem;
use crate::ignore::IgnorePatterns;
use crate::models::FsEntry;

/// List the visible children of `dir` in display order.
///
/// Children are sorted with every non-file entry ahead of files, then by
/// lowercased name; the sort is stable, so entries whose keys collide keep
/// the order the filesystem returned them in. When `ignore` is given, any
/// child whose path contains a pattern is dropped before the caller sees
/// the list, so it never affects which sibling is last.
pub async fn list_children<F: FileSystem>(
    fs: &F,
    dir: &Path,
    ignore: Option<&IgnorePatterns>,
) -> Result<Vec<FsEntry>> {
    let mut entries = fs
        .read_dir(dir)
        .await
        .map_err(|err| TreeError::traversal(dir, err))?;
    debug!(dir = %dir.display(), entries = entries.len(), "listed directory");

    sort_entries(&mut entries);

    if let Some(patterns) = ignore {
        entries.retain(|entry| {
            let ignored = patterns.matches(&entry.path.to_string_lossy());
            if ignored {
                trace!(path = %entry.path.display(), "ignored");
            }
            !ignored
        });
    }

    Ok(entries)
}

pub fn sort_entries(entries: &mut [FsEntry]) {
    entries.sort_by_cached_key(|entry| (entry.is_file(), entry.name.to_lowercase()));
}
