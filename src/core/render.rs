use std::io::Write;
use std::path::Path;
use std::vec;

use crate::core::walk::list_children;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::ignore::IgnorePatterns;
use crate::models::FsEntry;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUE: &str = "│   ";
const BLANK: &str = "    ";

/// One directory whose children are still being written.
struct Frame {
    prefix: String,
    remaining: vec::IntoIter<FsEntry>,
}

impl Frame {
    fn new(prefix: String, children: Vec<FsEntry>) -> Self {
        Self {
            prefix,
            remaining: children.into_iter(),
        }
    }

    /// The next child and whether it is the last one at this level.
    fn next_child(&mut self) -> Option<(FsEntry, bool)> {
        let entry = self.remaining.next()?;
        Some((entry, self.remaining.len() == 0))
    }
}

/// Write the tree below `root`, one line per visible entry, depth-first and
/// parent before children.
///
/// Lines go to `writer` as soon as they are known. If a directory cannot be
/// listed the walk stops there and returns the error; everything written up
/// to that point is left in place. Directories are tracked on an explicit
/// stack, so nesting depth is limited by memory only.
pub async fn render_tree<F, W>(
    fs: &F,
    root: &Path,
    ignore: Option<&IgnorePatterns>,
    writer: &mut W,
) -> Result<()>
where
    F: FileSystem,
    W: Write,
{
    let children = list_children(fs, root, ignore).await?;
    let mut stack = vec![Frame::new(String::new(), children)];

    while let Some(frame) = stack.last_mut() {
        let Some((entry, is_last)) = frame.next_child() else {
            stack.pop();
            continue;
        };

        write_entry(writer, &frame.prefix, &entry, is_last)?;

        if entry.is_dir() {
            let prefix = format!("{}{}", frame.prefix, if is_last { BLANK } else { CONTINUE });
            let children = list_children(fs, &entry.path, ignore).await?;
            stack.push(Frame::new(prefix, children));
        }
    }

    Ok(())
}

fn write_entry<W: Write>(
    writer: &mut W,
    prefix: &str,
    entry: &FsEntry,
    is_last: bool,
) -> Result<()> {
    let branch = if is_last { LAST_BRANCH } else { BRANCH };
    writeln!(writer, "{prefix}{branch}{}", entry.rendered_name())?;
    Ok(())
}
