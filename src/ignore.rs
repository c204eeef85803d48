use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TreeError};

/// Literal path fragments loaded from an ignore file.
///
/// A path is ignored when it contains any pattern as a substring. There is
/// no glob or segment awareness: `sub` hides `./sub`, `./subway` and
/// `./docs/sub.txt` alike.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IgnorePatterns {
    patterns: Vec<String>,
}

impl IgnorePatterns {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Read patterns from `path`. A missing file yields an empty set.
    pub async fn load(path: &Path) -> Result<Self> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no ignore file, nothing is ignored");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(TreeError::IgnoreFile {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let patterns = Self::parse(&contents);
        debug!(
            path = %path.display(),
            count = patterns.len(),
            "loaded ignore patterns"
        );
        Ok(patterns)
    }

    /// Keep every line that is non-blank once trimmed and does not start
    /// with `#`. The comment check looks at the untrimmed line.
    pub fn parse(contents: &str) -> Self {
        let patterns = contents
            .lines()
            .filter(|line| !line.starts_with('#'))
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self { patterns }
    }

    #[inline]
    pub fn matches(&self, path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| path.contains(pattern.as_str()))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_skips_blank_and_comment_lines_in_order() {
        let patterns = IgnorePatterns::parse("# build output\ntarget\n\n   \nnode_modules\n.git\n");
        let collected: Vec<&str> = patterns.iter().collect();
        assert_eq!(collected, vec!["target", "node_modules", ".git"]);
    }

    #[test]
    fn parse_trims_but_keeps_duplicates() {
        let patterns = IgnorePatterns::parse("  dist  \r\ndist\n\tlogs\n");
        let collected: Vec<&str> = patterns.iter().collect();
        assert_eq!(collected, vec!["dist", "dist", "logs"]);
    }

    #[test]
    fn parse_only_treats_leading_hash_as_comment() {
        let patterns = IgnorePatterns::parse("#skipped\n  #kept\nfoo#bar\n");
        let collected: Vec<&str> = patterns.iter().collect();
        assert_eq!(collected, vec!["#kept", "foo#bar"]);
    }

    #[test]
    fn matches_is_literal_case_sensitive_substring() {
        let patterns = IgnorePatterns::new(["sub", "*.log"]);

        assert!(patterns.matches("./sub"));
        assert!(patterns.matches("./subway/file"));
        assert!(patterns.matches("./docs/sub.txt"));
        assert!(patterns.matches("./out/*.log"));
        assert!(!patterns.matches("./Sub"));
        assert!(!patterns.matches("./out/app.log"));
    }

    #[test]
    fn empty_set_never_matches() {
        let patterns = IgnorePatterns::default();
        assert!(patterns.is_empty());
        assert!(!patterns.matches(""));
        assert!(!patterns.matches("./anything"));
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let patterns = IgnorePatterns::load(&temp.path().join(".ignorelist"))
            .await
            .unwrap();
        assert!(patterns.is_empty());
    }

    #[tokio::test]
    async fn load_reads_patterns_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".ignorelist");
        std::fs::write(&path, "# comment\n.git\n\ntarget\n").unwrap();

        let patterns = IgnorePatterns::load(&path).await.unwrap();
        assert_eq!(patterns, IgnorePatterns::new([".git", "target"]));
    }

    #[tokio::test]
    async fn load_directory_is_an_error() {
        let temp = TempDir::new().unwrap();

        let err = IgnorePatterns::load(temp.path()).await.unwrap_err();
        assert!(matches!(err, TreeError::IgnoreFile { .. }));
    }
}
