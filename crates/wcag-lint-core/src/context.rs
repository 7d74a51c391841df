//! Context types for rule execution.

use std::path::{Path, PathBuf};

use crate::types::Location;

/// Context provided to per-file rules.
///
/// Carries the raw text alongside the path so line-oriented rules can
/// work without the element model and structural rules can quote the
/// offending line.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path of the file as given to the scanner.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the scan root, used for reporting.
    pub relative_path: PathBuf,
    lines: Vec<&'a str>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
            lines: content.split('\n').collect(),
        }
    }

    /// Iterates over `(line_number, text)` pairs, 1-indexed.
    ///
    /// A trailing `\r` is stripped so CRLF files behave like LF files.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, l)| (i + 1, l.strip_suffix('\r').unwrap_or(l)))
    }

    /// Trimmed text of a 1-indexed line, or `""` when out of range.
    #[must_use]
    pub fn line_text(&self, line: usize) -> &'a str {
        line.checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map_or("", |l| l.trim())
    }

    /// Location in this file.
    #[must_use]
    pub fn location(&self, line: usize, column: usize) -> Location {
        Location::new(self.relative_path.clone(), line, column)
    }
}
