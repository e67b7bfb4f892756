//! Context types for rule execution.

use crate::syntax::{SourceTree, Span};
use crate::types::Location;
use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
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
        }
    }

    /// Builds a [`Location`] covering `span` of `tree`.
    ///
    /// Columns are converted to 1-indexed character columns.
    #[must_use]
    pub fn location(&self, tree: &SourceTree, span: Span) -> Location {
        let line = tree.start_line(span);
        let end_line = tree.end_line(span);
        Location::new(self.relative_path.clone(), line, tree.column_of(span.start) + 1)
            .with_end(end_line, tree.column_of(span.end) + 1)
            .with_span(span.start, span.len())
    }
}
