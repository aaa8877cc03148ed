//! Error types for loading STL files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for STL loading.
pub type StlResult<T> = Result<T, StlError>;

/// Errors that can occur while reading an STL file.
///
/// Malformed coordinate lines, degenerate triangles and trailing partial
/// facets are all tolerated by the parser, so the only failure is I/O.
#[derive(Debug, Error)]
pub enum StlError {
    /// The file could not be opened or read.
    #[error("error reading STL file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl StlError {
    /// Wrap an I/O failure for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the file that failed.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }
}
