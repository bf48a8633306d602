//! Error types for the core utilities

use std::path::PathBuf;
use thiserror::Error;

/// Error type for [`Table`](crate::Table) construction and access.
///
/// Every structural violation is reported as a single kind carrying a
/// human-readable message naming the specific misuse. These are contract
/// violations of the construction protocol, not transient conditions; callers
/// are expected to avoid them by construction discipline rather than recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table was driven through an invalid state transition
    #[error("Inconsistent state: {0}")]
    InconsistentState(String),
}

impl TableError {
    pub(crate) fn inconsistent(message: impl Into<String>) -> Self {
        TableError::InconsistentState(message.into())
    }
}

/// Error type for file reading operations
#[derive(Debug, Error)]
pub enum FileError {
    /// The input file could not be opened for reading
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// An I/O failure after the file was successfully opened
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A completed line was not valid UTF-8
    #[error("Invalid UTF-8 in input: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
