//! Export Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// An export error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The destination could not be created or written.
    #[display("could not write {}", _0.display())]
    Io(#[error(not(source))] PathBuf),
    /// A record could not be encoded.
    #[display("could not encode highlights")]
    Serialization,
    /// The destination SQLite database failed.
    #[display("export database error")]
    Database,
    /// The destination SQLite file already holds some of these highlights.
    #[display("{} already contains some of these highlights", _0.display())]
    ExportConflict(#[error(not(source))] PathBuf),
    /// The clock value could not be rendered into a file name.
    #[display("could not format the current time for a file name")]
    Timestamp,
    /// Not one of `txt`, `json`, `csv` or `sqlite`.
    #[display("unsupported export format {_0:?}")]
    UnsupportedFormat(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
