//! Source Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A source database error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for source database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The device database file does not exist.
    #[display("source database not found: {}", _0.display())]
    SourceUnavailable(#[error(not(source))] PathBuf),
    /// The driver failed: malformed schema, locked file, undecodable row.
    #[display("query against the source database failed")]
    QueryFailure,
    /// A date argument was not in `YYYY-MM-DD` form.
    #[display("invalid date {_0:?}: expected YYYY-MM-DD")]
    InvalidDateFormat(#[error(not(source))] String),
    /// A numeric book argument doesn't match any ordinal in the catalog.
    #[display("book number {_0} not found")]
    BookNotFound(#[error(not(source))] i64),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Every operation is a one-shot read; re-running is up to the user.
        false
    }
}
