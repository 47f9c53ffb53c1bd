//! Config Error Types

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A configuration error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The device root, or the database inside it, doesn't exist.
    #[display("Kobo device not found at {}", _0.display())]
    SourceUnavailable(#[error(not(source))] PathBuf),
    /// The platform has no per-user configuration directory.
    #[display("could not determine a configuration directory")]
    NoConfigDirectory,
    /// The preferences file could not be written.
    #[display("could not save preferences to {}", _0.display())]
    PreferencesWrite(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A device may simply not be mounted yet.
        matches!(self, Self::SourceUnavailable(_))
    }
}
