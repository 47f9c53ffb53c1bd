//! Application Error Types
//!
//! Each library crate has its own [`exn::Exn`] error; they are re-raised here
//! under an application-level kind so the original error stays in the tree
//! as a child frame.

use derive_more::{Display, Error};
use kobo_config::error::{Error as ConfigError, ErrorKind as ConfigErrorKind};
use kobo_export::error::{Error as ExportError, ErrorKind as ExportErrorKind};
use kobo_source::error::{Error as SourceError, ErrorKind as SourceErrorKind};
use std::path::PathBuf;

/// An application error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for commands.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("Kobo path not found: {}", _0.display())]
    SourceUnavailable(#[error(not(source))] PathBuf),
    #[display("could not read highlights from the Kobo database")]
    QueryFailure,
    #[display("Date format must be YYYY-MM-DD (got {_0:?})")]
    InvalidDateFormat(#[error(not(source))] String),
    #[display("Book number {_0} not found")]
    BookNotFound(#[error(not(source))] i64),
    #[display("{} already contains some of these highlights", _0.display())]
    ExportConflict(#[error(not(source))] PathBuf),
    #[display("could not write {}", _0.display())]
    Io(#[error(not(source))] PathBuf),
    #[display("export failed")]
    Export,
    #[display("could not save the Kobo path")]
    Preferences,
    /// Writing to stdout failed.
    #[display("could not write output")]
    Output,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SourceUnavailable(_))
    }

    /// Follow-up advice printed under the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::SourceUnavailable(_) => Some(
                "Hint: Use 'kobo backup --set-path /path/to/kobo' to save your Kobo path\n      or set KOBO_PATH environment variable",
            ),
            Self::InvalidDateFormat(_) => Some("Hint: Dates look like 2024-01-31"),
            Self::BookNotFound(_) => Some("Hint: Use 'kobo list' to see available books."),
            Self::ExportConflict(_) => Some("Hint: Export to a new file, or delete the existing one first"),
            _ => None,
        }
    }

    #[track_caller]
    pub fn from_source(err: SourceError) -> Error {
        let kind = match &*err {
            SourceErrorKind::SourceUnavailable(path) => Self::SourceUnavailable(path.clone()),
            SourceErrorKind::QueryFailure => Self::QueryFailure,
            SourceErrorKind::InvalidDateFormat(date) => Self::InvalidDateFormat(date.clone()),
            SourceErrorKind::BookNotFound(ordinal) => Self::BookNotFound(*ordinal),
        };
        err.raise(kind)
    }

    #[track_caller]
    pub fn from_config(err: ConfigError) -> Error {
        let kind = match &*err {
            ConfigErrorKind::SourceUnavailable(path) => Self::SourceUnavailable(path.clone()),
            ConfigErrorKind::NoConfigDirectory | ConfigErrorKind::PreferencesWrite(_) => Self::Preferences,
        };
        err.raise(kind)
    }

    #[track_caller]
    pub fn from_export(err: ExportError) -> Error {
        let kind = match &*err {
            ExportErrorKind::ExportConflict(path) => Self::ExportConflict(path.clone()),
            ExportErrorKind::Io(path) => Self::Io(path.clone()),
            _ => Self::Export,
        };
        err.raise(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exn::OptionExt;

    #[test]
    fn test_source_kinds_are_preserved() {
        let err = None::<()>.ok_or_raise(|| SourceErrorKind::BookNotFound(9)).unwrap_err();
        let err = ErrorKind::from_source(err);
        assert_eq!(*err, ErrorKind::BookNotFound(9));
        assert_eq!((*err).to_string(), "Book number 9 not found");
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_export_kinds_are_preserved() {
        let path = PathBuf::from("out.sqlite");
        let err = None::<()>.ok_or_raise(|| ExportErrorKind::ExportConflict(path.clone())).unwrap_err();
        assert_eq!(*ErrorKind::from_export(err), ErrorKind::ExportConflict(path));
        let err = None::<()>.ok_or_raise(|| ExportErrorKind::Serialization).unwrap_err();
        assert_eq!(*ErrorKind::from_export(err), ErrorKind::Export);
    }

    #[test]
    fn test_config_kinds_are_preserved() {
        let path = PathBuf::from("/Volumes/KOBOeReader");
        let err = None::<()>.ok_or_raise(|| ConfigErrorKind::SourceUnavailable(path.clone())).unwrap_err();
        let err = ErrorKind::from_config(err);
        assert_eq!(*err, ErrorKind::SourceUnavailable(path));
        assert!(err.hint().unwrap().contains("KOBO_PATH"));
    }
}
