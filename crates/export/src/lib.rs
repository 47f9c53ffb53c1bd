//! Writers for exported highlights.
//!
//! Every writer consumes the same normalized [`Highlight`] list in the order
//! it was queried. None of them are called with an empty list; the caller
//! reports "no highlights" instead of creating an empty file.
//!
//! | Format   | Shape                                                        |
//! |----------|--------------------------------------------------------------|
//! | `txt`    | framed header from the first record, then one block per record |
//! | `json`   | array of objects, two-space indented                         |
//! | `csv`    | header row, every field quoted, line breaks flattened        |
//! | `sqlite` | `highlights` table keyed by `BookmarkID`                     |

mod csv;
pub mod error;
mod json;
mod naming;
mod record;
mod sqlite;
#[cfg(test)]
mod testing;
mod text;

pub use crate::csv::write_csv;
pub use crate::json::write_json;
pub use crate::naming::{backup_file_name, export_file_name, sanitize, with_extension};
pub use crate::record::COLUMNS;
pub use crate::sqlite::write_sqlite;
pub use crate::text::write_text;

use crate::error::{ErrorKind, Result};
use derive_more::Display;
use exn::ResultExt;
use kobo_source::Highlight;
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    #[display("txt")]
    Txt,
    #[display("json")]
    Json,
    #[display("csv")]
    Csv,
    #[display("sqlite")]
    Sqlite,
}

impl Format {
    pub const ALL: [Format; 4] = [Self::Txt, Self::Json, Self::Csv, Self::Sqlite];

    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Sqlite => "sqlite",
        }
    }
}

impl FromStr for Format {
    type Err = ErrorKind;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| ErrorKind::UnsupportedFormat(s.to_string()))
    }
}

/// Write `highlights` to `path` in the given format.
///
/// Text formats are encoded in memory first and then replace the destination,
/// so an encoding failure leaves it untouched. SQLite writes inside a single
/// transaction.
#[instrument(skip(highlights), fields(path = %path.display(), count = highlights.len()))]
pub async fn export(format: Format, highlights: &[Highlight], path: &Path) -> Result<()> {
    match format {
        Format::Txt => {
            write_file(path, |out| write_text(out, highlights).or_raise(|| ErrorKind::Serialization)).await?
        },
        Format::Json => write_file(path, |out| write_json(out, highlights)).await?,
        Format::Csv => write_file(path, |out| write_csv(out, highlights)).await?,
        Format::Sqlite => write_sqlite(path, highlights).await?,
    }
    tracing::info!("Exported highlights");
    Ok(())
}

async fn write_file(path: &Path, encode: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<()> {
    let mut buf = Vec::new();
    encode(&mut buf)?;
    tokio::fs::write(path, buf)
        .await
        .or_raise(|| ErrorKind::Io(path.to_path_buf()))
}
