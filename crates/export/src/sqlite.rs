//! A standalone `highlights` table in a new (or existing) SQLite file.
//!
//! Exporting into a file that already holds any of the same `BookmarkID`s
//! fails with [`ErrorKind::ExportConflict`] and leaves the file untouched;
//! rows are never overwritten or duplicated.

use crate::error::{ErrorKind, Result};
use crate::record::Record;
use exn::ResultExt;
use kobo_source::Highlight;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::{Connection, Error as SqlxError};
use std::path::Path;
use tracing::instrument;

fn is_conflict(err: &SqlxError) -> bool {
    err.as_database_error().is_some_and(|db| db.is_unique_violation())
}

#[instrument(skip(highlights), fields(path = %path.display(), count = highlights.len()))]
pub async fn write_sqlite(path: &Path, highlights: &[Highlight]) -> Result<()> {
    // A single self-contained file, with no `-wal`/`-shm` siblings.
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);
    let mut conn = SqliteConnection::connect_with(&options).await.or_raise(|| ErrorKind::Database)?;
    sqlx::query(include_str!("../queries/create_highlights.sql"))
        .execute(&mut conn)
        .await
        .or_raise(|| ErrorKind::Database)?;

    let mut tx = conn.begin().await.or_raise(|| ErrorKind::Database)?;
    for highlight in highlights {
        let record = Record::from(highlight);
        let inserted = sqlx::query(include_str!("../queries/insert_highlight.sql"))
            .bind(record.bookmark_id)
            .bind(record.volume_id)
            .bind(record.book_title)
            .bind(record.author)
            .bind(record.date_created)
            .bind(record.highlight.as_ref())
            .execute(&mut *tx)
            .await;
        if let Err(err) = inserted {
            let kind = if is_conflict(&err) {
                ErrorKind::ExportConflict(path.to_path_buf())
            } else {
                ErrorKind::Database
            };
            tx.rollback().await.or_raise(|| ErrorKind::Database)?;
            return Err(err).or_raise(|| kind.clone());
        }
    }
    tx.commit().await.or_raise(|| ErrorKind::Database)?;
    conn.close().await.or_raise(|| ErrorKind::Database)?;
    tracing::debug!("Wrote export database");
    Ok(())
}
