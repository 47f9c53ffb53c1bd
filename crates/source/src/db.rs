//! Read-only connection to the device database.

use exn::ResultExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// Commands run one after another, never concurrently.
const MAX_CONNECTIONS: u32 = 1;

/// Read-only handle to a `KoboReader.sqlite` database.
///
/// This is the main entry point for reading from the device. It never creates
/// the file, never runs migrations, and never writes.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
    path: PathBuf,
}

impl Database {
    /// Open the device database at the given path.
    ///
    /// Returns [`ErrorKind::SourceUnavailable`] if the file does not exist and
    /// [`ErrorKind::QueryFailure`] if the driver can't open it (not a
    /// database, locked, permissions).
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            exn::bail!(ErrorKind::SourceUnavailable(path.to_path_buf()));
        }
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .or_raise(|| ErrorKind::QueryFailure)?;
        tracing::debug!("Opened device database read-only");
        Ok(Self { pool, path: path.to_path_buf() })
    }

    /// Path of the database file this handle was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::SourceFixture;

    #[tokio::test]
    async fn test_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("KoboReader.sqlite");
        let err = Database::open(&path).await.unwrap_err();
        assert_eq!(*err, ErrorKind::SourceUnavailable(path));
    }

    #[tokio::test]
    async fn test_directory_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = Database::open(dir.path()).await.unwrap_err();
        assert!(matches!(*err, ErrorKind::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_connection_is_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("KoboReader.sqlite");
        SourceFixture::new().write(&path).await.unwrap();

        let db = Database::open(&path).await.unwrap();
        assert_eq!(db.path(), path);
        let result = sqlx::query("DELETE FROM Bookmark").execute(db.pool()).await;
        assert!(result.is_err(), "writes must be rejected");
        db.close().await;
    }
}
