//! Throwaway device databases for tests.
//!
//! Only the columns this crate reads are created; a real `KoboReader.sqlite`
//! has many more. Enabled in this crate's tests and, through the `fixture`
//! feature, in other crates' dev dependencies.

use exn::ResultExt;
use sqlx::Connection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use std::path::Path;

use crate::error::{ErrorKind, Result};

const SCHEMA: &str = r#"
    CREATE TABLE content (
        ContentID   TEXT NOT NULL,
        ContentType TEXT NOT NULL DEFAULT '6',
        Title       TEXT,
        Attribution TEXT,
        PRIMARY KEY (ContentID, ContentType)
    );
    CREATE TABLE Bookmark (
        BookmarkID  INTEGER NOT NULL PRIMARY KEY,
        VolumeID    TEXT NOT NULL,
        ContentID   TEXT,
        Text        TEXT,
        Type        TEXT,
        DateCreated TEXT
    );
"#;

#[derive(Debug, Clone)]
struct FixtureBook {
    content_id: String,
    title: String,
    attribution: Option<String>,
}

#[derive(Debug, Clone)]
struct FixtureBookmark {
    id: i64,
    volume_id: String,
    kind: String,
    text: Option<String>,
    date_created: String,
}

/// Builder for a minimal device database.
#[derive(Debug, Clone, Default)]
pub struct SourceFixture {
    books: Vec<FixtureBook>,
    bookmarks: Vec<FixtureBookmark>,
}

impl SourceFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `ContentID` given to every bookmark in a volume.
    pub fn chapter_of(volume_id: &str) -> String {
        format!("{volume_id}#(1)OEBPS/chapter01.xhtml")
    }

    pub fn book(mut self, content_id: &str, title: &str, attribution: Option<&str>) -> Self {
        self.books.push(FixtureBook {
            content_id: content_id.to_string(),
            title: title.to_string(),
            attribution: attribution.map(str::to_string),
        });
        self
    }

    pub fn highlight(mut self, id: i64, volume_id: &str, text: &str, date_created: &str) -> Self {
        self.bookmarks.push(FixtureBookmark {
            id,
            volume_id: volume_id.to_string(),
            kind: "highlight".to_string(),
            text: Some(text.to_string()),
            date_created: date_created.to_string(),
        });
        self
    }

    /// Any other annotation type (`dogear`, `note`, ...), which must never be
    /// picked up as a highlight.
    pub fn bookmark(mut self, id: i64, volume_id: &str, kind: &str, date_created: &str) -> Self {
        self.bookmarks.push(FixtureBookmark {
            id,
            volume_id: volume_id.to_string(),
            kind: kind.to_string(),
            text: None,
            date_created: date_created.to_string(),
        });
        self
    }

    async fn connect(path: &Path) -> Result<SqliteConnection> {
        // Rollback journal, like the device itself, so the file is complete
        // on its own once closed.
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete);
        SqliteConnection::connect_with(&options).await.or_raise(|| ErrorKind::QueryFailure)
    }

    /// Create a valid SQLite file with none of the device tables.
    pub async fn write_empty_database(path: &Path) -> Result<()> {
        let mut conn = Self::connect(path).await?;
        sqlx::query("CREATE TABLE unrelated (id INTEGER PRIMARY KEY)")
            .execute(&mut conn)
            .await
            .or_raise(|| ErrorKind::QueryFailure)?;
        conn.close().await.or_raise(|| ErrorKind::QueryFailure)
    }

    /// Write the schema and every queued row to a new database at `path`.
    pub async fn write(&self, path: &Path) -> Result<()> {
        let mut conn = Self::connect(path).await?;
        sqlx::raw_sql(SCHEMA).execute(&mut conn).await.or_raise(|| ErrorKind::QueryFailure)?;
        for book in &self.books {
            sqlx::query("INSERT INTO content (ContentID, Title, Attribution) VALUES (?, ?, ?)")
                .bind(&book.content_id)
                .bind(&book.title)
                .bind(&book.attribution)
                .execute(&mut conn)
                .await
                .or_raise(|| ErrorKind::QueryFailure)?;
        }
        for bookmark in &self.bookmarks {
            sqlx::query(
                "INSERT INTO Bookmark (BookmarkID, VolumeID, ContentID, Text, Type, DateCreated) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(bookmark.id)
            .bind(&bookmark.volume_id)
            .bind(Self::chapter_of(&bookmark.volume_id))
            .bind(&bookmark.text)
            .bind(&bookmark.kind)
            .bind(&bookmark.date_created)
            .execute(&mut conn)
            .await
            .or_raise(|| ErrorKind::QueryFailure)?;
        }
        conn.close().await.or_raise(|| ErrorKind::QueryFailure)
    }
}
