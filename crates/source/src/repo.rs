//! Queries against the device's `Bookmark` and `content` tables.
//!
//! Highlights live in `Bookmark` (alongside dog-ears and notes, distinguished
//! by `Type`), joined to the book's `content` row on
//! `Bookmark.VolumeID = content.ContentID`.

use crate::Database;
use crate::catalog::Catalog;
use crate::error::{ErrorKind, Result};
use crate::filter::{BookArg, Filter};
use crate::models::{BookRow, Highlight, HighlightRow, Statistics, StatisticsRow};
use crate::predicate::Query;
use exn::ResultExt;
use sqlx::SqlitePool;
use tracing::instrument;

const HIGHLIGHTS_ORDER: &str = "b.DateCreated ASC, b.BookmarkID ASC";

/// Read-only repository over the device database.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}
impl From<&Database> for Repository {
    fn from(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }
}
impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Highlights
    // =========================================================================

    /// Fetch every highlight matching the filter, oldest first.
    ///
    /// An empty list is a valid result, not an error. Identifiers in the
    /// returned records have the device prefix removed.
    #[instrument(skip(self))]
    pub async fn highlights(&self, filter: &Filter) -> Result<Vec<Highlight>> {
        let mut builder = Query::new(include_str!("../queries/highlights.sql"), HIGHLIGHTS_ORDER)
            .and_all(filter.predicates())
            .build();
        let rows: Vec<HighlightRow> = builder
            .build_query_as::<HighlightRow>()
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::QueryFailure)?;
        tracing::debug!(count = rows.len(), "Fetched highlights");
        Ok(rows.into_iter().map(Highlight::from).collect())
    }

    // =========================================================================
    // Books
    // =========================================================================

    /// Build the numbered catalog of books that have at least one highlight.
    #[instrument(skip(self))]
    pub async fn catalog(&self) -> Result<Catalog> {
        let rows: Vec<BookRow> = sqlx::query_as(include_str!("../queries/list_books.sql"))
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::QueryFailure)?;
        let catalog = Catalog::from_rows(rows);
        tracing::debug!(books = catalog.len(), "Built catalog");
        Ok(catalog)
    }

    /// Resolve raw `--book`/`--from`/`--to` arguments into a [`Filter`].
    ///
    /// The catalog is only built when the book argument is an ordinal.
    pub async fn resolve_filter(&self, book: Option<&str>, from: Option<&str>, to: Option<&str>) -> Result<Filter> {
        // Infallible parse.
        let book = book.map(|b| b.parse::<BookArg>().unwrap_or_else(|e| match e {}));
        let catalog = match book {
            Some(BookArg::Ordinal(_)) => self.catalog().await?,
            _ => Catalog::default(),
        };
        Filter::resolve(book, from, to, &catalog)
    }

    // =========================================================================
    // Counts
    // =========================================================================

    /// Count highlights, and the distinct books they belong to.
    #[instrument(skip(self))]
    pub async fn statistics(&self) -> Result<Statistics> {
        let row: StatisticsRow = sqlx::query_as(include_str!("../queries/statistics.sql"))
            .fetch_one(&self.pool)
            .await
            .or_raise(|| ErrorKind::QueryFailure)?;
        row.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::BookFilter;
    use crate::fixture::SourceFixture;
    use crate::{UNKNOWN_AUTHOR, clean};
    use tempfile::TempDir;
    use time::macros::date;

    const DUNE: &str = "file:///mnt/onboard/Herbert/Dune.epub";
    const ANATHEM: &str = "file:///mnt/onboard/Stephenson/Anathem.epub";
    const MIDDLEMARCH: &str = "0f8c4b02-8f6e-4f5b-9d36-0a5e3b9d2c11";

    fn fixture() -> SourceFixture {
        SourceFixture::new()
            .book(DUNE, "Dune", Some("Frank Herbert"))
            .book(ANATHEM, "Anathem", Some("Neal Stephenson"))
            .book(MIDDLEMARCH, "Middlemarch", None)
            .book("file:///mnt/onboard/Unread.epub", "Unread", Some("Nobody"))
            .highlight(1, DUNE, "Fear is the mind-killer.", "2023-01-01 12:00:00")
            .highlight(2, DUNE, "The spice must flow.", "2023-01-02 08:30:00")
            .highlight(3, ANATHEM, "Boredom is a mask\nthat frustration wears.", "2022-12-24 21:15:00")
            .highlight(4, MIDDLEMARCH, "What do we live for?", "2023-02-01 10:00:00")
            .bookmark(5, DUNE, "dogear", "2023-01-01 13:00:00")
            .bookmark(6, "file:///mnt/onboard/Unread.epub", "note", "2023-01-05 09:00:00")
    }

    async fn open(fixture: SourceFixture) -> (TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("KoboReader.sqlite");
        fixture.write(&path).await.unwrap();
        let db = Database::open(&path).await.unwrap();
        (dir, Repository::from(&db))
    }

    fn ids(highlights: &[Highlight]) -> Vec<i64> {
        highlights.iter().map(|h| h.id).collect()
    }

    #[tokio::test]
    async fn test_all_highlights_ordered_by_date() {
        let (_dir, repo) = open(fixture()).await;
        let highlights = repo.highlights(&Filter::default()).await.unwrap();
        assert_eq!(ids(&highlights), vec![3, 1, 2, 4]);
    }

    #[tokio::test]
    async fn test_highlights_are_normalized() {
        let (_dir, repo) = open(fixture()).await;
        let highlights = repo.highlights(&Filter::default()).await.unwrap();
        let dune = highlights.iter().find(|h| h.id == 1).unwrap();
        assert_eq!(dune.volume_id, "Herbert/Dune.epub");
        assert_eq!(dune.content_id, clean(&SourceFixture::chapter_of(DUNE)));
        assert_eq!(dune.book_title, "Dune");
        assert_eq!(dune.author, "Frank Herbert");
        let middlemarch = highlights.iter().find(|h| h.id == 4).unwrap();
        assert_eq!(middlemarch.author, UNKNOWN_AUTHOR);
        assert!(highlights.iter().all(|h| !h.volume_id.starts_with("file://")));
    }

    #[tokio::test]
    async fn test_empty_database_is_not_an_error() {
        let (_dir, repo) = open(SourceFixture::new().book(DUNE, "Dune", None)).await;
        assert!(repo.highlights(&Filter::default()).await.unwrap().is_empty());
        assert!(repo.catalog().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_date_bounds_are_inclusive() {
        let (_dir, repo) = open(fixture()).await;
        let filter = Filter {
            from: Some(date!(2023 - 01 - 01)),
            to: Some(date!(2023 - 01 - 01)),
            ..Filter::default()
        };
        assert_eq!(ids(&repo.highlights(&filter).await.unwrap()), vec![1]);

        let filter = Filter {
            from: Some(date!(2023 - 01 - 02)),
            to: Some(date!(2023 - 02 - 01)),
            ..Filter::default()
        };
        assert_eq!(ids(&repo.highlights(&filter).await.unwrap()), vec![2, 4]);
    }

    #[tokio::test]
    async fn test_open_ended_date_bounds() {
        let (_dir, repo) = open(fixture()).await;
        let filter = Filter { from: Some(date!(2023 - 01 - 02)), ..Filter::default() };
        assert_eq!(ids(&repo.highlights(&filter).await.unwrap()), vec![2, 4]);
        let filter = Filter { to: Some(date!(2022 - 12 - 31)), ..Filter::default() };
        assert_eq!(ids(&repo.highlights(&filter).await.unwrap()), vec![3]);
    }

    #[tokio::test]
    async fn test_title_filter_is_case_sensitive_substring() {
        let (_dir, repo) = open(fixture()).await;
        let filter = Filter { book: Some(BookFilter::Title("une".to_string())), ..Filter::default() };
        assert_eq!(ids(&repo.highlights(&filter).await.unwrap()), vec![1, 2]);
        let filter = Filter { book: Some(BookFilter::Title("dune".to_string())), ..Filter::default() };
        assert!(repo.highlights(&filter).await.unwrap().is_empty());
        let filter = Filter { book: Some(BookFilter::Title("%".to_string())), ..Filter::default() };
        assert!(repo.highlights(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_volume_filter_needs_original_identifier() {
        let (_dir, repo) = open(fixture()).await;
        let filter = Filter { book: Some(BookFilter::VolumeId(DUNE.to_string())), ..Filter::default() };
        assert_eq!(ids(&repo.highlights(&filter).await.unwrap()), vec![1, 2]);
        let filter = Filter { book: Some(BookFilter::VolumeId(clean(DUNE).to_string())), ..Filter::default() };
        assert!(repo.highlights(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_catalog_only_contains_highlighted_books() {
        let (_dir, repo) = open(fixture()).await;
        let catalog = repo.catalog().await.unwrap();
        let titles = catalog.iter().map(|b| (b.ordinal, b.title.as_str())).collect::<Vec<_>>();
        assert_eq!(titles, vec![(1, "Anathem"), (2, "Dune"), (3, "Middlemarch")]);
        assert_eq!(catalog.get(2).unwrap().original_volume_id, DUNE);
    }

    #[tokio::test]
    async fn test_every_highlight_belongs_to_one_catalog_entry() {
        let (_dir, repo) = open(fixture()).await;
        let catalog = repo.catalog().await.unwrap();
        for highlight in repo.highlights(&Filter::default()).await.unwrap() {
            let matches = catalog.iter().filter(|b| b.volume_id() == highlight.volume_id).count();
            assert_eq!(matches, 1, "highlight {} should map to exactly one book", highlight.id);
        }
    }

    #[tokio::test]
    async fn test_resolve_ordinal_round_trips_into_query() {
        let (_dir, repo) = open(fixture()).await;
        let filter = repo.resolve_filter(Some("2"), None, None).await.unwrap();
        assert_eq!(filter.book, Some(BookFilter::VolumeId(DUNE.to_string())));
        let highlights = repo.highlights(&filter).await.unwrap();
        assert_eq!(ids(&highlights), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_resolve_unknown_ordinal() {
        let (_dir, repo) = open(fixture()).await;
        let err = repo.resolve_filter(Some("4"), None, None).await.unwrap_err();
        assert_eq!(*err, ErrorKind::BookNotFound(4));
    }

    #[tokio::test]
    async fn test_resolve_title_and_dates() {
        let (_dir, repo) = open(fixture()).await;
        let filter = repo.resolve_filter(Some("Dune"), Some("2023-01-01"), Some("2023-01-01")).await.unwrap();
        assert_eq!(ids(&repo.highlights(&filter).await.unwrap()), vec![1]);
        let err = repo.resolve_filter(None, Some("2023/01/01"), None).await.unwrap_err();
        assert!(matches!(*err, ErrorKind::InvalidDateFormat(_)));
    }

    #[tokio::test]
    async fn test_statistics() {
        let (_dir, repo) = open(fixture()).await;
        let stats = repo.statistics().await.unwrap();
        assert_eq!(stats, Statistics { total_highlights: 4, books_with_highlights: 3 });
    }

    #[tokio::test]
    async fn test_malformed_schema_is_query_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("KoboReader.sqlite");
        SourceFixture::write_empty_database(&path).await.unwrap();
        let db = Database::open(&path).await.unwrap();
        let repo = Repository::from(&db);
        let err = repo.highlights(&Filter::default()).await.unwrap_err();
        assert_eq!(*err, ErrorKind::QueryFailure);
    }
}
