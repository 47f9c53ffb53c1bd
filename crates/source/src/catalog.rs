//! The numbered list of books that have highlights.

use crate::models::{Book, BookEntry, BookRow};
use std::collections::HashSet;

/// Every book with at least one highlight, sorted by title and numbered from 1.
///
/// Titles are compared by codepoint (no locale-aware collation), with the
/// original volume identifier as a tie-breaker. Ordinals are dense and are
/// assigned after sorting, so they are reproducible for a given database state
/// but shift whenever books gain or lose their first highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<BookEntry>,
}

impl Catalog {
    pub(crate) fn from_rows(mut rows: Vec<BookRow>) -> Self {
        rows.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.content_id.cmp(&b.content_id)));
        // The join can produce the same volume more than once.
        let mut seen = HashSet::new();
        rows.retain(|row| seen.insert(row.content_id.clone()));
        let books = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| BookEntry::new(index + 1, row))
            .collect();
        Self { books }
    }

    /// Look up a book by its 1-based ordinal.
    ///
    /// Zero, negative and out-of-range ordinals return `None`.
    pub fn get(&self, ordinal: i64) -> Option<&BookEntry> {
        let index = usize::try_from(ordinal).ok()?.checked_sub(1)?;
        self.books.get(index)
    }

    /// Number of distinct books with highlights.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Numbered entries, holding the identifiers as stored on the device.
    pub fn iter(&self) -> std::slice::Iter<'_, BookEntry> {
        self.books.iter()
    }

    /// Cleaned, display-ready projection of the catalog, in catalog order.
    pub fn listing(&self) -> Vec<Book> {
        self.books.iter().map(Book::from).collect()
    }
}
