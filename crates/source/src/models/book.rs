use crate::clean::clean;
use crate::models::author_or_unknown;

/// A `content` row joined to at least one highlight.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct BookRow {
    pub(crate) content_id: String,
    pub(crate) title: String,
    pub(crate) attribution: Option<String>,
}

/// A numbered book in the [`Catalog`](crate::Catalog).
///
/// Holds the identifier exactly as the device stores it, so it can be used
/// as a query predicate. Use [`volume_id`](Self::volume_id) for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookEntry {
    /// 1-based position in the title-sorted catalog.
    pub ordinal: usize,
    pub original_volume_id: String,
    pub title: String,
    pub author: String,
}

impl BookEntry {
    pub(crate) fn new(ordinal: usize, row: BookRow) -> Self {
        Self {
            ordinal,
            original_volume_id: row.content_id,
            title: row.title,
            author: author_or_unknown(row.attribution),
        }
    }

    /// The volume identifier with the device prefix removed.
    pub fn volume_id(&self) -> &str {
        clean(&self.original_volume_id)
    }
}

/// A book as shown to the user: cleaned identifier, no ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    pub volume_id: String,
    pub title: String,
    pub author: String,
}

impl From<&BookEntry> for Book {
    fn from(entry: &BookEntry) -> Self {
        Self {
            volume_id: entry.volume_id().to_string(),
            title: entry.title.clone(),
            author: entry.author.clone(),
        }
    }
}
