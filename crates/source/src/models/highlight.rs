use crate::clean::clean;
use crate::models::author_or_unknown;

/// Raw `Bookmark ⋈ content` row, exactly as the device stores it.
///
/// Never leaves the crate: every row is converted into a [`Highlight`] before
/// it is returned, which is where identifiers get cleaned.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct HighlightRow {
    pub(crate) bookmark_id: i64,
    pub(crate) volume_id: String,
    pub(crate) text: Option<String>,
    pub(crate) content_id: Option<String>,
    pub(crate) title: String,
    pub(crate) attribution: Option<String>,
    pub(crate) date_created: String,
}

/// A single highlighted passage, normalized for display and export.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Highlight {
    /// `BookmarkID` on the device.
    pub id: i64,
    /// Book identifier with the device prefix removed.
    pub volume_id: String,
    /// The highlighted passage. May contain newlines.
    pub text: String,
    /// Identifier of the chapter/content unit, with the device prefix removed.
    pub content_id: String,
    pub book_title: String,
    /// Falls back to [`UNKNOWN_AUTHOR`](crate::UNKNOWN_AUTHOR).
    pub author: String,
    /// `YYYY-MM-DD HH:MM:SS`, as stored on the device.
    pub date_created: String,
}

impl From<HighlightRow> for Highlight {
    fn from(row: HighlightRow) -> Self {
        Self {
            id: row.bookmark_id,
            volume_id: clean(&row.volume_id).to_string(),
            text: row.text.unwrap_or_default(),
            content_id: row.content_id.as_deref().map(clean).unwrap_or_default().to_string(),
            book_title: row.title,
            author: author_or_unknown(row.attribution),
            date_created: row.date_created,
        }
    }
}
