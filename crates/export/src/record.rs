use kobo_source::Highlight;
use serde::Serialize;
use std::borrow::Cow;

/// Exported column names, in output order.
pub const COLUMNS: [&str; 6] = ["BookmarkID", "VolumeID", "BookTitle", "Author", "DateCreated", "Highlight"];

/// The flat, exported shape of a [`Highlight`].
///
/// Field order here is the column/key order of every structured format.
#[derive(Debug, Serialize)]
pub(crate) struct Record<'a> {
    #[serde(rename = "BookmarkID")]
    pub(crate) bookmark_id: i64,
    #[serde(rename = "VolumeID")]
    pub(crate) volume_id: &'a str,
    #[serde(rename = "BookTitle")]
    pub(crate) book_title: &'a str,
    #[serde(rename = "Author")]
    pub(crate) author: &'a str,
    #[serde(rename = "DateCreated")]
    pub(crate) date_created: &'a str,
    #[serde(rename = "Highlight")]
    pub(crate) highlight: Cow<'a, str>,
}

impl<'a> From<&'a Highlight> for Record<'a> {
    fn from(h: &'a Highlight) -> Self {
        Self {
            bookmark_id: h.id,
            volume_id: &h.volume_id,
            book_title: &h.book_title,
            author: &h.author,
            date_created: &h.date_created,
            highlight: Cow::Borrowed(&h.text),
        }
    }
}

impl Record<'_> {
    /// Replace every line break (`\r\n`, `\r` or `\n`) in the highlight with a
    /// single space. Lossy.
    pub(crate) fn single_line(mut self) -> Self {
        if self.highlight.contains(['\r', '\n']) {
            let text = self.highlight.replace("\r\n", " ").replace(['\r', '\n'], " ");
            self.highlight = Cow::Owned(text);
        }
        self
    }
}
