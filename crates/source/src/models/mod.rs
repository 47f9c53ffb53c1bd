mod book;
mod highlight;
mod stats;

pub use self::book::{Book, BookEntry};
pub(crate) use self::book::BookRow;
pub use self::highlight::Highlight;
pub(crate) use self::highlight::HighlightRow;
pub use self::stats::Statistics;
pub(crate) use self::stats::StatisticsRow;

/// Author shown when the device has no attribution for a book.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// The device stores missing attributions as either NULL or an empty string.
fn author_or_unknown(attribution: Option<String>) -> String {
    attribution
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}
