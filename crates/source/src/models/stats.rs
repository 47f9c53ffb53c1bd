use crate::error::{Error, ErrorKind};
use exn::ResultExt;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct StatisticsRow {
    pub(crate) total_highlights: i64,
    pub(crate) books_with_highlights: i64,
}

/// Highlight totals across the whole device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total_highlights: u64,
    /// Distinct volumes with at least one highlight.
    pub books_with_highlights: u64,
}

impl TryFrom<StatisticsRow> for Statistics {
    type Error = Error;
    fn try_from(row: StatisticsRow) -> Result<Self, Self::Error> {
        Ok(Self {
            total_highlights: u64::try_from(row.total_highlights).or_raise(|| ErrorKind::QueryFailure)?,
            books_with_highlights: u64::try_from(row.books_with_highlights).or_raise(|| ErrorKind::QueryFailure)?,
        })
    }
}
