//! Composable, fully-parameterized `WHERE` clauses for the highlight query.
//!
//! The base query (`queries/highlights.sql`) already restricts rows to
//! `Type = 'highlight'`; every [`Predicate`] is ANDed onto it. Values are always
//! bound, never spliced into the SQL text.

use sqlx::{QueryBuilder, Sqlite};
use time::Date;

/// Fixed-width `YYYY-MM-DD` prefix of `DateCreated`. Comparing the prefix
/// makes both date bounds inclusive of the whole day.
const CREATED_ON: &str = "substr(b.DateCreated, 1, 10)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Predicate {
    /// Exact match on the device's (unclean) volume identifier.
    VolumeId(String),
    /// Case-sensitive, unanchored substring match on the book title.
    TitleContains(String),
    CreatedOnOrAfter(Date),
    CreatedOnOrBefore(Date),
}

impl Predicate {
    fn push_to(self, builder: &mut QueryBuilder<'static, Sqlite>) {
        match self {
            Self::VolumeId(id) => {
                builder.push("b.VolumeID = ").push_bind(id);
            },
            // `LIKE` is case-insensitive for ASCII and treats `%`/`_` in the
            // title as wildcards; `instr` does neither.
            Self::TitleContains(title) => {
                builder.push("instr(c.Title, ").push_bind(title).push(") > 0");
            },
            Self::CreatedOnOrAfter(date) => {
                builder.push(CREATED_ON).push(" >= ").push_bind(date.to_string());
            },
            Self::CreatedOnOrBefore(date) => {
                builder.push(CREATED_ON).push(" <= ").push_bind(date.to_string());
            },
        }
    }
}

/// A base `SELECT` plus ANDed predicates and a trailing `ORDER BY`.
#[derive(Debug, Clone)]
pub(crate) struct Query {
    base: &'static str,
    predicates: Vec<Predicate>,
    order_by: &'static str,
}

impl Query {
    /// `base` must end with a `WHERE` clause so predicates can be ANDed on.
    pub(crate) fn new(base: &'static str, order_by: &'static str) -> Self {
        Self { base, predicates: Vec::new(), order_by }
    }

    pub(crate) fn and_all(mut self, predicates: impl IntoIterator<Item = Predicate>) -> Self {
        self.predicates.extend(predicates);
        self
    }

    pub(crate) fn build(self) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new(self.base.trim_end());
        for predicate in self.predicates {
            builder.push(" AND ");
            predicate.push_to(&mut builder);
        }
        builder.push(" ORDER BY ").push(self.order_by);
        builder
    }
}
