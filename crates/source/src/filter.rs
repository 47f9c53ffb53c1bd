//! Turns the user's `--book`, `--from` and `--to` arguments into predicates.

use crate::catalog::Catalog;
use crate::error::{ErrorKind, Result};
use crate::predicate::Predicate;
use exn::{OptionExt, ResultExt};
use std::convert::Infallible;
use std::str::FromStr;
use time::Date;
use time::macros::format_description;

/// A book reference as typed by the user.
///
/// Anything that parses as an integer is an ordinal from the catalog listing;
/// everything else is a partial title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookArg {
    Ordinal(i64),
    Title(String),
}

impl FromStr for BookArg {
    type Err = Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i64>() {
            Ok(ordinal) => Self::Ordinal(ordinal),
            Err(_) => Self::Title(s.to_string()),
        })
    }
}

impl BookArg {
    /// Resolve the argument against the current catalog.
    ///
    /// Ordinals that don't exist fail with [`ErrorKind::BookNotFound`]; they
    /// never degrade into an empty result set.
    pub fn resolve(self, catalog: &Catalog) -> Result<BookFilter> {
        match self {
            Self::Ordinal(ordinal) => catalog
                .get(ordinal)
                .map(|book| BookFilter::VolumeId(book.original_volume_id.clone()))
                .ok_or_raise(|| ErrorKind::BookNotFound(ordinal)),
            Self::Title(title) => Ok(BookFilter::Title(title)),
        }
    }
}

/// At most one book restriction is ever applied; a volume identifier always
/// wins over a title because the two can't both be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    /// Original, unclean volume identifier.
    VolumeId(String),
    /// Case-sensitive substring of the title.
    Title(String),
}

impl From<BookFilter> for Predicate {
    fn from(filter: BookFilter) -> Self {
        match filter {
            BookFilter::VolumeId(id) => Predicate::VolumeId(id),
            BookFilter::Title(title) => Predicate::TitleContains(title),
        }
    }
}

/// Fully-resolved restrictions for the highlight query.
///
/// Both date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub book: Option<BookFilter>,
    pub from: Option<Date>,
    pub to: Option<Date>,
}

impl Filter {
    /// Parse and validate date bounds, then resolve the book argument.
    ///
    /// Dates are checked first so a typo in `--from` is reported before the
    /// catalog is consulted.
    pub fn resolve(book: Option<BookArg>, from: Option<&str>, to: Option<&str>, catalog: &Catalog) -> Result<Self> {
        let from = from.map(parse_date).transpose()?;
        let to = to.map(parse_date).transpose()?;
        let book = book.map(|arg| arg.resolve(catalog)).transpose()?;
        Ok(Self { book, from, to })
    }

    pub(crate) fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::with_capacity(3);
        if let Some(book) = &self.book {
            predicates.push(book.clone().into());
        }
        if let Some(from) = self.from {
            predicates.push(Predicate::CreatedOnOrAfter(from));
        }
        if let Some(to) = self.to {
            predicates.push(Predicate::CreatedOnOrBefore(to));
        }
        predicates
    }
}

/// Parse a `YYYY-MM-DD` date argument.
///
/// Exactly four year digits, no sign and no surrounding whitespace.
pub(crate) fn parse_date(s: &str) -> Result<Date> {
    let shaped = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        exn::bail!(ErrorKind::InvalidDateFormat(s.to_string()));
    }
    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .or_raise(|| ErrorKind::InvalidDateFormat(s.to_string()))
}
