//! Read-only access to the highlights stored on a Kobo e-reader.
//!
//! The device keeps every annotation in `.kobo/KoboReader.sqlite`. This crate
//! never writes to that database; it opens it read-only, runs parameterized
//! queries against the `Bookmark` and `content` tables, and hands back typed,
//! normalized records.
//!
//! # Architecture
//! - [`Database`] owns the read-only connection.
//! - [`Repository`] runs the highlight query, builds the numbered
//!   [`Catalog`] of books, and counts highlights.
//! - [`Filter`] is the resolved form of the user's book/date arguments. A
//!   numeric book argument is an ordinal into the current [`Catalog`], which
//!   is rebuilt on every invocation and therefore only stable for as long as
//!   the device database doesn't change.
//! - [`clean`] strips the device mount prefix from identifiers. Only
//!   display/export values are cleaned; the catalog keeps the original
//!   identifier so it still matches rows when fed back into a query.
//!
//! The `kobo` binary prints [`Catalog::listing`]; [`Catalog::iter`] and
//! [`Catalog::get`] expose the numbered [`BookEntry`] values for other
//! callers that need the device identifiers.

mod catalog;
mod clean;
mod db;
pub mod error;
#[cfg(any(test, feature = "fixture"))]
pub mod fixture;
mod filter;
mod models;
mod predicate;
mod repo;

pub use crate::catalog::Catalog;
pub use crate::clean::{DEVICE_PREFIX, clean};
pub use crate::db::Database;
pub use crate::filter::{BookArg, BookFilter, Filter};
pub use crate::models::{Book, BookEntry, Highlight, Statistics, UNKNOWN_AUTHOR};
pub use crate::repo::Repository;
