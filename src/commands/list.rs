use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use kobo_source::{Catalog, Repository};
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

/// `kobo list`: every book with highlights, numbered for use with `--book`.
pub async fn run(repo: &Repository, out: &mut impl Write) -> Result<()> {
    let catalog = repo.catalog().await.map_err(ErrorKind::from_source)?;
    print_catalog(out, &catalog).or_raise(|| ErrorKind::Output)
}

fn print_catalog(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "Available books with highlights:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    // Listing order is catalog order, so positions are the ordinals.
    for (ordinal, book) in (1..).zip(catalog.listing()) {
        writeln!(out, "{ordinal:2}. {}", book.title)?;
        writeln!(out, "    by {}", book.author)?;
        writeln!(out)?;
    }
    writeln!(out, "Use --book <number> or --book \"title\" to filter exports")?;
    Ok(())
}
