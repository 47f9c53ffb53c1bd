//! Human-readable layout, shared by `kobo show` and the `txt` export.
//!
//! ```text
//! ---------------------------------------------------------------------------
//! VolumeID: Herbert/Dune.epub
//! Book Title: Dune
//! Author: Frank Herbert
//! ---------------------------------------------------------------------------
//!
//! BookmarkID: 1
//! Date Created: 2023-01-01 12:00:00
//! –
//! Highlight:
//! Fear is the mind-killer.
//!
//! ---------------------------------------------------------------------------
//!
//! BookmarkID: 2
//! ...
//! ```
//!
//! The header describes the first record only; it is meant for single-book
//! output and is not repeated when the records span several books.

use kobo_source::Highlight;
use std::io::{self, Write};

const RULE_WIDTH: usize = 75;

pub fn write_text(out: &mut impl Write, highlights: &[Highlight]) -> io::Result<()> {
    let Some(first) = highlights.first() else {
        return Ok(());
    };
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "VolumeID: {}", first.volume_id)?;
    writeln!(out, "Book Title: {}", first.book_title)?;
    writeln!(out, "Author: {}", first.author)?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    for (index, highlight) in highlights.iter().enumerate() {
        writeln!(out, "BookmarkID: {}", highlight.id)?;
        writeln!(out, "Date Created: {}", highlight.date_created)?;
        writeln!(out, "\u{2013}")?;
        writeln!(out, "Highlight:")?;
        writeln!(out, "{}", highlight.text)?;
        writeln!(out)?;
        if index + 1 < highlights.len() {
            writeln!(out, "{rule}")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
