//! Every field is quoted, and line breaks inside a highlight are flattened to
//! spaces so each record is exactly one physical line. The flattening is
//! lossy; use the JSON or SQLite export to keep the original text.

use crate::error::{ErrorKind, Result};
use crate::record::Record;
use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use exn::ResultExt;
use kobo_source::Highlight;
use std::io::Write;

pub fn write_csv(out: &mut impl Write, highlights: &[Highlight]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(out);
    for highlight in highlights {
        writer
            .serialize(Record::from(highlight).single_line())
            .or_raise(|| ErrorKind::Serialization)?;
    }
    writer.flush().or_raise(|| ErrorKind::Serialization)?;
    Ok(())
}
