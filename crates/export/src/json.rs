use crate::error::{ErrorKind, Result};
use crate::record::Record;
use exn::ResultExt;
use kobo_source::Highlight;
use std::io::Write;

/// Pretty-printed (two-space) JSON array. Non-ASCII text is written as-is.
pub fn write_json(out: &mut impl Write, highlights: &[Highlight]) -> Result<()> {
    let records = highlights.iter().map(Record::from).collect::<Vec<_>>();
    serde_json::to_writer_pretty(&mut *out, &records).or_raise(|| ErrorKind::Serialization)?;
    writeln!(out).or_raise(|| ErrorKind::Serialization)?;
    Ok(())
}
