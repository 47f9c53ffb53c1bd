use crate::cli::FilterArgs;
use crate::commands::NO_HIGHLIGHTS;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use kobo_export::write_text;
use kobo_source::Repository;
use std::io::Write;

/// `kobo show`: the text export layout, printed instead of saved.
///
/// Returns how many highlights were printed.
pub async fn run(repo: &Repository, filter: &FilterArgs, out: &mut impl Write) -> Result<usize> {
    let filter = filter.resolve(repo).await?;
    let highlights = repo.highlights(&filter).await.map_err(ErrorKind::from_source)?;
    if highlights.is_empty() {
        writeln!(out, "{NO_HIGHLIGHTS}").or_raise(|| ErrorKind::Output)?;
        return Ok(0);
    }
    write_text(out, &highlights).or_raise(|| ErrorKind::Output)?;
    writeln!(out, "\n📚 Found {} highlights", highlights.len()).or_raise(|| ErrorKind::Output)?;
    Ok(highlights.len())
}
