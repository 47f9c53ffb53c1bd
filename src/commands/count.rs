use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use kobo_source::Repository;
use std::io::Write;

/// `kobo count`
pub async fn run(repo: &Repository, out: &mut impl Write) -> Result<()> {
    let stats = repo.statistics().await.map_err(ErrorKind::from_source)?;
    writeln!(out, "Total highlights: {}", stats.total_highlights).or_raise(|| ErrorKind::Output)?;
    writeln!(out, "Books with highlights: {}", stats.books_with_highlights).or_raise(|| ErrorKind::Output)?;
    Ok(())
}
