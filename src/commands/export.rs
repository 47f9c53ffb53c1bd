use crate::cli::FilterArgs;
use crate::commands::{Context, NO_HIGHLIGHTS};
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use kobo_export::{Format, export_file_name, with_extension};
use kobo_source::Repository;
use std::io::Write;
use std::path::PathBuf;
use tracing::instrument;

/// `kobo export`: write the filtered highlights to a file.
///
/// Without an explicit output name, the file is named after the book filter
/// (or timestamped when there isn't one). Returns the path written, or `None`
/// if nothing matched and no file was created.
#[instrument(skip(ctx, repo, out))]
pub async fn run(
    ctx: &Context,
    repo: &Repository,
    format: Format,
    output: Option<&str>,
    filter: &FilterArgs,
    out: &mut impl Write,
) -> Result<Option<PathBuf>> {
    let filter = filter.resolve(repo).await?;
    let highlights = repo.highlights(&filter).await.map_err(ErrorKind::from_source)?;
    if highlights.is_empty() {
        writeln!(out, "{NO_HIGHLIGHTS}").or_raise(|| ErrorKind::Output)?;
        return Ok(None);
    }
    let name = match output {
        Some(output) => with_extension(output, format.extension()),
        None => export_file_name(filter.book.as_ref(), format, ctx.now).map_err(ErrorKind::from_export)?,
    };
    let destination = ctx.output_path(name);
    kobo_export::export(format, &highlights, &destination)
        .await
        .map_err(ErrorKind::from_export)?;
    writeln!(out, "✓ Exported {} highlights to {}", highlights.len(), destination.display())
        .or_raise(|| ErrorKind::Output)?;
    Ok(Some(destination))
}
