//! `kobo backup`: a byte-for-byte copy of `KoboReader.sqlite`.
//!
//! The copy is taken while the device may still be mounted read-write; eject
//! or sync the reader first if it is in use.

use crate::commands::Context;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use kobo_config::{Preferences, SourceRoot};
use kobo_export::{backup_file_name, with_extension};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::instrument;

#[instrument(skip(ctx, out))]
pub async fn run(ctx: &Context, output: Option<&str>, out: &mut impl Write) -> Result<PathBuf> {
    let root = SourceRoot::validate(&ctx.kobo_path).map_err(ErrorKind::from_config)?;
    let name = match output {
        Some(output) => with_extension(output, "sqlite"),
        None => backup_file_name(ctx.now).map_err(ErrorKind::from_export)?,
    };
    let destination = ctx.output_path(name);
    let bytes = tokio::fs::copy(root.database_path(), &destination)
        .await
        .or_raise(|| ErrorKind::Io(destination.clone()))?;
    tracing::info!(bytes, destination = %destination.display(), "Backed up device database");
    writeln!(out, "✓ Database backed up to {}", destination.display()).or_raise(|| ErrorKind::Output)?;
    Ok(destination)
}

/// Remember `path` as the device location for future runs.
pub fn set_path(ctx: &Context, path: &Path, out: &mut impl Write) -> Result<()> {
    let Some(preferences_path) = ctx.preferences_path.as_deref() else {
        exn::bail!(ErrorKind::Preferences);
    };
    let prefs = Preferences { kobo_path: Some(path.to_path_buf()) };
    prefs.save(preferences_path).map_err(ErrorKind::from_config)?;
    writeln!(out, "✓ Saved Kobo path: {}", path.display()).or_raise(|| ErrorKind::Output)?;
    writeln!(out, "✓ Saved to: {}", preferences_path.display()).or_raise(|| ErrorKind::Output)?;
    Ok(())
}
