//! Output file names for exports and backups.

use crate::Format;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use kobo_source::BookFilter;
use std::path::PathBuf;
use time::PrimitiveDateTime;
use time::macros::format_description;

/// Keep alphanumerics, spaces, hyphens and underscores, trim trailing
/// whitespace, then turn spaces into underscores.
pub fn sanitize(name: &str) -> String {
    let kept = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>();
    kept.trim_end().replace(' ', "_")
}

fn timestamp(now: PrimitiveDateTime) -> Result<String> {
    let format = format_description!("[year][month][day]_[hour][minute][second]");
    now.format(format).or_raise(|| ErrorKind::Timestamp)
}

/// The part of a volume identifier that reads like a book name:
/// `Herbert/Dune.epub` becomes `Dune`.
fn volume_stem(volume_id: &str) -> String {
    let last = volume_id.rsplit('/').next().unwrap_or(volume_id);
    last.replace(".epub", "")
}

/// Name an export after whatever the user filtered on.
///
/// Book filters give `highlights_<name>.<ext>`; with no book filter, or one
/// that sanitizes away to nothing, the name is timestamped instead.
pub fn export_file_name(book: Option<&BookFilter>, format: Format, now: PrimitiveDateTime) -> Result<PathBuf> {
    let name = match book {
        Some(BookFilter::Title(title)) => sanitize(title),
        Some(BookFilter::VolumeId(id)) => sanitize(&volume_stem(id)),
        None => String::new(),
    };
    let ext = format.extension();
    if name.is_empty() {
        Ok(PathBuf::from(format!("kobo_highlights_{}.{ext}", timestamp(now)?)))
    } else {
        Ok(PathBuf::from(format!("highlights_{name}.{ext}")))
    }
}

pub fn backup_file_name(now: PrimitiveDateTime) -> Result<PathBuf> {
    Ok(PathBuf::from(format!("kobo_backup_{}.sqlite", timestamp(now)?)))
}

/// Append `.<ext>` to a user-supplied name unless it already ends with it.
pub fn with_extension(name: &str, ext: &str) -> PathBuf {
    let suffix = format!(".{ext}");
    if name.ends_with(&suffix) {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}{suffix}"))
    }
}
