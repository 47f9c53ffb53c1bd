//! Where the device is mounted.

use figment::Figment;
use figment::providers::Env;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Mount point used when nothing else says otherwise.
pub const DEFAULT_KOBO_PATH: &str = "/Volumes/KOBOeReader";
/// Environment variable overriding the saved preference.
pub const KOBO_PATH_ENV: &str = "KOBO_PATH";

/// Pick the device root, in priority order: explicit argument, environment,
/// saved preference, then [`DEFAULT_KOBO_PATH`].
pub fn resolve(explicit: Option<&Path>, env: Option<&Path>, saved: Option<&Path>) -> PathBuf {
    explicit
        .or(env)
        .or(saved)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_KOBO_PATH))
}

#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    kobo_path: Option<PathBuf>,
}

/// Read `KOBO_PATH` from the environment. Unset and empty are the same.
pub fn env_kobo_path() -> Option<PathBuf> {
    let overrides: EnvOverrides = match Figment::from(Env::raw().only(&[KOBO_PATH_ENV])).extract() {
        Ok(overrides) => overrides,
        Err(err) => {
            tracing::warn!(error = %err, "Ignoring unreadable {KOBO_PATH_ENV}");
            return None;
        },
    };
    overrides.kobo_path.filter(|path| !path.as_os_str().is_empty())
}
