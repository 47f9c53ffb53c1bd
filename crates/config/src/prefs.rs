//! The saved device path, persisted as JSON in the user's config directory.

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::{OptionExt, ResultExt};
use figment::Figment;
use figment::providers::{Format, Json};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kobo_path: Option<PathBuf>,
}

impl Preferences {
    /// `<config dir>/kobo-highlights/preferences.json` on this platform.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "kobo-highlights").ok_or_raise(|| ErrorKind::NoConfigDirectory)?;
        Ok(dirs.config_dir().join(PREFERENCES_FILE))
    }

    /// Load preferences, falling back to empty ones.
    ///
    /// Never fails: a preferences file is a convenience, and a broken one
    /// mustn't stop the device being found through other means.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No saved preferences");
            return Self::default();
        }
        match Figment::from(Json::file_exact(path)).extract::<Self>() {
            Ok(prefs) => prefs,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Ignoring unreadable preferences file");
                Self::default()
            },
        }
    }

    /// Write preferences as pretty JSON, creating parent directories.
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).or_raise(|| ErrorKind::PreferencesWrite(path.to_path_buf()))?;
        }
        let json = serde_json::to_string_pretty(self).or_raise(|| ErrorKind::PreferencesWrite(path.to_path_buf()))?;
        fs::write(path, json).or_raise(|| ErrorKind::PreferencesWrite(path.to_path_buf()))?;
        tracing::info!("Saved preferences");
        Ok(())
    }
}
