use crate::error::{ErrorKind, Result};
use std::path::{Path, PathBuf};

/// Location of the annotations database relative to the device root.
pub const DATABASE_SUBPATH: &str = ".kobo/KoboReader.sqlite";

/// A device root that has been checked to contain a database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRoot {
    root: PathBuf,
}

impl SourceRoot {
    #[tracing::instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn validate(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            exn::bail!(ErrorKind::SourceUnavailable(root.to_path_buf()));
        }
        let database = root.join(DATABASE_SUBPATH);
        if !database.is_file() {
            exn::bail!(ErrorKind::SourceUnavailable(database));
        }
        tracing::debug!("Found device database");
        Ok(Self { root: root.to_path_buf() })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn database_path(&self) -> PathBuf {
        self.root.join(DATABASE_SUBPATH)
    }
}
