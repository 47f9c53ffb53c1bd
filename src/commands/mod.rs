//! One module per subcommand.
//!
//! Commands write their user-facing output to the writer they are given
//! (stdout in the binary) and log everything else through `tracing`.

pub mod backup;
pub mod count;
pub mod export;
pub mod list;
pub mod show;

use crate::cli::{Cli, Command, FilterArgs};
use crate::error::{ErrorKind, Result};
use kobo_config::{Preferences, SourceRoot};
use kobo_source::{Database, Filter, Repository};
use std::io::Write;
use std::path::{Path, PathBuf};
use time::PrimitiveDateTime;

pub const NO_HIGHLIGHTS: &str = "No highlights found with given criteria.";

/// Everything a command needs from outside the command line.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved device root. Not validated until a command needs it.
    pub kobo_path: PathBuf,
    /// Where `backup --set-path` saves to, if the platform has a config dir.
    pub preferences_path: Option<PathBuf>,
    /// Base for relative output paths.
    pub work_dir: PathBuf,
    /// Timestamp for generated file names.
    pub now: PrimitiveDateTime,
}

impl Context {
    /// Resolve the device path from the command line, `KOBO_PATH` and the
    /// saved preferences.
    pub fn from_cli(cli: &Cli, now: PrimitiveDateTime) -> Self {
        let preferences_path = match Preferences::default_path() {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::warn!(error = %*err, "Saved preferences unavailable");
                None
            },
        };
        let saved = preferences_path.as_deref().map(Preferences::load).and_then(|prefs| prefs.kobo_path);
        let env = kobo_config::env_kobo_path();
        let kobo_path = kobo_config::resolve(cli.kobo_path.as_deref(), env.as_deref(), saved.as_deref());
        tracing::info!(path = %kobo_path.display(), "Using Kobo device");
        Self { kobo_path, preferences_path, work_dir: PathBuf::new(), now }
    }

    /// Validate the device root and open its database read-only.
    pub async fn repository(&self) -> Result<Repository> {
        let root = SourceRoot::validate(&self.kobo_path).map_err(ErrorKind::from_config)?;
        let db = Database::open(root.database_path()).await.map_err(ErrorKind::from_source)?;
        Ok(Repository::from(&db))
    }

    /// Resolve a (possibly relative) output path against the work dir.
    pub fn output_path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.work_dir.join(path)
    }
}

impl FilterArgs {
    pub async fn resolve(&self, repo: &Repository) -> Result<Filter> {
        repo.resolve_filter(self.book.as_deref(), self.from.as_deref(), self.to.as_deref())
            .await
            .map_err(ErrorKind::from_source)
    }
}

/// Run the parsed command line.
pub async fn run(command: Command, ctx: &Context, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Backup { set_path: Some(path), .. } => backup::set_path(ctx, &path, out),
        Command::Backup { output, set_path: None } => backup::run(ctx, output.as_deref(), out).await.map(drop),
        Command::List => list::run(&ctx.repository().await?, out).await,
        Command::Count => count::run(&ctx.repository().await?, out).await,
        Command::Show { filter } => show::run(&ctx.repository().await?, &filter, out).await.map(drop),
        Command::Export { format, output, filter } => {
            let repo = ctx.repository().await?;
            export::run(ctx, &repo, format, output.as_deref(), &filter, out).await.map(drop)
        },
    }
}
