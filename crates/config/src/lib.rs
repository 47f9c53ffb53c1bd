//! Finding the Kobo device.
//!
//! The device root comes from, in order: the `--kobo-path` argument, the
//! `KOBO_PATH` environment variable, the path saved with
//! `kobo backup --set-path`, and finally `/Volumes/KOBOeReader`. Resolution is
//! a pure function of those three optional inputs; reading them is left to the
//! caller so the order can be tested without touching the environment.

pub mod error;
mod prefs;
mod resolve;
mod root;

pub use crate::prefs::{PREFERENCES_FILE, Preferences};
pub use crate::resolve::{DEFAULT_KOBO_PATH, KOBO_PATH_ENV, env_kobo_path, resolve};
pub use crate::root::{DATABASE_SUBPATH, SourceRoot};
