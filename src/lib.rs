//! `kobo`: browse and export the highlights stored on a Kobo e-reader.
//!
//! The binary is a thin shell: [`cli`] parses arguments, [`commands`] runs
//! them against the `kobo-source`, `kobo-export` and `kobo-config` crates, and
//! [`error`] turns whatever went wrong into a message and a hint.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

use crate::error::Error;
use std::io::Write;

/// Print `err` as `Error: <message>`, then its hint. With `-v`, the full
/// error tree follows.
pub fn report(out: &mut impl Write, err: &Error, verbosity: u8) {
    // Nothing sensible to do if stderr itself is gone.
    let _ = writeln!(out, "Error: {}", **err);
    if let Some(hint) = err.hint() {
        let _ = writeln!(out, "{hint}");
    }
    if verbosity > 0 {
        let _ = writeln!(out, "\n{err:?}");
    }
}
