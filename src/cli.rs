use clap::{Args, Parser, Subcommand};
use kobo_export::Format;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kobo")]
#[command(version, about = "Extract and manage highlights from Kobo devices", long_about = None)]
#[command(after_help = "EXAMPLES:
    kobo list                              Number every book with highlights
    kobo show --book 3                     Print highlights from book 3
    kobo export csv --from 2024-01-01      Export this year's highlights
    kobo backup --set-path /media/KOBOeReader")]
pub struct Cli {
    /// Path to the Kobo device (overrides KOBO_PATH and the saved path)
    #[arg(long, global = true, value_name = "PATH")]
    pub kobo_path: Option<PathBuf>,

    /// Log more; repeat for debug output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Copy the device database, or save the device path
    Backup {
        /// Output file (auto-generated if not provided)
        #[arg(value_name = "OUTPUT", conflicts_with = "set_path")]
        output: Option<String>,

        /// Save PATH as the Kobo device location for future runs
        #[arg(long, value_name = "PATH")]
        set_path: Option<PathBuf>,
    },
    /// List books with highlights
    #[command(visible_alias = "ls")]
    List,
    /// Show highlight statistics
    Count,
    /// Print highlights to the terminal
    Show {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Export highlights to a file
    Export {
        /// Export format: txt, json, csv or sqlite
        #[arg(value_name = "FORMAT")]
        format: Format,

        /// Output file (auto-generated if not provided)
        #[arg(value_name = "OUTPUT")]
        output: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Book number (from `kobo list`) or part of its title
    #[arg(long, value_name = "BOOK")]
    pub book: Option<String>,

    /// Only highlights made on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Only highlights made on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
}
