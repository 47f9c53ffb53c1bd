use clap::Parser;
use kobo_highlights::cli::Cli;
use kobo_highlights::commands::{self, Context};
use kobo_highlights::{logging, report};
use std::process::ExitCode;
use time::{OffsetDateTime, PrimitiveDateTime};

fn local_now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Before anything can spawn a thread; the local offset is unsound to
    // read from a multi-threaded process on some platforms.
    let now = local_now();
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = Context::from_cli(&cli, now);
    let verbosity = cli.verbose;
    let mut stdout = std::io::stdout().lock();
    match commands::run(cli.command, &ctx, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&mut std::io::stderr(), &err, verbosity);
            ExitCode::FAILURE
        },
    }
}
