//! Main entry point for the `phrasebook` command.

use anyhow::Context;
use clap::Parser;
use phrasebook_cli::{load_config, App, Cli};
use phrasebook_common::init_logging;
use std::process::ExitCode;
use tracing::info;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_logging(config.logging.to_logging_config()).context("initializing logging")?;

    info!("Starting phrasebook {}", env!("CARGO_PKG_VERSION"));

    let app = App::from_config(config)?;
    let outcome = app.run(&cli.command, &mut std::io::stdout().lock())?;

    Ok(outcome.into())
}
