//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `neutralise_link` library: parses arguments,
//! initializes the logger, runs the batch and turns the report into an exit
//! status. Results go to stdout, logs to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use neutralise_link::initialization::init_logger_with;
use neutralise_link::{run_batch, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_batch(&cli).await {
        Ok(report) => process::exit(report.exit_code()),
        Err(e) => {
            eprintln!("neutralise_link error: {:#}", e);
            process::exit(1);
        }
    }
}
