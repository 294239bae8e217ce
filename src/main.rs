//! SolarEdge energy report
//!
//! Fetches historical energy generation data for a site from the SolarEdge
//! Monitoring API and prints descriptive statistics over it.
//!
//! # Commands
//!
//! - **fetch**: loads `site_id` and `api_key` from a YAML file, queries the
//!   `energy` endpoint and writes the raw response to
//!   `data/energy_{start}_to_{end}_{timeUnit}.json`
//! - **stats**: reads such a file back and prints the days with the most and
//!   least energy, plus unusually high and low days for daily series
//!
//! # Environment
//!
//! - `LOG_LEVEL`: tracing level, `info` by default
//! - `SOLAREDGE_BASE_URL`: API root, `https://monitoringapi.solaredge.com` by default
//! - `SOLAREDGE_DATA_DIR`: artifact directory, `data` by default

mod cli;
mod commands;
mod config;
mod error;
mod model;
mod solaredge;
mod statistics;
mod storage;

#[cfg(test)]
mod test_utils;

use crate::cli::{Args, Command};
use crate::commands::StatsOutcome;
use crate::solaredge::{EnergyFetcher, ReqwestClient};
use crate::storage::FileSystemStore;
use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let app_config = match config::load_app_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load AppConfig: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Dispatches a parsed command.
///
/// Every failure that reaches here is fatal. A stats file without energy data
/// is not a failure: the handler prints a diagnostic and returns normally.
async fn run(args: Args) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Fetch(args) => {
            let solaredge_config =
                config::load_solaredge_config().context("Failed to load SolarEdgeConfig")?;
            let fetcher = EnergyFetcher::new(
                Arc::new(ReqwestClient::new()?),
                Arc::new(FileSystemStore),
                solaredge_config.base_url,
                solaredge_config.data_dir,
            );
            commands::fetch(&args, &fetcher, &mut out).await?;
        }
        Command::Stats(args) => {
            match commands::stats(&args, &FileSystemStore, &mut out)? {
                StatsOutcome::Report(report) => tracing::debug!(
                    "Reported {} readings above and {} below thresholds",
                    report.above_threshold.len(),
                    report.below_threshold.len()
                ),
                StatsOutcome::NoEnergyData => tracing::debug!("No energy data to report"),
            }
        }
    }

    Ok(())
}
