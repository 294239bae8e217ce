//! Command handlers.
//!
//! Handlers take their capabilities and an output sink explicitly; printing to
//! the sink is the user-facing result, tracing is for diagnostics.

use crate::cli::{FetchArgs, StatsArgs};
use crate::config::load_site_credentials;
use crate::error::{PayloadError, Result};
use crate::model::read_energy_series;
use crate::solaredge::{EnergyFetcher, EnergyQuery, RawArtifact};
use crate::statistics::{summarize, StatisticsReport};
use crate::storage::ArtifactStore;
use std::io::Write;

/// What the `stats` command ended with.
#[derive(Debug)]
pub enum StatsOutcome {
    Report(StatisticsReport),
    /// The file had no `energy` field; a diagnostic was printed instead.
    NoEnergyData,
}

/// Loads credentials, fetches the series and persists it.
pub async fn fetch(
    args: &FetchArgs,
    fetcher: &EnergyFetcher,
    out: &mut impl Write,
) -> Result<RawArtifact> {
    let credentials = load_site_credentials(&args.site_data)?;
    tracing::debug!("Loaded credentials for site {}", credentials.site_id);

    let query = EnergyQuery::parse(&args.start_date, &args.end_date, args.time_unit)?;
    let artifact = fetcher.fetch(&credentials, &query).await?;
    tracing::debug!(
        "Received {} bytes with status {}",
        artifact.bytes.len(),
        artifact.status
    );

    writeln!(out, "Request URL: {}", artifact.request_url)?;
    writeln!(out, "Energy data written to '{}'", artifact.path.display())?;
    Ok(artifact)
}

/// Reads a persisted artifact and prints its statistics.
pub fn stats(
    args: &StatsArgs,
    store: &dyn ArtifactStore,
    out: &mut impl Write,
) -> Result<StatsOutcome> {
    let series = match read_energy_series(store, &args.data_file) {
        Ok(series) => series,
        Err(PayloadError::MissingSeries) => {
            writeln!(
                out,
                "File {} does not contain 'energy' data",
                args.data_file.display()
            )?;
            return Ok(StatsOutcome::NoEnergyData);
        }
        Err(err) => return Err(err.into()),
    };

    let report = summarize(&series, args.thresholds())?;
    write!(out, "{report}")?;
    Ok(StatsOutcome::Report(report))
}
