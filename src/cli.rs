use crate::config::DEFAULT_SITE_DATA_FILE;
use crate::solaredge::TimeUnit;
use crate::statistics::Thresholds;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get energy generation data from the SolarEdge Monitoring API and store it in a `.json` file.
    Fetch(FetchArgs),

    /// Read energy data from a `.json` file created by `fetch` and print statistics.
    Stats(StatsArgs),
}

#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Start date, e.g. `2021-08-01`.
    pub start_date: String,

    /// End date, e.g. `2021-08-31`.
    pub end_date: String,

    /// Granularity of the readings.
    #[arg(
        long = "time_unit",
        alias = "time-unit",
        value_enum,
        default_value_t = TimeUnit::QuarterOfAnHour
    )]
    pub time_unit: TimeUnit,

    /// Name of the `.yaml` file containing `site_id` and `api_key`.
    #[arg(long = "site_data", alias = "site-data", default_value = DEFAULT_SITE_DATA_FILE)]
    pub site_data: PathBuf,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// `.json` file containing energy data.
    pub data_file: PathBuf,

    /// Daily totals at or above this value are listed.
    #[arg(
        long = "upper_threshold",
        alias = "upper-threshold",
        default_value_t = Thresholds::DEFAULT_UPPER
    )]
    pub upper_threshold: f64,

    /// Daily totals at or below this value are listed.
    #[arg(
        long = "lower_threshold",
        alias = "lower-threshold",
        default_value_t = Thresholds::DEFAULT_LOWER
    )]
    pub lower_threshold: f64,
}

impl StatsArgs {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            upper: self.upper_threshold,
            lower: self.lower_threshold,
        }
    }
}
