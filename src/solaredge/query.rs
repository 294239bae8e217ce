//! Energy query parameters for the SolarEdge Monitoring API.

use crate::error::FetchError;
use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Date format used in request parameters and artifact names.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Granularity of an energy series.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, clap::ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    QuarterOfAnHour,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::QuarterOfAnHour,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::QuarterOfAnHour => "QUARTER_OF_AN_HOUR",
            TimeUnit::Hour => "HOUR",
            TimeUnit::Day => "DAY",
            TimeUnit::Week => "WEEK",
            TimeUnit::Month => "MONTH",
            TimeUnit::Year => "YEAR",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| format!("unknown time unit '{s}'"))
    }
}

/// A validated date range at a given granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyQuery {
    start_date: NaiveDate,
    end_date: NaiveDate,
    time_unit: TimeUnit,
}

impl EnergyQuery {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        time_unit: TimeUnit,
    ) -> Result<Self, FetchError> {
        if start_date > end_date {
            return Err(FetchError::InvalidQuery(format!(
                "start date {} is after end date {}",
                start_date.format(DATE_FORMAT),
                end_date.format(DATE_FORMAT)
            )));
        }
        Ok(Self {
            start_date,
            end_date,
            time_unit,
        })
    }

    /// Parses `YYYY-MM-DD` dates and builds the query.
    pub fn parse(
        start_date: &str,
        end_date: &str,
        time_unit: TimeUnit,
    ) -> Result<Self, FetchError> {
        Self::new(parse_date(start_date)?, parse_date(end_date)?, time_unit)
    }

    /// Request parameters in the order the API documents them, without the key.
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("timeUnit", self.time_unit.to_string()),
            ("startDate", self.start_date.format(DATE_FORMAT).to_string()),
            ("endDate", self.end_date.format(DATE_FORMAT).to_string()),
        ]
    }

    /// Artifact file name, e.g. `energy_2021-08-01_to_2021-08-31_DAY.json`.
    pub fn artifact_name(&self) -> PathBuf {
        PathBuf::from(format!(
            "energy_{}_to_{}_{}.json",
            self.start_date.format(DATE_FORMAT),
            self.end_date.format(DATE_FORMAT),
            self.time_unit
        ))
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, FetchError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|err| FetchError::InvalidQuery(format!("invalid date '{text}': {err}")))
}
