mod parser;

pub use parser::read_energy_series;

use crate::solaredge::TimeUnit;
use serde_derive::Deserialize;

/// One sample of the series. `None` marks a gap reported by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnergyReading {
    pub date: String,
    #[serde(default)]
    pub value: Option<f64>,
}

#[cfg(test)]
impl EnergyReading {
    pub fn new(date: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// A series in source order, exactly as the service reported it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnergySeries {
    #[serde(rename = "timeUnit")]
    pub time_unit: String,
    pub unit: String,
    #[serde(rename = "values")]
    pub readings: Vec<EnergyReading>,
}

impl EnergySeries {
    /// The recognized granularity, if any.
    pub fn granularity(&self) -> Option<TimeUnit> {
        self.time_unit.parse().ok()
    }

    pub fn is_daily(&self) -> bool {
        self.granularity() == Some(TimeUnit::Day)
    }
}
