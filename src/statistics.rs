//! Descriptive statistics over an energy series.
//!
//! Extrema ignore gaps and break ties by source order. Threshold buckets flag
//! unusually high or low single-day totals and are only computed for `DAY`
//! series; every other granularity yields empty buckets.

use crate::error::StatisticsError;
use crate::model::{EnergyReading, EnergySeries};
use std::fmt;

/// Inclusive bounds used to flag outlier days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub upper: f64,
    pub lower: f64,
}

impl Thresholds {
    pub const DEFAULT_UPPER: f64 = 30000.0;
    pub const DEFAULT_LOWER: f64 = 500.0;
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            upper: Self::DEFAULT_UPPER,
            lower: Self::DEFAULT_LOWER,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdBuckets {
    pub above: Vec<EnergyReading>,
    pub below: Vec<EnergyReading>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub time_unit: String,
    pub unit: String,
    pub max_reading: EnergyReading,
    pub min_reading: EnergyReading,
    pub thresholds: Thresholds,
    pub above_threshold: Vec<EnergyReading>,
    pub below_threshold: Vec<EnergyReading>,
}

/// Returns the `(max, min)` readings, skipping gaps.
///
/// On ties the earliest reading wins.
pub fn extrema(
    series: &EnergySeries,
) -> Result<(&EnergyReading, &EnergyReading), StatisticsError> {
    if series.readings.is_empty() {
        return Err(StatisticsError::EmptySeries);
    }

    let mut extremes: Option<((&EnergyReading, f64), (&EnergyReading, f64))> = None;
    for reading in &series.readings {
        let Some(value) = reading.value else {
            continue;
        };
        extremes = Some(match extremes {
            None => ((reading, value), (reading, value)),
            Some((max, min)) => (
                // strict comparisons keep the first occurrence
                if value > max.1 { (reading, value) } else { max },
                if value < min.1 { (reading, value) } else { min },
            ),
        });
    }

    extremes
        .map(|((max, _), (min, _))| (max, min))
        .ok_or(StatisticsError::AllNullSeries)
}

/// Splits out readings at or beyond the thresholds, for `DAY` series only.
pub fn threshold_report(series: &EnergySeries, thresholds: Thresholds) -> ThresholdBuckets {
    if !series.is_daily() {
        tracing::debug!(
            "Skipping threshold report for {} granularity",
            series.time_unit
        );
        return ThresholdBuckets::default();
    }

    let select = |predicate: &dyn Fn(f64) -> bool| -> Vec<EnergyReading> {
        series
            .readings
            .iter()
            .filter(|reading| reading.value.is_some_and(predicate))
            .cloned()
            .collect()
    };

    ThresholdBuckets {
        above: select(&|value: f64| value >= thresholds.upper),
        below: select(&|value: f64| value <= thresholds.lower),
    }
}

pub fn summarize(
    series: &EnergySeries,
    thresholds: Thresholds,
) -> Result<StatisticsReport, StatisticsError> {
    let (max_reading, min_reading) = extrema(series)?;
    let buckets = threshold_report(series, thresholds);

    Ok(StatisticsReport {
        time_unit: series.time_unit.clone(),
        unit: series.unit.clone(),
        max_reading: max_reading.clone(),
        min_reading: min_reading.clone(),
        thresholds,
        above_threshold: buckets.above,
        below_threshold: buckets.below,
    })
}

impl StatisticsReport {
    fn is_daily(&self) -> bool {
        self.time_unit == "DAY"
    }

    fn write_bucket(
        &self,
        f: &mut fmt::Formatter<'_>,
        readings: &[EnergyReading],
        direction: &str,
        bound: f64,
    ) -> fmt::Result {
        let plural = if readings.len() == 1 { "" } else { "s" };
        writeln!(
            f,
            "{} {}{} {} {} {}:",
            readings.len(),
            self.time_unit,
            plural,
            direction,
            bound,
            self.unit
        )?;
        for reading in readings {
            writeln!(f, "  {}  {}", reading.date, format_value(reading.value))?;
        }
        Ok(())
    }
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "null".to_string(), |value| value.to_string())
}

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} most energy is {}: {} {}",
            self.time_unit,
            self.max_reading.date,
            format_value(self.max_reading.value),
            self.unit
        )?;
        writeln!(
            f,
            "{} least energy is {}: {} {}",
            self.time_unit,
            self.min_reading.date,
            format_value(self.min_reading.value),
            self.unit
        )?;

        if self.is_daily() {
            self.write_bucket(f, &self.above_threshold, "over", self.thresholds.upper)?;
            self.write_bucket(f, &self.below_threshold, "below", self.thresholds.lower)?;
        }
        Ok(())
    }
}
