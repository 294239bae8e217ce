//! Test data builders for series and raw payloads.

use crate::model::{EnergyReading, EnergySeries};
use serde_json::{json, Value};

/// Builder for in-memory energy series.
#[derive(Debug)]
pub struct SeriesBuilder {
    time_unit: String,
    unit: String,
    readings: Vec<EnergyReading>,
}

impl SeriesBuilder {
    /// Creates a new series builder measured in `Wh`.
    pub fn new(time_unit: impl Into<String>) -> Self {
        Self {
            time_unit: time_unit.into(),
            unit: "Wh".to_string(),
            readings: Vec::new(),
        }
    }

    /// Sets the physical unit label.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Appends a reading; `None` is a gap.
    pub fn reading(mut self, date: impl Into<String>, value: Option<f64>) -> Self {
        self.readings.push(EnergyReading::new(date, value));
        self
    }

    pub fn build(self) -> EnergySeries {
        EnergySeries {
            time_unit: self.time_unit,
            unit: self.unit,
            readings: self.readings,
        }
    }
}

/// Builder for raw `energy` response bodies.
#[derive(Debug)]
pub struct PayloadBuilder {
    time_unit: String,
    unit: String,
    values: Vec<Value>,
}

impl PayloadBuilder {
    pub fn new(time_unit: impl Into<String>) -> Self {
        Self {
            time_unit: time_unit.into(),
            unit: "Wh".to_string(),
            values: Vec::new(),
        }
    }

    pub fn reading(mut self, date: &str, value: Option<f64>) -> Self {
        self.values.push(json!({ "date": date, "value": value }));
        self
    }

    /// Builds the JSON body as the monitoring API would send it.
    pub fn build(self) -> String {
        json!({
            "energy": {
                "timeUnit": self.time_unit,
                "unit": self.unit,
                "measuredBy": "INVERTER",
                "values": self.values,
            }
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_builder() {
        let series = SeriesBuilder::new("MONTH")
            .with_unit("kWh")
            .reading("2021-08-01", None)
            .build();
        assert_eq!(series.time_unit, "MONTH");
        assert_eq!(series.unit, "kWh");
        assert_eq!(series.readings, vec![EnergyReading::new("2021-08-01", None)]);
    }

    #[test]
    fn test_payload_builder_writes_null_gaps() {
        let payload = PayloadBuilder::new("DAY").reading("2021-08-01", None).build();
        assert!(payload.contains(r#""value":null"#));
    }
}
