//! Test fixtures and common test data.

/// Canned response bodies from the monitoring API.
pub mod payloads {
    /// Three days of August 2021, one over and two under the default thresholds.
    pub const DAILY_AUGUST: &str = r#"{"energy":{"timeUnit":"DAY","unit":"Wh","measuredBy":"INVERTER","values":[{"date":"2021-08-01 00:00:00","value":100.0},{"date":"2021-08-02 00:00:00","value":40000.0},{"date":"2021-08-03 00:00:00","value":300.0}]}}"#;

    /// Quarter-hour readings with a gap at the start of the day.
    pub const QUARTER_HOURLY: &str = r#"{"energy":{"timeUnit":"QUARTER_OF_AN_HOUR","unit":"Wh","measuredBy":"INVERTER","values":[{"date":"2021-08-01 00:00:00","value":null},{"date":"2021-08-01 00:15:00","value":0.0},{"date":"2021-08-01 12:00:00","value":812.0},{"date":"2021-08-01 12:15:00","value":812.0}]}}"#;

    /// What the service answers to a bad API key.
    pub const INVALID_TOKEN: &str = r#"{"String":"Invalid token"}"#;
}
