use serde::Deserialize;

/// A single access-log record as it appears on one NDJSON line.
///
/// Only the three recognized fields are read; anything else on the line is
/// ignored. A record lives just long enough to be folded into the
/// accumulator.
#[derive(Debug, Clone, Deserialize)]
pub struct LogRecord {
    /// ISO-8601-like timestamp. Only ever matched as a literal prefix
    /// against the day filter, never parsed as a date.
    #[serde(rename = "@timestamp", default)]
    pub timestamp: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub response_time: Option<f64>,
}
