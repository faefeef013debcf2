//! Streaming NDJSON ingestion and per-URL aggregation.

pub mod aggregate;
pub mod record;

pub use aggregate::{Accumulator, UrlStats, aggregate};
pub use record::LogRecord;
