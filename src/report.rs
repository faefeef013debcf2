//! Metrics finalizer: turn the accumulator into averaged report rows.

use crate::ingest::Accumulator;

/// One finalized output line, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub url: String,
    pub count: u64,
    pub average_time: f64,
}

/// Compute the per-URL average response time.
///
/// Accumulator entries are only ever created alongside an increment, so
/// `count >= 1` holds for every entry and the division needs no guard.
pub fn finalize(counter: &Accumulator) -> Vec<ReportRow> {
    counter
        .iter()
        .map(|(url, stats)| ReportRow {
            url: url.clone(),
            count: stats.count,
            average_time: stats.total_time / stats.count as f64,
        })
        .collect()
}
