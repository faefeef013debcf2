use crate::diagnostics::Diagnostics;
use crate::error::ReportError;
use crate::ingest::record::LogRecord;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Running totals for one URL key.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UrlStats {
    pub count: u64,
    pub total_time: f64,
}

/// Accumulator for one aggregation run, keyed by URL.
pub type Accumulator = BTreeMap<String, UrlStats>;

/// Fold every valid record from `paths` into one shared accumulator.
///
/// Files are processed in the given order and merged by key. Faults below
/// the run level are absorbed here and reported through `diag`:
/// - a file that cannot be opened or read is skipped;
/// - a line that does not parse as a JSON record is skipped;
/// - a record missing `url` or `response_time` is skipped;
/// - a record whose `@timestamp` does not start with `date_filter` is
///   skipped silently (expected filtering, not a fault).
///
/// An accumulator left with no entries at all is the one fatal condition.
pub fn aggregate(
    paths: &[String],
    date_filter: Option<&str>,
    diag: &mut dyn Diagnostics,
) -> Result<Accumulator, ReportError> {
    let mut counter = Accumulator::new();

    for path in paths {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(err) => {
                diag.file_error(path, &err);
                continue;
            }
        };

        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(l) => l,
                Err(err) => {
                    // Mid-file read failures abandon the rest of this file
                    // only; remaining files still run.
                    diag.file_error(path, &err);
                    break;
                }
            };
            fold_line(&mut counter, path, &line, date_filter, diag);
        }
    }

    if counter.is_empty() {
        return Err(ReportError::NoData);
    }

    Ok(counter)
}

/// Fold one line into the accumulator, if it holds a valid record.
fn fold_line(
    counter: &mut Accumulator,
    path: &str,
    line: &str,
    date_filter: Option<&str>,
    diag: &mut dyn Diagnostics,
) {
    let record: LogRecord = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(_) => {
            diag.malformed_line(path, line.trim_end());
            return;
        }
    };

    if let Some(day) = date_filter {
        if !record.timestamp.starts_with(day) {
            return;
        }
    }

    // An empty url counts as missing; a response_time of 0 does not.
    let url = record.url.as_deref().filter(|u| !u.is_empty());
    match (url, record.response_time) {
        (Some(url), Some(response_time)) => {
            let entry = counter.entry(url.to_string()).or_default();
            entry.count += 1;
            entry.total_time += response_time;
        }
        (url, response_time) => diag.missing_fields(url, response_time),
    }
}
