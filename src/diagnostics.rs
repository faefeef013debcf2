//! Fault reporting for the aggregation pass.
//!
//! The aggregator reports faults through the [`Diagnostics`] capability
//! instead of logging directly; tests capture the calls with a recording
//! sink.

use log::{error, warn};

/// Fault sink for the aggregation pass.
///
/// One method per event; each call carries enough context to reproduce the
/// offending line or file. None of these faults escalate.
pub trait Diagnostics {
    /// A line that failed to parse as a JSON record.
    fn malformed_line(&mut self, path: &str, line: &str);

    /// A record missing `url` or `response_time`.
    fn missing_fields(&mut self, url: Option<&str>, response_time: Option<f64>);

    /// An input file that could not be opened or read.
    fn file_error(&mut self, path: &str, err: &std::io::Error);
}

/// Production sink: structured log entries, plus a console notice when an
/// input file is missing.
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn malformed_line(&mut self, path: &str, line: &str) {
        error!("invalid JSON in {path}: {line}");
    }

    fn missing_fields(&mut self, url: Option<&str>, response_time: Option<f64>) {
        warn!("skipped record with missing fields: url={url:?}, response_time={response_time:?}");
    }

    fn file_error(&mut self, path: &str, err: &std::io::Error) {
        error!("cannot read {path}: {err}");
        if err.kind() == std::io::ErrorKind::NotFound {
            println!("File not found: {path}");
        }
    }
}

/// Initialize the logger: WARN unless `verbose`, `RUST_LOG` takes
/// precedence.
pub fn init_logger(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

/// Recording sink for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    pub malformed: Vec<(String, String)>,
    pub missing: Vec<(Option<String>, Option<f64>)>,
    pub file_errors: Vec<String>,
}

#[cfg(test)]
impl Diagnostics for RecordingDiagnostics {
    fn malformed_line(&mut self, path: &str, line: &str) {
        self.malformed.push((path.to_string(), line.to_string()));
    }

    fn missing_fields(&mut self, url: Option<&str>, response_time: Option<f64>) {
        self.missing.push((url.map(str::to_string), response_time));
    }

    fn file_error(&mut self, path: &str, _err: &std::io::Error) {
        self.file_errors.push(path.to_string());
    }
}
