use std::fmt;

/// Fatal business conditions.
///
/// These are returned up to the entry point, which turns them into process
/// termination; nothing below `main` catches or retries them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Day filter has the wrong length or shape.
    InvalidDateFormat,

    /// Day filter is 10 characters but not a real calendar date.
    InvalidCalendarDate,

    /// Aggregation produced no entries across all inputs.
    NoData,
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::InvalidDateFormat => write!(f, "date must be in YYYY-MM-DD format"),
            ReportError::InvalidCalendarDate => {
                write!(f, "nonexistent date or wrong format, expected YYYY-MM-DD")
            }
            ReportError::NoData => write!(f, "no data available for the report"),
        }
    }
}

impl std::error::Error for ReportError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_distinct() {
        let messages = [
            ReportError::InvalidDateFormat.to_string(),
            ReportError::InvalidCalendarDate.to_string(),
            ReportError::NoData.to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
