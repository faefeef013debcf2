use crate::error::ReportError;

use chrono::NaiveDate;

/// Validate a day filter of exact form `YYYY-MM-DD`.
///
/// Length is checked first, so a short or overlong string reports a format
/// problem; a 10-character string that does not parse as a calendar date
/// (month 13, February 30) reports a nonexistent date.
pub fn validate(filter: &str) -> Result<(), ReportError> {
    if filter.len() != 10 {
        return Err(ReportError::InvalidDateFormat);
    }

    match NaiveDate::parse_from_str(filter, "%Y-%m-%d") {
        Ok(_) => Ok(()),
        Err(_) => Err(ReportError::InvalidCalendarDate),
    }
}
