//! Resolve partial day-month tokens against the document creation date.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

use crate::error::ParseError;

/// Resolve a "dd-mm" token (one- or two-digit components) to an absolute
/// date.
///
/// Rows carry no year, so the creation year is used. One correction: a
/// statement generated in January can still list November/December rows
/// from the prior billing cycle, which belong to the previous year. That
/// is the whole rule; no closest-date search.
pub fn resolve_day_month(
    token: &str,
    created: &DateTime<FixedOffset>,
) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidDate {
        token: token.to_string(),
    };

    let (day, month) = token.split_once('-').ok_or_else(invalid)?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    let mut year = created.year();
    if created.month() == 1 && (month == 11 || month == 12) {
        year -= 1;
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}
