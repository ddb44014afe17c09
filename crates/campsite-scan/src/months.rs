use chrono::{Datelike, Months, NaiveDate};

use crate::scan_types::ScanError;

/// First-of-month markers for every calendar month overlapping the window.
///
/// The sequence starts at the first day of `start_date`'s month (even when
/// `start_date` is not the 1st) and ends with the month containing
/// `end_date`. The availability API returns one calendar month per request,
/// so each marker becomes one `start_date` query parameter.
pub fn month_starts(start_date: NaiveDate, end_date: NaiveDate) -> Result<Vec<NaiveDate>, ScanError> {
    let mut cursor = NaiveDate::from_ymd_opt(start_date.year(), start_date.month(), 1)
        .ok_or_else(|| ScanError::DataFormat(format!("Invalid month start for {start_date}")))?;

    let mut markers = Vec::new();
    while cursor <= end_date {
        markers.push(cursor);
        cursor = cursor
            .checked_add_months(Months::new(1))
            .ok_or_else(|| ScanError::DataFormat(format!("Month overflow after {cursor}")))?;
    }

    Ok(markers)
}

/// Format a month marker the way the availability endpoint expects it.
pub fn month_param(month_start: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", month_start.format("%Y-%m-%d"))
}
