//! Calendar month arithmetic.
//!
//! Churn series walk consecutive calendar months. These helpers keep every month boundary a
//! plain `NaiveDate` so windows can be compared with the inclusive day spans from invoices.

use chrono::{Datelike, Days, Months, NaiveDate};

/// First day of the month containing `day`.
pub fn month_start(day: NaiveDate) -> NaiveDate {
    day - Days::new(u64::from(day.day0()))
}

/// First day of the month after the one containing `day`.
///
/// Returns `None` only past the end of the representable calendar.
pub fn next_month_start(day: NaiveDate) -> Option<NaiveDate> {
    month_start(day).checked_add_months(Months::new(1))
}

/// Inclusive first and last day of the month containing `day`.
///
/// # Example
/// ```ignore
/// let (first, last) = month_window(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()).unwrap();
/// // first == 2024-02-01, last == 2024-02-29
/// ```
pub fn month_window(day: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = month_start(day);
    let last = next_month_start(day)?.pred_opt()?;

    Some((first, last))
}
