//! Calendar-date arithmetic helpers.
//!
//! All month and year addition clamps the day to the length of the
//! target month (e.g. Jan 31 + 1 month = Feb 28/29), which is the
//! behavior every scheduling feature in the workspace relies on.

use chrono::{Datelike, NaiveDate};

/// Returns the number of days in a month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .or_else(|| NaiveDate::from_ymd_opt(year + 1, 1, 1))
        .and_then(|d| d.pred_opt())
        .map_or(31, |d| d.day())
}

/// Adds whole months to a date, clamping the day to the target month.
#[must_use]
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total_months = date.month0() + months;
    #[expect(clippy::cast_possible_wrap)]
    let new_year = date.year() + (total_months / 12) as i32;
    let new_month = (total_months % 12) + 1;

    let max_day = days_in_month(new_year, new_month);
    let new_day = date.day().min(max_day);

    NaiveDate::from_ymd_opt(new_year, new_month, new_day).unwrap_or(date)
}

/// Adds whole years to a date, clamping Feb 29 to Feb 28 when the
/// target year is not a leap year.
#[must_use]
pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    #[expect(clippy::cast_possible_wrap)]
    let new_year = date.year() + years as i32;
    let max_day = days_in_month(new_year, date.month());
    let new_day = date.day().min(max_day);

    NaiveDate::from_ymd_opt(new_year, date.month(), new_day).unwrap_or(date)
}
