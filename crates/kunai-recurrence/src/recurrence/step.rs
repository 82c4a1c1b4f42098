//! Recurrence stepping: advance a due date by exactly one period.
//!
//! Stepping ignores end conditions entirely; those belong to the
//! resolver. Every algorithm here strictly increases the date, which
//! is what lets the resolver's catch-up loop terminate.

use chrono::{Datelike, NaiveDate, TimeDelta};
use kunai_core::types::{Weekday, WeekdaySet};
use kunai_core::util::calendar::{add_months, add_years, days_in_month};

use super::schedule::{Cadence, MonthlyPattern, Schedule, WeekOfMonth};

/// Advances `from` by one schedule-defined period.
///
/// Total over all validated schedules: there is no error path, only
/// the documented fallbacks (an empty weekday selection steps by whole
/// weeks from the anchor weekday; a missing monthly pattern keeps the
/// anchor's day-of-month, clamped).
#[must_use]
pub fn step_once(schedule: &Schedule, from: NaiveDate) -> NaiveDate {
    match schedule.cadence {
        Cadence::Daily { interval } => from + TimeDelta::days(i64::from(interval)),
        Cadence::Weekly { interval, days } => step_weeks(from, interval, days),
        Cadence::Biweekly { interval, days } => step_weeks(from, 2 * interval, days),
        Cadence::Monthly { interval, pattern } => step_months(from, interval, pattern),
        Cadence::Quarterly { interval, pattern } => step_months(from, 3 * interval, pattern),
        Cadence::Yearly { interval } => add_years(from, interval),
    }
}

fn step_weeks(from: NaiveDate, week_interval: u32, days: WeekdaySet) -> NaiveDate {
    let weekday = Weekday::from(from.weekday());

    if days.is_empty() {
        return from + TimeDelta::weeks(i64::from(week_interval));
    }

    // A later selected day in the same week does not consume a week
    // interval.
    if let Some(next) = days.next_after(weekday) {
        return from + TimeDelta::days(i64::from(next.index() - weekday.index()));
    }

    // Past the last selected day this week: run out the current week,
    // skip the remaining interval weeks, land on the first selection.
    let first = days.first().unwrap_or(weekday);
    let offset = (7 - u32::from(weekday.index()))
        + (week_interval - 1) * 7
        + u32::from(first.index());
    from + TimeDelta::days(i64::from(offset))
}

fn step_months(from: NaiveDate, month_interval: u32, pattern: Option<MonthlyPattern>) -> NaiveDate {
    let target = add_months(from, month_interval);

    match pattern {
        None => target,
        Some(MonthlyPattern::DayOfMonth { day }) => {
            let clamped = u32::from(day).min(days_in_month(target.year(), target.month()));
            target.with_day(clamped).unwrap_or(target)
        }
        Some(MonthlyPattern::DayOfWeek { week, weekday }) => {
            nth_weekday_of_month(target.year(), target.month(), week, weekday).unwrap_or(target)
        }
    }
}

/// Resolves an ordinal weekday within a month, e.g. the second Tuesday
/// or the last Friday of March.
///
/// The first through fourth occurrences always exist (day 28 at the
/// latest), so this only returns `None` for out-of-range year/month
/// input.
#[must_use]
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    week: WeekOfMonth,
    weekday: Weekday,
) -> Option<NaiveDate> {
    if let Some(weeks) = week.weeks_from_first() {
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
        let first_index = u32::from(Weekday::from(first_of_month.weekday()).index());
        let to_first_match = (7 + u32::from(weekday.index()) - first_index) % 7;
        Some(first_of_month + TimeDelta::days(i64::from(to_first_match + weeks * 7)))
    } else {
        let mut date = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
        while Weekday::from(date.weekday()) != weekday {
            date = date.pred_opt()?;
        }
        Some(date)
    }
}
