//! Recurrence schedule model.
//!
//! The schedule is a sum type per frequency class, so each variant
//! carries only the fields that are meaningful for it: a weekly
//! schedule cannot hold a day-of-month, and a monthly schedule cannot
//! hold a weekday selection. The loosely-shaped form the store persists
//! lives in [`super::record`].

use std::fmt;

use chrono::NaiveDate;
use kunai_core::types::{Weekday, WeekdaySet};

use crate::error::{RecurrenceError, RecurrenceResult};

/// Which week of the month an ordinal weekday pattern targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekOfMonth {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl WeekOfMonth {
    /// Returns the stored ordinal (1-4, or -1 for the last week).
    #[must_use]
    pub const fn as_ordinal(self) -> i8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Last => -1,
        }
    }

    /// Looks up a week from its stored ordinal.
    #[must_use]
    pub const fn from_ordinal(ordinal: i8) -> Option<Self> {
        Some(match ordinal {
            1 => Self::First,
            2 => Self::Second,
            3 => Self::Third,
            4 => Self::Fourth,
            -1 => Self::Last,
            _ => return None,
        })
    }

    /// Whole weeks past the first matching weekday of the month, or
    /// `None` for the last-occurrence case.
    #[must_use]
    pub const fn weeks_from_first(self) -> Option<u32> {
        match self {
            Self::First => Some(0),
            Self::Second => Some(1),
            Self::Third => Some(2),
            Self::Fourth => Some(3),
            Self::Last => None,
        }
    }

    /// Returns the English name used in descriptions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for WeekOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a monthly or quarterly schedule picks its day within the target
/// month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthlyPattern {
    /// A fixed day number (1-31), clamped to the length of the target
    /// month when stepping.
    DayOfMonth { day: u8 },
    /// An ordinal weekday, e.g. the second Tuesday or the last Friday.
    DayOfWeek { week: WeekOfMonth, weekday: Weekday },
}

/// The frequency class of a schedule, with its class-specific fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cadence {
    Daily { interval: u32 },
    Weekly { interval: u32, days: WeekdaySet },
    Biweekly { interval: u32, days: WeekdaySet },
    Monthly { interval: u32, pattern: Option<MonthlyPattern> },
    Quarterly { interval: u32, pattern: Option<MonthlyPattern> },
    Yearly { interval: u32 },
}

impl Cadence {
    /// Returns the interval multiplier.
    #[must_use]
    pub const fn interval(self) -> u32 {
        match self {
            Self::Daily { interval }
            | Self::Weekly { interval, .. }
            | Self::Biweekly { interval, .. }
            | Self::Monthly { interval, .. }
            | Self::Quarterly { interval, .. }
            | Self::Yearly { interval } => interval,
        }
    }

    /// Returns the frequency name as stored.
    #[must_use]
    pub const fn frequency_name(self) -> &'static str {
        match self {
            Self::Daily { .. } => "daily",
            Self::Weekly { .. } => "weekly",
            Self::Biweekly { .. } => "biweekly",
            Self::Monthly { .. } => "monthly",
            Self::Quarterly { .. } => "quarterly",
            Self::Yearly { .. } => "yearly",
        }
    }
}

/// The recurrence rule attached to a recurring task series.
///
/// The engine never mutates a schedule; it is read once from the task
/// record and treated as immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub cadence: Cadence,
    /// No occurrence is generated once the series has advanced past
    /// this date; see the resolver for the exact boundary checks.
    pub end_date: Option<NaiveDate>,
    /// Cap on the total number of generated occurrences, enforced by
    /// the caller via `should_generate_next`.
    pub end_after_occurrences: Option<u32>,
}

impl Schedule {
    /// Creates an open-ended schedule with the given cadence.
    #[must_use]
    pub const fn new(cadence: Cadence) -> Self {
        Self {
            cadence,
            end_date: None,
            end_after_occurrences: None,
        }
    }

    /// Creates a daily schedule.
    #[must_use]
    pub const fn daily(interval: u32) -> Self {
        Self::new(Cadence::Daily { interval })
    }

    /// Creates a weekly schedule with no weekday selection.
    #[must_use]
    pub const fn weekly(interval: u32) -> Self {
        Self::new(Cadence::Weekly {
            interval,
            days: WeekdaySet::empty(),
        })
    }

    /// Creates a biweekly schedule with no weekday selection.
    #[must_use]
    pub const fn biweekly(interval: u32) -> Self {
        Self::new(Cadence::Biweekly {
            interval,
            days: WeekdaySet::empty(),
        })
    }

    /// Creates a monthly schedule with no monthly pattern.
    #[must_use]
    pub const fn monthly(interval: u32) -> Self {
        Self::new(Cadence::Monthly {
            interval,
            pattern: None,
        })
    }

    /// Creates a quarterly schedule with no monthly pattern.
    #[must_use]
    pub const fn quarterly(interval: u32) -> Self {
        Self::new(Cadence::Quarterly {
            interval,
            pattern: None,
        })
    }

    /// Creates a yearly schedule.
    #[must_use]
    pub const fn yearly(interval: u32) -> Self {
        Self::new(Cadence::Yearly { interval })
    }

    /// Sets the end date.
    #[must_use]
    pub const fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the occurrence cap.
    #[must_use]
    pub const fn with_end_after_occurrences(mut self, count: u32) -> Self {
        self.end_after_occurrences = Some(count);
        self
    }

    /// Checks the numeric preconditions the type system cannot express.
    ///
    /// ## Errors
    /// Returns an error if the interval is zero, a fixed day-of-month
    /// is outside 1-31, or the occurrence cap is zero.
    pub fn validate(&self) -> RecurrenceResult<()> {
        if self.cadence.interval() == 0 {
            return Err(RecurrenceError::InvalidInterval);
        }
        if let Cadence::Monthly { pattern, .. } | Cadence::Quarterly { pattern, .. } =
            self.cadence
            && let Some(MonthlyPattern::DayOfMonth { day }) = pattern
            && !(1..=31).contains(&day)
        {
            return Err(RecurrenceError::InvalidDayOfMonth(day));
        }
        if self.end_after_occurrences == Some(0) {
            return Err(RecurrenceError::InvalidOccurrenceCap);
        }
        Ok(())
    }
}
