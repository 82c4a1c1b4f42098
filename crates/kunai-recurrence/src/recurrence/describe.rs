//! Human-readable schedule descriptions.
//!
//! Describes the rule, not an instance: a "31st of the month" schedule
//! reads "on the 31st" even though stepping clamps it to Feb 28.

use std::fmt;

use super::schedule::{Cadence, MonthlyPattern, Schedule};

/// Renders a schedule as a short phrase, e.g. "Every 2 weeks on Mon,
/// Wed" or "Monthly on the 15th, 10 times".
#[must_use]
pub fn describe(schedule: &Schedule) -> String {
    schedule.to_string()
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cadence {
            Cadence::Daily { interval } => {
                if interval == 1 {
                    write!(f, "Every day")?;
                } else {
                    write!(f, "Every {interval} days")?;
                }
            }
            Cadence::Weekly { interval, days } => {
                if interval == 1 {
                    write!(f, "Weekly")?;
                } else {
                    write!(f, "Every {interval} weeks")?;
                }
                if !days.is_empty() {
                    write!(f, " on {days}")?;
                }
            }
            Cadence::Biweekly { interval, days } => {
                // Biweekly reads as its effective week span.
                write!(f, "Every {} weeks", 2 * interval)?;
                if !days.is_empty() {
                    write!(f, " on {days}")?;
                }
            }
            Cadence::Monthly { interval, pattern } => {
                if interval == 1 {
                    write!(f, "Monthly")?;
                } else {
                    write!(f, "Every {interval} months")?;
                }
                write_pattern(f, pattern)?;
            }
            Cadence::Quarterly { interval, pattern } => {
                if interval == 1 {
                    write!(f, "Quarterly")?;
                } else {
                    write!(f, "Every {interval} quarters")?;
                }
                write_pattern(f, pattern)?;
            }
            Cadence::Yearly { interval } => {
                if interval == 1 {
                    write!(f, "Yearly")?;
                } else {
                    write!(f, "Every {interval} years")?;
                }
            }
        }

        if let Some(end) = self.end_date {
            write!(f, " until {}", end.format("%b %-d, %Y"))?;
        }
        if let Some(count) = self.end_after_occurrences {
            write!(f, ", {count} times")?;
        }
        Ok(())
    }
}

fn write_pattern(f: &mut fmt::Formatter<'_>, pattern: Option<MonthlyPattern>) -> fmt::Result {
    match pattern {
        None => Ok(()),
        Some(MonthlyPattern::DayOfMonth { day }) => write!(f, " on the {}", ordinal(day)),
        Some(MonthlyPattern::DayOfWeek { week, weekday }) => {
            write!(f, " on the {week} {}", weekday.name())
        }
    }
}

/// Formats a day number with its English ordinal suffix.
fn ordinal(day: u8) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}
