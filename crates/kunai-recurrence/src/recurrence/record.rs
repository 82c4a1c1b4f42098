//! The loosely-shaped schedule record as the task store persists it.
//!
//! The store keeps a flat row where only a subset of fields applies per
//! frequency. All validation happens here, in the conversion to the
//! typed [`Schedule`], so malformed rows surface as validation errors
//! when a schedule is created or edited and never as a runtime failure
//! during occurrence generation.

use chrono::NaiveDate;
use kunai_core::types::{Weekday, WeekdaySet};
use serde::{Deserialize, Serialize};

use crate::error::{RecurrenceError, RecurrenceResult};

use super::schedule::{Cadence, MonthlyPattern, Schedule, WeekOfMonth};

const fn default_interval() -> u32 {
    1
}

/// A schedule as stored: string frequency, flat optional fields,
/// numeric weekday indices (0=Sunday...6=Saturday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub frequency: String,

    #[serde(default = "default_interval")]
    pub interval: u32,

    /// Meaningful for weekly and biweekly frequencies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<u8>,

    /// `"day_of_month"` or `"day_of_week"`; meaningful for monthly and
    /// quarterly frequencies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_of_month: Option<i8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_after_occurrences: Option<u32>,
}

fn parse_days(indices: &[u8]) -> RecurrenceResult<WeekdaySet> {
    indices
        .iter()
        .map(|&index| Weekday::from_index(index).ok_or(RecurrenceError::InvalidWeekday(index)))
        .collect()
}

fn parse_pattern(record: &ScheduleRecord) -> RecurrenceResult<Option<MonthlyPattern>> {
    let Some(name) = record.monthly_pattern.as_deref() else {
        return Ok(None);
    };

    match name {
        "day_of_month" => {
            let day = record
                .day_of_month
                .ok_or(RecurrenceError::MissingPatternField("day_of_month"))?;
            Ok(Some(MonthlyPattern::DayOfMonth { day }))
        }
        "day_of_week" => {
            let ordinal = record
                .week_of_month
                .ok_or(RecurrenceError::MissingPatternField("week_of_month"))?;
            let week = WeekOfMonth::from_ordinal(ordinal)
                .ok_or(RecurrenceError::InvalidWeekOfMonth(ordinal))?;
            let index = record
                .weekday
                .ok_or(RecurrenceError::MissingPatternField("weekday"))?;
            let weekday =
                Weekday::from_index(index).ok_or(RecurrenceError::InvalidWeekday(index))?;
            Ok(Some(MonthlyPattern::DayOfWeek { week, weekday }))
        }
        other => Err(RecurrenceError::UnknownMonthlyPattern(other.to_string())),
    }
}

impl TryFrom<ScheduleRecord> for Schedule {
    type Error = RecurrenceError;

    fn try_from(record: ScheduleRecord) -> RecurrenceResult<Self> {
        let interval = record.interval;
        let cadence = match record.frequency.as_str() {
            "daily" => Cadence::Daily { interval },
            "weekly" => Cadence::Weekly {
                interval,
                days: parse_days(&record.days_of_week)?,
            },
            "biweekly" => Cadence::Biweekly {
                interval,
                days: parse_days(&record.days_of_week)?,
            },
            "monthly" => Cadence::Monthly {
                interval,
                pattern: parse_pattern(&record)?,
            },
            "quarterly" => Cadence::Quarterly {
                interval,
                pattern: parse_pattern(&record)?,
            },
            "yearly" => Cadence::Yearly { interval },
            other => return Err(RecurrenceError::UnknownFrequency(other.to_string())),
        };

        let schedule = Self {
            cadence,
            end_date: record.end_date,
            end_after_occurrences: record.end_after_occurrences,
        };
        schedule.validate()?;
        Ok(schedule)
    }
}

impl From<&Schedule> for ScheduleRecord {
    fn from(schedule: &Schedule) -> Self {
        let mut record = Self {
            frequency: schedule.cadence.frequency_name().to_string(),
            interval: schedule.cadence.interval(),
            days_of_week: Vec::new(),
            monthly_pattern: None,
            day_of_month: None,
            week_of_month: None,
            weekday: None,
            end_date: schedule.end_date,
            end_after_occurrences: schedule.end_after_occurrences,
        };

        match schedule.cadence {
            Cadence::Weekly { days, .. } | Cadence::Biweekly { days, .. } => {
                record.days_of_week = days.iter().map(Weekday::index).collect();
            }
            Cadence::Monthly { pattern, .. } | Cadence::Quarterly { pattern, .. } => {
                match pattern {
                    Some(MonthlyPattern::DayOfMonth { day }) => {
                        record.monthly_pattern = Some("day_of_month".to_string());
                        record.day_of_month = Some(day);
                    }
                    Some(MonthlyPattern::DayOfWeek { week, weekday }) => {
                        record.monthly_pattern = Some("day_of_week".to_string());
                        record.week_of_month = Some(week.as_ordinal());
                        record.weekday = Some(weekday.index());
                    }
                    None => {}
                }
            }
            Cadence::Daily { .. } | Cadence::Yearly { .. } => {}
        }

        record
    }
}
