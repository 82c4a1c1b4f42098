use thiserror::Error;

/// Schedule validation errors, raised at the storage boundary.
///
/// A `Schedule` that reaches the stepping and resolving functions has
/// already been validated; those functions are total and never fail.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),

    #[error("Interval must be positive")]
    InvalidInterval,

    #[error("Occurrence cap must be positive")]
    InvalidOccurrenceCap,

    #[error("Weekday index out of range (0-6): {0}")]
    InvalidWeekday(u8),

    #[error("Day of month out of range (1-31): {0}")]
    InvalidDayOfMonth(u8),

    #[error("Week of month out of range (1-4 or -1): {0}")]
    InvalidWeekOfMonth(i8),

    #[error("Unknown monthly pattern: {0}")]
    UnknownMonthlyPattern(String),

    #[error("Monthly pattern is missing required field: {0}")]
    MissingPatternField(&'static str),
}

pub type RecurrenceResult<T> = std::result::Result<T, RecurrenceError>;
