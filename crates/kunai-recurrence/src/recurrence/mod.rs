//! The recurrence engine.
//!
//! Three responsibilities of very different weight:
//! - [`step`]: pure calendar-date arithmetic, one algorithm per
//!   frequency class;
//! - [`resolve`]: catch-up advancement and end-of-series checks on top
//!   of the stepper;
//! - [`describe`]: short human-readable phrases for a schedule.
//!
//! [`record`] holds the loosely-shaped storage form and the validating
//! conversion into the typed [`schedule::Schedule`].

pub mod describe;
pub mod record;
pub mod resolve;
pub mod schedule;
pub mod step;

pub use describe::describe;
pub use record::ScheduleRecord;
pub use resolve::{next_occurrence, should_generate_next};
pub use schedule::{Cadence, MonthlyPattern, Schedule, WeekOfMonth};
pub use step::{nth_weekday_of_month, step_once};
