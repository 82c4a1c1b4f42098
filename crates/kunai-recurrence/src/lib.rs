//! Recurrence engine for recurring tasks.
//!
//! Given a recurring task's schedule and the due date of its current
//! occurrence, this crate computes the due date of the next occurrence:
//! six frequency classes, multi-day weekly patterns, end-of-month
//! clamping, nth-weekday-of-month patterns, and catch-up advancement
//! when a task is completed late.
//!
//! The engine is a pure function of its inputs. It performs no I/O,
//! keeps no state between calls, and is safe to call concurrently. The
//! external task-lifecycle manager decides whether to duplicate a task
//! and persists the result; this crate only computes dates.

pub mod error;
pub mod recurrence;
