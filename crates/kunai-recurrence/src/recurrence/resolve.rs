//! Occurrence resolution: catch-up advancement and end-of-series
//! checks on top of the stepper.

use chrono::{NaiveDate, Utc};

use super::schedule::Schedule;
use super::step::step_once;

/// ## Summary
/// Computes the due date of the occurrence following `current_due`.
///
/// `reference` is the real-world completion moment as a calendar date,
/// already localized by the caller; `None` defaults to the current UTC
/// calendar date. When the task was completed late, stepping repeats
/// until the candidate is strictly after `reference`, so the returned
/// date never regresses and never duplicates an already-passed slot.
///
/// Returns `None` when the series has ended: either `reference` is
/// already past the schedule's end date, or catch-up advancement
/// pushed the candidate past it.
///
/// ## Side Effects
///
/// None - identical inputs always produce identical outputs, so a
/// retried caller recomputes the same date. The caller is responsible
/// for creating at most one task per completed occurrence.
#[must_use]
pub fn next_occurrence(
    schedule: &Schedule,
    current_due: NaiveDate,
    reference: Option<NaiveDate>,
) -> Option<NaiveDate> {
    let reference = reference.unwrap_or_else(today_utc);

    if let Some(end) = schedule.end_date
        && reference > end
    {
        tracing::trace!(%reference, %end, "series already closed");
        return None;
    }

    let mut candidate = step_once(schedule, current_due);
    while candidate <= reference {
        candidate = step_once(schedule, candidate);
    }
    tracing::trace!(%current_due, %reference, %candidate, "resolved next occurrence");

    // The end date is checked again here: catch-up advancement may
    // have carried the candidate past it even though the series was
    // still open at `reference`.
    if let Some(end) = schedule.end_date
        && candidate > end
    {
        tracing::trace!(%candidate, %end, "advanced past end of series");
        return None;
    }

    Some(candidate)
}

/// Decides whether the series should produce another occurrence at
/// all, evaluated by the task-lifecycle manager before
/// [`next_occurrence`].
///
/// `today` follows the same convention as `reference` above: an
/// already-localized calendar date, defaulting to the current UTC date
/// when omitted.
#[must_use]
pub fn should_generate_next(
    schedule: &Schedule,
    occurrences_so_far: u32,
    today: Option<NaiveDate>,
) -> bool {
    if let Some(cap) = schedule.end_after_occurrences
        && occurrences_so_far >= cap
    {
        tracing::trace!(occurrences_so_far, cap, "occurrence cap reached");
        return false;
    }

    if let Some(end) = schedule.end_date
        && today.unwrap_or_else(today_utc) > end
    {
        tracing::trace!(%end, "end date passed");
        return false;
    }

    true
}

fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
