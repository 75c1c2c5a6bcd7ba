//! Completion status for the current period.

use chrono::NaiveDate;

use super::period::period_distance;
use crate::habit::{Cadence, CompletionStatus};

/// Decide whether a habit is done for the period containing `now`.
///
/// `history` must be ascending; only its last entry is consulted. A daily
/// habit is completed when the last completion is `now` itself, a weekly one
/// when it falls in the same ISO week.
pub fn evaluate(cadence: Cadence, history: &[NaiveDate], now: NaiveDate) -> CompletionStatus {
    match history.last() {
        Some(&last) if period_distance(cadence, now, last) == 0 => CompletionStatus::Completed,
        _ => CompletionStatus::NotCompleted,
    }
}
