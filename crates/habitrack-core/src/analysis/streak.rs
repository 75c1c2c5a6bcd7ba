//! Current and longest streak over an ordered completion history.

use chrono::NaiveDate;

use super::period::period_distance;
use crate::habit::{Cadence, StreakResult};

/// Outcome of comparing one completion with the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Next period: the run grows.
    Continue,
    /// Gap (or anything else that is not the next period): the run restarts.
    Reset,
    /// Same ISO week as the previous completion of a weekly habit.
    Skip,
}

fn classify(cadence: Cadence, prev: NaiveDate, cur: NaiveDate) -> Step {
    match (cadence, period_distance(cadence, cur, prev)) {
        (Cadence::Weekly, 0) => Step::Skip,
        (_, 1) => Step::Continue,
        _ => Step::Reset,
    }
}

/// Compute the current and longest streak for `history` as seen from `now`.
///
/// `history` must be ascending (ISO-week order for weekly habits). The scan
/// is a single pass: adjacent periods extend the run, gaps restart it at 1,
/// and repeated completions within one week are ignored. Afterwards the run
/// ending at the last completion only counts as current if that completion is
/// at most one period behind `now`; otherwise the current streak is 0.
/// `longest` is never affected by that correction.
pub fn streaks(cadence: Cadence, history: &[NaiveDate], now: NaiveDate) -> StreakResult {
    let Some(&last) = history.last() else {
        return StreakResult::default();
    };

    let mut streak: u32 = 1;
    let mut longest: u32 = 1;

    for pair in history.windows(2) {
        match classify(cadence, pair[0], pair[1]) {
            Step::Skip => continue,
            Step::Continue => streak += 1,
            Step::Reset => streak = 1,
        }
        longest = longest.max(streak);
    }

    let current = if period_distance(cadence, now, last) > 1 {
        0
    } else {
        streak
    };

    StreakResult { current, longest }
}
