//! Per-habit reports and the overview table.
//!
//! Reports pull a snapshot of a habit's cadence and history through
//! [`HabitRepository`], then run the pure analysis functions against a
//! caller-supplied reference date.

use std::cmp::Reverse;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::analysis::{evaluate, streaks};
use crate::error::{Result, ValidationError};
use crate::habit::{Cadence, CadenceFilter, CompletionStatus, Habit};
use crate::storage::{HabitDb, HabitRepository};

/// Column the overview is sorted by (descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortColumn {
    #[serde(rename = "current")]
    CurrentStreak,
    #[default]
    #[serde(rename = "longest")]
    LongestStreak,
}

impl FromStr for SortColumn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(SortColumn::CurrentStreak),
            "longest" => Ok(SortColumn::LongestStreak),
            other => Err(ValidationError::InvalidValue {
                field: "sort".into(),
                message: format!("'{other}' is not one of current, longest"),
            }),
        }
    }
}

/// One row of the overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitReport {
    pub name: String,
    pub task_specification: String,
    pub cadence: Cadence,
    pub completed: CompletionStatus,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Analyze one habit as of `now`.
///
/// The cadence and history are read once; both analysis functions see the
/// same snapshot.
pub fn build_report<R: HabitRepository + ?Sized>(
    repo: &R,
    habit: &Habit,
    now: NaiveDate,
) -> Result<HabitReport> {
    let cadence = repo.cadence(&habit.name)?;
    let history = repo.history(&habit.name)?;

    let completed = evaluate(cadence, &history, now);
    let streak = streaks(cadence, &history, now);

    Ok(HabitReport {
        name: habit.name.clone(),
        task_specification: habit.task_specification.clone(),
        cadence,
        completed,
        current_streak: streak.current,
        longest_streak: streak.longest,
    })
}

/// Reports for every habit matching `filter`, sorted descending by `sort`.
///
/// Ties keep alphabetical order.
pub fn overview(
    db: &HabitDb,
    filter: CadenceFilter,
    sort: SortColumn,
    now: NaiveDate,
) -> Result<Vec<HabitReport>> {
    let mut reports = db
        .list_habits(filter)?
        .iter()
        .map(|habit| build_report(db, habit, now))
        .collect::<Result<Vec<_>>>()?;

    sort_reports(&mut reports, sort);
    Ok(reports)
}

/// Stable descending sort on the chosen streak column.
pub fn sort_reports(reports: &mut [HabitReport], sort: SortColumn) {
    match sort {
        SortColumn::CurrentStreak => reports.sort_by_key(|r| Reverse(r.current_streak)),
        SortColumn::LongestStreak => reports.sort_by_key(|r| Reverse(r.longest_streak)),
    }
}

/// The last `limit` entries of an ascending history, still ascending.
pub fn recent_completions(history: &[NaiveDate], limit: usize) -> &[NaiveDate] {
    &history[history.len().saturating_sub(limit)..]
}

/// Days within the back-fill window that have no completion yet.
///
/// The window is `window_days` calendar days ending at `now` (inclusive);
/// the result is newest first. The window stops early at the earliest
/// representable date.
pub fn available_completion_dates(
    history: &[NaiveDate],
    now: NaiveDate,
    window_days: u32,
) -> Vec<NaiveDate> {
    (0..u64::from(window_days))
        .map_while(|offset| now.checked_sub_days(Days::new(offset)))
        .filter(|day| !history.contains(day))
        .collect()
}

/// Check that `date` lies inside the back-fill window ending at `now`.
pub fn check_completion_window(
    date: NaiveDate,
    now: NaiveDate,
    window_days: u32,
) -> Result<(), ValidationError> {
    let age = now.signed_duration_since(date).num_days();
    if (0..i64::from(window_days)).contains(&age) {
        Ok(())
    } else {
        Err(ValidationError::DateOutsideWindow { date, window_days })
    }
}
