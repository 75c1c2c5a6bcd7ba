//! Integration tests for habit analysis.
//!
//! Tests the full workflow from registering habits and recording completions
//! to completion status, streaks and the overview table, using a fixed
//! reference date.

use chrono::NaiveDate;
use habitrack_core::report::{
    available_completion_dates, build_report, overview, recent_completions,
};
use habitrack_core::{
    evaluate, streaks, Cadence, CadenceFilter, CompletionStatus, Habit, HabitDb,
    HabitRepository, SortColumn, StreakResult,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn april(days: &[u32]) -> Vec<NaiveDate> {
    days.iter().map(|&day| d(2024, 4, day)).collect()
}

/// Five habits with a month of history, ending around 2024-04-28.
fn seeded_db() -> HabitDb {
    let db = HabitDb::open_memory().unwrap();
    let created = d(2024, 4, 1);

    let habits = [
        ("Cook", "I want to cook dinner.", Cadence::Daily),
        ("Read", "I want to read 30 minutes.", Cadence::Daily),
        ("Go to bed early", "I want to go to bed before 10pm.", Cadence::Daily),
        ("Meet a friend", "I want to meet with a friend in town.", Cadence::Weekly),
        ("Run", "I want to run 10km.", Cadence::Weekly),
    ];
    for (name, task, cadence) in habits {
        db.create_habit(&Habit::new(name, task, cadence, created).unwrap())
            .unwrap();
    }

    let completions = [
        (
            "Cook",
            april(&[
                1, 2, 3, 4, 5, 8, 9, 10, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 27, 28,
            ]),
        ),
        (
            "Read",
            april(&[
                1, 2, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 18, 19, 20, 21, 22, 23, 24, 26,
            ]),
        ),
        (
            "Go to bed early",
            april(&[
                3, 4, 5, 6, 7, 8, 9, 11, 12, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
            ]),
        ),
        ("Meet a friend", april(&[2, 12, 15, 26])),
        ("Run", april(&[4, 12])),
    ];
    for (name, dates) in completions {
        for date in dates {
            db.complete_habit(name, date).unwrap();
        }
    }
    db
}

fn analyze(db: &HabitDb, name: &str, now: NaiveDate) -> (CompletionStatus, StreakResult) {
    let cadence = db.cadence(name).unwrap();
    let history = db.history(name).unwrap();
    (
        evaluate(cadence, &history, now),
        streaks(cadence, &history, now),
    )
}

#[test]
fn seeded_habits_are_listed_by_cadence() {
    let db = seeded_db();
    assert_eq!(db.list_habits(CadenceFilter::All).unwrap().len(), 5);
    assert_eq!(db.list_habits(CadenceFilter::Daily).unwrap().len(), 3);
    assert_eq!(db.list_habits(CadenceFilter::Weekly).unwrap().len(), 2);
    assert_eq!(db.completion_dates("Cook").unwrap().len(), 23);
    assert_eq!(db.completion_dates("Run").unwrap().len(), 2);
}

#[test]
fn completion_status_on_reference_date() {
    let db = seeded_db();
    let now = d(2024, 4, 28);
    let expected = [
        ("Cook", CompletionStatus::Completed),
        ("Read", CompletionStatus::NotCompleted),
        ("Go to bed early", CompletionStatus::NotCompleted),
        ("Meet a friend", CompletionStatus::Completed),
        ("Run", CompletionStatus::NotCompleted),
    ];
    for (name, status) in expected {
        assert_eq!(analyze(&db, name, now).0, status, "habit {name}");
    }
}

#[test]
fn streaks_on_reference_date() {
    let db = seeded_db();
    let now = d(2024, 4, 28);
    let expected = [
        ("Cook", 2, 13),
        ("Read", 0, 12),
        ("Go to bed early", 11, 11),
        ("Meet a friend", 4, 4),
        ("Run", 0, 2),
    ];
    for (name, current, longest) in expected {
        assert_eq!(
            analyze(&db, name, now).1,
            StreakResult { current, longest },
            "habit {name}"
        );
    }
}

#[test]
fn deleting_a_completion_changes_the_history() {
    let db = seeded_db();
    db.delete_completion("Cook", d(2024, 4, 1)).unwrap();
    assert_eq!(db.completion_dates("Cook").unwrap().len(), 22);
}

#[test]
fn deleting_a_habit_removes_it_from_listings() {
    let db = seeded_db();
    db.delete_habit("Cook").unwrap();
    assert_eq!(db.list_habits(CadenceFilter::All).unwrap().len(), 4);
    assert!(db.completion_dates("Cook").is_err());
}

#[test]
fn completion_across_new_year() {
    let db = seeded_db();
    let now = d(2025, 1, 1);

    db.complete_habit("Cook", d(2024, 12, 31)).unwrap();
    assert_eq!(analyze(&db, "Cook", now).0, CompletionStatus::NotCompleted);
    db.complete_habit("Cook", d(2025, 1, 1)).unwrap();
    assert_eq!(analyze(&db, "Cook", now).0, CompletionStatus::Completed);

    db.complete_habit("Run", d(2024, 12, 26)).unwrap();
    assert_eq!(analyze(&db, "Run", now).0, CompletionStatus::NotCompleted);
    db.complete_habit("Run", d(2025, 1, 1)).unwrap();
    assert_eq!(analyze(&db, "Run", now).0, CompletionStatus::Completed);
}

#[test]
fn daily_streaks_across_new_year() {
    let db = seeded_db();
    let now = d(2025, 1, 2);

    db.complete_habit("Cook", d(2024, 12, 31)).unwrap();
    assert_eq!(analyze(&db, "Cook", now).1.current, 0);

    db.complete_habit("Cook", d(2025, 1, 1)).unwrap();
    db.complete_habit("Cook", d(2025, 1, 2)).unwrap();
    assert_eq!(
        analyze(&db, "Cook", now).1,
        StreakResult {
            current: 3,
            longest: 13
        }
    );
}

#[test]
fn weekly_streaks_across_new_year_ignore_double_completions() {
    let db = seeded_db();
    let now = d(2025, 1, 10);

    assert_eq!(
        analyze(&db, "Run", now).1,
        StreakResult {
            current: 0,
            longest: 2
        }
    );

    for date in [d(2024, 12, 26), d(2025, 1, 1), d(2025, 1, 6), d(2025, 1, 8)] {
        db.complete_habit("Run", date).unwrap();
    }
    assert_eq!(
        analyze(&db, "Run", now).1,
        StreakResult {
            current: 3,
            longest: 3
        }
    );
}

#[test]
fn overview_sorted_by_longest_streak() {
    let db = seeded_db();
    let now = d(2024, 4, 28);
    let rows = overview(&db, CadenceFilter::All, SortColumn::LongestStreak, now).unwrap();

    let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Cook", "Read", "Go to bed early", "Meet a friend", "Run"]
    );
    assert_eq!(rows[0].completed.to_string(), "Yes");
}

#[test]
fn overview_filtered_and_sorted_by_current_streak() {
    let db = seeded_db();
    let now = d(2024, 4, 28);
    let rows = overview(&db, CadenceFilter::Daily, SortColumn::CurrentStreak, now).unwrap();

    let summary: Vec<_> = rows
        .iter()
        .map(|r| (r.name.as_str(), r.current_streak))
        .collect();
    assert_eq!(
        summary,
        vec![("Go to bed early", 11), ("Cook", 2), ("Read", 0)]
    );
}

#[test]
fn recent_and_available_dates() {
    let db = seeded_db();
    let now = d(2024, 4, 28);

    let friend = db.completion_dates("Meet a friend").unwrap();
    assert_eq!(recent_completions(&friend, 10).len(), 4);
    let cook = db.completion_dates("Cook").unwrap();
    assert_eq!(recent_completions(&cook, 10).len(), 10);

    let read = db.completion_dates("Read").unwrap();
    assert_eq!(
        available_completion_dates(&read, now, 14),
        vec![d(2024, 4, 28), d(2024, 4, 27), d(2024, 4, 25), d(2024, 4, 17)]
    );
    assert_eq!(available_completion_dates(&friend, now, 14).len(), 12);
}

#[test]
fn report_for_single_habit() {
    let db = seeded_db();
    let habit = db.get_habit("Meet a friend").unwrap().unwrap();
    let report = build_report(&db, &habit, d(2024, 4, 28)).unwrap();

    assert_eq!(report.cadence, Cadence::Weekly);
    assert_eq!(report.completed, CompletionStatus::Completed);
    assert_eq!((report.current_streak, report.longest_streak), (4, 4));
}
