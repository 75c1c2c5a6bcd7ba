//! Signed distance between two dates, measured in cadence periods.

use chrono::{Datelike, NaiveDate};

use crate::habit::Cadence;

/// ISO week-years are treated as exactly 52 weeks long. In 53-week years the
/// weekly distance drifts by one period across the year boundary; every
/// caller goes through [`period_distance`] so the drift is at least uniform.
pub const WEEKS_PER_YEAR: i64 = 52;

/// Number of cadence periods from `earlier` to `later`, positive when `later`
/// is after `earlier`.
///
/// Daily distance is the exact day difference. Weekly distance compares ISO
/// (week-year, week) pairs, so two dates in the same Monday-based week are
/// at distance zero.
pub fn period_distance(cadence: Cadence, later: NaiveDate, earlier: NaiveDate) -> i64 {
    match cadence {
        Cadence::Daily => later.signed_duration_since(earlier).num_days(),
        Cadence::Weekly => {
            let (later_year, later_week) = iso_year_week(later);
            let (earlier_year, earlier_week) = iso_year_week(earlier);
            (later_year - earlier_year) * WEEKS_PER_YEAR + (later_week - earlier_week)
        }
    }
}

fn iso_year_week(date: NaiveDate) -> (i64, i64) {
    let week = date.iso_week();
    (i64::from(week.year()), i64::from(week.week()))
}

/// Sort key matching the ISO calendar: (week-year, week, weekday).
pub fn iso_sort_key(date: &NaiveDate) -> (i32, u32, u32) {
    let week = date.iso_week();
    (week.year(), week.week(), date.weekday().number_from_monday())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn daily_distance_is_signed_day_count() {
        assert_eq!(period_distance(Cadence::Daily, d(2024, 4, 28), d(2024, 4, 27)), 1);
        assert_eq!(period_distance(Cadence::Daily, d(2024, 4, 28), d(2024, 4, 28)), 0);
        assert_eq!(period_distance(Cadence::Daily, d(2024, 4, 26), d(2024, 4, 28)), -2);
        assert_eq!(period_distance(Cadence::Daily, d(2025, 1, 1), d(2024, 12, 31)), 1);
    }

    #[test]
    fn weekly_distance_uses_iso_weeks() {
        // Sunday and the following Monday sit in adjacent weeks.
        assert_eq!(period_distance(Cadence::Weekly, d(2024, 4, 15), d(2024, 4, 14)), 1);
        // Monday through Sunday of week 17 are the same period.
        assert_eq!(period_distance(Cadence::Weekly, d(2024, 4, 28), d(2024, 4, 22)), 0);
        assert_eq!(period_distance(Cadence::Weekly, d(2024, 4, 28), d(2024, 4, 12)), 2);
    }

    #[test]
    fn weekly_distance_across_year_boundary() {
        // 2024-12-26 is week 52 of 2024, 2025-01-01 is week 1 of 2025.
        assert_eq!(period_distance(Cadence::Weekly, d(2025, 1, 1), d(2024, 12, 26)), 1);
        // 2024-12-30 already belongs to ISO week-year 2025.
        assert_eq!(period_distance(Cadence::Weekly, d(2025, 1, 1), d(2024, 12, 30)), 0);
    }

    #[test]
    fn weekly_distance_drifts_in_53_week_years() {
        // 2020 has 53 ISO weeks: week 53 of 2020 and week 1 of 2021 are
        // really adjacent but the 52-week formula reports zero.
        assert_eq!(d(2020, 12, 31).iso_week().week(), 53);
        assert_eq!(period_distance(Cadence::Weekly, d(2021, 1, 4), d(2020, 12, 31)), 0);
    }

    #[test]
    fn iso_sort_key_orders_like_the_calendar() {
        let mut dates = vec![d(2025, 1, 1), d(2024, 12, 30), d(2024, 12, 26)];
        dates.sort_by_key(iso_sort_key);
        assert_eq!(dates, vec![d(2024, 12, 26), d(2024, 12, 30), d(2025, 1, 1)]);
    }
}
