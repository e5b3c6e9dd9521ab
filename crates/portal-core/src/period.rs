//! Academic-period resolution.

use chrono::NaiveDate;

use crate::models::AcademicPeriod;

/// Resolves the current academic period.
///
/// The current period is the earliest-starting one whose end date is on or
/// after `today`. Outside any period (holidays), the most recently started
/// period stands in.
#[must_use]
pub fn resolve_current_period(
    periods: &[AcademicPeriod],
    today: NaiveDate,
) -> Option<&AcademicPeriod> {
    periods
        .iter()
        .filter(|period| period.end_date >= today)
        .min_by_key(|period| period.start_date)
        .or_else(|| periods.iter().max_by_key(|period| period.start_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(id: i64, naming: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> AcademicPeriod {
        AcademicPeriod {
            id,
            naming: naming.to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    fn semesters() -> Vec<AcademicPeriod> {
        vec![
            period(3, "Осень 2025", (2025, 9, 1), (2025, 12, 31)),
            period(2, "Весна 2025", (2025, 2, 1), (2025, 6, 30)),
            period(1, "Осень 2024", (2024, 9, 1), (2024, 12, 31)),
        ]
    }

    #[test]
    fn picks_the_open_period_containing_today() {
        let periods = semesters();
        let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        assert_eq!(resolve_current_period(&periods, today).unwrap().id, 3);
    }

    #[test]
    fn picks_the_earliest_starting_open_period_between_semesters() {
        let periods = semesters();
        // Summer break: spring has ended, autumn has not; autumn is the only
        // period still open and is picked even though it has not started.
        let today = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        assert_eq!(resolve_current_period(&periods, today).unwrap().id, 3);
    }

    #[test]
    fn falls_back_to_the_most_recent_period_after_all_have_ended() {
        let periods = semesters();
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert_eq!(resolve_current_period(&periods, today).unwrap().id, 3);
    }

    #[test]
    fn prefers_the_earliest_start_when_two_periods_are_open() {
        let mut periods = semesters();
        periods.push(period(4, "Весна 2026", (2026, 2, 1), (2026, 6, 30)));
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        assert_eq!(resolve_current_period(&periods, today).unwrap().id, 3);
    }

    #[test]
    fn empty_period_list_has_no_current_period() {
        assert!(resolve_current_period(&[], NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).is_none());
    }
}
