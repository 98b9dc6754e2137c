//! Review-day selection.
//!
//! A date is a review day iff its day index since a fixed epoch, modulo the
//! review interval, equals the review phase. Anchoring to a fixed epoch (not
//! to the range start) makes the review-day set independent of where a plan
//! begins, so materials sharing an interval keep disjoint review days when
//! their phases differ.

use chrono::{Datelike, NaiveDate};

/// Returns the monotonic day index of a date since the fixed epoch.
///
/// Day 1 is 0001-01-01 in the proleptic Gregorian calendar, so the index is
/// stable across all plans and ranges.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use studyplan_engine::scheduling::epoch_day_index;
///
/// let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap();
/// assert_eq!(epoch_day_index(date), 1);
/// ```
pub fn epoch_day_index(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Determines whether a date is a review day for the given cadence.
///
/// # Arguments
///
/// * `date` - The date to check
/// * `review_interval` - Cycle length in days (>= 1)
/// * `review_phase` - Which day of the cycle reviews fall on, in
///   `[0, review_interval)`
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use studyplan_engine::scheduling::is_review_day;
///
/// // 2024-01-03 has epoch day index 738888, divisible by 4.
/// let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// assert!(is_review_day(date, 4, 0));
/// assert!(!is_review_day(date, 4, 1));
/// ```
pub fn is_review_day(date: NaiveDate, review_interval: u32, review_phase: u32) -> bool {
    epoch_day_index(date).rem_euclid(i64::from(review_interval)) == i64::from(review_phase)
}

/// Counts the study days (non-review days) in an inclusive date range.
///
/// An inverted range counts zero study days.
pub fn count_study_days(
    start_date: NaiveDate,
    end_date: NaiveDate,
    review_interval: u32,
    review_phase: u32,
) -> u64 {
    start_date
        .iter_days()
        .take_while(|date| *date <= end_date)
        .filter(|date| !is_review_day(*date, review_interval, review_phase))
        .count() as u64
}

/// Assigns the review phase for the n-th registered material.
///
/// Materials registered in sequence get staggered review days: the phase is
/// the registration ordinal modulo the review interval. Pure and
/// reproducible from registration order alone. An interval of zero yields
/// phase 0 and is rejected by request validation downstream.
///
/// # Example
///
/// ```
/// use studyplan_engine::scheduling::review_phase_for_registration;
///
/// assert_eq!(review_phase_for_registration(0, 4), 0);
/// assert_eq!(review_phase_for_registration(1, 4), 1);
/// assert_eq!(review_phase_for_registration(5, 4), 1);
/// ```
pub fn review_phase_for_registration(ordinal: usize, review_interval: u32) -> u32 {
    (ordinal as u32).checked_rem(review_interval).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// RD-001: epoch day index matches the fixed-epoch convention
    #[test]
    fn test_epoch_day_index_known_values() {
        assert_eq!(epoch_day_index(make_date("0001-01-01")), 1);
        assert_eq!(epoch_day_index(make_date("1970-01-01")), 719_163);
        assert_eq!(epoch_day_index(make_date("2024-01-01")), 738_886);
    }

    /// RD-002: review days in a known week
    #[test]
    fn test_review_days_in_first_week_of_2024() {
        // Epoch day indices for 2024-01-01..07 are 738886..738892, so with
        // interval 4 and phase 0 the hits are Jan 3 and Jan 7.
        let review: Vec<bool> = (1..=7)
            .map(|day| is_review_day(make_date(&format!("2024-01-{:02}", day)), 4, 0))
            .collect();
        assert_eq!(review, vec![false, false, true, false, false, false, true]);
    }

    /// RD-003: phase shifts the review-day set
    #[test]
    fn test_phase_selects_different_days() {
        assert!(is_review_day(make_date("2024-01-04"), 4, 1));
        assert!(!is_review_day(make_date("2024-01-04"), 4, 0));
    }

    /// RD-004: interval 1 makes every day a review day for phase 0
    #[test]
    fn test_interval_one_reviews_every_day() {
        for day in 1..=10 {
            assert!(is_review_day(
                make_date(&format!("2024-01-{:02}", day)),
                1,
                0
            ));
        }
    }

    /// RD-005: the predicate is anchored to the fixed epoch, not a range
    #[test]
    fn test_review_days_anchored_to_fixed_epoch() {
        // 2024-06-15 has epoch day index 739052; 739052 % 5 == 2.
        let date = make_date("2024-06-15");
        assert_eq!(epoch_day_index(date), 739_052);
        assert!(is_review_day(date, 5, 2));
        assert!(!is_review_day(date, 5, 3));
    }

    /// RD-006: study-day count over the scenario week
    #[test]
    fn test_count_study_days_week() {
        let count = count_study_days(make_date("2024-01-01"), make_date("2024-01-07"), 4, 0);
        assert_eq!(count, 5);
    }

    /// RD-007: inverted range counts zero study days
    #[test]
    fn test_count_study_days_inverted_range() {
        let count = count_study_days(make_date("2024-01-07"), make_date("2024-01-01"), 4, 0);
        assert_eq!(count, 0);
    }

    /// RD-008: all-review range counts zero study days
    #[test]
    fn test_count_study_days_all_review() {
        let count = count_study_days(make_date("2024-01-01"), make_date("2024-01-10"), 1, 0);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_count_study_days_single_day_range() {
        assert_eq!(
            count_study_days(make_date("2024-01-01"), make_date("2024-01-01"), 4, 0),
            1
        );
        assert_eq!(
            count_study_days(make_date("2024-01-03"), make_date("2024-01-03"), 4, 0),
            0
        );
    }

    /// RP-001: registration phases rotate through the interval
    #[test]
    fn test_registration_phase_rotation() {
        let phases: Vec<u32> = (0..6).map(|n| review_phase_for_registration(n, 4)).collect();
        assert_eq!(phases, vec![0, 1, 2, 3, 0, 1]);
    }

    /// RP-002: zero interval falls through without panicking
    #[test]
    fn test_registration_phase_zero_interval() {
        assert_eq!(review_phase_for_registration(3, 0), 0);
    }
}
