//! Property tests for the schedule calculator.
//!
//! These pin down the calculator's structural invariants over arbitrary
//! valid requests: full date coverage, cumulative continuity, lap-bounded
//! ranges, review-day determinism, and idempotence.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use studyplan_engine::models::{PacingMode, ScheduleRequest};
use studyplan_engine::scheduling::{calculate_schedule, count_study_days, epoch_day_index};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

prop_compose! {
    fn arb_request()(
        start_offset in 0i64..20_000,
        span in 0i64..90,
        review_interval in 1u32..=14,
        phase_seed in 0u32..14,
        input_value in 1u32..=500,
        laps in 1u32..=4,
        material_capacity in 1u32..=500,
        fixed in any::<bool>(),
    ) -> ScheduleRequest {
        let start_date = base_date() + Duration::days(start_offset);
        ScheduleRequest {
            start_date,
            end_date: start_date + Duration::days(span),
            mode: if fixed {
                PacingMode::FixedDailyPace
            } else {
                PacingMode::DurationAllocation
            },
            input_value,
            laps,
            material_capacity,
            review_interval,
            review_phase: phase_seed % review_interval,
            unit_label: "p.".to_string(),
        }
    }
}

fn effective_capacity(request: &ScheduleRequest) -> u64 {
    match request.mode {
        PacingMode::DurationAllocation => u64::from(request.input_value),
        PacingMode::FixedDailyPace => u64::from(request.material_capacity),
    }
}

proptest! {
    /// The plan's date set is exactly the inclusive range, or empty when
    /// the range contains no study days.
    #[test]
    fn plan_covers_every_date_or_is_empty(request in arb_request()) {
        let plan = calculate_schedule(&request).unwrap();

        if plan.is_empty() {
            let study_days = count_study_days(
                request.start_date,
                request.end_date,
                request.review_interval,
                request.review_phase,
            );
            prop_assert_eq!(study_days, 0);
        } else {
            let expected = (request.end_date - request.start_date).num_days() + 1;
            prop_assert_eq!(plan.len() as i64, expected);
            let mut date = request.start_date;
            while date <= request.end_date {
                prop_assert!(plan.label(date).is_some());
                date = date + Duration::days(1);
            }
        }
    }

    /// Consecutive ranges are contiguous in cumulative positions, and no
    /// range escapes its lap: positions are ordered and bounded by the
    /// effective capacity.
    #[test]
    fn ranges_are_contiguous_and_lap_bounded(request in arb_request()) {
        let plan = calculate_schedule(&request).unwrap();
        let capacity = effective_capacity(&request);

        let mut expected_start = 1u64;
        for (_, label) in plan.iter() {
            if let Some(range) = label.as_range() {
                prop_assert_eq!(range.start_cumulative, expected_start);
                prop_assert!(range.end_cumulative >= range.start_cumulative);
                prop_assert!(range.start_position >= 1);
                prop_assert!(range.start_position <= range.end_position);
                prop_assert!(range.end_position <= capacity);
                expected_start = range.end_cumulative + 1;
            }
        }
    }

    /// A date is labelled as a review day exactly when its fixed-epoch day
    /// index matches the cadence, independent of where the range starts.
    #[test]
    fn review_days_match_cadence(request in arb_request()) {
        let plan = calculate_schedule(&request).unwrap();

        for (date, label) in plan.iter() {
            let on_cadence = epoch_day_index(*date)
                .rem_euclid(i64::from(request.review_interval))
                == i64::from(request.review_phase);
            prop_assert_eq!(label.is_review(), on_cadence);
        }
    }

    /// The calculator is a pure function: identical requests produce
    /// byte-identical plans.
    #[test]
    fn identical_requests_produce_identical_plans(request in arb_request()) {
        let first = calculate_schedule(&request).unwrap();
        let second = calculate_schedule(&request).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    /// Under duration allocation the schedule never overshoots the
    /// requested total across all laps.
    #[test]
    fn allocation_never_exceeds_requested_total(request in arb_request()) {
        prop_assume!(request.mode == PacingMode::DurationAllocation);
        let plan = calculate_schedule(&request).unwrap();

        let total = u64::from(request.input_value) * u64::from(request.laps);
        for (_, label) in plan.iter() {
            if let Some(range) = label.as_range() {
                prop_assert!(range.end_cumulative <= total);
            }
        }
    }
}
