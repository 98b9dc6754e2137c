//! The schedule calculator.
//!
//! Converts a [`ScheduleRequest`] into a [`SchedulePlan`]: one label per
//! calendar date of the inclusive range. Review days carry a review marker
//! and never advance progress. Study days accumulate the daily pace and emit
//! the progress range from the current cumulative position to the truncated
//! accumulator, clamped so a single day's range never crosses a lap
//! boundary. A study day whose target has not reached the current position
//! becomes a reserve day; its shortfall is absorbed, not carried forward.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::ScheduleResult;
use crate::models::{DayLabel, ProgressRange, SchedulePlan, ScheduleRequest};

use super::pace::EffectivePace;
use super::review_days::{count_study_days, is_review_day};

/// Computes the day-by-day study plan for a request.
///
/// # Arguments
///
/// * `request` - The material's date range, pacing, lap count, and review
///   cadence
///
/// # Returns
///
/// A [`SchedulePlan`] covering every date in `[start_date, end_date]`, or an
/// empty plan when the range is inverted or contains no study days. Returns
/// [`ScheduleError::InvalidRequest`](crate::error::ScheduleError) when a
/// precondition fails (see [`ScheduleRequest::validate`]).
///
/// The computation is a pure function of the request: no I/O, no shared
/// state, and identical inputs produce identical plans.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use studyplan_engine::models::{PacingMode, ScheduleRequest};
/// use studyplan_engine::scheduling::calculate_schedule;
///
/// let request = ScheduleRequest {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
///     mode: PacingMode::FixedDailyPace,
///     input_value: 10,
///     laps: 1,
///     material_capacity: 100,
///     review_interval: 4,
///     review_phase: 0,
///     unit_label: "p.".to_string(),
/// };
///
/// let plan = calculate_schedule(&request).unwrap();
/// assert_eq!(plan.len(), 7);
/// let first = plan.label(request.start_date).unwrap();
/// assert_eq!(first.to_string(), "p.1-10");
/// ```
pub fn calculate_schedule(request: &ScheduleRequest) -> ScheduleResult<SchedulePlan> {
    request.validate()?;

    let mut days: BTreeMap<_, DayLabel> = BTreeMap::new();
    if request.end_date < request.start_date {
        return Ok(SchedulePlan::new(days));
    }

    let study_day_count = count_study_days(
        request.start_date,
        request.end_date,
        request.review_interval,
        request.review_phase,
    );
    if study_day_count == 0 {
        return Ok(SchedulePlan::new(days));
    }

    let pace = EffectivePace::derive(request, study_day_count);
    let capacity = pace.lap_capacity as i64;

    let mut accumulated = Decimal::ZERO;
    let mut current_start: i64 = 1;

    for date in request.start_date.iter_days() {
        if date > request.end_date {
            break;
        }
        if is_review_day(date, request.review_interval, request.review_phase) {
            days.insert(date, DayLabel::Review);
            continue;
        }

        accumulated += pace.per_day;
        let target_end = accumulated.trunc().to_i64().unwrap_or(i64::MAX);

        if target_end >= current_start {
            let start_lap = lap_index(current_start, capacity);
            let actual_end = if lap_index(target_end, capacity) != start_lap {
                // The target crossed into the next lap: close out the
                // current lap and let the boundary start tomorrow's range.
                (start_lap + 1) * capacity
            } else {
                target_end
            };
            let range = ProgressRange::from_cumulative(
                current_start as u64,
                actual_end as u64,
                pace.lap_capacity,
                &request.unit_label,
            );
            days.insert(date, DayLabel::Progress(range));
            current_start = actual_end + 1;
        } else {
            // Pace too small to cross the next unit; the shortfall is
            // absorbed here rather than carried to the next day.
            days.insert(date, DayLabel::Reserve);
        }
    }

    Ok(SchedulePlan::new(days))
}

/// Zero-based lap index of a cumulative position.
fn lap_index(position: i64, capacity: i64) -> i64 {
    (position - 1) / capacity
}
