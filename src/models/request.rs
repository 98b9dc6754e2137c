//! Schedule request model and pacing modes.
//!
//! This module defines the [`ScheduleRequest`] input to the schedule
//! calculator and the [`PacingMode`] that selects how the daily pace is
//! derived.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Selects how the daily pace is derived from the request.
///
/// # Example
///
/// ```
/// use studyplan_engine::models::PacingMode;
///
/// let mode = PacingMode::DurationAllocation;
/// assert_eq!(format!("{}", mode), "Duration allocation");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacingMode {
    /// Spread a total quantity evenly over the study days of the range.
    DurationAllocation,
    /// Cover a fixed quantity on every study day.
    FixedDailyPace,
}

impl std::fmt::Display for PacingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PacingMode::DurationAllocation => write!(f, "Duration allocation"),
            PacingMode::FixedDailyPace => write!(f, "Fixed daily pace"),
        }
    }
}

/// The immutable input to the schedule calculator.
///
/// Describes one material's date range, pacing, lap count, and review
/// cadence. An inverted date range is not an error; it produces an empty
/// plan. All other preconditions are checked by [`ScheduleRequest::validate`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use studyplan_engine::models::{PacingMode, ScheduleRequest};
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
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The first date of the plan (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the plan (inclusive).
    pub end_date: NaiveDate,
    /// How the daily pace is derived.
    pub mode: PacingMode,
    /// Total quantity under [`PacingMode::DurationAllocation`], quantity per
    /// study day under [`PacingMode::FixedDailyPace`].
    pub input_value: u32,
    /// Number of full passes through the material. Only meaningful under
    /// [`PacingMode::DurationAllocation`].
    pub laps: u32,
    /// The size of one lap of the material (its page or item count). Under
    /// [`PacingMode::DurationAllocation`] the effective capacity is redefined
    /// to equal `input_value`.
    pub material_capacity: u32,
    /// Cycle length in days for review-day insertion.
    pub review_interval: u32,
    /// Which day of the review cycle is the review day, in
    /// `[0, review_interval)`.
    pub review_phase: u32,
    /// Display label prefixed to progress ranges (e.g. "p.", "No.").
    pub unit_label: String,
}

impl ScheduleRequest {
    /// Checks the calculator's preconditions.
    ///
    /// # Returns
    ///
    /// `Ok(())` for a well-formed request, or
    /// [`ScheduleError::InvalidRequest`] naming the offending field when:
    /// - `input_value`, `laps`, `material_capacity`, or `review_interval`
    ///   is zero
    /// - `review_phase` is not below `review_interval`
    ///
    /// An inverted date range is deliberately not rejected here; it is a
    /// degenerate-but-valid input that yields an empty plan.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.input_value == 0 {
            return Err(invalid("input_value", "must be at least 1"));
        }
        if self.laps == 0 {
            return Err(invalid("laps", "must be at least 1"));
        }
        if self.material_capacity == 0 {
            return Err(invalid("material_capacity", "must be at least 1"));
        }
        if self.review_interval == 0 {
            return Err(invalid("review_interval", "must be at least 1"));
        }
        if self.review_phase >= self.review_interval {
            return Err(invalid(
                "review_phase",
                "must be less than review_interval",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ScheduleError {
    ScheduleError::InvalidRequest {
        field: field.to_string(),
        message: message.to_string(),
    }
}
