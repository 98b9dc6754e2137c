//! Material specification model.
//!
//! This module defines [`MaterialSpec`], the registration-time description of
//! a learning material: everything the schedule calculator needs except the
//! review phase, which the planner derives from registration order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PacingMode, ScheduleRequest};

/// Describes a material to register with the planner.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use studyplan_engine::models::{MaterialSpec, PacingMode};
///
/// let spec = MaterialSpec {
///     subject: "Math".to_string(),
///     material_name: "Blue Chart Algebra".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
///     mode: PacingMode::FixedDailyPace,
///     input_value: 10,
///     laps: 1,
///     material_capacity: 320,
///     review_interval: 4,
///     unit_label: "p.".to_string(),
/// };
/// assert_eq!(spec.detail(), "Fixed daily pace: 10p. (review every 4 days)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// The subject the material belongs to (e.g. "Math").
    pub subject: String,
    /// The material's display name.
    pub material_name: String,
    /// The first date of the plan (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the plan (inclusive).
    pub end_date: NaiveDate,
    /// How the daily pace is derived.
    pub mode: PacingMode,
    /// Total quantity or per-day quantity, depending on `mode`.
    pub input_value: u32,
    /// Number of full passes through the material.
    pub laps: u32,
    /// The size of one lap of the material.
    pub material_capacity: u32,
    /// Cycle length in days for review-day insertion.
    pub review_interval: u32,
    /// Display label prefixed to progress ranges.
    pub unit_label: String,
}

impl MaterialSpec {
    /// Builds the calculator input for this material with the given review
    /// phase.
    pub fn schedule_request(&self, review_phase: u32) -> ScheduleRequest {
        ScheduleRequest {
            start_date: self.start_date,
            end_date: self.end_date,
            mode: self.mode,
            input_value: self.input_value,
            laps: self.laps,
            material_capacity: self.material_capacity,
            review_interval: self.review_interval,
            review_phase,
            unit_label: self.unit_label.clone(),
        }
    }

    /// Returns the free-text detail line shown in material listings.
    pub fn detail(&self) -> String {
        format!(
            "{}: {}{} (review every {} days)",
            self.mode, self.input_value, self.unit_label, self.review_interval
        )
    }
}
