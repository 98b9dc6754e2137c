//! Pace derivation for the two pacing modes.

use rust_decimal::Decimal;

use crate::models::{PacingMode, ScheduleRequest};

/// The derived daily pace and the lap capacity the progression runs against.
///
/// Under [`PacingMode::DurationAllocation`] the requested total is spread
/// over the study days and one lap is redefined to be the whole requested
/// total; under [`PacingMode::FixedDailyPace`] the pace is the per-day input
/// and the lap capacity is the material's real size.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use studyplan_engine::models::{PacingMode, ScheduleRequest};
/// use studyplan_engine::scheduling::EffectivePace;
///
/// let request = ScheduleRequest {
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     mode: PacingMode::DurationAllocation,
///     input_value: 100,
///     laps: 2,
///     material_capacity: 100,
///     review_interval: 12,
///     review_phase: 8,
///     unit_label: "p.".to_string(),
/// };
/// let pace = EffectivePace::derive(&request, 10);
/// assert_eq!(pace.per_day, Decimal::from(20));
/// assert_eq!(pace.lap_capacity, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectivePace {
    /// Units to advance per study day (real-valued).
    pub per_day: Decimal,
    /// Units that constitute one lap for the progression's wraparound math.
    pub lap_capacity: u64,
}

impl EffectivePace {
    /// Derives the pace for a request given its study-day count.
    ///
    /// The caller must have established `study_day_count >= 1`; the
    /// calculator returns an empty plan before pace derivation otherwise.
    pub fn derive(request: &ScheduleRequest, study_day_count: u64) -> Self {
        match request.mode {
            PacingMode::DurationAllocation => {
                let total = u64::from(request.input_value) * u64::from(request.laps);
                Self {
                    per_day: Decimal::from(total) / Decimal::from(study_day_count),
                    lap_capacity: u64::from(request.input_value),
                }
            }
            PacingMode::FixedDailyPace => Self {
                per_day: Decimal::from(request.input_value),
                lap_capacity: u64::from(request.material_capacity),
            },
        }
    }
}
