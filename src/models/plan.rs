//! Schedule plan models: per-day labels and progress ranges.
//!
//! This module defines the output side of the schedule calculator: the
//! [`SchedulePlan`] mapping every date of the requested range to a
//! [`DayLabel`], and the [`ProgressRange`] formatting of a day's progress
//! within a lap.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A contiguous span of progress scheduled for a single study day.
///
/// Positions are 1-based within a lap; the cumulative fields carry the
/// always-increasing counters from which the lap and positions were derived.
/// By construction a range never crosses a lap boundary: `end_position` lands
/// exactly on the capacity when the day finishes a lap.
///
/// # Example
///
/// ```
/// use studyplan_engine::models::ProgressRange;
///
/// // Cumulative positions 101..=120 of a 100-page book: second lap.
/// let range = ProgressRange::from_cumulative(101, 120, 100, "p.");
/// assert_eq!(range.lap, 2);
/// assert_eq!(range.start_position, 1);
/// assert_eq!(range.end_position, 20);
/// assert_eq!(range.to_string(), "p.1-20 (lap 2)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRange {
    /// Display label prefixed to the range (e.g. "p.", "No.").
    pub unit_label: String,
    /// The 1-based lap the range belongs to.
    pub lap: u64,
    /// The 1-based position within the lap where the range starts.
    pub start_position: u64,
    /// The 1-based position within the lap where the range ends (inclusive).
    pub end_position: u64,
    /// The cumulative counter value at the start of the range.
    pub start_cumulative: u64,
    /// The cumulative counter value at the end of the range (inclusive).
    pub end_cumulative: u64,
}

impl ProgressRange {
    /// Builds a range from cumulative counter values.
    ///
    /// The lap is taken from `start_cumulative`; both positions are reduced
    /// modulo the capacity. The calculator's lap clamp guarantees
    /// `end_cumulative` never lies beyond the end of that lap, so the end
    /// position computed this way is always correct and lands on `capacity`
    /// at a lap boundary.
    ///
    /// # Arguments
    ///
    /// * `start_cumulative` - Cumulative position of the first unit (>= 1)
    /// * `end_cumulative` - Cumulative position of the last unit (inclusive)
    /// * `capacity` - Units in one lap
    /// * `unit_label` - Display prefix for the positions
    pub fn from_cumulative(
        start_cumulative: u64,
        end_cumulative: u64,
        capacity: u64,
        unit_label: &str,
    ) -> Self {
        let lap = (start_cumulative - 1) / capacity + 1;
        let start_position = (start_cumulative - 1) % capacity + 1;
        let end_position = (end_cumulative - 1) % capacity + 1;
        Self {
            unit_label: unit_label.to_string(),
            lap,
            start_position,
            end_position,
            start_cumulative,
            end_cumulative,
        }
    }
}

impl std::fmt::Display for ProgressRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}-{}",
            self.unit_label, self.start_position, self.end_position
        )?;
        if self.lap > 1 {
            write!(f, " (lap {})", self.lap)?;
        }
        Ok(())
    }
}

/// The label assigned to a single calendar date of a plan.
///
/// The report renderers special-case review markers for highlighting, so the
/// label vocabulary is part of the output contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayLabel {
    /// A periodically recurring day reserved for revisiting prior material.
    Review,
    /// A study day whose pace did not advance the cumulative counter.
    Reserve,
    /// A study day with a scheduled progress range.
    Progress(ProgressRange),
}

impl DayLabel {
    /// Returns `true` for a review day.
    pub fn is_review(&self) -> bool {
        matches!(self, DayLabel::Review)
    }

    /// Returns `true` for a reserve day.
    pub fn is_reserve(&self) -> bool {
        matches!(self, DayLabel::Reserve)
    }

    /// Returns the progress range for a progress day.
    pub fn as_range(&self) -> Option<&ProgressRange> {
        match self {
            DayLabel::Progress(range) => Some(range),
            _ => None,
        }
    }
}

impl std::fmt::Display for DayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayLabel::Review => write!(f, "★ Review"),
            DayLabel::Reserve => write!(f, "Reserve"),
            DayLabel::Progress(range) => write!(f, "{}", range),
        }
    }
}

/// A computed study schedule: an ordered mapping from calendar date to
/// [`DayLabel`].
///
/// Covers every date in the requested range, or is empty when the range is
/// inverted or contains no study days. Computed once per request and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePlan {
    /// The per-date labels, ordered by date.
    days: BTreeMap<NaiveDate, DayLabel>,
}

impl SchedulePlan {
    /// Wraps a per-date label mapping as a plan.
    pub fn new(days: BTreeMap<NaiveDate, DayLabel>) -> Self {
        Self { days }
    }

    /// Returns `true` when no dates were scheduled.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the number of dates in the plan.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns the label for a date, if the date is part of the plan.
    pub fn label(&self, date: NaiveDate) -> Option<&DayLabel> {
        self.days.get(&date)
    }

    /// Iterates the plan in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DayLabel)> {
        self.days.iter()
    }

    /// Returns the rendered per-date label mapping the report renderers
    /// consume, keyed by `YYYY-MM-DD` date strings.
    pub fn label_map(&self) -> BTreeMap<String, String> {
        self.days
            .iter()
            .map(|(date, label)| (date.format("%Y-%m-%d").to_string(), label.to_string()))
            .collect()
    }

    /// Counts the review days in the plan.
    pub fn review_day_count(&self) -> usize {
        self.days.values().filter(|l| l.is_review()).count()
    }

    /// Counts the reserve days in the plan.
    pub fn reserve_day_count(&self) -> usize {
        self.days.values().filter(|l| l.is_reserve()).count()
    }

    /// Counts the days carrying a progress range.
    pub fn progress_day_count(&self) -> usize {
        self.days
            .values()
            .filter(|l| l.as_range().is_some())
            .count()
    }
}
