//! The study planner: the ordered collection of registered materials.
//!
//! Each registration derives its review phase from the current length of the
//! collection, so consecutive materials get staggered review days, then runs
//! the schedule calculator and stores the result. The collection is plain
//! owned state; callers decide where it lives (the HTTP layer shares one
//! behind a lock).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{MaterialSpec, SchedulePlan};
use crate::scheduling::{calculate_schedule, review_phase_for_registration};

/// A registered material together with its derived review phase and
/// computed plan.
///
/// This is exactly the record shape the report renderers consume: subject,
/// name, date bounds, detail text, and the per-date plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerEntry {
    /// The material as registered.
    pub spec: MaterialSpec,
    /// The review phase assigned at registration time.
    pub review_phase: u32,
    /// Free-text description shown in listings.
    pub detail: String,
    /// The computed day-by-day plan.
    pub plan: SchedulePlan,
}

/// An ordered list of registered materials and their computed plans.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use studyplan_engine::models::{MaterialSpec, PacingMode};
/// use studyplan_engine::planner::StudyPlanner;
///
/// let mut planner = StudyPlanner::new();
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
///
/// let entry = planner.register(spec).unwrap();
/// assert_eq!(entry.review_phase, 0);
/// assert_eq!(planner.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StudyPlanner {
    entries: Vec<PlannerEntry>,
}

impl StudyPlanner {
    /// Creates an empty planner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a material: assigns the next review phase, computes its
    /// plan, and appends it to the list.
    ///
    /// The phase is the registration ordinal modulo the material's review
    /// interval, so materials registered in sequence review on different
    /// days. A failed validation leaves the planner unchanged.
    pub fn register(&mut self, spec: MaterialSpec) -> ScheduleResult<&PlannerEntry> {
        let review_phase = review_phase_for_registration(self.entries.len(), spec.review_interval);
        let request = spec.schedule_request(review_phase);
        let plan = calculate_schedule(&request)?;

        let entry = PlannerEntry {
            detail: spec.detail(),
            spec,
            review_phase,
            plan,
        };
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Removes and returns the entry at `index`.
    ///
    /// Later entries shift down; their review phases stay as assigned at
    /// registration time.
    pub fn remove(&mut self, index: usize) -> ScheduleResult<PlannerEntry> {
        if index >= self.entries.len() {
            return Err(ScheduleError::EntryNotFound { index });
        }
        Ok(self.entries.remove(index))
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the registered entries in registration order.
    pub fn entries(&self) -> &[PlannerEntry] {
        &self.entries
    }

    /// Returns the number of registered materials.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the overall date bounds across all entries, for renderer
    /// pagination: the earliest start and the latest end.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.entries.iter().map(|e| e.spec.start_date).min()?;
        let end = self.entries.iter().map(|e| e.spec.end_date).max()?;
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PacingMode;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn spec(name: &str, start: &str, end: &str) -> MaterialSpec {
        MaterialSpec {
            subject: "Math".to_string(),
            material_name: name.to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            mode: PacingMode::FixedDailyPace,
            input_value: 10,
            laps: 1,
            material_capacity: 100,
            review_interval: 4,
            unit_label: "p.".to_string(),
        }
    }

    /// PL-001: registration phases rotate with the interval
    #[test]
    fn test_register_staggers_review_phases() {
        let mut planner = StudyPlanner::new();
        for i in 0..5 {
            planner
                .register(spec(&format!("Book {}", i), "2024-01-01", "2024-01-14"))
                .unwrap();
        }

        let phases: Vec<u32> = planner.entries().iter().map(|e| e.review_phase).collect();
        assert_eq!(phases, vec![0, 1, 2, 3, 0]);
    }

    /// PL-002: registration computes a plan covering the range
    #[test]
    fn test_register_computes_plan() {
        let mut planner = StudyPlanner::new();
        let entry = planner
            .register(spec("Book", "2024-01-01", "2024-01-07"))
            .unwrap();

        assert_eq!(entry.plan.len(), 7);
        assert_eq!(entry.detail, "Fixed daily pace: 10p. (review every 4 days)");
    }

    /// PL-003: a failed validation leaves the planner unchanged
    #[test]
    fn test_register_invalid_spec_is_rejected() {
        let mut planner = StudyPlanner::new();
        let mut bad = spec("Book", "2024-01-01", "2024-01-07");
        bad.material_capacity = 0;

        assert!(planner.register(bad).is_err());
        assert!(planner.is_empty());
    }

    /// PL-004: removal shifts later entries down
    #[test]
    fn test_remove_entry() {
        let mut planner = StudyPlanner::new();
        planner
            .register(spec("First", "2024-01-01", "2024-01-07"))
            .unwrap();
        planner
            .register(spec("Second", "2024-01-01", "2024-01-07"))
            .unwrap();

        let removed = planner.remove(0).unwrap();
        assert_eq!(removed.spec.material_name, "First");
        assert_eq!(planner.len(), 1);
        assert_eq!(planner.entries()[0].spec.material_name, "Second");
        // The survivor keeps the phase assigned when it was registered.
        assert_eq!(planner.entries()[0].review_phase, 1);
    }

    /// PL-005: removing an out-of-range index fails
    #[test]
    fn test_remove_out_of_range() {
        let mut planner = StudyPlanner::new();

        match planner.remove(3).unwrap_err() {
            ScheduleError::EntryNotFound { index } => assert_eq!(index, 3),
            other => panic!("Expected EntryNotFound, got {:?}", other),
        }
    }

    /// PL-006: clear empties the planner
    #[test]
    fn test_clear() {
        let mut planner = StudyPlanner::new();
        planner
            .register(spec("Book", "2024-01-01", "2024-01-07"))
            .unwrap();

        planner.clear();
        assert!(planner.is_empty());
        assert!(planner.date_bounds().is_none());
    }

    /// PL-007: date bounds span all registered materials
    #[test]
    fn test_date_bounds() {
        let mut planner = StudyPlanner::new();
        planner
            .register(spec("First", "2024-02-01", "2024-03-15"))
            .unwrap();
        planner
            .register(spec("Second", "2024-01-10", "2024-02-20"))
            .unwrap();

        let (start, end) = planner.date_bounds().unwrap();
        assert_eq!(start, make_date("2024-01-10"));
        assert_eq!(end, make_date("2024-03-15"));
    }

    /// PL-008: phases staggered by interval produce disjoint review days
    #[test]
    fn test_staggered_materials_review_on_different_days() {
        let mut planner = StudyPlanner::new();
        planner
            .register(spec("First", "2024-01-01", "2024-01-07"))
            .unwrap();
        planner
            .register(spec("Second", "2024-01-01", "2024-01-07"))
            .unwrap();

        let first = &planner.entries()[0].plan;
        let second = &planner.entries()[1].plan;

        // Phase 0 reviews Jan 3 and Jan 7; phase 1 reviews Jan 4.
        assert!(first.label(make_date("2024-01-03")).unwrap().is_review());
        assert!(first.label(make_date("2024-01-07")).unwrap().is_review());
        assert!(!second.label(make_date("2024-01-03")).unwrap().is_review());
        assert!(second.label(make_date("2024-01-04")).unwrap().is_review());
    }
}
