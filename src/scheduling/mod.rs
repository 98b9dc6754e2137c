//! Scheduling logic for the Study Plan Engine.
//!
//! This module contains the schedule calculator and its supporting pieces:
//! review-day selection anchored to a fixed epoch, pace derivation per pacing
//! mode, and the per-day progression that assigns every calendar date a
//! review, progress, or reserve label.

mod calculator;
mod pace;
mod review_days;

pub use calculator::calculate_schedule;
pub use pace::EffectivePace;
pub use review_days::{
    count_study_days, epoch_day_index, is_review_day, review_phase_for_registration,
};
