//! Core data models for the Study Plan Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod material;
mod plan;
mod request;

pub use material::MaterialSpec;
pub use plan::{DayLabel, ProgressRange, SchedulePlan};
pub use request::{PacingMode, ScheduleRequest};
